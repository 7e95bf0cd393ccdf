use thiserror::Error;

/// Top-level error type for the kilominx geometry core.
#[derive(Debug, Error)]
pub enum KilominxError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors related to geometric computations and construction parameters.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors raised when addressing a face that does not exist.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("face {0} not found")]
    FaceNotFound(usize),
}

/// First failing check reported by the geometry validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("expected {expected} faces, found {actual}")]
    FaceCount { expected: usize, actual: usize },

    #[error("face {face} is missing its center, normal or vertex list")]
    MissingData { face: usize },

    #[error("face {face} has {count} vertices, expected 5")]
    VertexCount { face: usize, count: usize },
}

/// Convenience type alias for results using [`KilominxError`].
pub type Result<T> = std::result::Result<T, KilominxError>;
