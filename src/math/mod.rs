pub mod pentagon;
pub mod polygon;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// The golden ratio, `(1 + sqrt(5)) / 2`.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Returns `v` scaled to unit length, or the zero vector when `v` has no length.
///
/// Zero input is a defined degenerate case rather than an error.
#[must_use]
pub fn normalize_or_zero(v: &Vector3) -> Vector3 {
    let len = v.norm();
    if len < TOLERANCE {
        Vector3::zeros()
    } else {
        v / len
    }
}
