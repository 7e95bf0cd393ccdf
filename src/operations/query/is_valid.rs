use tracing::{info, instrument, warn};

use crate::error::ValidationError;
use crate::geometry::SolidGeometry;
use crate::operations::creation::ModelVariant;

/// Sanity check a consumer runs before trusting a geometry.
///
/// Checks, stopping at the first failure:
/// 1. the face count equals the expected constant,
/// 2. every face has a finite center and normal and a non-empty vertex list,
/// 3. every vertex list has exactly five points.
///
/// Each failure is reported as a `warn` event; the outcome does not depend
/// on whether anything is listening.
pub struct IsValid {
    expected_faces: usize,
}

impl IsValid {
    /// Creates a validator expecting `expected_faces` faces.
    #[must_use]
    pub fn new(expected_faces: usize) -> Self {
        Self { expected_faces }
    }

    /// Creates the validator for a model variant's face-count constant.
    #[must_use]
    pub fn for_variant(variant: ModelVariant) -> Self {
        Self::new(variant.expected_face_count())
    }

    /// Executes the validation, returning `true` if every check passes.
    #[must_use]
    pub fn execute(&self, geometry: &SolidGeometry) -> bool {
        self.diagnose(geometry).is_ok()
    }

    /// Executes the validation, returning the first failing check.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] describing the first check that failed.
    #[instrument(skip_all, fields(expected = self.expected_faces))]
    pub fn diagnose(&self, geometry: &SolidGeometry) -> Result<(), ValidationError> {
        let result = self.run_checks(geometry);
        match &result {
            Ok(()) => info!(faces = geometry.len(), "geometry valid"),
            Err(err) => warn!(%err, "geometry validation failed"),
        }
        result
    }

    fn run_checks(&self, geometry: &SolidGeometry) -> Result<(), ValidationError> {
        let faces = geometry.faces();
        if faces.len() != self.expected_faces {
            return Err(ValidationError::FaceCount {
                expected: self.expected_faces,
                actual: faces.len(),
            });
        }

        for face in faces {
            let center_ok = face.center.coords.iter().all(|c| c.is_finite());
            let normal_ok = face.normal.iter().all(|c| c.is_finite());
            if !center_ok || !normal_ok || face.vertices.is_empty() {
                return Err(ValidationError::MissingData { face: face.id });
            }
        }

        for face in faces {
            if face.vertices.len() != 5 {
                return Err(ValidationError::VertexCount {
                    face: face.id,
                    count: face.vertices.len(),
                });
            }
        }
        Ok(())
    }
}
