use tracing::{debug, instrument};

use crate::geometry::SolidGeometry;

use super::{FaceMesh, TessellateFace};

/// Tessellates every cell of a geometry into one combined mesh.
#[derive(Default)]
pub struct TessellateGeometry;

impl TessellateGeometry {
    /// Creates a new `TessellateGeometry` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the tessellation, returning a combined triangle mesh.
    #[must_use]
    #[instrument(skip_all)]
    pub fn execute(&self, geometry: &SolidGeometry) -> FaceMesh {
        let mut combined = FaceMesh::default();
        for face in geometry.faces() {
            combined.merge(&TessellateFace::new(face).execute());
        }
        debug!(triangles = combined.triangle_count(), "tessellated geometry");
        combined
    }
}
