mod tessellate_face;
mod tessellate_geometry;

pub use tessellate_face::TessellateFace;
pub use tessellate_geometry::TessellateGeometry;

use crate::geometry::FaceColor;
use crate::math::{Point3, Vector3};

/// A triangle mesh of puzzle cells, tagged per triangle for picking and
/// coloring.
#[derive(Debug, Clone, Default)]
pub struct FaceMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
    /// Owning face id of each triangle.
    pub face_ids: Vec<usize>,
    /// Color of each triangle's face at tessellation time.
    pub colors: Vec<FaceColor>,
}

impl FaceMesh {
    /// Appends `other`, offsetting its indices past the current vertices.
    pub fn merge(&mut self, other: &FaceMesh) {
        #[allow(clippy::cast_possible_truncation)]
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.indices.extend(
            other
                .indices
                .iter()
                .map(|[a, b, c]| [a + offset, b + offset, c + offset]),
        );
        self.face_ids.extend_from_slice(&other.face_ids);
        self.colors.extend_from_slice(&other.colors);
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Face id owning triangle `tri`, the lookup a renderer's hit test needs.
    #[must_use]
    pub fn face_of_triangle(&self, tri: usize) -> Option<usize> {
        self.face_ids.get(tri).copied()
    }
}
