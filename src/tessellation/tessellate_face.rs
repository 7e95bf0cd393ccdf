use crate::geometry::Face;

use super::FaceMesh;

/// Fans a convex cell into triangles around its first vertex.
pub struct TessellateFace<'a> {
    face: &'a Face,
}

impl<'a> TessellateFace<'a> {
    /// Creates a new `TessellateFace` operation.
    #[must_use]
    pub fn new(face: &'a Face) -> Self {
        Self { face }
    }

    /// Executes the tessellation. Cells with fewer than three vertices
    /// produce an empty mesh.
    #[must_use]
    pub fn execute(&self) -> FaceMesh {
        let face = self.face;
        let n = face.vertices.len();
        if n < 3 {
            return FaceMesh::default();
        }

        let mut mesh = FaceMesh {
            vertices: face.vertices.clone(),
            normals: vec![face.normal; n],
            ..FaceMesh::default()
        };
        let last = u32::try_from(n - 1).unwrap_or(u32::MAX);
        for i in 1..last {
            mesh.indices.push([0, i, i + 1]);
            mesh.face_ids.push(face.id);
            mesh.colors.push(face.color);
        }
        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{FaceColor, Ring};
    use crate::math::pentagon::pentagon_vertices;
    use crate::math::{Point3, Vector3};

    #[test]
    fn pentagon_fans_into_three_triangles() {
        let center = Point3::new(0.0, 0.0, 1.0);
        let mut face = Face::new(
            4,
            2,
            Ring::Inner,
            1,
            center,
            Vector3::z(),
            pentagon_vertices(&center, &Vector3::z(), 1.0),
        );
        face.color = FaceColor::Red;

        let mesh = TessellateFace::new(&face).execute();
        assert_eq!(mesh.vertices.len(), 5);
        assert_eq!(mesh.indices, vec![[0, 1, 2], [0, 2, 3], [0, 3, 4]]);
        assert_eq!(mesh.face_ids, vec![4, 4, 4]);
        assert_eq!(mesh.colors, vec![FaceColor::Red; 3]);
        for tri in &mesh.indices {
            let [a, b, c] = tri.map(|i| mesh.vertices[i as usize]);
            assert!((b - a).cross(&(c - a)).dot(&face.normal) > 0.0);
        }
    }

    #[test]
    fn degenerate_face_is_empty() {
        let face = Face::new(0, 0, Ring::Center, 0, Point3::origin(), Vector3::z(), Vec::new());
        assert_eq!(TessellateFace::new(&face).execute().triangle_count(), 0);
    }
}
