use tracing::{instrument, trace};

use crate::geometry::SolidGeometry;
use crate::math::polygon::convex_cell_contains;
use crate::math::{Point3, Vector3, TOLERANCE};

/// Finds the face hit first by a ray, for click targeting.
///
/// Rays parallel to a cell's plane and hits behind the origin are ignored.
/// When two cells are hit at the same distance the lower id wins.
pub struct PickFace {
    origin: Point3,
    direction: Vector3,
}

impl PickFace {
    /// Creates a new `PickFace` query for the ray `origin + t * direction`.
    #[must_use]
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Executes the query, returning the id of the nearest face hit.
    #[must_use]
    #[instrument(skip_all)]
    pub fn execute(&self, geometry: &SolidGeometry) -> Option<usize> {
        if self.direction.norm() < TOLERANCE {
            return None;
        }

        let mut best: Option<(f64, usize)> = None;
        for face in geometry.faces() {
            let Ok(plane) = face.plane() else {
                continue;
            };
            let Some(t) = plane.ray_parameter(&self.origin, &self.direction) else {
                continue;
            };
            let hit = self.origin + self.direction * t;
            if t < 0.0 || !convex_cell_contains(&face.vertices, &plane, &hit) {
                continue;
            }
            trace!(face = face.id, t, "ray hit");
            if best.is_none_or(|(best_t, _)| t < best_t) {
                best = Some((t, face.id));
            }
        }
        best.map(|(_, id)| id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Face, FaceColor, Ring};
    use crate::math::pentagon::pentagon_vertices;
    use crate::operations::creation::{MakeKilominx, ModelVariant};

    fn flat(id: usize, z: f64) -> Face {
        let center = Point3::new(0.0, 0.0, z);
        let vertices = pentagon_vertices(&center, &Vector3::z(), 1.0);
        Face::new(id, id, Ring::Center, 0, center, Vector3::z(), vertices)
    }

    #[test]
    fn nearest_hit_wins() {
        let g = SolidGeometry::from_parts(vec![flat(0, 0.0), flat(1, 2.0)], 1.0, 1.0);
        let down = PickFace::new(Point3::new(0.1, 0.1, 5.0), -Vector3::z());
        assert_eq!(down.execute(&g), Some(1));
        let up = PickFace::new(Point3::new(0.1, 0.1, -5.0), Vector3::z());
        assert_eq!(up.execute(&g), Some(0));
    }

    #[test]
    fn behind_origin_is_ignored() {
        let g = SolidGeometry::from_parts(vec![flat(0, 0.0)], 1.0, 1.0);
        let away = PickFace::new(Point3::new(0.0, 0.0, 1.0), Vector3::z());
        assert_eq!(away.execute(&g), None);
    }

    #[test]
    fn miss_outside_pentagon() {
        let g = SolidGeometry::from_parts(vec![flat(0, 0.0)], 1.0, 1.0);
        let ray = PickFace::new(Point3::new(3.0, 0.0, 1.0), -Vector3::z());
        assert_eq!(ray.execute(&g), None);
    }

    #[test]
    fn parallel_and_zero_rays_miss() {
        let g = SolidGeometry::from_parts(vec![flat(0, 0.0)], 1.0, 1.0);
        assert_eq!(
            PickFace::new(Point3::new(0.0, 0.0, 1.0), Vector3::x()).execute(&g),
            None
        );
        assert_eq!(
            PickFace::new(Point3::new(0.0, 0.0, 1.0), Vector3::zeros()).execute(&g),
            None
        );
    }

    #[test]
    fn tie_keeps_lower_id() {
        let g = SolidGeometry::from_parts(vec![flat(0, 0.0), flat(1, 0.0)], 1.0, 1.0);
        let ray = PickFace::new(Point3::new(0.0, 0.0, 1.0), -Vector3::z());
        assert_eq!(ray.execute(&g), Some(0));
    }

    #[test]
    fn pick_then_paint_simple_model() {
        let mut g = MakeKilominx::new(ModelVariant::Simple).execute().unwrap();
        let target = g.face(3).unwrap().center;
        let ray = PickFace::new(Point3::from(target.coords * 3.0), -target.coords);
        let id = ray.execute(&g).unwrap();
        assert_eq!(id, 3);
        g.paint(id, FaceColor::Orange).unwrap();
        assert_eq!(g.face(3).unwrap().color, FaceColor::Orange);
    }
}
