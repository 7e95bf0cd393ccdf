use crate::geometry::SolidGeometry;
use crate::math::polygon::polygon_area;

/// Computes the total area of all cells of a geometry.
pub struct SurfaceArea;

impl SurfaceArea {
    /// Executes the query, summing the pentagon area of every face.
    #[must_use]
    pub fn execute(geometry: &SolidGeometry) -> f64 {
        geometry
            .faces()
            .iter()
            .map(|f| polygon_area(&f.vertices, &f.normal))
            .sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::{MakeKilominx, ModelVariant, SubdivisionParams};
    use approx::assert_relative_eq;

    fn pentagon_area(r: f64) -> f64 {
        2.5 * r * r * (72.0_f64).to_radians().sin()
    }

    #[test]
    fn simple_model_area() {
        let g = MakeKilominx::new(ModelVariant::Simple).execute().unwrap();
        assert_relative_eq!(SurfaceArea::execute(&g), 12.0 * pentagon_area(1.0), epsilon = 1e-9);
    }

    #[test]
    fn full_model_area() {
        let p = SubdivisionParams::default();
        let g = MakeKilominx::new(ModelVariant::Full).execute().unwrap();
        let expected = 12.0 * pentagon_area(p.center_radius)
            + 60.0 * pentagon_area(p.inner_radius)
            + 20.0 * pentagon_area(p.outer_radius);
        assert_relative_eq!(SurfaceArea::execute(&g), expected, epsilon = 1e-9);
    }
}
