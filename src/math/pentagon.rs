use super::{normalize_or_zero, Point3, Vector3};

/// Angular step between consecutive pentagon vertices (72 degrees).
pub const PENTAGON_STEP: f64 = 2.0 * std::f64::consts::PI / 5.0;

/// Cosine threshold above which the default reference axis counts as
/// parallel to the normal.
const PARALLEL_COS: f64 = 0.99;

/// Returns an orthonormal in-plane basis `(b1, b2)` for the plane with the
/// given normal, such that `b1 x b2` points along `normal`.
///
/// The reference axis is +Y, switching to +X when the normal lies within
/// roughly 8 degrees of the Y axis.
#[must_use]
pub fn tangent_basis(normal: &Vector3) -> (Vector3, Vector3) {
    let up = if normal.y.abs() > PARALLEL_COS {
        Vector3::x()
    } else {
        Vector3::y()
    };
    let b1 = normalize_or_zero(&up.cross(normal));
    let b2 = normal.cross(&b1);
    (b1, b2)
}

/// Builds the five vertices of a regular pentagon.
///
/// The vertices lie in the plane through `center` orthogonal to `normal`,
/// each at distance `radius` from `center`, 72 degrees apart and wound
/// counter-clockwise when viewed from the tip of `normal`.
///
/// `normal` must be unit length. A zero normal is not guarded against.
#[must_use]
pub fn pentagon_vertices(center: &Point3, normal: &Vector3, radius: f64) -> Vec<Point3> {
    let (b1, b2) = tangent_basis(normal);
    (0..5_u32)
        .map(|i| {
            let angle = PENTAGON_STEP * f64::from(i);
            center + (b1 * angle.cos() + b2 * angle.sin()) * radius
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn unit(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z).normalize()
    }

    #[test]
    fn vertices_at_radius() {
        let center = p(1.0, -2.0, 0.5);
        let normal = unit(1.0, 1.0, 1.0);
        let verts = pentagon_vertices(&center, &normal, 0.75);
        assert_eq!(verts.len(), 5);
        for v in &verts {
            assert_relative_eq!((v - center).norm(), 0.75, epsilon = 1e-12);
        }
    }

    #[test]
    fn vertices_coplanar_with_center() {
        let center = p(0.0, 0.0, 3.0);
        let normal = unit(0.2, -0.4, 1.0);
        for v in pentagon_vertices(&center, &normal, 1.0) {
            assert!((v - center).dot(&normal).abs() < 1e-12);
        }
    }

    #[test]
    fn consecutive_vertices_72_degrees_apart() {
        let center = p(0.0, 0.0, 0.0);
        let normal = unit(0.3, 0.5, -0.8);
        let verts = pentagon_vertices(&center, &normal, 2.0);
        let (b1, b2) = tangent_basis(&normal);
        let angles: Vec<f64> = verts
            .iter()
            .map(|v| {
                let d = v - center;
                d.dot(&b2).atan2(d.dot(&b1))
            })
            .collect();
        for i in 0..5 {
            let mut delta = angles[(i + 1) % 5] - angles[i];
            if delta < 0.0 {
                delta += 2.0 * std::f64::consts::PI;
            }
            assert_relative_eq!(delta, PENTAGON_STEP, epsilon = 1e-12);
        }
    }

    #[test]
    fn winding_follows_normal() {
        let center = p(0.0, 0.0, 0.0);
        let normal = unit(-1.0, 0.2, 0.4);
        let verts = pentagon_vertices(&center, &normal, 1.0);
        let turn = (verts[1] - verts[0]).cross(&(verts[2] - verts[1]));
        assert!(turn.dot(&normal) > 0.0);
    }

    #[test]
    fn normal_along_reference_axis_uses_fallback() {
        let center = p(0.0, 5.0, 0.0);
        for normal in [Vector3::y(), -Vector3::y()] {
            let (b1, b2) = tangent_basis(&normal);
            assert_relative_eq!(b1.norm(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(b2.norm(), 1.0, epsilon = 1e-12);
            let verts = pentagon_vertices(&center, &normal, 1.5);
            for v in &verts {
                assert_relative_eq!((v - center).norm(), 1.5, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn basis_is_orthonormal() {
        let normal = unit(0.1, 0.9, 0.3);
        let (b1, b2) = tangent_basis(&normal);
        assert!(b1.dot(&b2).abs() < 1e-12);
        assert!(b1.dot(&normal).abs() < 1e-12);
        assert!(b2.dot(&normal).abs() < 1e-12);
        assert_relative_eq!(b1.cross(&b2), normal, epsilon = 1e-12);
    }
}
