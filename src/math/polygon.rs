use crate::geometry::Plane;

use super::{Point3, Vector3, TOLERANCE};

/// Vector area of a closed planar polygon.
///
/// Points along the polygon's counter-clockwise normal with length equal
/// to its area. Independent of where the origin sits.
#[must_use]
pub fn vector_area(points: &[Point3]) -> Vector3 {
    let n = points.len();
    let mut sum = Vector3::zeros();
    for (i, a) in points.iter().enumerate() {
        sum += a.coords.cross(&points[(i + 1) % n].coords);
    }
    sum * 0.5
}

/// Area of a planar polygon as seen along `normal`.
#[must_use]
pub fn polygon_area(points: &[Point3], normal: &Vector3) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    vector_area(points).dot(normal).abs()
}

/// Signed turning direction of a planar polygon about `normal`.
///
/// Positive for counter-clockwise winding seen from the tip of `normal`,
/// negative for clockwise, zero for degenerate input.
#[must_use]
pub fn winding_sign(points: &[Point3], normal: &Vector3) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let dot = vector_area(points).dot(normal);
    if dot.abs() < TOLERANCE {
        0.0
    } else {
        dot.signum()
    }
}

/// Returns `true` if `point`, lying in `plane`, is inside or on the edge of
/// the convex polygon `cell`.
///
/// Every cell is convex, so the point is inside exactly when it sits on the
/// same side of all edges in the plane's UV frame.
#[must_use]
pub fn convex_cell_contains(cell: &[Point3], plane: &Plane, point: &Point3) -> bool {
    if cell.len() < 3 {
        return false;
    }
    let (pu, pv) = plane.project(point);
    let uv: Vec<(f64, f64)> = cell.iter().map(|q| plane.project(q)).collect();

    let mut ahead = false;
    let mut behind = false;
    for (i, &(au, av)) in uv.iter().enumerate() {
        let (bu, bv) = uv[(i + 1) % uv.len()];
        let side = (bu - au) * (pv - av) - (bv - av) * (pu - au);
        ahead |= side > TOLERANCE;
        behind |= side < -TOLERANCE;
    }
    !(ahead && behind)
}
