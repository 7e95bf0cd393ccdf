use crate::math::{normalize_or_zero, Point3, Vector3, PHI};

/// Number of major faces.
pub const ANCHOR_COUNT: usize = 12;

/// Center and outward normal of one major face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    /// Major-face center at the requested radius.
    pub center: Point3,
    /// Unit direction from the origin to `center`.
    pub normal: Vector3,
}

/// Golden-ratio vertex candidates in fixed enumeration order.
///
/// The eight signed cube corners come first, followed by the three
/// cyclic families of `(0, ±1/φ, ±φ)` points.
fn candidates() -> Vec<Vector3> {
    let inv = 1.0 / PHI;
    let signs = [1.0, -1.0];
    let mut out = Vec::with_capacity(20);

    for sx in signs {
        for sy in signs {
            for sz in signs {
                out.push(Vector3::new(sx, sy, sz));
            }
        }
    }
    for a in signs {
        for b in signs {
            out.push(Vector3::new(0.0, a * inv, b * PHI));
        }
    }
    for a in signs {
        for b in signs {
            out.push(Vector3::new(a * inv, b * PHI, 0.0));
        }
    }
    for a in signs {
        for b in signs {
            out.push(Vector3::new(a * PHI, 0.0, b * inv));
        }
    }
    out
}

/// Returns the twelve major-face anchors, scaled to `radius`.
///
/// The anchors are the first twelve golden-ratio candidates; their order
/// fixes the major-face index and therefore face id assignment.
#[must_use]
pub fn major_face_anchors(radius: f64) -> Vec<Anchor> {
    candidates()
        .into_iter()
        .take(ANCHOR_COUNT)
        .map(|c| {
            let normal = normalize_or_zero(&c);
            Anchor {
                center: Point3::from(normal * radius),
                normal,
            }
        })
        .collect()
}
