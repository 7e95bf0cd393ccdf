use crate::error::Result;
use crate::math::{Point3, Vector3};

use super::{FaceColor, Plane};

/// Concentric subdivision level of a cell within its major face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ring {
    /// The single center cell.
    Center,
    /// The five cells around the center.
    Inner,
    /// The five cells along the rim, only on non-corner major faces.
    Outer,
}

impl Ring {
    /// Ring index: 0 center, 1 inner, 2 outer.
    #[must_use]
    pub fn index(self) -> u8 {
        match self {
            Ring::Center => 0,
            Ring::Inner => 1,
            Ring::Outer => 2,
        }
    }
}

/// A single pentagonal cell of the puzzle surface.
///
/// `id` is the only handle external code uses to address a cell. All fields
/// except `color` are fixed once construction finishes.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    /// Generation-order index, `0..n`.
    pub id: usize,
    /// Centroid in model space.
    pub center: Point3,
    /// Unit outward normal.
    pub normal: Vector3,
    /// Regular pentagon around `center`, counter-clockwise about `normal`.
    pub vertices: Vec<Point3>,
    /// Ids of nearby cells, ascending. Symmetric and irreflexive.
    pub neighbors: Vec<usize>,
    /// Index of the primary dodecahedron face, `0..12`.
    pub major_face: usize,
    /// Subdivision level.
    pub ring: Ring,
    /// Slot within the ring, `0..5`. Always 0 for [`Ring::Center`].
    pub ring_position: usize,
    /// Current sticker color.
    pub color: FaceColor,
}

impl Face {
    /// Creates a face with no neighbors and the default color.
    #[must_use]
    pub fn new(
        id: usize,
        major_face: usize,
        ring: Ring,
        ring_position: usize,
        center: Point3,
        normal: Vector3,
        vertices: Vec<Point3>,
    ) -> Self {
        Self {
            id,
            center,
            normal,
            vertices,
            neighbors: Vec::new(),
            major_face,
            ring,
            ring_position,
            color: FaceColor::default(),
        }
    }

    /// Color this face takes in the solved state of `palette`.
    ///
    /// Falls back to the default color for an empty palette.
    #[must_use]
    pub fn solved_color(&self, palette: &[FaceColor]) -> FaceColor {
        if palette.is_empty() {
            return FaceColor::default();
        }
        palette[self.major_face % palette.len()]
    }

    /// Returns `true` if `other` is recorded as a neighbor.
    #[must_use]
    pub fn is_neighbor(&self, other: usize) -> bool {
        self.neighbors.binary_search(&other).is_ok()
    }

    /// The plane the cell lies in.
    ///
    /// # Errors
    ///
    /// Returns an error if the face normal is zero-length.
    pub fn plane(&self) -> Result<Plane> {
        Plane::from_normal(self.center, self.normal)
    }
}
