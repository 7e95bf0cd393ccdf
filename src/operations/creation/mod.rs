mod anchors;
mod make_kilominx;

pub use anchors::{major_face_anchors, Anchor, ANCHOR_COUNT};
pub use make_kilominx::MakeKilominx;

use crate::operations::adjacency::AdjacencyStrategy;

/// Which construction to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelVariant {
    /// Twelve flat, unsubdivided faces (ring count 0).
    Simple,
    /// Center, inner ring and outer ring cells (ring count 2).
    Full,
}

impl ModelVariant {
    /// Number of subdivision rings the variant builds.
    #[must_use]
    pub fn ring_count(self) -> u8 {
        match self {
            ModelVariant::Simple => 0,
            ModelVariant::Full => 2,
        }
    }

    /// Face count the validator checks this variant against.
    ///
    /// The full model's constant is 62 even though its ring rule emits
    /// 92 cells; see `DESIGN.md`.
    #[must_use]
    pub fn expected_face_count(self) -> usize {
        match self {
            ModelVariant::Simple => 12,
            ModelVariant::Full => 62,
        }
    }
}

/// Sizes and thresholds used by construction.
///
/// Ring offsets and pentagon radii are fractions of `face_radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubdivisionParams {
    /// Distance of each major-face center from the origin.
    pub radius: f64,
    /// Uniform scale applied to every length.
    pub scale: f64,
    /// Base radius of a major face.
    pub face_radius: f64,
    /// Pentagon radius of the center cell.
    pub center_radius: f64,
    /// Distance of inner-ring cell centers from the major-face center.
    pub inner_offset: f64,
    /// Pentagon radius of inner-ring cells.
    pub inner_radius: f64,
    /// Distance of outer-ring cell centers from the major-face center.
    pub outer_offset: f64,
    /// Pentagon radius of outer-ring cells.
    pub outer_radius: f64,
    /// Leading major faces (in anchor order) that get no outer ring.
    pub corner_faces: usize,
    /// How neighbors are inferred once all cells exist.
    pub adjacency: AdjacencyStrategy,
}

impl Default for SubdivisionParams {
    fn default() -> Self {
        Self {
            radius: 2.0,
            scale: 1.0,
            face_radius: 1.0,
            center_radius: 0.3,
            inner_offset: 0.55,
            inner_radius: 0.22,
            outer_offset: 0.9,
            outer_radius: 0.15,
            corner_faces: 8,
            adjacency: AdjacencyStrategy::default(),
        }
    }
}
