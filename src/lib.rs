//! Procedural geometry for a dodecahedral twisty puzzle (kilominx).
//!
//! Builds the face graph of a subdivided dodecahedron: twelve major faces,
//! each split into a center cell and rings of pentagonal cells, with
//! per-cell placement and neighbor lists. Construction is pure; progress and
//! validation diagnostics are emitted as `tracing` events, so a host that
//! wants them installs a subscriber.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use error::{KilominxError, Result};
pub use geometry::{solved_state_colors, Face, FaceColor, Ring, SolidGeometry};
pub use operations::creation::{MakeKilominx, ModelVariant, SubdivisionParams};
pub use operations::query::IsValid;

/// Builds the full subdivided model with default parameters.
#[must_use]
pub fn create_solid_geometry() -> SolidGeometry {
    MakeKilominx::new(ModelVariant::Full).generate()
}

/// Builds the twelve-face model with default parameters.
#[must_use]
pub fn create_simple_geometry() -> SolidGeometry {
    MakeKilominx::new(ModelVariant::Simple).generate()
}

/// Validates a geometry against the full model's face-count constant.
#[must_use]
pub fn validate_geometry(geometry: &SolidGeometry) -> bool {
    IsValid::for_variant(ModelVariant::Full).execute(geometry)
}

/// Validates a geometry against the simple model's face-count constant.
#[must_use]
pub fn validate_simple_geometry(geometry: &SolidGeometry) -> bool {
    IsValid::for_variant(ModelVariant::Simple).execute(geometry)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn entry_points_match_builder() {
        assert_eq!(
            create_solid_geometry(),
            MakeKilominx::new(ModelVariant::Full).execute().unwrap()
        );
        assert_eq!(
            create_simple_geometry(),
            MakeKilominx::new(ModelVariant::Simple).execute().unwrap()
        );
    }

    #[test]
    fn validators_are_distinct() {
        let simple = create_simple_geometry();
        assert!(!validate_geometry(&simple));
        assert!(validate_simple_geometry(&simple));
    }

    #[test]
    fn full_model_fails_literal_count_check() {
        let full = create_solid_geometry();
        assert_eq!(full.len(), 92);
        assert!(!validate_geometry(&full));
        assert!(!validate_simple_geometry(&full));
    }

    #[test]
    fn ids_cover_zero_to_n() {
        let full = create_solid_geometry();
        let ids: HashSet<usize> = full.faces().iter().map(|f| f.id).collect();
        assert_eq!(ids.len(), full.len());
        assert!(ids.iter().all(|&id| id < full.len()));
    }

    #[test]
    fn solved_coloring_round_trip() {
        let mut full = create_solid_geometry();
        assert!(full.faces().iter().all(|f| f.color == FaceColor::White));
        full.apply_solved_colors();
        let palette = solved_state_colors();
        for f in full.faces() {
            assert_eq!(f.color, palette[f.major_face]);
        }
    }
}
