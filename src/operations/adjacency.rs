use tracing::{debug, instrument};

use crate::geometry::{Face, SolidGeometry};

/// Distance under which two cell centers count as neighbors by default.
pub const DEFAULT_PROXIMITY_THRESHOLD: f64 = 1.5;

/// Tolerance for treating two vertices as the same point.
pub const DEFAULT_VERTEX_TOLERANCE: f64 = 1e-6;

/// Rule used to decide whether two cells are neighbors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdjacencyStrategy {
    /// Cell centers closer than `threshold` (strictly).
    ///
    /// A heuristic: it may link cells that share no edge and miss ones that
    /// do, depending on cell spacing.
    Proximity { threshold: f64 },
    /// Cells sharing at least two vertices within `tolerance`, i.e. an edge.
    SharedEdge { tolerance: f64 },
}

impl Default for AdjacencyStrategy {
    fn default() -> Self {
        AdjacencyStrategy::Proximity {
            threshold: DEFAULT_PROXIMITY_THRESHOLD,
        }
    }
}

impl AdjacencyStrategy {
    fn adjacent(&self, a: &Face, b: &Face) -> bool {
        match *self {
            AdjacencyStrategy::Proximity { threshold } => (a.center - b.center).norm() < threshold,
            AdjacencyStrategy::SharedEdge { tolerance } => {
                shared_vertex_count(a, b, tolerance) >= 2
            }
        }
    }
}

fn shared_vertex_count(a: &Face, b: &Face, tolerance: f64) -> usize {
    a.vertices
        .iter()
        .filter(|va| b.vertices.iter().any(|vb| (*va - vb).norm() < tolerance))
        .count()
}

/// Recomputes every face's neighbor list.
///
/// Compares all ordered pairs of distinct faces, so the result is
/// irreflexive and, because both rules are symmetric, symmetric. Neighbor
/// ids are stored in ascending order.
pub struct InferAdjacency {
    strategy: AdjacencyStrategy,
}

impl InferAdjacency {
    /// Creates a new `InferAdjacency` operation.
    #[must_use]
    pub fn new(strategy: AdjacencyStrategy) -> Self {
        Self { strategy }
    }

    /// Executes the inference, replacing existing neighbor lists.
    ///
    /// Returns the number of unordered neighbor pairs found.
    #[instrument(skip_all, fields(strategy = ?self.strategy))]
    pub fn execute(&self, geometry: &mut SolidGeometry) -> usize {
        let faces = geometry.faces();
        let lists: Vec<Vec<usize>> = faces
            .iter()
            .enumerate()
            .map(|(i, a)| {
                let mut ids: Vec<usize> = faces
                    .iter()
                    .enumerate()
                    .filter(|&(j, b)| i != j && self.strategy.adjacent(a, b))
                    .map(|(_, b)| b.id)
                    .collect();
                ids.sort_unstable();
                ids
            })
            .collect();

        let links: usize = lists.iter().map(Vec::len).sum();
        for (face, neighbors) in geometry.faces_mut().iter_mut().zip(lists) {
            face.neighbors = neighbors;
        }
        debug!(pairs = links / 2, "inferred adjacency");
        links / 2
    }
}
