//! Seeded candidate pools for benchmarks.
//!
//! Runs placement and triangulation once per size so the benchmarks time
//! only the stage under test.

use meshweave_core::{
    Edge, PlacementConfig, Stage, StreamFactory, TriangulationMode, candidate_pool, place_nodes,
    spanning_tree, triangulate,
};
use rand::{SeedableRng, rngs::SmallRng, seq::SliceRandom};

use crate::error::BenchSetupError;

/// Side length of the square placement field.
const FIELD: u32 = 4_096;

/// Minimum node separation; keeps every node a distinct triangulation vertex.
const SEPARATION: u32 = 4;

/// A triangulated node set with its candidate edges in shuffled order.
#[derive(Clone, Debug)]
pub struct CandidateSource {
    node_count: usize,
    candidates: Vec<Edge>,
    tree: Vec<Edge>,
}

impl CandidateSource {
    /// Places `node_count` nodes from `seed` and triangulates them.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::Graph`] if placement, triangulation or the
    /// spanning tree fails.
    pub fn generate(node_count: usize, seed: u64) -> Result<Self, BenchSetupError> {
        let factory = StreamFactory::new(seed);
        let config = PlacementConfig::new(node_count, FIELD, FIELD, SEPARATION);
        let nodes = place_nodes(&config, &mut factory.stream(Stage::Placement))?;
        let triangles = triangulate(
            &nodes,
            TriangulationMode::Delaunay,
            &mut factory.stream(Stage::Triangulation),
        )?;

        let mut candidates = candidate_pool(&triangles).to_vec();
        candidates.shuffle(&mut SmallRng::seed_from_u64(seed));
        let tree = spanning_tree(node_count, &candidates)?;

        Ok(Self {
            node_count,
            candidates,
            tree,
        })
    }

    /// Number of placed nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Candidate edges in shuffled order.
    #[must_use]
    pub fn candidates(&self) -> &[Edge] {
        &self.candidates
    }

    /// Spanning tree over [`Self::candidates`].
    #[must_use]
    pub fn tree(&self) -> &[Edge] {
        &self.tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_is_connected_and_reproducible() {
        let first = CandidateSource::generate(200, 9).expect("setup must succeed");
        let second = CandidateSource::generate(200, 9).expect("setup must succeed");
        assert_eq!(first.candidates(), second.candidates());
        assert_eq!(first.tree().len(), 199);
        assert!(first.candidates().len() >= first.tree().len());
    }
}
