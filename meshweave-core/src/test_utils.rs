//! Shared test utilities for `meshweave-core`.

use meshweave_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;
use rand::SeedableRng;

use crate::{Edge, streams::GraphRng};

/// Builds a proptest configuration honouring the shared CI overrides.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// A generator seeded directly, bypassing the stage offsets.
#[must_use]
pub(crate) fn rng(seed: u64) -> GraphRng {
    GraphRng::seed_from_u64(seed)
}

/// Converts `(a, b)` pairs into canonical edges.
#[must_use]
pub(crate) fn edges(pairs: &[(usize, usize)]) -> Vec<Edge> {
    pairs.iter().copied().map(Edge::from).collect()
}

/// Counts the partitions formed by `edges` over `node_count` nodes, failing
/// the test if any edge closes a cycle.
pub(crate) fn count_components(node_count: usize, edges: &[Edge]) -> usize {
    let mut parent: Vec<usize> = (0..node_count).collect();

    fn root(parent: &mut [usize], node: usize) -> usize {
        let mut current = node;
        while parent[current] != current {
            parent[current] = parent[parent[current]];
            current = parent[current];
        }
        current
    }

    let mut components = node_count;
    for edge in edges {
        let left = root(&mut parent, edge.a());
        let right = root(&mut parent, edge.b());
        assert_ne!(left, right, "edge {edge} closes a cycle");
        parent[right] = left;
        components -= 1;
    }
    components
}
