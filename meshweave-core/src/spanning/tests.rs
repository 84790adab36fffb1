//! Unit and property tests for spanning-tree construction.

use proptest::prelude::*;
use rstest::rstest;

use crate::test_utils::{count_components, edges, suite_proptest_config};
use crate::{Edge, GraphError};

use super::{spanning_forest, spanning_tree};

const SQUARE_POOL: &[(usize, usize)] = &[(0, 1), (0, 2), (1, 2), (0, 3), (1, 3), (2, 3)];

#[test]
fn square_pool_rejects_the_cycle_closing_pair() {
    let tree = spanning_tree(4, &edges(SQUARE_POOL)).expect("pool is connected");
    assert_eq!(tree, edges(&[(0, 1), (0, 2), (0, 3)]));
}

#[test]
fn candidate_order_decides_the_tree() {
    let mut pool = edges(SQUARE_POOL);
    pool.reverse();
    let tree = spanning_tree(4, &pool).expect("pool is connected");
    assert_eq!(tree, edges(&[(2, 3), (1, 3), (0, 3)]));
}

#[test]
fn stops_before_inspecting_the_rest_of_the_pool() {
    // The trailing edge is out of range but never reached.
    let pool = edges(&[(0, 1), (1, 2), (5, 9)]);
    let forest = spanning_forest(3, &pool).expect("tree completes before the bad edge");
    assert!(forest.is_tree());
    assert_eq!(forest.edges(), edges(&[(0, 1), (1, 2)]).as_slice());
}

#[test]
fn single_node_needs_no_edges() {
    let forest = spanning_forest(1, &[]).expect("one node is already connected");
    assert!(forest.is_tree());
    assert!(forest.edges().is_empty());
}

#[test]
fn rejects_empty_graph() {
    assert_eq!(spanning_forest(0, &[]), Err(GraphError::EmptyGraph));
}

#[test]
fn rejects_out_of_range_nodes() {
    let err = spanning_forest(3, &edges(&[(0, 3)])).expect_err("node 3 does not exist");
    assert_eq!(
        err,
        GraphError::InvalidNodeId {
            node: 3,
            node_count: 3
        }
    );
}

#[test]
fn skips_self_loops() {
    let tree = spanning_tree(2, &edges(&[(1, 1), (0, 1)])).expect("pool is connected");
    assert_eq!(tree, vec![Edge::new(0, 1)]);
}

#[rstest]
#[case::isolated_node(4, &[(0, 1), (1, 2), (0, 2)], 2, 2)]
#[case::two_islands(4, &[(0, 1), (2, 3)], 2, 2)]
#[case::no_candidates(3, &[], 0, 3)]
fn disconnected_pool_is_surfaced(
    #[case] node_count: usize,
    #[case] pool: &[(usize, usize)],
    #[case] accepted: usize,
    #[case] components: usize,
) {
    let forest = spanning_forest(node_count, &edges(pool)).expect("forest always builds");
    assert!(!forest.is_tree());
    assert_eq!(forest.component_count(), components);

    let err = spanning_tree(node_count, &edges(pool)).expect_err("pool is disconnected");
    assert_eq!(
        err,
        GraphError::DisconnectedCandidatePool {
            accepted,
            required: node_count - 1,
            components,
        }
    );
}

fn complete_graph(node_count: usize) -> Vec<Edge> {
    (0..node_count)
        .flat_map(|a| ((a + 1)..node_count).map(move |b| Edge::new(a, b)))
        .collect()
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn tree_over_a_connected_pool_is_acyclic_and_spanning(
        node_count in 1_usize..24,
        order in any::<proptest::sample::Index>(),
        rotate in any::<proptest::sample::Index>(),
    ) {
        let mut pool = complete_graph(node_count);
        if !pool.is_empty() {
            let pivot = order.index(pool.len());
            pool.swap(0, pivot);
            let shift = rotate.index(pool.len());
            pool.rotate_left(shift);
        }
        let tree = spanning_tree(node_count, &pool).expect("complete graphs are connected");
        prop_assert_eq!(tree.len(), node_count - 1);
        prop_assert_eq!(count_components(node_count, &tree), 1);
        for edge in &tree {
            prop_assert!(pool.contains(edge));
        }
    }

    #[test]
    fn forest_edges_plus_components_equal_node_count(
        node_count in 1_usize..20,
        mask in proptest::collection::vec(any::<bool>(), 190),
    ) {
        let pool: Vec<Edge> = complete_graph(node_count)
            .into_iter()
            .zip(mask)
            .filter_map(|(edge, keep)| keep.then_some(edge))
            .collect();
        let forest = spanning_forest(node_count, &pool).expect("valid input");
        prop_assert_eq!(forest.edges().len() + forest.component_count(), node_count);
        prop_assert_eq!(count_components(node_count, forest.edges()), forest.component_count());
    }
}
