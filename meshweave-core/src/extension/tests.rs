//! Unit and property tests for hair-biased edge extension.

use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;
use rstest::rstest;

use crate::test_utils::{edges, rng, suite_proptest_config};
use crate::{Edge, GraphError, Probability};

use super::pools::HairPools;
use super::{extend, leaf_nodes};

fn complete_graph(node_count: usize) -> Vec<Edge> {
    (0..node_count)
        .flat_map(|a| ((a + 1)..node_count).map(move |b| Edge::new(a, b)))
        .collect()
}

fn path(node_count: usize) -> Vec<Edge> {
    (1..node_count).map(|node| Edge::new(node - 1, node)).collect()
}

fn probability(value: f64) -> Probability {
    Probability::new(value).expect("test probability is in range")
}

#[test]
fn adds_the_only_remaining_candidate() {
    let tree = edges(&[(0, 1), (0, 2)]);
    let pool = edges(&[(0, 1), (0, 2), (1, 2)]);
    let extended =
        extend(&tree, 3, &pool, Probability::NEVER, &mut rng(3)).expect("one candidate remains");
    assert_eq!(extended, edges(&[(0, 1), (0, 2), (1, 2)]));
}

#[test]
fn certain_bias_discards_bad_hair_before_checking_capacity() {
    let tree = edges(&[(0, 1), (0, 2)]);
    let pool = edges(&[(0, 1), (0, 2), (1, 2)]);
    let err = extend(&tree, 3, &pool, Probability::ALWAYS, &mut rng(3))
        .expect_err("the only candidate touches a leaf");
    assert_eq!(
        err,
        GraphError::InsufficientCandidates {
            requested: 3,
            available: 2,
        }
    );
}

#[test]
fn target_equal_to_tree_returns_the_tree() {
    let tree = edges(&[(2, 3), (0, 1), (1, 2)]);
    let extended = extend(&tree, 3, &complete_graph(4), probability(0.5), &mut rng(8))
        .expect("no extension required");
    assert_eq!(extended, tree);
}

#[test]
fn target_below_tree_is_rejected() {
    let tree = path(4);
    let err = extend(&tree, 2, &complete_graph(4), Probability::NEVER, &mut rng(0))
        .expect_err("target is smaller than the tree");
    assert_eq!(err, GraphError::TargetBelowTree { target: 2, tree: 3 });
}

#[test]
fn reports_capacity_when_the_pool_is_too_small() {
    let tree = path(4);
    let err = extend(&tree, 7, &complete_graph(4), Probability::NEVER, &mut rng(0))
        .expect_err("K4 has only six edges");
    assert_eq!(
        err,
        GraphError::InsufficientCandidates {
            requested: 7,
            available: 6,
        }
    );
}

#[test]
fn ignores_duplicate_and_looping_candidates() {
    let tree = edges(&[(0, 1)]);
    let pool = edges(&[(1, 2), (2, 1), (1, 1), (0, 1), (1, 2)]);
    let extended =
        extend(&tree, 2, &pool, Probability::NEVER, &mut rng(4)).expect("one usable candidate");
    assert_eq!(extended, edges(&[(0, 1), (1, 2)]));

    let err = extend(&tree, 3, &pool, Probability::NEVER, &mut rng(4))
        .expect_err("duplicates do not add capacity");
    assert_eq!(
        err,
        GraphError::InsufficientCandidates {
            requested: 3,
            available: 2,
        }
    );
}

#[rstest]
#[case::path(path(5), vec![0, 4])]
#[case::star(edges(&[(0, 1), (0, 2), (0, 3)]), vec![1, 2, 3])]
#[case::single_edge(edges(&[(3, 7)]), vec![3, 7])]
#[case::empty(Vec::new(), Vec::new())]
fn finds_degree_one_nodes(#[case] tree: Vec<Edge>, #[case] expected: Vec<usize>) {
    let leaves: Vec<usize> = leaf_nodes(&tree).into_iter().collect();
    assert_eq!(leaves, expected);
}

#[test]
fn pools_partition_on_leaf_contact() {
    let leaves: BTreeSet<usize> = [0, 4].into_iter().collect();
    let pools = HairPools::partition(edges(&[(0, 2), (1, 3), (2, 4), (1, 2)]), &leaves);
    assert_eq!(pools.bad(), edges(&[(0, 2), (2, 4)]).as_slice());
    assert_eq!(pools.good(), edges(&[(1, 3), (1, 2)]).as_slice());
    assert_eq!(pools.len(), 4);
}

#[rstest]
#[case::unbiased(0.0)]
#[case::biased(0.7)]
#[case::certain(1.0)]
fn pools_offer_every_edge_exactly_once(#[case] bias: f64) {
    let leaves: BTreeSet<usize> = [0].into_iter().collect();
    let candidates = complete_graph(6);
    let mut pools = HairPools::partition(candidates.iter().copied(), &leaves);
    let mut generator = rng(21);
    let mut drawn = Vec::new();
    while let Some(edge) = pools.draw(probability(bias), &mut generator) {
        drawn.push(edge);
    }
    drawn.sort_unstable();
    assert_eq!(drawn, candidates);
    assert_eq!(pools.len(), 0);
}

#[test]
fn certain_bias_prefers_good_hair_while_it_lasts() {
    let leaves: BTreeSet<usize> = [0].into_iter().collect();
    let mut pools = HairPools::partition(edges(&[(0, 1), (0, 2), (1, 2), (2, 3)]), &leaves);
    let mut generator = rng(2);
    let first = pools.draw(Probability::ALWAYS, &mut generator).expect("pools are full");
    let second = pools.draw(Probability::ALWAYS, &mut generator).expect("pools are full");
    assert!(!first.touches(0));
    assert!(!second.touches(0));
    assert!(pools.good().is_empty());
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn extension_yields_exact_unique_superset(
        seed in any::<u64>(),
        node_count in 2_usize..12,
        extra in 0_usize..40,
        bias in 0.0_f64..1.0,
    ) {
        let tree = path(node_count);
        let pool = complete_graph(node_count);
        let target = (tree.len() + extra).min(pool.len());
        let extended = extend(&tree, target, &pool, probability(bias), &mut rng(seed))
            .expect("target fits inside the complete graph");

        prop_assert_eq!(extended.len(), target);
        prop_assert_eq!(&extended[..tree.len()], tree.as_slice());
        let unique: HashSet<Edge> = extended.iter().copied().collect();
        prop_assert_eq!(unique.len(), target);
        prop_assert!(extended.iter().all(|edge| pool.contains(edge)));
    }

    #[test]
    fn certain_bias_never_touches_starting_leaves(
        seed in any::<u64>(),
        node_count in 3_usize..12,
        extra in 0_usize..60,
    ) {
        let tree = path(node_count);
        let pool = complete_graph(node_count);
        let last = node_count - 1;
        let good_hair = pool
            .iter()
            .filter(|edge| !edge.touches(0) && !edge.touches(last) && !tree.contains(edge))
            .count();
        let target = tree.len() + extra;

        match extend(&tree, target, &pool, Probability::ALWAYS, &mut rng(seed)) {
            Ok(extended) => {
                prop_assert!(extra <= good_hair);
                prop_assert!(
                    extended[tree.len()..]
                        .iter()
                        .all(|edge| !edge.touches(0) && !edge.touches(last))
                );
            }
            Err(err) => {
                prop_assert!(extra > good_hair);
                prop_assert_eq!(
                    err,
                    GraphError::InsufficientCandidates {
                        requested: target,
                        available: tree.len() + good_hair,
                    }
                );
            }
        }
    }
}
