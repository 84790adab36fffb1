//! Growing a spanning tree toward a target edge count.
//!
//! Extra edges come from the candidate pool. Candidates touching a leaf of
//! the starting tree are "bad hair": choosing one may turn a dead end into a
//! through node. The hair bias is the probability that a bad-hair draw is
//! replaced by a good-hair edge, so high bias keeps more dead ends. A bias of
//! exactly one never selects bad hair at all.

mod pools;

use std::collections::{BTreeMap, BTreeSet, HashSet};

use rand::Rng;
use tracing::{debug, instrument};

use crate::{Edge, GraphError, Probability, Result};

use self::pools::HairPools;

/// Nodes with exactly one incident edge in `tree`.
#[must_use]
pub fn leaf_nodes(tree: &[Edge]) -> BTreeSet<usize> {
    let mut degree: BTreeMap<usize, usize> = BTreeMap::new();
    for edge in tree {
        *degree.entry(edge.a()).or_default() += 1;
        *degree.entry(edge.b()).or_default() += 1;
    }
    degree
        .into_iter()
        .filter_map(|(node, count)| (count == 1).then_some(node))
        .collect()
}

/// Extends `tree` to exactly `target` unique edges drawn from `candidates`.
///
/// The result lists the tree edges first, in their given order, followed by
/// the selected extension edges in selection order. Candidates already in
/// the tree, duplicates and self-loops are ignored.
///
/// # Errors
/// Returns [`GraphError::TargetBelowTree`] when `target` is smaller than the
/// number of unique tree edges, and [`GraphError::InsufficientCandidates`]
/// when the tree plus the usable candidates cannot reach `target`. With a
/// bias of one, bad-hair candidates are not usable.
///
/// # Examples
/// ```
/// use meshweave_core::{Edge, Probability, Stage, StreamFactory, extend};
///
/// let tree = vec![Edge::new(0, 1), Edge::new(0, 2)];
/// let pool = vec![Edge::new(0, 1), Edge::new(0, 2), Edge::new(1, 2)];
/// let mut rng = StreamFactory::new(0).stream(Stage::Extension);
/// let extended = extend(&tree, 3, &pool, Probability::NEVER, &mut rng)?;
/// assert_eq!(extended, vec![Edge::new(0, 1), Edge::new(0, 2), Edge::new(1, 2)]);
/// # Ok::<(), meshweave_core::GraphError>(())
/// ```
#[instrument(
    name = "extension.extend",
    err,
    skip(tree, candidates, rng),
    fields(tree = tree.len(), candidates = candidates.len(), hair_bias = hair_bias.get()),
)]
pub fn extend<R: Rng + ?Sized>(
    tree: &[Edge],
    target: usize,
    candidates: &[Edge],
    hair_bias: Probability,
    rng: &mut R,
) -> Result<Vec<Edge>> {
    let mut seen: HashSet<Edge> = HashSet::with_capacity(target);
    let mut extended: Vec<Edge> = Vec::with_capacity(target);
    for &edge in tree {
        if seen.insert(edge) {
            extended.push(edge);
        }
    }
    if target < extended.len() {
        return Err(GraphError::TargetBelowTree {
            target,
            tree: extended.len(),
        });
    }

    let leaves = leaf_nodes(&extended);
    let remaining: BTreeSet<Edge> = candidates
        .iter()
        .copied()
        .filter(|edge| !edge.is_loop() && !seen.contains(edge))
        .collect();
    let mut pools = HairPools::partition(remaining, &leaves);
    if hair_bias.is_certain() {
        pools.discard_bad();
    }

    let available = extended.len() + pools.len();
    if available < target {
        return Err(GraphError::InsufficientCandidates {
            requested: target,
            available,
        });
    }

    debug!(
        leaves = leaves.len(),
        good_hair = pools.good().len(),
        bad_hair = pools.bad().len(),
        "candidate pools partitioned"
    );

    while extended.len() < target {
        let edge = pools.draw(hair_bias, rng).ok_or(GraphError::InsufficientCandidates {
            requested: target,
            available,
        })?;
        extended.push(edge);
    }

    Ok(extended)
}

#[cfg(test)]
mod tests;
