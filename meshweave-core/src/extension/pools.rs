//! Disjoint working pools for hair-biased edge selection.
//!
//! Every unselected candidate lives in exactly one of the two pools and is
//! removed from it when chosen, so an edge can never be offered twice.

use std::collections::BTreeSet;

use rand::Rng;

use crate::{Edge, Probability};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(super) struct HairPools {
    /// Edges touching no starting leaf.
    good: Vec<Edge>,
    /// Edges touching at least one starting leaf.
    bad: Vec<Edge>,
}

impl HairPools {
    /// Splits `candidates` by whether they touch a node in `leaves`.
    pub(super) fn partition(
        candidates: impl IntoIterator<Item = Edge>,
        leaves: &BTreeSet<usize>,
    ) -> Self {
        let (bad, good) = candidates
            .into_iter()
            .partition(|edge: &Edge| leaves.contains(&edge.a()) || leaves.contains(&edge.b()));
        Self { good, bad }
    }

    pub(super) fn discard_bad(&mut self) {
        self.bad.clear();
    }

    pub(super) fn len(&self) -> usize {
        self.good.len() + self.bad.len()
    }

    pub(super) fn good(&self) -> &[Edge] {
        &self.good
    }

    pub(super) fn bad(&self) -> &[Edge] {
        &self.bad
    }

    /// Draws uniformly from both pools. A bad-hair draw is swapped, with
    /// probability `bias`, for a uniform good-hair edge; the bad edge then
    /// stays available. Returns `None` once both pools are empty.
    pub(super) fn draw<R: Rng + ?Sized>(&mut self, bias: Probability, rng: &mut R) -> Option<Edge> {
        let total = self.len();
        if total == 0 {
            return None;
        }

        let index = rng.gen_range(0..total);
        if index >= self.bad.len() {
            return Some(self.good.swap_remove(index - self.bad.len()));
        }

        if !self.good.is_empty() && rng.gen_bool(bias.get()) {
            let replacement = rng.gen_range(0..self.good.len());
            return Some(self.good.swap_remove(replacement));
        }
        Some(self.bad.swap_remove(index))
    }
}
