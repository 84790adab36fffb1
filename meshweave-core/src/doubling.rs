//! Random edge doubling.
//!
//! Each edge independently gains a parallel copy with a fixed probability.
//! Copies follow all originals so the first half of the output always
//! matches the input.

use rand::Rng;
use tracing::{debug, instrument};

use crate::{Edge, Probability};

/// Returns `edges` followed by a copy of every edge whose Bernoulli trial
/// succeeded, in input order. One trial is drawn per edge.
///
/// # Examples
/// ```
/// use meshweave_core::{Edge, Probability, Stage, StreamFactory, double_edges};
///
/// let edges = vec![Edge::new(0, 1), Edge::new(1, 2)];
/// let mut rng = StreamFactory::new(1).stream(Stage::Doubling);
/// let doubled = double_edges(&edges, Probability::ALWAYS, &mut rng);
/// assert_eq!(doubled, vec![edges[0], edges[1], edges[0], edges[1]]);
/// ```
#[instrument(
    name = "doubling.double_edges",
    skip(edges, rng),
    fields(edges = edges.len(), probability = probability.get()),
)]
pub fn double_edges<R: Rng + ?Sized>(
    edges: &[Edge],
    probability: Probability,
    rng: &mut R,
) -> Vec<Edge> {
    let copies: Vec<Edge> = edges
        .iter()
        .copied()
        .filter(|_| rng.gen_bool(probability.get()))
        .collect();
    debug!(doubled = copies.len(), "edge copies drawn");

    let mut doubled = Vec::with_capacity(edges.len() + copies.len());
    doubled.extend_from_slice(edges);
    doubled.extend(copies);
    doubled
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::test_utils::{edges, rng, suite_proptest_config};

    #[test]
    fn zero_probability_is_identity() {
        let input = edges(&[(0, 1), (1, 2), (0, 2)]);
        assert_eq!(double_edges(&input, Probability::NEVER, &mut rng(5)), input);
    }

    #[test]
    fn certain_probability_appends_every_copy_in_order() {
        let input = edges(&[(0, 1), (1, 2), (0, 2)]);
        let doubled = double_edges(&input, Probability::ALWAYS, &mut rng(5));
        assert_eq!(doubled, edges(&[(0, 1), (1, 2), (0, 2), (0, 1), (1, 2), (0, 2)]));
    }

    #[rstest]
    #[case(0.0)]
    #[case(0.5)]
    #[case(1.0)]
    fn empty_input_stays_empty(#[case] value: f64) {
        let probability = Probability::new(value).expect("test probability is in range");
        assert!(double_edges(&[], probability, &mut rng(0)).is_empty());
    }

    proptest! {
        #![proptest_config(suite_proptest_config(64))]

        #[test]
        fn copies_are_an_ordered_subsequence_of_the_input(
            seed in any::<u64>(),
            pairs in proptest::collection::vec((0_usize..20, 0_usize..20), 0..30),
            value in 0.0_f64..=1.0,
        ) {
            let input = edges(&pairs);
            let probability = Probability::new(value).expect("strategy stays in range");
            let doubled = double_edges(&input, probability, &mut rng(seed));

            prop_assert!(doubled.len() >= input.len());
            prop_assert!(doubled.len() <= input.len() * 2);
            prop_assert_eq!(&doubled[..input.len()], input.as_slice());

            let mut remaining = input.iter();
            for copy in &doubled[input.len()..] {
                prop_assert!(remaining.any(|edge| edge == copy));
            }
        }
    }
}
