//! Spanning-tree construction benchmarks.
//!
//! Measures Kruskal-style tree construction over shuffled triangulation
//! pools, separated from placement and triangulation.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use meshweave_benches::{
    error::BenchSetupError, params::SpanningBenchParams, source::CandidateSource,
};
use meshweave_core::spanning_forest;

/// Seed used for all benchmark inputs.
const SEED: u64 = 42;

/// Node counts to benchmark.
const NODE_COUNTS: &[usize] = &[100, 1_000, 5_000];

fn spanning_forest_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("spanning_forest");
    group.sample_size(30);

    for &node_count in NODE_COUNTS {
        let source = CandidateSource::generate(node_count, SEED)?;
        let params = SpanningBenchParams { node_count };

        group.bench_with_input(BenchmarkId::from_parameter(&params), &source, |b, input| {
            b.iter(|| spanning_forest(input.node_count(), input.candidates()));
        });
    }

    group.finish();
    Ok(())
}

fn spanning(c: &mut Criterion) {
    if let Err(err) = spanning_forest_impl(c) {
        panic!("spanning benchmark setup failed: {err}");
    }
}

criterion_group!(benches, spanning);
criterion_main!(benches);
