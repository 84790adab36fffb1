//! Benchmark parameter types.

use std::fmt;

/// Parameters for a spanning-tree benchmark run.
#[derive(Clone, Debug)]
pub struct SpanningBenchParams {
    /// Number of nodes in the candidate pool.
    pub node_count: usize,
}

impl fmt::Display for SpanningBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.node_count)
    }
}

/// Parameters for an extension benchmark run.
#[derive(Clone, Debug)]
pub struct ExtensionBenchParams {
    /// Number of nodes in the candidate pool.
    pub node_count: usize,
    /// Hair bias applied while extending.
    pub hair_bias: f64,
}

impl fmt::Display for ExtensionBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},hair={:.2}", self.node_count, self.hair_bias)
    }
}
