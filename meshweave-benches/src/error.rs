//! Benchmark setup error type.
//!
//! Lets setup functions propagate pipeline failures with `?` instead of
//! using `.expect()`.

use meshweave_core::GraphError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A pipeline stage failed while preparing inputs.
    #[error("graph preparation failed: {0}")]
    Graph(#[from] GraphError),
}
