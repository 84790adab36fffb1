//! Benchmark support crate for meshweave.
//!
//! Provides seeded candidate pools and parameter types used by Criterion
//! benchmarks for the spanning-tree and extension stages.

pub mod error;
pub mod params;
pub mod source;
