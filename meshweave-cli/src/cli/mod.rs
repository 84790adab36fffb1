//! Command-line interface for generating random planar graphs.
//!
//! The `generate` command runs the full pipeline and writes a Graphviz file,
//! optionally with the candidate triangulation and spanning tree as extra
//! debug files.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, GenerateCommand, TriMode, default_seed,
    render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
