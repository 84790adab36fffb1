//! Random planar graph synthesis.
//!
//! `meshweave-core` places nodes on an integer field with a minimum
//! separation, triangulates them to obtain planar candidate edges, joins the
//! nodes with a spanning tree, extends the tree to a target edge count while
//! steering how many dead ends survive, and randomly doubles edges. The
//! result serialises to Graphviz DOT through [`dot::GraphDocument`].
//!
//! Every stage takes its randomness explicitly; [`StreamFactory`] derives one
//! stream per stage from a single seed so runs are reproducible.
//!
//! # Examples
//! ```
//! use meshweave_core::GeneratorBuilder;
//!
//! let graph = GeneratorBuilder::new().with_seed(7).build()?.run()?;
//! let text = graph.document().to_string();
//! assert!(text.starts_with("// random seed 7\n"));
//! # Ok::<(), meshweave_core::GraphError>(())
//! ```

mod builder;
pub mod dot;
mod doubling;
mod error;
mod extension;
mod generator;
mod graph;
mod placement;
mod spanning;
mod streams;
mod triangulation;

#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{GeneratorBuilder, default_edge_target},
    doubling::double_edges,
    error::{GraphError, GraphErrorCode, Result},
    extension::{extend, leaf_nodes},
    generator::{GeneratedGraph, Generator},
    graph::{Attributes, Edge, Node, Position, Probability},
    placement::{DEFAULT_MAX_ATTEMPTS, PlacementConfig, place_nodes},
    spanning::{SpanningForest, spanning_forest, spanning_tree},
    streams::{GraphRng, PipelineStreams, Stage, StreamFactory},
    triangulation::{CandidatePool, Triangle, TriangulationMode, candidate_pool, triangulate},
};
