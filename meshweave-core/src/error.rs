//! Error types for the meshweave core library.
//!
//! Every pipeline stage reports failures through [`GraphError`]. Each variant
//! maps to a stable [`GraphErrorCode`] so the CLI and log consumers can match
//! on failures without parsing messages.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced by the graph-synthesis pipeline.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// Node placement ran out of attempts before satisfying the separation
    /// constraint for every requested node.
    #[error(
        "placed {placed} of {requested} nodes before {attempts} consecutive placement attempts were rejected"
    )]
    PlacementExhausted {
        /// Nodes accepted before the budget ran out.
        placed: usize,
        /// Nodes requested by the caller.
        requested: usize,
        /// Consecutive rejected draws that exhausted the budget.
        attempts: usize,
    },
    /// Edge extension was asked for more unique edges than are available.
    #[error("requested {requested} edges but only {available} unique edges are available")]
    InsufficientCandidates {
        /// Target edge count.
        requested: usize,
        /// Tree edges plus usable candidate edges.
        available: usize,
    },
    /// The candidate pool does not connect every node.
    #[error(
        "candidate edges connect only {accepted} of the {required} tree edges required ({components} components remain)"
    )]
    DisconnectedCandidatePool {
        /// Tree edges accepted before the pool was exhausted.
        accepted: usize,
        /// Tree edges required to connect all nodes.
        required: usize,
        /// Number of partitions left in the forest.
        components: usize,
    },
    /// A configuration value was outside its accepted range.
    #[error("invalid {parameter}: {reason}")]
    InvalidConfiguration {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Human-readable explanation.
        reason: String,
    },
    /// A spanning structure was requested over zero nodes.
    #[error("cannot build a spanning tree over an empty graph")]
    EmptyGraph,
    /// An edge referenced a node index outside the graph.
    #[error("edge references node {node}, but node_count is {node_count}")]
    InvalidNodeId {
        /// The invalid node index.
        node: usize,
        /// The number of nodes in the graph.
        node_count: usize,
    },
    /// The target edge count is smaller than the tree being extended.
    #[error("target of {target} edges is smaller than the {tree} tree edges it must contain")]
    TargetBelowTree {
        /// Requested edge count.
        target: usize,
        /// Number of tree edges supplied.
        tree: usize,
    },
    /// The triangulation engine rejected a node position.
    #[error("triangulation failed: {reason}")]
    Triangulation {
        /// Description reported by the triangulator.
        reason: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// Node placement ran out of attempts.
        PlacementExhausted => PlacementExhausted { .. } => "GRAPH_PLACEMENT_EXHAUSTED",
        /// Edge extension lacked candidate edges.
        InsufficientCandidates => InsufficientCandidates { .. } => "GRAPH_INSUFFICIENT_CANDIDATES",
        /// The candidate pool does not connect every node.
        DisconnectedCandidatePool => DisconnectedCandidatePool { .. } => "GRAPH_DISCONNECTED_CANDIDATE_POOL",
        /// A configuration value was outside its accepted range.
        InvalidConfiguration => InvalidConfiguration { .. } => "GRAPH_INVALID_CONFIGURATION",
        /// A spanning structure was requested over zero nodes.
        EmptyGraph => EmptyGraph => "GRAPH_EMPTY",
        /// An edge referenced a node index outside the graph.
        InvalidNodeId => InvalidNodeId { .. } => "GRAPH_INVALID_NODE_ID",
        /// The target edge count is smaller than the tree.
        TargetBelowTree => TargetBelowTree { .. } => "GRAPH_TARGET_BELOW_TREE",
        /// The triangulation engine rejected the input.
        Triangulation => Triangulation { .. } => "GRAPH_TRIANGULATION_FAILED",
    }
}

impl GraphError {
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            parameter,
            reason: reason.into(),
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
