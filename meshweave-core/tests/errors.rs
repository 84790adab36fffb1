//! Stable error codes exposed by the core library.

use meshweave_core::{GraphError, GraphErrorCode};
use rstest::rstest;

#[rstest]
#[case(
    GraphError::PlacementExhausted { placed: 1, requested: 3, attempts: 10 },
    GraphErrorCode::PlacementExhausted,
    "GRAPH_PLACEMENT_EXHAUSTED",
)]
#[case(
    GraphError::InsufficientCandidates { requested: 9, available: 4 },
    GraphErrorCode::InsufficientCandidates,
    "GRAPH_INSUFFICIENT_CANDIDATES",
)]
#[case(
    GraphError::DisconnectedCandidatePool { accepted: 2, required: 3, components: 2 },
    GraphErrorCode::DisconnectedCandidatePool,
    "GRAPH_DISCONNECTED_CANDIDATE_POOL",
)]
#[case(
    GraphError::InvalidConfiguration { parameter: "hair", reason: "out of range".to_owned() },
    GraphErrorCode::InvalidConfiguration,
    "GRAPH_INVALID_CONFIGURATION",
)]
#[case(GraphError::EmptyGraph, GraphErrorCode::EmptyGraph, "GRAPH_EMPTY")]
#[case(
    GraphError::InvalidNodeId { node: 5, node_count: 3 },
    GraphErrorCode::InvalidNodeId,
    "GRAPH_INVALID_NODE_ID",
)]
#[case(
    GraphError::TargetBelowTree { target: 1, tree: 2 },
    GraphErrorCode::TargetBelowTree,
    "GRAPH_TARGET_BELOW_TREE",
)]
#[case(
    GraphError::Triangulation { reason: "NaN coordinate".to_owned() },
    GraphErrorCode::Triangulation,
    "GRAPH_TRIANGULATION_FAILED",
)]
fn returns_expected_graph_code(
    #[case] error: GraphError,
    #[case] expected: GraphErrorCode,
    #[case] text: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), text);
    assert_eq!(error.code().to_string(), text);
}

#[rstest]
#[case(
    GraphError::PlacementExhausted { placed: 1, requested: 3, attempts: 10 },
    "placed 1 of 3 nodes before 10 consecutive placement attempts were rejected",
)]
#[case(
    GraphError::InsufficientCandidates { requested: 9, available: 4 },
    "requested 9 edges but only 4 unique edges are available",
)]
#[case(
    GraphError::InvalidConfiguration { parameter: "width", reason: "must be positive".to_owned() },
    "invalid width: must be positive",
)]
fn messages_name_the_quantities(#[case] error: GraphError, #[case] expected: &str) {
    assert_eq!(error.to_string(), expected);
}
