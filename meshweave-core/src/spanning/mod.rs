//! Spanning-tree construction over the candidate pool.
//!
//! Kruskal without weights: candidates are considered in the order given and
//! an edge is kept whenever it joins two different partitions of a
//! [`DisjointSet`]. The scan stops as soon as `node_count - 1` edges have been
//! accepted.

mod disjoint_set;

use tracing::{debug, instrument};

use crate::{Edge, GraphError, Result};

use self::disjoint_set::DisjointSet;

/// Output of [`spanning_forest`]: accepted edges plus the number of
/// partitions they leave.
///
/// When the candidates connect every node the forest is a spanning tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningForest {
    edges: Vec<Edge>,
    node_count: usize,
    component_count: usize,
}

impl SpanningForest {
    /// Accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Number of nodes the forest spans.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> usize { self.node_count }

    /// Number of connected components left.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Consumes the forest, returning the edges if it is a tree.
    ///
    /// # Errors
    /// Returns [`GraphError::DisconnectedCandidatePool`] when more than one
    /// component remains.
    pub fn into_tree(self) -> Result<Vec<Edge>> {
        if self.is_tree() {
            return Ok(self.edges);
        }
        Err(GraphError::DisconnectedCandidatePool {
            accepted: self.edges.len(),
            required: self.node_count.saturating_sub(1),
            components: self.component_count,
        })
    }
}

/// Reduces `candidates` to a spanning forest over `node_count` nodes.
///
/// Self-loops are skipped. Candidates after the point where the forest
/// becomes a tree are never inspected.
///
/// # Errors
/// Returns [`GraphError::EmptyGraph`] when `node_count == 0` and
/// [`GraphError::InvalidNodeId`] when an inspected edge references a node
/// outside `0..node_count`.
#[instrument(
    name = "spanning.spanning_forest",
    err,
    skip(candidates),
    fields(candidates = candidates.len()),
)]
pub fn spanning_forest(node_count: usize, candidates: &[Edge]) -> Result<SpanningForest> {
    if node_count == 0 {
        return Err(GraphError::EmptyGraph);
    }

    let required = node_count - 1;
    let mut partitions = DisjointSet::new(node_count);
    let mut edges = Vec::with_capacity(required);

    for &edge in candidates {
        if edges.len() == required {
            break;
        }
        validate_edge(edge, node_count)?;
        if partitions.union(edge.a(), edge.b()) {
            edges.push(edge);
        }
    }

    debug!(
        accepted = edges.len(),
        components = partitions.partitions(),
        "spanning forest built"
    );
    Ok(SpanningForest {
        edges,
        node_count,
        component_count: partitions.partitions(),
    })
}

/// Builds a spanning tree over `node_count` nodes from `candidates`.
///
/// # Errors
/// Everything [`spanning_forest`] reports, plus
/// [`GraphError::DisconnectedCandidatePool`] when the candidates leave more
/// than one component.
///
/// # Examples
/// ```
/// use meshweave_core::{Edge, spanning_tree};
///
/// let pool: Vec<Edge> = [(0, 1), (0, 2), (1, 2), (0, 3), (1, 3), (2, 3)]
///     .into_iter()
///     .map(Edge::from)
///     .collect();
/// let tree = spanning_tree(4, &pool)?;
/// assert_eq!(tree, vec![Edge::new(0, 1), Edge::new(0, 2), Edge::new(0, 3)]);
/// # Ok::<(), meshweave_core::GraphError>(())
/// ```
pub fn spanning_tree(node_count: usize, candidates: &[Edge]) -> Result<Vec<Edge>> {
    spanning_forest(node_count, candidates)?.into_tree()
}

fn validate_edge(edge: Edge, node_count: usize) -> Result<()> {
    // Canonical edges keep the larger endpoint in `b`.
    if edge.b() >= node_count {
        return Err(GraphError::InvalidNodeId {
            node: edge.b(),
            node_count,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests;
