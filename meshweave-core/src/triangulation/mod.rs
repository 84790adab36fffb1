//! Candidate edge pool derived from a planar triangulation.
//!
//! The triangulation itself is delegated to [`spade`]. This module maps node
//! positions into triangulator vertices, reads back triangles as node-index
//! triples, and flattens them into the deduplicated [`CandidatePool`] the
//! spanning-tree and extension stages draw from.

use std::collections::BTreeSet;
use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use spade::{
    ConstrainedDelaunayTriangulation, DelaunayTriangulation, HasPosition, InsertionError, Point2,
    Triangulation,
};
use tracing::{debug, instrument};

use crate::{Edge, GraphError, Node, Result};

/// Triangulation strategy used to derive the candidate pool.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum TriangulationMode {
    /// Delaunay triangulation built in a single bulk load.
    Delaunay,
    /// Delaunay triangulation built by inserting nodes in a random order.
    /// Cocircular node sets may triangulate differently per seed.
    Incremental,
    /// Constrained Delaunay triangulation without Steiner points.
    #[default]
    Conform,
}

impl TriangulationMode {
    /// Stable lowercase label, as accepted on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Delaunay => "delaunay",
            Self::Incremental => "incremental",
            Self::Conform => "conform",
        }
    }
}

impl fmt::Display for TriangulationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three node indices sharing a face, stored in ascending order.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Triangle([usize; 3]);

impl Triangle {
    /// Creates a triangle, sorting the corners.
    #[must_use]
    pub fn new(mut corners: [usize; 3]) -> Self {
        corners.sort_unstable();
        Self(corners)
    }

    /// Corner indices in ascending order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn corners(&self) -> [usize; 3] { self.0 }

    /// The three sides of the triangle.
    #[must_use]
    pub const fn edges(&self) -> [Edge; 3] {
        let [a, b, c] = self.0;
        [Edge::new(a, b), Edge::new(b, c), Edge::new(a, c)]
    }
}

/// Unique candidate edges, iterated in canonical order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CandidatePool {
    edges: BTreeSet<Edge>,
}

impl CandidatePool {
    /// Number of unique edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when the pool holds no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns `true` when `edge` is in the pool.
    #[must_use]
    pub fn contains(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    /// Iterates the edges in canonical order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    /// Copies the edges into a `Vec` in canonical order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Edge> {
        self.edges.iter().copied().collect()
    }
}

impl FromIterator<Edge> for CandidatePool {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().filter(|edge| !edge.is_loop()).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CandidatePool {
    type Item = &'a Edge;
    type IntoIter = std::collections::btree_set::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

/// Flattens triangles into their deduplicated sides.
#[must_use]
pub fn candidate_pool(triangles: &[Triangle]) -> CandidatePool {
    triangles.iter().flat_map(Triangle::edges).collect()
}

/// Triangulator vertex remembering which node it came from.
#[derive(Clone, Copy, Debug)]
struct Site {
    node: usize,
    position: Point2<f64>,
}

impl HasPosition for Site {
    type Scalar = f64;

    fn position(&self) -> Point2<f64> {
        self.position
    }
}

/// Triangulates `nodes` and returns the faces in canonical order.
///
/// Only [`TriangulationMode::Incremental`] consumes randomness. Nodes sharing
/// a position collapse into a single triangulator vertex, leaving the
/// duplicates without any incident edge.
///
/// # Errors
/// Returns [`GraphError::Triangulation`] when the triangulator rejects a
/// vertex.
///
/// # Examples
/// ```
/// use meshweave_core::{Node, Position, Stage, StreamFactory, TriangulationMode, triangulate};
///
/// let nodes: Vec<Node> = [(0, 0), (10, 0), (0, 10)]
///     .into_iter()
///     .map(|(x, y)| Node::new(Position::new(x, y)))
///     .collect();
/// let mut rng = StreamFactory::new(1).stream(Stage::Triangulation);
/// let triangles = triangulate(&nodes, TriangulationMode::Delaunay, &mut rng)?;
/// assert_eq!(triangles.len(), 1);
/// assert_eq!(triangles[0].corners(), [0, 1, 2]);
/// # Ok::<(), meshweave_core::GraphError>(())
/// ```
#[instrument(
    name = "triangulation.triangulate",
    err,
    skip(nodes, rng),
    fields(nodes = nodes.len(), mode = %mode),
)]
pub fn triangulate<R: Rng + ?Sized>(
    nodes: &[Node],
    mode: TriangulationMode,
    rng: &mut R,
) -> Result<Vec<Triangle>> {
    let sites: Vec<Site> = nodes
        .iter()
        .enumerate()
        .map(|(node, placed)| {
            let position = placed.position();
            Site {
                node,
                position: Point2::new(f64::from(position.x), f64::from(position.y)),
            }
        })
        .collect();

    let mut triangles = match mode {
        TriangulationMode::Delaunay => {
            let triangulation: DelaunayTriangulation<Site> =
                DelaunayTriangulation::bulk_load(sites).map_err(insertion_failed)?;
            collect_triangles(&triangulation)
        }
        TriangulationMode::Incremental => {
            let mut order = sites;
            order.shuffle(rng);
            let mut triangulation: DelaunayTriangulation<Site> = DelaunayTriangulation::new();
            for site in order {
                triangulation.insert(site).map_err(insertion_failed)?;
            }
            collect_triangles(&triangulation)
        }
        TriangulationMode::Conform => {
            let triangulation: ConstrainedDelaunayTriangulation<Site> =
                ConstrainedDelaunayTriangulation::bulk_load(sites).map_err(insertion_failed)?;
            collect_triangles(&triangulation)
        }
    };

    triangles.sort_unstable();
    debug!(triangles = triangles.len(), "triangulation completed");
    Ok(triangles)
}

fn collect_triangles<T>(triangulation: &T) -> Vec<Triangle>
where
    T: Triangulation<Vertex = Site>,
{
    triangulation
        .inner_faces()
        .map(|face| {
            let [a, b, c] = face.vertices();
            Triangle::new([a.data().node, b.data().node, c.data().node])
        })
        .collect()
}

fn insertion_failed(error: InsertionError) -> GraphError {
    GraphError::Triangulation {
        reason: format!("{error:?}"),
    }
}
