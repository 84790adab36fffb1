//! End-to-end graph synthesis.
//!
//! [`Generator::run`] chains the stages in a fixed order (placement,
//! triangulation, spanning tree, extension, doubling), giving each its own
//! stream from [`StreamFactory`]. The same generator always produces the same
//! [`GeneratedGraph`].

use rand::seq::SliceRandom;
use tracing::{info, instrument};

use crate::{
    Edge, Node, Probability, Result,
    dot::GraphDocument,
    doubling::double_edges,
    extension::extend,
    placement::{PlacementConfig, place_nodes},
    spanning::spanning_tree,
    streams::StreamFactory,
    triangulation::{CandidatePool, TriangulationMode, candidate_pool, triangulate},
};

/// A validated pipeline configuration, built by
/// [`GeneratorBuilder`](crate::GeneratorBuilder).
#[derive(Clone, Debug, PartialEq)]
pub struct Generator {
    placement: PlacementConfig,
    edge_target: usize,
    double: Probability,
    hair: Probability,
    seed: u64,
    triangulation_mode: TriangulationMode,
}

impl Generator {
    pub(crate) const fn new(
        placement: PlacementConfig,
        edge_target: usize,
        double: Probability,
        hair: Probability,
        seed: u64,
        triangulation_mode: TriangulationMode,
    ) -> Self {
        Self {
            placement,
            edge_target,
            double,
            hair,
            seed,
            triangulation_mode,
        }
    }

    /// Node placement parameters.
    #[must_use]
    #[rustfmt::skip]
    pub const fn placement(&self) -> PlacementConfig { self.placement }

    /// Unique edges requested before doubling.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_target(&self) -> usize { self.edge_target }

    /// Per-edge doubling probability.
    #[must_use]
    #[rustfmt::skip]
    pub const fn double(&self) -> Probability { self.double }

    /// Hair bias applied during extension.
    #[must_use]
    #[rustfmt::skip]
    pub const fn hair(&self) -> Probability { self.hair }

    /// Run seed.
    #[must_use]
    #[rustfmt::skip]
    pub const fn seed(&self) -> u64 { self.seed }

    /// Triangulation strategy.
    #[must_use]
    #[rustfmt::skip]
    pub const fn triangulation_mode(&self) -> TriangulationMode { self.triangulation_mode }

    /// Runs every stage and returns the final graph with its intermediates.
    ///
    /// Candidate edges are shuffled with the spanning stream before the tree
    /// is built, so the tree shape depends on the seed.
    ///
    /// # Errors
    /// Propagates the first stage failure: [`GraphError::PlacementExhausted`],
    /// [`GraphError::Triangulation`], [`GraphError::DisconnectedCandidatePool`]
    /// or [`GraphError::InsufficientCandidates`].
    ///
    /// [`GraphError::PlacementExhausted`]: crate::GraphError::PlacementExhausted
    /// [`GraphError::Triangulation`]: crate::GraphError::Triangulation
    /// [`GraphError::DisconnectedCandidatePool`]: crate::GraphError::DisconnectedCandidatePool
    /// [`GraphError::InsufficientCandidates`]: crate::GraphError::InsufficientCandidates
    ///
    /// # Examples
    /// ```
    /// use meshweave_core::GeneratorBuilder;
    ///
    /// let generator = GeneratorBuilder::new().with_seed(2024).build()?;
    /// let graph = generator.run()?;
    /// assert_eq!(graph.nodes().len(), 10);
    /// assert_eq!(graph.tree().len(), 9);
    /// assert_eq!(graph.extended().len(), generator.edge_target());
    /// assert!(graph.edges().len() >= graph.extended().len());
    /// # Ok::<(), meshweave_core::GraphError>(())
    /// ```
    #[instrument(
        name = "generator.run",
        err,
        skip(self),
        fields(
            seed = self.seed,
            nodes = self.placement.count,
            edge_target = self.edge_target,
            mode = %self.triangulation_mode,
        ),
    )]
    pub fn run(&self) -> Result<GeneratedGraph> {
        let mut streams = StreamFactory::new(self.seed).streams();

        let nodes = place_nodes(&self.placement, &mut streams.placement)?;
        let triangles = triangulate(&nodes, self.triangulation_mode, &mut streams.triangulation)?;
        let candidates = candidate_pool(&triangles);

        let mut order = candidates.to_vec();
        order.shuffle(&mut streams.spanning);
        let tree = spanning_tree(nodes.len(), &order)?;

        let extended = extend(
            &tree,
            self.edge_target,
            &order,
            self.hair,
            &mut streams.extension,
        )?;
        let edges = double_edges(&extended, self.double, &mut streams.doubling);

        info!(
            nodes = nodes.len(),
            candidates = candidates.len(),
            tree = tree.len(),
            extended = extended.len(),
            edges = edges.len(),
            "graph generated"
        );

        Ok(GeneratedGraph {
            seed: self.seed,
            nodes,
            candidates,
            tree,
            extended,
            edges,
        })
    }
}

/// Output of [`Generator::run`], including the intermediate edge sets.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedGraph {
    seed: u64,
    nodes: Vec<Node>,
    candidates: CandidatePool,
    tree: Vec<Edge>,
    extended: Vec<Edge>,
    edges: Vec<Edge>,
}

impl GeneratedGraph {
    /// Seed the graph was generated from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn seed(&self) -> u64 { self.seed }

    /// Placed nodes in index order.
    #[must_use]
    #[rustfmt::skip]
    pub fn nodes(&self) -> &[Node] { &self.nodes }

    /// Deduplicated triangulation edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn candidates(&self) -> &CandidatePool { &self.candidates }

    /// Spanning tree over the candidates.
    #[must_use]
    #[rustfmt::skip]
    pub fn tree(&self) -> &[Edge] { &self.tree }

    /// Tree plus extension edges, before doubling.
    #[must_use]
    #[rustfmt::skip]
    pub fn extended(&self) -> &[Edge] { &self.extended }

    /// Final edges, doubled copies included.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Number of edges added by doubling.
    #[must_use]
    pub fn doubled(&self) -> usize {
        self.edges.len().saturating_sub(self.extended.len())
    }

    /// Document holding the final graph.
    #[must_use]
    pub fn document(&self) -> GraphDocument<'_> {
        GraphDocument::new(self.seed, &self.nodes).with_edges(self.edges.iter().copied())
    }

    /// Document holding every candidate edge, in canonical order.
    #[must_use]
    pub fn candidates_document(&self) -> GraphDocument<'_> {
        GraphDocument::new(self.seed, &self.nodes).with_edges(self.candidates.iter().copied())
    }

    /// Document holding only the spanning tree.
    #[must_use]
    pub fn tree_document(&self) -> GraphDocument<'_> {
        GraphDocument::new(self.seed, &self.nodes).with_edges(self.tree.iter().copied())
    }
}
