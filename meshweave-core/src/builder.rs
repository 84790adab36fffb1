//! Builder for configuring a [`Generator`] run.
//!
//! Collects the field, count and probability parameters, validates them in
//! one place and resolves the edge target before any stage runs.

use crate::{
    GraphError, Probability, Result,
    generator::Generator,
    placement::{DEFAULT_MAX_ATTEMPTS, PlacementConfig},
    triangulation::TriangulationMode,
};

/// Edge count used when none is requested: `floor(1.25 * nodes)`, raised to
/// the `nodes - 1` edges a spanning tree needs.
///
/// # Examples
/// ```
/// use meshweave_core::default_edge_target;
///
/// assert_eq!(default_edge_target(10), 12);
/// assert_eq!(default_edge_target(3), 3);
/// assert_eq!(default_edge_target(1), 1);
/// ```
#[must_use]
pub const fn default_edge_target(nodes: usize) -> usize {
    resolve_edge_target(nodes, nodes.saturating_add(nodes / 4))
}

const fn resolve_edge_target(nodes: usize, requested: usize) -> usize {
    let tree = nodes.saturating_sub(1);
    if requested < tree { tree } else { requested }
}

/// Configures and constructs [`Generator`] instances.
///
/// # Examples
/// ```
/// use meshweave_core::{GeneratorBuilder, TriangulationMode};
///
/// let generator = GeneratorBuilder::new()
///     .with_nodes(12)
///     .with_seed(5)
///     .with_triangulation_mode(TriangulationMode::Delaunay)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(generator.edge_target(), 15);
/// assert_eq!(generator.seed(), 5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorBuilder {
    width: u32,
    height: u32,
    nodes: usize,
    edges: Option<usize>,
    radius: u32,
    double: f64,
    hair: f64,
    seed: u64,
    triangulation_mode: TriangulationMode,
    max_attempts: usize,
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self {
            width: 320,
            height: 240,
            nodes: 10,
            edges: None,
            radius: 40,
            double: 0.1,
            hair: 0.0,
            seed: 0,
            triangulation_mode: TriangulationMode::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GeneratorBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use meshweave_core::GeneratorBuilder;
    ///
    /// let builder = GeneratorBuilder::new();
    /// assert_eq!((builder.width(), builder.height()), (320, 240));
    /// assert_eq!(builder.nodes(), 10);
    /// assert_eq!(builder.edges(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the field width.
    #[must_use]
    pub const fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Overrides the field height.
    #[must_use]
    pub const fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Overrides the number of nodes to place.
    #[must_use]
    pub const fn with_nodes(mut self, nodes: usize) -> Self {
        self.nodes = nodes;
        self
    }

    /// Requests an edge count before doubling. `None` selects
    /// [`default_edge_target`]. Requests below `nodes - 1` are raised.
    ///
    /// # Examples
    /// ```
    /// use meshweave_core::GeneratorBuilder;
    ///
    /// let generator = GeneratorBuilder::new()
    ///     .with_nodes(8)
    ///     .with_edges(Some(2))
    ///     .build()
    ///     .expect("builder configuration is valid");
    /// assert_eq!(generator.edge_target(), 7);
    /// ```
    #[must_use]
    pub const fn with_edges(mut self, edges: Option<usize>) -> Self {
        self.edges = edges;
        self
    }

    /// Overrides the minimum node separation.
    #[must_use]
    pub const fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Overrides the per-edge doubling probability.
    #[must_use]
    pub const fn with_double(mut self, double: f64) -> Self {
        self.double = double;
        self
    }

    /// Overrides the hair bias used during extension.
    #[must_use]
    pub const fn with_hair(mut self, hair: f64) -> Self {
        self.hair = hair;
        self
    }

    /// Overrides the run seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Selects how the candidate pool is triangulated.
    #[must_use]
    pub const fn with_triangulation_mode(mut self, mode: TriangulationMode) -> Self {
        self.triangulation_mode = mode;
        self
    }

    /// Overrides the consecutive rejection budget for placement.
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Configured field width.
    #[must_use]
    #[rustfmt::skip]
    pub const fn width(&self) -> u32 { self.width }

    /// Configured field height.
    #[must_use]
    #[rustfmt::skip]
    pub const fn height(&self) -> u32 { self.height }

    /// Configured node count.
    #[must_use]
    #[rustfmt::skip]
    pub const fn nodes(&self) -> usize { self.nodes }

    /// Requested edge count, if any.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edges(&self) -> Option<usize> { self.edges }

    /// Configured minimum separation.
    #[must_use]
    #[rustfmt::skip]
    pub const fn radius(&self) -> u32 { self.radius }

    /// Configured doubling probability, unvalidated.
    #[must_use]
    #[rustfmt::skip]
    pub const fn double(&self) -> f64 { self.double }

    /// Configured hair bias, unvalidated.
    #[must_use]
    #[rustfmt::skip]
    pub const fn hair(&self) -> f64 { self.hair }

    /// Configured seed.
    #[must_use]
    #[rustfmt::skip]
    pub const fn seed(&self) -> u64 { self.seed }

    /// Configured triangulation mode.
    #[must_use]
    #[rustfmt::skip]
    pub const fn triangulation_mode(&self) -> TriangulationMode { self.triangulation_mode }

    /// Configured placement budget.
    #[must_use]
    #[rustfmt::skip]
    pub const fn max_attempts(&self) -> usize { self.max_attempts }

    /// Validates the configuration and constructs a [`Generator`].
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidConfiguration`] naming the first
    /// offending parameter: a zero width, height, node count, edge count or
    /// placement budget, or a probability outside `[0, 1]`.
    ///
    /// # Examples
    /// ```
    /// use meshweave_core::{GeneratorBuilder, GraphErrorCode};
    ///
    /// let err = GeneratorBuilder::new().with_hair(1.5).build().unwrap_err();
    /// assert_eq!(err.code(), GraphErrorCode::InvalidConfiguration);
    /// ```
    pub fn build(self) -> Result<Generator> {
        if self.nodes == 0 {
            return Err(GraphError::invalid("nodes", "at least one node is required"));
        }
        if self.edges == Some(0) {
            return Err(GraphError::invalid("edges", "edge count must be positive"));
        }
        let double = Probability::for_parameter("double", self.double)?;
        let hair = Probability::for_parameter("hair", self.hair)?;
        let placement = PlacementConfig::new(self.nodes, self.width, self.height, self.radius)
            .with_max_attempts(self.max_attempts);
        placement.validate()?;

        let edge_target = match self.edges {
            Some(requested) => resolve_edge_target(self.nodes, requested),
            None => default_edge_target(self.nodes),
        };

        Ok(Generator::new(
            placement,
            edge_target,
            double,
            hair,
            self.seed,
            self.triangulation_mode,
        ))
    }
}
