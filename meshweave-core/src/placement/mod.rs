//! Rejection-sampled node placement.
//!
//! Candidates are drawn uniformly from the integer field
//! `[0, width) x [0, height)` and kept only when they are at least
//! `min_separation` away from every node accepted so far. Accepted nodes keep
//! their draw order, which becomes their index.

use rand::Rng;
use tracing::{debug, instrument};

use crate::{GraphError, Node, Position, Result};

/// Default number of consecutive rejections tolerated before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100_000;

/// Parameters for [`place_nodes`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PlacementConfig {
    /// Number of nodes to place.
    pub count: usize,
    /// Field width; x coordinates fall in `[0, width)`.
    pub width: u32,
    /// Field height; y coordinates fall in `[0, height)`.
    pub height: u32,
    /// Minimum Euclidean distance between any two nodes.
    pub min_separation: u32,
    /// Consecutive rejected draws tolerated before failing. The counter
    /// resets whenever a node is accepted.
    pub max_attempts: usize,
}

impl PlacementConfig {
    /// Configuration with [`DEFAULT_MAX_ATTEMPTS`].
    #[must_use]
    pub const fn new(count: usize, width: u32, height: u32, min_separation: u32) -> Self {
        Self {
            count,
            width,
            height,
            min_separation,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides the rejection budget.
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(GraphError::invalid("width", "field width must be positive"));
        }
        if self.height == 0 {
            return Err(GraphError::invalid("height", "field height must be positive"));
        }
        if self.max_attempts == 0 {
            return Err(GraphError::invalid(
                "max_attempts",
                "at least one placement attempt is required",
            ));
        }
        Ok(())
    }
}

/// Places `config.count` nodes using `rng`.
///
/// # Errors
/// Returns [`GraphError::InvalidConfiguration`] for a zero-sized field or a
/// zero attempt budget, and [`GraphError::PlacementExhausted`] when
/// `config.max_attempts` consecutive draws are rejected.
///
/// # Examples
/// ```
/// use meshweave_core::{PlacementConfig, Stage, StreamFactory, place_nodes};
///
/// let mut rng = StreamFactory::new(3).stream(Stage::Placement);
/// let nodes = place_nodes(&PlacementConfig::new(12, 320, 240, 20), &mut rng)?;
/// assert_eq!(nodes.len(), 12);
/// # Ok::<(), meshweave_core::GraphError>(())
/// ```
#[instrument(
    name = "placement.place_nodes",
    err,
    skip(config, rng),
    fields(
        count = config.count,
        width = config.width,
        height = config.height,
        min_separation = config.min_separation,
    ),
)]
pub fn place_nodes<R: Rng + ?Sized>(config: &PlacementConfig, rng: &mut R) -> Result<Vec<Node>> {
    config.validate()?;

    let min_squared = u128::from(config.min_separation).pow(2);
    let mut positions: Vec<Position> = Vec::with_capacity(config.count);
    let mut rejected = 0_usize;
    let mut draws = 0_usize;

    while positions.len() < config.count {
        let candidate = Position::new(
            rng.gen_range(0..config.width),
            rng.gen_range(0..config.height),
        );
        draws = draws.saturating_add(1);

        if is_separated(candidate, &positions, min_squared) {
            positions.push(candidate);
            rejected = 0;
            continue;
        }

        rejected = rejected.saturating_add(1);
        if rejected >= config.max_attempts {
            return Err(GraphError::PlacementExhausted {
                placed: positions.len(),
                requested: config.count,
                attempts: rejected,
            });
        }
    }

    debug!(draws, placed = positions.len(), "node placement completed");
    Ok(positions.into_iter().map(Node::new).collect())
}

fn is_separated(candidate: Position, placed: &[Position], min_squared: u128) -> bool {
    placed
        .iter()
        .all(|existing| existing.distance_squared(candidate) >= min_squared)
}
