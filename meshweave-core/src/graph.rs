//! Value types shared by every pipeline stage.
//!
//! Nodes are identified by their index in the node `Vec`; edges are stored in
//! canonical `(a <= b)` form so they can live in ordered and hashed sets.

use std::collections::BTreeMap;
use std::fmt;

use crate::{GraphError, Result};

/// Ordered string-keyed display attributes attached to nodes, edges or the
/// whole graph. Ordering keeps serialized output stable.
pub type Attributes = BTreeMap<String, String>;

/// Integer coordinates of a node on the placement field.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Position {
    /// Horizontal coordinate in `[0, width)`.
    pub x: u32,
    /// Vertical coordinate in `[0, height)`.
    pub y: u32,
}

impl Position {
    /// Creates a position from its coordinates.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// # Examples
    /// ```
    /// use meshweave_core::Position;
    ///
    /// assert_eq!(Position::new(0, 0).distance_squared(Position::new(3, 4)), 25);
    /// ```
    #[must_use]
    pub const fn distance_squared(self, other: Self) -> u128 {
        let dx = self.x.abs_diff(other.x) as u128;
        let dy = self.y.abs_diff(other.y) as u128;
        dx * dx + dy * dy
    }
}

/// A placed node. Its identity is its index in the node list.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Node {
    position: Position,
    attributes: Attributes,
}

impl Node {
    /// Creates a node without display attributes.
    #[must_use]
    pub const fn new(position: Position) -> Self {
        Self {
            position,
            attributes: Attributes::new(),
        }
    }

    /// Returns a copy of the node carrying `attributes`.
    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Node coordinates.
    #[must_use]
    #[rustfmt::skip]
    pub const fn position(&self) -> Position { self.position }

    /// Extra display attributes.
    #[must_use]
    #[rustfmt::skip]
    pub const fn attributes(&self) -> &Attributes { &self.attributes }
}

/// An undirected edge in canonical form (`a() <= b()`).
///
/// # Examples
/// ```
/// use meshweave_core::Edge;
///
/// assert_eq!(Edge::new(4, 1), Edge::new(1, 4));
/// assert_eq!(Edge::new(4, 1).a(), 1);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Edge {
    a: usize,
    b: usize,
}

impl Edge {
    /// Creates an edge, ordering the endpoints.
    #[must_use]
    pub const fn new(left: usize, right: usize) -> Self {
        if left <= right {
            Self { a: left, b: right }
        } else {
            Self { a: right, b: left }
        }
    }

    /// The smaller endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn a(&self) -> usize { self.a }

    /// The larger endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn b(&self) -> usize { self.b }

    /// Returns `true` when `node` is one of the endpoints.
    #[must_use]
    pub const fn touches(&self, node: usize) -> bool {
        self.a == node || self.b == node
    }

    /// Returns `true` for an edge from a node to itself.
    #[must_use]
    pub const fn is_loop(&self) -> bool {
        self.a == self.b
    }
}

impl From<(usize, usize)> for Edge {
    fn from((left, right): (usize, usize)) -> Self {
        Self::new(left, right)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

/// A probability validated to lie in `[0, 1]`.
///
/// # Examples
/// ```
/// use meshweave_core::Probability;
///
/// assert!(Probability::new(0.25).is_ok());
/// assert!(Probability::new(1.5).is_err());
/// assert!(Probability::new(f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Probability(f64);

impl Probability {
    /// Never succeeds.
    pub const NEVER: Self = Self(0.0);
    /// Always succeeds.
    pub const ALWAYS: Self = Self(1.0);

    /// Validates `value`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidConfiguration`] when `value` is not a
    /// finite number in `[0, 1]`.
    pub fn new(value: f64) -> Result<Self> {
        Self::for_parameter("probability", value)
    }

    pub(crate) fn for_parameter(parameter: &'static str, value: f64) -> Result<Self> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GraphError::invalid(
                parameter,
                format!("{value} is outside the range [0.0, 1.0]"),
            ))
        }
    }

    /// The raw probability.
    #[must_use]
    #[rustfmt::skip]
    pub const fn get(self) -> f64 { self.0 }

    /// Returns `true` for a probability of exactly one.
    #[must_use]
    pub fn is_certain(self) -> bool {
        self.0 >= 1.0
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
