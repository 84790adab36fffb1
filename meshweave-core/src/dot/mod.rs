//! Graphviz DOT serialisation.
//!
//! Documents are rendered through [`fmt::Display`], so callers build the
//! whole text in memory and decide separately where it goes.

mod node_id;

use std::fmt;

use crate::{Attributes, Edge, Node};

pub use self::node_id::node_id;

/// Quotes `value` for use as a DOT attribute value, escaping backslashes,
/// quotes and control whitespace.
///
/// # Examples
/// ```
/// use meshweave_core::dot::quote;
///
/// assert_eq!(quote("say \"hi\"\n"), r#""say \"hi\"\n""#);
/// ```
#[must_use]
pub fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            '"' => quoted.push_str("\\\""),
            '\'' => quoted.push_str("\\'"),
            other => quoted.push(other),
        }
    }
    quoted.push('"');
    quoted
}

/// An edge statement with optional display attributes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EdgeEntry {
    edge: Edge,
    attributes: Attributes,
}

impl EdgeEntry {
    /// Creates an entry carrying `attributes`.
    #[must_use]
    pub const fn new(edge: Edge, attributes: Attributes) -> Self {
        Self { edge, attributes }
    }

    /// The undirected edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge(&self) -> Edge { self.edge }

    /// Display attributes written after the edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn attributes(&self) -> &Attributes { &self.attributes }
}

impl From<Edge> for EdgeEntry {
    fn from(edge: Edge) -> Self {
        Self::new(edge, Attributes::new())
    }
}

/// A complete output file: seed comment, optional graph attributes, node
/// statements in index order and edge statements in the given order.
///
/// # Examples
/// ```
/// use meshweave_core::{Edge, Node, Position, dot::GraphDocument};
///
/// let nodes = [Node::new(Position::new(3, 4)), Node::new(Position::new(10, 2))];
/// let document = GraphDocument::new(9, &nodes).with_edges([Edge::new(0, 1)]);
/// assert_eq!(
///     document.to_string(),
///     "// random seed 9\ngraph {\n\tA [pos=\"3,4\"];\n\tB [pos=\"10,2\"];\n\tA -- B;\n}\n",
/// );
/// ```
#[derive(Clone, Debug)]
pub struct GraphDocument<'a> {
    seed: u64,
    nodes: &'a [Node],
    edges: Vec<EdgeEntry>,
    attributes: Attributes,
}

impl<'a> GraphDocument<'a> {
    /// Starts a document for `nodes` with no edges.
    #[must_use]
    pub const fn new(seed: u64, nodes: &'a [Node]) -> Self {
        Self {
            seed,
            nodes,
            edges: Vec::new(),
            attributes: Attributes::new(),
        }
    }

    /// Appends edge statements.
    #[must_use]
    pub fn with_edges<I>(mut self, edges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<EdgeEntry>,
    {
        self.edges.extend(edges.into_iter().map(Into::into));
        self
    }

    /// Sets a graph-level attribute, replacing any previous value.
    #[must_use]
    pub fn with_graph_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Seed written in the header comment.
    #[must_use]
    #[rustfmt::skip]
    pub const fn seed(&self) -> u64 { self.seed }

    /// Edge statements in output order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[EdgeEntry] { &self.edges }
}

fn write_attributes<'k, I>(f: &mut fmt::Formatter<'_>, attributes: I) -> fmt::Result
where
    I: IntoIterator<Item = (&'k str, &'k str)>,
{
    let mut attributes = attributes.into_iter().peekable();
    if attributes.peek().is_none() {
        return Ok(());
    }
    f.write_str(" [")?;
    for (index, (key, value)) in attributes.enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{key}={}", quote(value))?;
    }
    f.write_str("]")
}

fn pairs(attributes: &Attributes) -> impl Iterator<Item = (&str, &str)> {
    attributes
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str()))
}

impl fmt::Display for GraphDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "// random seed {}", self.seed)?;
        f.write_str("graph {\n")?;

        if !self.attributes.is_empty() {
            f.write_str("\tgraph")?;
            write_attributes(f, pairs(&self.attributes))?;
            f.write_str(";\n")?;
        }

        for (index, node) in self.nodes.iter().enumerate() {
            let position = node.position();
            let pos = format!("{},{}", position.x, position.y);
            write!(f, "\t{}", node_id(index))?;
            write_attributes(
                f,
                std::iter::once(("pos", pos.as_str()))
                    .chain(pairs(node.attributes()).filter(|(key, _)| *key != "pos")),
            )?;
            f.write_str(";\n")?;
        }

        for entry in &self.edges {
            write!(
                f,
                "\t{} -- {}",
                node_id(entry.edge.a()),
                node_id(entry.edge.b())
            )?;
            write_attributes(f, pairs(&entry.attributes))?;
            f.write_str(";\n")?;
        }

        f.write_str("}\n")
    }
}
