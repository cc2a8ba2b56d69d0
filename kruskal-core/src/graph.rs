//! Graph input consumed by the stepper.
//!
//! A [`Graph`] bundles the node list (identifier plus display position) and
//! the undirected weighted edge list. Positions are carried for presentation
//! layers only; the stepper never reads them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, StepperError};

/// Display coordinates attached to a node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

/// A graph node with a stable identifier.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    id: usize,
    #[cfg_attr(feature = "serde", serde(flatten))]
    position: Position,
}

impl Node {
    /// Creates a node with the given identifier and display position.
    #[must_use]
    pub const fn new(id: usize, position: Position) -> Self {
        Self { id, position }
    }

    /// Returns the node identifier.
    #[must_use]
    #[rustfmt::skip]
    pub const fn id(&self) -> usize { self.id }

    /// Returns the display position.
    #[must_use]
    #[rustfmt::skip]
    pub const fn position(&self) -> Position { self.position }
}

/// An undirected weighted edge.
///
/// Endpoints keep the orientation they were supplied with so explanations
/// name them as the caller wrote them. Equality of the endpoint pair ignores
/// orientation; see [`Edge::connects`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    from: usize,
    to: usize,
    weight: f64,
}

impl Edge {
    /// Creates an edge between `from` and `to`.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::Edge;
    ///
    /// let edge = Edge::new(0, 1, 2.0);
    /// assert!(edge.connects(1, 0));
    /// ```
    #[must_use]
    pub const fn new(from: usize, to: usize, weight: f64) -> Self {
        Self { from, to, weight }
    }

    /// Returns the first endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn from(&self) -> usize { self.from }

    /// Returns the second endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn to(&self) -> usize { self.to }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Returns `true` when the edge joins `a` and `b` in either orientation.
    #[must_use]
    pub const fn connects(&self, a: usize, b: usize) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    /// Returns `true` when both edges join the same endpoint pair.
    #[must_use]
    pub const fn same_endpoints(&self, other: &Self) -> bool {
        self.connects(other.from, other.to)
    }
}

/// Nodes and edges handed to a [`crate::Stepper`] at construction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Builds a graph after checking it is well formed.
    ///
    /// # Errors
    ///
    /// Returns an error when:
    /// - there are no nodes
    /// - a node id differs from its position in `nodes`
    /// - an edge references a node id `>= nodes.len()`
    /// - an edge weight is negative or non-finite
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self> {
        let graph = Self { nodes, edges };
        graph.validate()?;
        Ok(graph)
    }

    /// Builds a graph with `node_count` nodes placed at the origin.
    ///
    /// # Errors
    ///
    /// See [`Graph::new`].
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::{Edge, Graph};
    ///
    /// let graph = Graph::with_node_count(3, vec![Edge::new(0, 2, 1.5)])?;
    /// assert_eq!(graph.node_count(), 3);
    /// # Ok::<(), kruskal_core::StepperError>(())
    /// ```
    pub fn with_node_count(node_count: usize, edges: Vec<Edge>) -> Result<Self> {
        let nodes = (0..node_count)
            .map(|id| Node::new(id, Position::default()))
            .collect();
        Self::new(nodes, edges)
    }

    /// The five-node walkthrough graph with its display layout.
    ///
    /// Its minimum spanning tree has four edges and a total weight of 12.
    #[must_use]
    pub fn demo() -> Self {
        let at = |id, x, y| Node::new(id, Position { x, y });
        Self {
            nodes: vec![
                at(0, 50.0, 50.0),
                at(1, 200.0, 50.0),
                at(2, 125.0, 150.0),
                at(3, 50.0, 250.0),
                at(4, 200.0, 250.0),
            ],
            edges: vec![
                Edge::new(0, 1, 2.0),
                Edge::new(1, 2, 1.0),
                Edge::new(1, 4, 4.0),
                Edge::new(2, 3, 5.0),
                Edge::new(2, 4, 6.0),
                Edge::new(3, 4, 7.0),
            ],
        }
    }

    /// Returns the nodes in identifier order.
    #[must_use]
    #[rustfmt::skip]
    pub fn nodes(&self) -> &[Node] { &self.nodes }

    /// Returns the edges in their supplied order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the number of nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.nodes.len() }

    /// Checks the structural requirements documented on [`Graph::new`].
    ///
    /// Graphs deserialised from external input bypass [`Graph::new`], so the
    /// stepper re-runs this check on construction.
    ///
    /// # Errors
    ///
    /// See [`Graph::new`].
    pub fn validate(&self) -> Result<()> {
        let node_count = self.nodes.len();
        if node_count == 0 {
            return Err(StepperError::EmptyGraph);
        }

        if let Some((index, node)) = self
            .nodes
            .iter()
            .enumerate()
            .find(|(index, node)| node.id != *index)
        {
            return Err(StepperError::NonContiguousNodeId { index, id: node.id });
        }

        for edge in &self.edges {
            for node in [edge.from, edge.to] {
                if node >= node_count {
                    return Err(StepperError::InvalidNodeId { node, node_count });
                }
            }
            if !edge.weight.is_finite() || edge.weight < 0.0 {
                return Err(StepperError::InvalidWeight {
                    from: edge.from,
                    to: edge.to,
                });
            }
        }

        Ok(())
    }

    /// Splits a validated graph into the parts the stepper owns.
    ///
    /// Validation admits `-0.0`; it is rewritten to `0.0` here so it ties with
    /// `0.0` when sorting and prints without a sign.
    pub(crate) fn into_parts(self) -> (Vec<Node>, Vec<Edge>) {
        let edges = self
            .edges
            .into_iter()
            .map(|edge| Edge {
                weight: edge.weight.abs(),
                ..edge
            })
            .collect();
        (self.nodes, edges)
    }
}
