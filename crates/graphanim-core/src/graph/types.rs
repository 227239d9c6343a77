use std::fmt;
use std::hash::{Hash, Hasher};

use petgraph::graphmap::UnGraphMap;
use serde::{Deserialize, Serialize};

use crate::error::{GraphAnimError, Result};

/// Vertex identifier. The demonstrations use small integers.
pub type VertexId = u32;

/// An undirected edge
///
/// Keeps the orientation it was written in for display, but `(a, b)` and
/// `(b, a)` compare and hash as the same edge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "(VertexId, VertexId)", into = "(VertexId, VertexId)")]
pub struct Edge {
    pub a: VertexId,
    pub b: VertexId,
}

impl Edge {
    pub const fn new(a: VertexId, b: VertexId) -> Self {
        Edge { a, b }
    }

    /// Endpoints ordered low to high
    pub fn key(&self) -> (VertexId, VertexId) {
        if self.a <= self.b {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }

    pub fn touches(&self, vertex: VertexId) -> bool {
        self.a == vertex || self.b == vertex
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<(VertexId, VertexId)> for Edge {
    fn from((a, b): (VertexId, VertexId)) -> Self {
        Edge::new(a, b)
    }
}

impl From<Edge> for (VertexId, VertexId) {
    fn from(edge: Edge) -> Self {
        (edge.a, edge.b)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.a, self.b)
    }
}

/// An immutable undirected graph snapshot
///
/// Vertices and each vertex's neighbours are kept in insertion order, so
/// traversals over the same literal lists always break ties the same way.
#[derive(Debug, Clone)]
pub struct Graph {
    inner: UnGraphMap<VertexId, ()>,
}

impl Graph {
    /// Build a graph from literal vertex and edge lists
    ///
    /// Every edge endpoint must appear in `nodes`; repeated vertices or edges
    /// collapse into one.
    pub fn from_lists(nodes: &[VertexId], edges: &[Edge]) -> Result<Self> {
        let mut inner = UnGraphMap::new();
        for &node in nodes {
            inner.add_node(node);
        }

        for edge in edges {
            for vertex in [edge.a, edge.b] {
                if !inner.contains_node(vertex) {
                    return Err(GraphAnimError::UnknownEdgeEndpoint {
                        edge: *edge,
                        vertex,
                    });
                }
            }
            inner.add_edge(edge.a, edge.b, ());
        }

        Ok(Graph { inner })
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.inner.contains_node(vertex)
    }

    pub fn contains_edge(&self, edge: &Edge) -> bool {
        self.inner.contains_edge(edge.a, edge.b)
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.inner.nodes()
    }

    /// Edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.inner.all_edges().map(|(a, b, _)| Edge::new(a, b))
    }

    /// Neighbours of `vertex` in the order their edges were added
    pub fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.inner.neighbors(vertex)
    }

    pub fn degree(&self, vertex: VertexId) -> usize {
        self.neighbors(vertex).count()
    }
}
