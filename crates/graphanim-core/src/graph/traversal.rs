use crate::graph::types::{Graph, VertexId};

/// Trait for providing graph adjacency to traversal algorithms
pub trait Adjacency {
    fn contains_vertex(&self, vertex: VertexId) -> bool;
    /// Neighbours in the provider's fixed order; traversal tie-breaking follows it
    fn neighbors(&self, vertex: VertexId) -> Vec<VertexId>;
}

impl Adjacency for Graph {
    fn contains_vertex(&self, vertex: VertexId) -> bool {
        Graph::contains_vertex(self, vertex)
    }

    fn neighbors(&self, vertex: VertexId) -> Vec<VertexId> {
        Graph::neighbors(self, vertex).collect()
    }
}
