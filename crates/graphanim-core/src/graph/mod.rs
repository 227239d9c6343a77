//! Graph snapshots and traversal
//!
//! - `Graph`: immutable undirected snapshot built from literal lists
//! - BFS traversal order for the traversal demonstration
//! - Adjacency trait for pluggable neighbour sources

pub mod bfs;
pub mod traversal;
pub mod types;

pub use bfs::bfs_order;
pub use traversal::Adjacency;
pub use types::{Edge, Graph, VertexId};
