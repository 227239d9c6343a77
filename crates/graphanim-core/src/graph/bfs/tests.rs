use std::collections::{HashMap, HashSet};

use crate::error::GraphAnimError;
use crate::graph::bfs::*;
use crate::graph::types::{Edge, Graph, VertexId};
use crate::graph::Adjacency;

fn graph(nodes: &[VertexId], edges: &[(VertexId, VertexId)]) -> Graph {
    let edges: Vec<Edge> = edges.iter().copied().map(Edge::from).collect();
    Graph::from_lists(nodes, &edges).unwrap()
}

/// Adjacency with hand-picked neighbour order, counting lookups
struct ScriptedAdjacency {
    adjacency: HashMap<VertexId, Vec<VertexId>>,
    lookups: std::cell::Cell<usize>,
}

impl Adjacency for ScriptedAdjacency {
    fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    fn neighbors(&self, vertex: VertexId) -> Vec<VertexId> {
        self.lookups.set(self.lookups.get() + 1);
        self.adjacency.get(&vertex).cloned().unwrap_or_default()
    }
}

#[test]
fn test_path_graph_order() {
    let g = graph(&[1, 2, 3, 4], &[(1, 2), (2, 3), (3, 4)]);
    assert_eq!(bfs_order(&g, 1).unwrap(), vec![1, 2, 3, 4]);
}

#[test]
fn test_start_from_middle() {
    let g = graph(&[1, 2, 3, 4], &[(1, 2), (2, 3), (3, 4)]);
    assert_eq!(bfs_order(&g, 3).unwrap(), vec![3, 2, 4, 1]);
}

#[test]
fn test_unknown_start_vertex() {
    let g = graph(&[1, 2, 3, 4], &[(1, 2), (2, 3), (3, 4)]);
    let err = bfs_order(&g, 9).unwrap_err();
    assert!(matches!(err, GraphAnimError::UnknownStartVertex { vertex: 9 }));
}

#[test]
fn test_unreachable_vertices_excluded() {
    let g = graph(&[1, 2, 3, 4, 5], &[(1, 2), (3, 4)]);
    assert_eq!(bfs_order(&g, 1).unwrap(), vec![1, 2]);
    assert_eq!(bfs_order(&g, 5).unwrap(), vec![5]);
}

#[test]
fn test_same_depth_ties_follow_adjacency_order() {
    let g = graph(&[1, 2, 3, 4, 5], &[(1, 4), (1, 2), (4, 5), (2, 3)]);
    assert_eq!(bfs_order(&g, 1).unwrap(), vec![1, 4, 2, 5, 3]);
}

#[test]
fn test_cycle_visits_each_vertex_once() {
    let g = graph(
        &[1, 2, 3, 4],
        &[(1, 2), (2, 3), (3, 4), (4, 1), (1, 3)],
    );
    let order = bfs_order(&g, 1).unwrap();
    assert_eq!(order.first(), Some(&1));
    assert_eq!(order.len(), 4);
    let unique: HashSet<_> = order.iter().collect();
    assert_eq!(unique.len(), order.len());
}

#[test]
fn test_order_is_repeatable() {
    let g = graph(&[1, 2, 3, 4], &[(1, 2), (2, 3), (3, 4), (1, 3)]);
    let first = bfs_order(&g, 1).unwrap();
    let second = bfs_order(&g, 1).unwrap();
    assert_eq!(first, second);
    assert_eq!(g.edge_count(), 4);
}

#[test]
fn test_custom_provider_order() {
    let provider = ScriptedAdjacency {
        adjacency: HashMap::from([
            (10, vec![30, 20]),
            (20, vec![10, 40]),
            (30, vec![10, 40]),
            (40, vec![20, 30]),
        ]),
        lookups: std::cell::Cell::new(0),
    };
    assert_eq!(bfs_order(&provider, 10).unwrap(), vec![10, 30, 20, 40]);
    // One neighbour lookup per visited vertex; duplicates in the queue are skipped.
    assert_eq!(provider.lookups.get(), 4);
}
