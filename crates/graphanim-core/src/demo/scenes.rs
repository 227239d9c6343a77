//! Before/after snapshots for each operation
//!
//! Every function rebuilds its graphs from the base lists it is given; the
//! post-state is a second, independent graph.

use crate::config::BaseGraph;
use crate::error::{GraphAnimError, Result};
use crate::graph::{bfs_order, Edge, Graph, VertexId};
use crate::render::Highlight;
use crate::{bail_exists, demo::Scene};

fn base_graph(base: &BaseGraph) -> Result<Graph> {
    Graph::from_lists(&base.nodes, &base.edges)
}

fn require_vertex(graph: &Graph, vertex: VertexId) -> Result<()> {
    if graph.contains_vertex(vertex) {
        Ok(())
    } else {
        Err(GraphAnimError::VertexNotFound { vertex })
    }
}

/// Before: base graph. After: base graph plus isolated `vertex`, highlighted.
#[tracing::instrument(skip(base))]
pub fn insert_vertex(base: &BaseGraph, vertex: VertexId) -> Result<Vec<Scene>> {
    let before = base_graph(base)?;
    if before.contains_vertex(vertex) {
        bail_exists!("vertex", vertex);
    }

    let mut nodes = base.nodes.clone();
    nodes.push(vertex);
    let after = Graph::from_lists(&nodes, &base.edges)?;

    Ok(vec![
        Scene::new(before, Highlight::none(), "Before Insertion"),
        Scene::new(
            after,
            Highlight::vertices([vertex]),
            format!("After Inserting Vertex {vertex}"),
        ),
    ])
}

/// Before: base graph. After: `vertex` and its incident edges gone.
#[tracing::instrument(skip(base))]
pub fn delete_vertex(base: &BaseGraph, vertex: VertexId) -> Result<Vec<Scene>> {
    let before = base_graph(base)?;
    require_vertex(&before, vertex)?;

    let nodes: Vec<VertexId> = base.nodes.iter().copied().filter(|n| *n != vertex).collect();
    let edges: Vec<Edge> = base
        .edges
        .iter()
        .copied()
        .filter(|e| !e.touches(vertex))
        .collect();
    let after = Graph::from_lists(&nodes, &edges)?;

    Ok(vec![
        Scene::new(before, Highlight::none(), "Before Deletion"),
        Scene::new(
            after,
            Highlight::none(),
            format!("After Deleting Vertex {vertex}"),
        ),
    ])
}

/// Before: base graph. After: base graph plus `edge`, highlighted.
#[tracing::instrument(skip(base))]
pub fn add_edge(base: &BaseGraph, edge: Edge) -> Result<Vec<Scene>> {
    let before = base_graph(base)?;
    if before.contains_edge(&edge) {
        bail_exists!("edge", edge);
    }

    let mut edges = base.edges.clone();
    edges.push(edge);
    let after = Graph::from_lists(&base.nodes, &edges)?;

    Ok(vec![
        Scene::new(before, Highlight::none(), "Before Adding Edge"),
        Scene::new(
            after,
            Highlight::edge(edge),
            format!("After Adding Edge {edge}"),
        ),
    ])
}

/// Before: base graph with `edge` highlighted. After: `edge` gone.
#[tracing::instrument(skip(base))]
pub fn delete_edge(base: &BaseGraph, edge: Edge) -> Result<Vec<Scene>> {
    let before = base_graph(base)?;
    if !before.contains_edge(&edge) {
        return Err(GraphAnimError::EdgeNotFound { edge });
    }

    let edges: Vec<Edge> = base.edges.iter().copied().filter(|e| *e != edge).collect();
    let after = Graph::from_lists(&base.nodes, &edges)?;

    Ok(vec![
        Scene::new(
            before,
            Highlight::edge(edge),
            format!("Before Deleting Edge {edge}"),
        ),
        Scene::new(
            after,
            Highlight::none(),
            format!("After Deleting Edge {edge}"),
        ),
    ])
}

/// Same graph twice: searching, then `vertex` highlighted.
#[tracing::instrument(skip(base))]
pub fn find_vertex(base: &BaseGraph, vertex: VertexId) -> Result<Vec<Scene>> {
    let graph = base_graph(base)?;
    require_vertex(&graph, vertex)?;

    Ok(vec![
        Scene::new(
            graph.clone(),
            Highlight::none(),
            format!("Searching for Vertex {vertex}..."),
        ),
        Scene::new(
            graph,
            Highlight::vertices([vertex]),
            format!("Vertex {vertex} Found!"),
        ),
    ])
}

/// One scene per visited vertex; scene k highlights the first k vertices of
/// the BFS order.
#[tracing::instrument(skip(base))]
pub fn traverse_bfs(base: &BaseGraph, start: VertexId) -> Result<Vec<Scene>> {
    let graph = base_graph(base)?;
    let order = bfs_order(&graph, start)?;
    tracing::debug!(?order, "traversal_order");

    Ok((1..=order.len())
        .map(|step| {
            Scene::new(
                graph.clone(),
                Highlight::vertices(order[..step].iter().copied()),
                format!("BFS Traversal Step {step}"),
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> BaseGraph {
        BaseGraph::default()
    }

    fn titles(scenes: &[Scene]) -> Vec<&str> {
        scenes.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_insert_vertex_adds_isolated_vertex() {
        let scenes = insert_vertex(&base(), 5).unwrap();
        assert_eq!(
            titles(&scenes),
            vec!["Before Insertion", "After Inserting Vertex 5"]
        );
        assert!(!scenes[0].graph.contains_vertex(5));
        let after = &scenes[1].graph;
        assert!(after.contains_vertex(5));
        assert_eq!(after.degree(5), 0);
        assert_eq!(after.edge_count(), 3);
        assert_eq!(scenes[1].highlight, Highlight::vertices([5]));
    }

    #[test]
    fn test_insert_existing_vertex_rejected() {
        let err = insert_vertex(&base(), 2).unwrap_err();
        assert!(matches!(err, GraphAnimError::AlreadyExists { .. }));
    }

    #[test]
    fn test_delete_vertex_drops_incident_edges() {
        let scenes = delete_vertex(&base(), 4).unwrap();
        assert_eq!(
            titles(&scenes),
            vec!["Before Deletion", "After Deleting Vertex 4"]
        );
        let after = &scenes[1].graph;
        assert!(!after.contains_vertex(4));
        assert_eq!(after.vertex_count(), 3);
        let edges: Vec<Edge> = after.edges().collect();
        assert_eq!(edges, vec![Edge::new(1, 2), Edge::new(2, 3)]);
    }

    #[test]
    fn test_delete_missing_vertex_rejected() {
        let err = delete_vertex(&base(), 7).unwrap_err();
        assert!(matches!(err, GraphAnimError::VertexNotFound { vertex: 7 }));
    }

    #[test]
    fn test_add_edge_highlights_new_edge() {
        let scenes = add_edge(&base(), Edge::new(1, 3)).unwrap();
        assert_eq!(
            titles(&scenes),
            vec!["Before Adding Edge", "After Adding Edge (1,3)"]
        );
        assert!(!scenes[0].graph.contains_edge(&Edge::new(1, 3)));
        assert!(scenes[1].graph.contains_edge(&Edge::new(3, 1)));
        assert_eq!(scenes[1].highlight.edges, vec![Edge::new(1, 3)]);
    }

    #[test]
    fn test_add_edge_rejects_duplicates_and_dangling() {
        assert!(matches!(
            add_edge(&base(), Edge::new(2, 1)),
            Err(GraphAnimError::AlreadyExists { .. })
        ));
        assert!(matches!(
            add_edge(&base(), Edge::new(1, 9)),
            Err(GraphAnimError::UnknownEdgeEndpoint { vertex: 9, .. })
        ));
    }

    #[test]
    fn test_delete_edge_removes_edge() {
        let scenes = delete_edge(&base(), Edge::new(2, 3)).unwrap();
        assert_eq!(
            titles(&scenes),
            vec!["Before Deleting Edge (2,3)", "After Deleting Edge (2,3)"]
        );
        assert_eq!(scenes[0].highlight.edges, vec![Edge::new(2, 3)]);
        let after = &scenes[1].graph;
        assert!(!after.contains_edge(&Edge::new(2, 3)));
        assert_eq!(after.vertex_count(), 4);
        let edges: Vec<Edge> = after.edges().collect();
        assert_eq!(edges, vec![Edge::new(1, 2), Edge::new(3, 4)]);
    }

    #[test]
    fn test_delete_missing_edge_rejected() {
        let err = delete_edge(&base(), Edge::new(1, 4)).unwrap_err();
        assert!(matches!(err, GraphAnimError::EdgeNotFound { .. }));
    }

    #[test]
    fn test_find_vertex_scenes() {
        let scenes = find_vertex(&base(), 3).unwrap();
        assert_eq!(
            titles(&scenes),
            vec!["Searching for Vertex 3...", "Vertex 3 Found!"]
        );
        assert!(scenes[0].highlight.is_empty());
        assert_eq!(scenes[1].highlight, Highlight::vertices([3]));
        assert!(matches!(
            find_vertex(&base(), 10),
            Err(GraphAnimError::VertexNotFound { vertex: 10 })
        ));
    }

    #[test]
    fn test_traverse_bfs_scenes_grow() {
        let scenes = traverse_bfs(&base(), 1).unwrap();
        assert_eq!(scenes.len(), 4);
        assert_eq!(scenes[0].title, "BFS Traversal Step 1");
        assert_eq!(scenes[3].title, "BFS Traversal Step 4");
        assert_eq!(scenes[0].highlight.vertices, vec![1]);
        assert_eq!(scenes[3].highlight.vertices, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_traverse_bfs_only_reachable_frames() {
        let base = BaseGraph {
            nodes: vec![1, 2, 3, 4, 5],
            edges: vec![Edge::new(1, 2), Edge::new(2, 3)],
        };
        assert_eq!(traverse_bfs(&base, 1).unwrap().len(), 3);
        assert!(matches!(
            traverse_bfs(&base, 6),
            Err(GraphAnimError::UnknownStartVertex { vertex: 6 })
        ));
    }

    #[test]
    fn test_base_graph_is_not_modified() {
        let base = base();
        let snapshot = base.clone();
        insert_vertex(&base, 5).unwrap();
        delete_vertex(&base, 4).unwrap();
        add_edge(&base, Edge::new(1, 3)).unwrap();
        delete_edge(&base, Edge::new(2, 3)).unwrap();
        assert_eq!(base, snapshot);
    }
}
