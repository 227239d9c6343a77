use std::collections::{HashSet, VecDeque};

use crate::error::{GraphAnimError, Result};
use crate::graph::traversal::Adjacency;
use crate::graph::types::VertexId;

/// State tracked during BFS traversal
struct BfsState {
    visited: HashSet<VertexId>,
    queue: VecDeque<VertexId>,
    order: Vec<VertexId>,
}

impl BfsState {
    fn new(start: VertexId) -> Self {
        Self {
            visited: HashSet::new(),
            queue: VecDeque::from([start]),
            order: Vec::new(),
        }
    }
}

/// Compute the breadth-first visitation order from `start`
///
/// Vertices are marked visited when dequeued, and unvisited neighbours are
/// enqueued in the provider's adjacency order. The result holds each vertex
/// reachable from `start` exactly once, `start` first.
#[tracing::instrument(skip(provider))]
pub fn bfs_order(provider: &dyn Adjacency, start: VertexId) -> Result<Vec<VertexId>> {
    if !provider.contains_vertex(start) {
        return Err(GraphAnimError::UnknownStartVertex { vertex: start });
    }

    let mut state = BfsState::new(start);

    while let Some(current) = state.queue.pop_front() {
        if !state.visited.insert(current) {
            continue;
        }
        state.order.push(current);

        let pending = provider
            .neighbors(current)
            .into_iter()
            .filter(|n| !state.visited.contains(n));
        state.queue.extend(pending);
    }

    tracing::debug!(visited = state.order.len(), "bfs_order");
    Ok(state.order)
}

#[cfg(test)]
mod tests;
