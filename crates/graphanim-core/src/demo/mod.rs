//! Scripted graph-operation demonstrations
//!
//! Each operation is shown as a sequence of independent graph snapshots
//! (before, after, or one per traversal step); nothing is mutated in place.

pub mod runner;
pub mod scenes;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::config::{BaseGraph, OperationParams};
use crate::error::{GraphAnimError, Result};
use crate::graph::Graph;
use crate::render::Highlight;

pub use runner::{run_all, run_selected, RunReport};

/// The six demonstrated operations, in rendering order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    InsertVertex,
    DeleteVertex,
    AddEdge,
    DeleteEdge,
    FindVertex,
    TraverseBfs,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::InsertVertex,
        Operation::DeleteVertex,
        Operation::AddEdge,
        Operation::DeleteEdge,
        Operation::FindVertex,
        Operation::TraverseBfs,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::InsertVertex => "insert-vertex",
            Operation::DeleteVertex => "delete-vertex",
            Operation::AddEdge => "add-edge",
            Operation::DeleteEdge => "delete-edge",
            Operation::FindVertex => "find-vertex",
            Operation::TraverseBfs => "traverse-bfs",
        }
    }

    /// Output file written for this operation
    pub fn file_name(&self) -> &'static str {
        match self {
            Operation::InsertVertex => "graph_insert_vertex.gif",
            Operation::DeleteVertex => "graph_delete_vertex.gif",
            Operation::AddEdge => "graph_add_edge.gif",
            Operation::DeleteEdge => "graph_delete_edge.gif",
            Operation::FindVertex => "graph_find_vertex.gif",
            Operation::TraverseBfs => "graph_traverse_bfs.gif",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Operation::InsertVertex => "insert an isolated vertex",
            Operation::DeleteVertex => "delete a vertex and its incident edges",
            Operation::AddEdge => "add an edge between existing vertices",
            Operation::DeleteEdge => "delete an existing edge",
            Operation::FindVertex => "locate a vertex",
            Operation::TraverseBfs => "breadth-first traversal, one frame per visited vertex",
        }
    }

    /// Build the scenes for this operation from the base graph
    pub fn storyboard(&self, base: &BaseGraph, params: &OperationParams) -> Result<Storyboard> {
        let scenes = match self {
            Operation::InsertVertex => scenes::insert_vertex(base, params.insert_vertex)?,
            Operation::DeleteVertex => scenes::delete_vertex(base, params.delete_vertex)?,
            Operation::AddEdge => scenes::add_edge(base, params.add_edge)?,
            Operation::DeleteEdge => scenes::delete_edge(base, params.delete_edge)?,
            Operation::FindVertex => scenes::find_vertex(base, params.find_vertex)?,
            Operation::TraverseBfs => scenes::traverse_bfs(base, params.traversal_start)?,
        };
        Ok(Storyboard {
            operation: *self,
            scenes,
        })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = GraphAnimError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == normalized)
            .ok_or_else(|| GraphAnimError::UnknownOperation(s.to_string()))
    }
}

/// One frame's drawing instructions
#[derive(Debug, Clone)]
pub struct Scene {
    pub graph: Graph,
    pub highlight: Highlight,
    pub title: String,
}

impl Scene {
    pub fn new(graph: Graph, highlight: Highlight, title: impl Into<String>) -> Self {
        Scene {
            graph,
            highlight,
            title: title.into(),
        }
    }
}

/// An operation and the scenes that illustrate it
#[derive(Debug, Clone)]
pub struct Storyboard {
    pub operation: Operation,
    pub scenes: Vec<Scene>,
}
