//! Graphanim Core Library
//!
//! Scripted animations of elementary graph operations: graph snapshots,
//! breadth-first traversal order, layout, rasterizing and GIF export.

pub mod config;
pub mod demo;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod render;
