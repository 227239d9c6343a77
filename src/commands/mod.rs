//! Command implementations for graphanim

pub mod dispatch;
pub mod list;
pub mod order;
pub mod render;
