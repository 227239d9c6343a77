//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::graph::{Edge, VertexId};

/// Demo configuration
///
/// Every section has defaults, so an empty file reproduces the stock
/// demonstrations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Example graph every demonstration starts from
    #[serde(default)]
    pub graph: BaseGraph,

    /// Parameters of the six operations
    #[serde(default)]
    pub operations: OperationParams,

    /// Drawing surface configuration
    #[serde(default)]
    pub render: RenderConfig,

    /// Frame timing
    #[serde(default)]
    pub animation: AnimationConfig,
}

/// Literal vertex and edge lists of the example graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseGraph {
    #[serde(default = "default_nodes")]
    pub nodes: Vec<VertexId>,
    #[serde(default = "default_edges")]
    pub edges: Vec<Edge>,
}

impl Default for BaseGraph {
    fn default() -> Self {
        BaseGraph {
            nodes: default_nodes(),
            edges: default_edges(),
        }
    }
}

fn default_nodes() -> Vec<VertexId> {
    vec![1, 2, 3, 4]
}

fn default_edges() -> Vec<Edge> {
    vec![Edge::new(1, 2), Edge::new(2, 3), Edge::new(3, 4)]
}

/// Which vertex or edge each operation acts on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationParams {
    #[serde(default = "default_insert_vertex")]
    pub insert_vertex: VertexId,
    #[serde(default = "default_delete_vertex")]
    pub delete_vertex: VertexId,
    #[serde(default = "default_add_edge")]
    pub add_edge: Edge,
    #[serde(default = "default_delete_edge")]
    pub delete_edge: Edge,
    #[serde(default = "default_find_vertex")]
    pub find_vertex: VertexId,
    #[serde(default = "default_traversal_start")]
    pub traversal_start: VertexId,
}

impl Default for OperationParams {
    fn default() -> Self {
        OperationParams {
            insert_vertex: default_insert_vertex(),
            delete_vertex: default_delete_vertex(),
            add_edge: default_add_edge(),
            delete_edge: default_delete_edge(),
            find_vertex: default_find_vertex(),
            traversal_start: default_traversal_start(),
        }
    }
}

fn default_insert_vertex() -> VertexId {
    5
}

fn default_delete_vertex() -> VertexId {
    4
}

fn default_add_edge() -> Edge {
    Edge::new(1, 3)
}

fn default_delete_edge() -> Edge {
    Edge::new(2, 3)
}

fn default_find_vertex() -> VertexId {
    3
}

fn default_traversal_start() -> VertexId {
    1
}

/// RGB colour written as `[r, g, b]`
pub type Rgb = [u8; 3];

/// Drawing surface configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Frame width in pixels
    #[serde(default = "default_width")]
    pub width: u32,
    /// Frame height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
    /// Layout seed; a fixed seed gives reproducible drawings
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Force-directed layout iterations
    #[serde(default = "default_layout_iterations")]
    pub layout_iterations: u32,
    #[serde(default = "default_node_radius")]
    pub node_radius: u32,
    /// Space kept free around the plot area, below the title band
    #[serde(default = "default_margin")]
    pub margin: u32,
    /// Integer scale of the 8x8 title glyphs
    #[serde(default = "default_title_scale")]
    pub title_scale: u32,
    #[serde(default = "default_background")]
    pub background: Rgb,
    #[serde(default = "default_node_color")]
    pub node_color: Rgb,
    #[serde(default = "default_highlight_node_color")]
    pub highlight_node_color: Rgb,
    #[serde(default = "default_edge_color")]
    pub edge_color: Rgb,
    #[serde(default = "default_highlight_edge_color")]
    pub highlight_edge_color: Rgb,
    #[serde(default = "default_text_color")]
    pub text_color: Rgb,
    /// Stroke width of ordinary edges
    #[serde(default = "default_edge_width")]
    pub edge_width: f32,
    /// Stroke width of highlighted edges
    #[serde(default = "default_highlight_edge_width")]
    pub highlight_edge_width: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: default_width(),
            height: default_height(),
            seed: default_seed(),
            layout_iterations: default_layout_iterations(),
            node_radius: default_node_radius(),
            margin: default_margin(),
            title_scale: default_title_scale(),
            background: default_background(),
            node_color: default_node_color(),
            highlight_node_color: default_highlight_node_color(),
            edge_color: default_edge_color(),
            highlight_edge_color: default_highlight_edge_color(),
            text_color: default_text_color(),
            edge_width: default_edge_width(),
            highlight_edge_width: default_highlight_edge_width(),
        }
    }
}

fn default_width() -> u32 {
    500
}

fn default_height() -> u32 {
    400
}

fn default_seed() -> u64 {
    42
}

fn default_layout_iterations() -> u32 {
    50
}

fn default_node_radius() -> u32 {
    20
}

fn default_margin() -> u32 {
    30
}

fn default_title_scale() -> u32 {
    2
}

fn default_background() -> Rgb {
    [255, 255, 255]
}

fn default_node_color() -> Rgb {
    // lightblue
    [173, 216, 230]
}

fn default_highlight_node_color() -> Rgb {
    // lightgreen
    [144, 238, 144]
}

fn default_edge_color() -> Rgb {
    [0, 0, 0]
}

fn default_highlight_edge_color() -> Rgb {
    [255, 0, 0]
}

fn default_text_color() -> Rgb {
    [0, 0, 0]
}

fn default_edge_width() -> f32 {
    1.0
}

fn default_highlight_edge_width() -> f32 {
    2.5
}

/// Frame timing for the exported animation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Interactive preview interval in milliseconds
    ///
    /// Read and checked so existing configuration files keep loading, but
    /// the written GIF is timed by `fps` alone.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u32,
    /// Playback rate of the written file
    #[serde(default = "default_fps")]
    pub fps: u32,
    /// Loop forever instead of playing once
    #[serde(default)]
    pub repeat: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            interval_ms: default_interval_ms(),
            fps: default_fps(),
            repeat: false,
        }
    }
}

fn default_interval_ms() -> u32 {
    1500
}

fn default_fps() -> u32 {
    1
}
