//! Drawing graph snapshots and assembling them into animations
//!
//! The demonstrations only talk to the [`Visualizer`] trait: lay out a
//! graph, draw one frame, save a frame sequence. [`RasterVisualizer`] is the
//! production implementation writing GIFs.

pub mod animation;
pub mod canvas;
pub mod layout;

use std::path::Path;
use std::time::Instant;

use image::RgbaImage;

use crate::config::{AnimationConfig, RenderConfig};
use crate::error::Result;
use crate::graph::{Edge, Graph, VertexId};
use crate::trace_time;

pub use layout::{spring_layout, Layout, Position};

/// Vertices and edges drawn in highlight colours
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlight {
    pub vertices: Vec<VertexId>,
    pub edges: Vec<Edge>,
}

impl Highlight {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn vertices(vertices: impl IntoIterator<Item = VertexId>) -> Self {
        Highlight {
            vertices: vertices.into_iter().collect(),
            edges: Vec::new(),
        }
    }

    pub fn edge(edge: Edge) -> Self {
        Highlight {
            vertices: Vec::new(),
            edges: vec![edge],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty()
    }
}

/// Capability interface over the drawing backend
pub trait Visualizer {
    /// Position every vertex of `graph`
    fn layout(&self, graph: &Graph) -> Layout;

    /// Draw one frame
    fn draw(
        &self,
        graph: &Graph,
        layout: &Layout,
        highlight: &Highlight,
        title: &str,
    ) -> Result<RgbaImage>;

    /// Compose `frames` into one animation at `path`
    fn save_animation(&self, frames: Vec<RgbaImage>, path: &Path) -> Result<()>;
}

/// Rasterizes frames in memory and writes animated GIFs
#[derive(Debug, Clone, Default)]
pub struct RasterVisualizer {
    render: RenderConfig,
    animation: AnimationConfig,
}

impl RasterVisualizer {
    pub fn new(render: RenderConfig, animation: AnimationConfig) -> Self {
        RasterVisualizer { render, animation }
    }
}

impl Visualizer for RasterVisualizer {
    fn layout(&self, graph: &Graph) -> Layout {
        spring_layout(graph, self.render.seed, self.render.layout_iterations)
    }

    fn draw(
        &self,
        graph: &Graph,
        layout: &Layout,
        highlight: &Highlight,
        title: &str,
    ) -> Result<RgbaImage> {
        let start = Instant::now();
        let cfg = &self.render;
        let mut canvas = canvas::Canvas::new(cfg);
        let point = |canvas: &canvas::Canvas, v: VertexId| layout.get(v).map(|p| canvas.project(p));

        for edge in graph.edges() {
            if let (Some(a), Some(b)) = (point(&canvas, edge.a), point(&canvas, edge.b)) {
                canvas.line(a, b, cfg.edge_width, canvas::rgba(cfg.edge_color));
            }
        }
        for edge in &highlight.edges {
            if let (Some(a), Some(b)) = (point(&canvas, edge.a), point(&canvas, edge.b)) {
                canvas.line(
                    a,
                    b,
                    cfg.highlight_edge_width,
                    canvas::rgba(cfg.highlight_edge_color),
                );
            }
        }

        let radius = f64::from(cfg.node_radius);
        for vertex in graph.vertices() {
            let Some(center) = point(&canvas, vertex) else {
                continue;
            };
            let fill = if highlight.vertices.contains(&vertex) {
                cfg.highlight_node_color
            } else {
                cfg.node_color
            };
            canvas.disc(center, radius, canvas::rgba(fill));

            let label = vertex.to_string();
            let scale = if canvas::text_width(&label, 2) < cfg.node_radius.saturating_mul(2) {
                2
            } else {
                1
            };
            let top = center.1 - f64::from(canvas::text_height(scale)) / 2.0;
            canvas.text(&label, center.0, top, scale, canvas::rgba(cfg.text_color));
        }

        canvas.title(title, cfg.title_scale, canvas::rgba(cfg.text_color));

        trace_time!(start, "draw_frame", vertices = graph.vertex_count());
        Ok(canvas.into_image())
    }

    fn save_animation(&self, frames: Vec<RgbaImage>, path: &Path) -> Result<()> {
        animation::write_gif(
            frames,
            path,
            self.animation.frame_delay_ms(),
            self.animation.repeat,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn path_graph() -> Graph {
        Graph::from_lists(
            &[1, 2, 3, 4],
            &[Edge::new(1, 2), Edge::new(2, 3), Edge::new(3, 4)],
        )
        .unwrap()
    }

    fn count(image: &RgbaImage, color: [u8; 3]) -> usize {
        let target = Rgba([color[0], color[1], color[2], 255]);
        image.pixels().filter(|p| **p == target).count()
    }

    #[test]
    fn test_draw_plain_frame() {
        let vis = RasterVisualizer::default();
        let graph = path_graph();
        let layout = vis.layout(&graph);
        let frame = vis
            .draw(&graph, &layout, &Highlight::none(), "Before Insertion")
            .unwrap();

        assert_eq!(frame.dimensions(), (500, 400));
        assert!(count(&frame, RenderConfig::default().node_color) > 0);
        assert_eq!(count(&frame, RenderConfig::default().highlight_node_color), 0);
        assert_eq!(count(&frame, RenderConfig::default().highlight_edge_color), 0);
    }

    #[test]
    fn test_draw_highlights() {
        let vis = RasterVisualizer::default();
        let graph = path_graph();
        let layout = vis.layout(&graph);
        let highlight = Highlight {
            vertices: vec![3],
            edges: vec![Edge::new(2, 3)],
        };
        let frame = vis.draw(&graph, &layout, &highlight, "").unwrap();

        let cfg = RenderConfig::default();
        assert!(count(&frame, cfg.highlight_node_color) > 0);
        assert!(count(&frame, cfg.highlight_edge_color) > 0);
    }

    #[test]
    fn test_highlight_of_absent_vertex_is_ignored() {
        let vis = RasterVisualizer::default();
        let graph = path_graph();
        let layout = vis.layout(&graph);
        let highlight = Highlight {
            vertices: vec![9],
            edges: vec![Edge::new(8, 9)],
        };
        let frame = vis.draw(&graph, &layout, &highlight, "").unwrap();
        assert_eq!(count(&frame, RenderConfig::default().highlight_node_color), 0);
    }

    #[test]
    fn test_same_input_same_pixels() {
        let vis = RasterVisualizer::default();
        let graph = path_graph();
        let a = vis
            .draw(&graph, &vis.layout(&graph), &Highlight::vertices([1]), "x")
            .unwrap();
        let b = vis
            .draw(&graph, &vis.layout(&graph), &Highlight::vertices([1]), "x")
            .unwrap();
        assert_eq!(a, b);
    }
}
