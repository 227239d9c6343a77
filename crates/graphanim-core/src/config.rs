//! Demo configuration for graphanim
//!
//! Configuration is optional TOML; absent fields fall back to the stock
//! example graph and drawing settings.

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{GraphAnimError, Result};
use crate::render::canvas::title_band_height;

pub use types::{AnimationConfig, BaseGraph, DemoConfig, OperationParams, RenderConfig, Rgb};

/// Largest accepted frame width or height in pixels
pub const MAX_FRAME_SIDE: u32 = 4096;
/// Largest accepted stroke width in pixels
pub const MAX_STROKE_WIDTH: f32 = 64.0;
pub const MAX_LAYOUT_ITERATIONS: u32 = 10_000;

impl DemoConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GraphAnimError::io_operation("read config", path.display(), e))?;
        let config: DemoConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphAnimError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| GraphAnimError::io_operation("write config", path.display(), e))?;
        Ok(())
    }

    /// Reject values the renderer cannot work with
    pub fn validate(&self) -> Result<()> {
        self.render.validate()?;
        self.animation.validate()?;

        for edge in &self.graph.edges {
            for vertex in [edge.a, edge.b] {
                if !self.graph.nodes.contains(&vertex) {
                    return Err(GraphAnimError::UnknownEdgeEndpoint {
                        edge: *edge,
                        vertex,
                    });
                }
            }
        }

        Ok(())
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.width > MAX_FRAME_SIDE {
            bail_invalid!("render.width", self.width);
        }
        if self.height == 0 || self.height > MAX_FRAME_SIDE {
            bail_invalid!("render.height", self.height);
        }
        if self.layout_iterations > MAX_LAYOUT_ITERATIONS {
            bail_invalid!("render.layout_iterations", self.layout_iterations);
        }
        let short_side = self.width.min(self.height);
        if self.node_radius == 0 || self.node_radius.saturating_mul(4) > short_side {
            bail_invalid!("render.node_radius", self.node_radius);
        }
        let title_band = title_band_height(self.title_scale);
        if self.title_scale == 0 || title_band >= self.height {
            bail_invalid!("render.title_scale", self.title_scale);
        }
        // The plot area between the insets and below the title must be non-empty.
        let inset = self.margin.saturating_add(self.node_radius).saturating_mul(2);
        if inset >= self.width || title_band.saturating_add(inset) >= self.height {
            bail_invalid!("render.margin", self.margin);
        }
        for (context, width) in [
            ("render.edge_width", self.edge_width),
            ("render.highlight_edge_width", self.highlight_edge_width),
        ] {
            if !width.is_finite() || width <= 0.0 || width > MAX_STROKE_WIDTH {
                bail_invalid!(context, width);
            }
        }
        Ok(())
    }
}

impl AnimationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.fps == 0 {
            bail_invalid!("animation.fps", self.fps);
        }
        if self.interval_ms == 0 {
            bail_invalid!("animation.interval_ms", self.interval_ms);
        }
        Ok(())
    }

    /// Delay between frames in the written file
    pub fn frame_delay_ms(&self) -> u32 {
        1000 / self.fps.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = DemoConfig::default();
        assert_eq!(config.graph.nodes, vec![1, 2, 3, 4]);
        assert_eq!(
            config.graph.edges,
            vec![Edge::new(1, 2), Edge::new(2, 3), Edge::new(3, 4)]
        );
        assert_eq!(config.operations.insert_vertex, 5);
        assert_eq!(config.operations.delete_vertex, 4);
        assert_eq!(config.operations.add_edge, Edge::new(1, 3));
        assert_eq!(config.operations.delete_edge, Edge::new(2, 3));
        assert_eq!(config.operations.find_vertex, 3);
        assert_eq!(config.operations.traversal_start, 1);
        assert_eq!(config.render.seed, 42);
        assert_eq!(config.animation.fps, 1);
        assert!(!config.animation.repeat);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: DemoConfig = toml::from_str("").unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let config: DemoConfig = toml::from_str(
            r#"
[graph]
nodes = [1, 2, 3]
edges = [[1, 2], [2, 3]]

[animation]
fps = 2
"#,
        )
        .unwrap();
        assert_eq!(config.graph.nodes, vec![1, 2, 3]);
        assert_eq!(config.graph.edges.len(), 2);
        assert_eq!(config.animation.frame_delay_ms(), 500);
        assert_eq!(config.animation.interval_ms, 1500);
        assert_eq!(config.render.width, 500);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graphanim.toml");

        let mut config = DemoConfig::default();
        config.operations.find_vertex = 2;
        config.render.seed = 7;
        config.save(&path).unwrap();

        let loaded = DemoConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = DemoConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(
            err,
            GraphAnimError::FailedOperationWithTarget { .. }
        ));
    }

    #[test]
    fn test_validate_rejects_zero_fps() {
        let mut config = DemoConfig::default();
        config.animation.fps = 0;
        assert!(matches!(
            config.validate(),
            Err(GraphAnimError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_oversized_nodes() {
        let mut config = DemoConfig::default();
        config.render.node_radius = 200;
        assert!(config.validate().is_err());
    }

    fn assert_invalid(config: &DemoConfig, field: &str) {
        match config.validate() {
            Err(GraphAnimError::InvalidValue { context, .. }) => assert_eq!(context, field),
            other => panic!("expected invalid {field}, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_oversized_frame() {
        let mut config = DemoConfig::default();
        config.render.width = MAX_FRAME_SIDE + 1;
        assert_invalid(&config, "render.width");

        let mut config = DemoConfig::default();
        config.render.height = u32::MAX;
        assert_invalid(&config, "render.height");

        let mut config = DemoConfig::default();
        config.render.width = MAX_FRAME_SIDE;
        config.render.height = MAX_FRAME_SIDE;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_title_taller_than_frame() {
        let mut config = DemoConfig::default();
        config.render.title_scale = 1_000_000_000;
        assert_invalid(&config, "render.title_scale");

        config.render.title_scale = 48;
        assert_invalid(&config, "render.title_scale");
    }

    #[test]
    fn test_validate_rejects_margin_without_plot_area() {
        let mut config = DemoConfig::default();
        config.render.margin = u32::MAX;
        assert_invalid(&config, "render.margin");

        config.render.margin = 230;
        assert_invalid(&config, "render.margin");

        config.render.margin = 100;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_stroke_widths() {
        let mut config = DemoConfig::default();
        config.render.edge_width = f32::INFINITY;
        assert_invalid(&config, "render.edge_width");

        let mut config = DemoConfig::default();
        config.render.highlight_edge_width = MAX_STROKE_WIDTH * 2.0;
        assert_invalid(&config, "render.highlight_edge_width");

        let mut config = DemoConfig::default();
        config.render.edge_width = f32::NAN;
        assert_invalid(&config, "render.edge_width");
    }

    #[test]
    fn test_validate_rejects_layout_iterations() {
        let mut config = DemoConfig::default();
        config.render.layout_iterations = MAX_LAYOUT_ITERATIONS + 1;
        assert_invalid(&config, "render.layout_iterations");

        config.render.layout_iterations = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_into_missing_directory_names_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("graphanim.toml");
        let err = DemoConfig::default().save(&path).unwrap_err();
        assert!(matches!(
            err,
            GraphAnimError::FailedOperationWithTarget { .. }
        ));
        assert!(err.to_string().contains("graphanim.toml"));
    }

    #[test]
    fn test_validate_rejects_dangling_edge() {
        let mut config = DemoConfig::default();
        config.graph.edges.push(Edge::new(4, 8));
        assert!(matches!(
            config.validate(),
            Err(GraphAnimError::UnknownEdgeEndpoint { vertex: 8, .. })
        ));
    }
}
