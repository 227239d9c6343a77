//! Sequential rendering of demonstrations to files

use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;

use crate::config::DemoConfig;
use crate::demo::{Operation, Storyboard};
use crate::error::Result;
use crate::render::Visualizer;
use crate::trace_time;

/// Outcome of one rendered demonstration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub operation: Operation,
    pub path: PathBuf,
    pub frames: usize,
}

/// Lay out and draw every scene, then save them as one animation
pub fn render_storyboard(
    visualizer: &dyn Visualizer,
    storyboard: &Storyboard,
    path: &Path,
) -> Result<usize> {
    let frames = storyboard
        .scenes
        .iter()
        .map(|scene| {
            let layout = visualizer.layout(&scene.graph);
            visualizer.draw(&scene.graph, &layout, &scene.highlight, &scene.title)
        })
        .collect::<Result<Vec<_>>>()?;

    let count = frames.len();
    visualizer.save_animation(frames, path)?;
    Ok(count)
}

/// Render `operations` into `out_dir`, in canonical order
///
/// Stops at the first failure; files already written stay on disk.
#[tracing::instrument(skip(config, visualizer, out_dir, operations), fields(dir = %out_dir.display()))]
pub fn run_selected(
    config: &DemoConfig,
    visualizer: &dyn Visualizer,
    out_dir: &Path,
    operations: &[Operation],
) -> Result<Vec<RunReport>> {
    let mut reports = Vec::new();

    for operation in Operation::ALL {
        if !operations.contains(&operation) {
            continue;
        }
        let start = Instant::now();

        let storyboard = operation.storyboard(&config.graph, &config.operations)?;
        let path = out_dir.join(operation.file_name());
        let frames = render_storyboard(visualizer, &storyboard, &path)?;

        tracing::info!(%operation, path = %path.display(), frames, "animation_written");
        trace_time!(start, "render_operation");

        reports.push(RunReport {
            operation,
            path,
            frames,
        });
    }

    Ok(reports)
}

/// Render all six demonstrations into `out_dir`
pub fn run_all(
    config: &DemoConfig,
    visualizer: &dyn Visualizer,
    out_dir: &Path,
) -> Result<Vec<RunReport>> {
    run_selected(config, visualizer, out_dir, &Operation::ALL)
}
