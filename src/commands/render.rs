//! `graphanim render` command - write the demonstration GIFs

use std::fs;

use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;
use graphanim_core::demo::{run_selected, Operation};
use graphanim_core::error::{GraphAnimError, Result};
use graphanim_core::render::RasterVisualizer;
use graphanim_core::trace_time;

/// Execute the render command; an empty selection renders everything
pub fn execute(ctx: &CommandContext, only: &[Operation]) -> Result<()> {
    let operations: &[Operation] = if only.is_empty() {
        &Operation::ALL
    } else {
        only
    };

    if ctx.cli.out_dir.is_some() {
        fs::create_dir_all(&ctx.out_dir)
            .map_err(|e| GraphAnimError::io_operation("create", ctx.out_dir.display(), e))?;
    }

    let visualizer =
        RasterVisualizer::new(ctx.config.render.clone(), ctx.config.animation.clone());
    let reports = run_selected(&ctx.config, &visualizer, &ctx.out_dir, operations)?;

    trace_time!(ctx.start, "render_all", animations = reports.len());

    output_by_format_result!(ctx.cli.format,
        json => {
            let output = serde_json::json!({
                "status": "ok",
                "out_dir": ctx.out_dir.display().to_string(),
                "animations": reports,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), GraphAnimError>(())
        },
        human => {
            if !ctx.cli.quiet {
                if ctx.cli.verbose {
                    for report in &reports {
                        println!("{} ({} frames)", report.path.display(), report.frames);
                    }
                }
                println!(
                    "All {} graph operation GIFs generated successfully!",
                    reports.len()
                );
            }
        }
    )
}
