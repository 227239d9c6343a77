//! `graphanim list` command - list the demonstrations

use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;
use graphanim_core::demo::Operation;
use graphanim_core::error::{GraphAnimError, Result};

/// Execute the list command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    output_by_format_result!(ctx.cli.format,
        json => {
            let output: Vec<_> = Operation::ALL
                .iter()
                .map(|op| {
                    serde_json::json!({
                        "operation": op,
                        "file": op.file_name(),
                        "description": op.description(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), GraphAnimError>(())
        },
        human => {
            for op in Operation::ALL {
                println!("{:<14} {:<24} {}", op.name(), op.file_name(), op.description());
            }
        }
    )
}
