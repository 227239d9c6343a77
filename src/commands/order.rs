//! `graphanim order` command - print the BFS order of the base graph

use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;
use graphanim_core::error::{GraphAnimError, Result};
use graphanim_core::graph::{bfs_order, Graph, VertexId};

/// Execute the order command
pub fn execute(ctx: &CommandContext, start: Option<VertexId>) -> Result<()> {
    let base = &ctx.config.graph;
    let start = start.unwrap_or(ctx.config.operations.traversal_start);

    let graph = Graph::from_lists(&base.nodes, &base.edges)?;
    let order = bfs_order(&graph, start)?;

    output_by_format_result!(ctx.cli.format,
        json => {
            let output = serde_json::json!({
                "start": start,
                "order": order,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), GraphAnimError>(())
        },
        human => {
            let steps: Vec<String> = order.iter().map(|v| v.to_string()).collect();
            println!("{}", steps.join(" -> "));
        }
    )
}
