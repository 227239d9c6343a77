//! Command dispatch logic for graphanim

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands;
use graphanim_core::config::DemoConfig;
use graphanim_core::demo::Operation;
use graphanim_core::error::{GraphAnimError, Result};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: DemoConfig,
    pub out_dir: PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => DemoConfig::load(path)?,
            None => DemoConfig::default(),
        };

        let out_dir = match &cli.out_dir {
            Some(dir) => dir.clone(),
            None => env::current_dir()
                .map_err(|e| GraphAnimError::io_operation("resolve", "current directory", e))?,
        };

        Ok(Self {
            cli,
            config,
            out_dir,
            start,
        })
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Render { only } => commands::render::execute(ctx, only),
            Commands::Order { start } => commands::order::execute(ctx, *start),
            Commands::List => commands::list::execute(ctx),
        }
    }
}

/// No subcommand: render every demonstration
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        commands::render::execute(ctx, &Operation::ALL)
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start)?;

    debug!(elapsed = ?start.elapsed(), out_dir = %ctx.out_dir.display(), "load_config");

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
