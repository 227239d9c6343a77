//! CLI argument parsing for graphanim
//!
//! Global flags: --config, --out-dir, --format, --quiet, --verbose,
//! --log-level, --log-json. Without a subcommand the program renders all
//! six animations.

pub mod format;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use graphanim_core::demo::Operation;
pub use graphanim_core::format::OutputFormat;
use graphanim_core::graph::VertexId;

/// Graphanim - animated GIFs of elementary graph operations
#[derive(Parser, Debug)]
#[command(name = "graphanim")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Demo configuration file (TOML)
    #[arg(long, global = true, env = "GRAPHANIM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory the animations are written to (default: current directory)
    #[arg(long, global = true)]
    pub out_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `graphanim_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the demonstration animations
    Render {
        /// Render only these operations (comma-separated or repeated)
        #[arg(long, value_delimiter = ',')]
        only: Vec<Operation>,
    },

    /// Print the breadth-first traversal order of the base graph
    Order {
        /// Start vertex (default: the configured traversal start)
        #[arg(long)]
        start: Option<VertexId>,
    },

    /// List the demonstrations and their output files
    List,
}
