//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for unitgraph using clap's derive API.
//! Each command has its own argument struct with validation and helpful error messages.
//!
//! # Commands
//!
//! - `root`: Print the unit traversals start from
//! - `dfs`: Print the depth-first spanning tree
//! - `bfs`: Print the breadth-first spanning tree
//! - `path`: Weighted shortest distance to a unit
//! - `stats`: Node and edge counts
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//! - `--config <PATH>`: YAML file with relation weights and bootstrap units
//! - `--short-labels`: Shorten unit names in trees and paths
//!
//! # Example
//!
//! ```bash
//! systemd-analyze dot > deps.dot
//! unitgraph root deps.dot
//! unitgraph dfs deps.dot --root multi-user.target
//! unitgraph --json path deps.dot sshd.service
//! ```

mod args;
mod execute;
mod validators;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Re-export argument structs
pub use args::{PathArgs, RootArgs, StatsArgs, TreeArgs};

// Re-export validators for external use
pub use validators::validate_unit_name;

/// Unitgraph - systemd unit dependency analysis
///
/// Reads the DOT dump written by `systemd-analyze dot`, picks a root unit,
/// builds DFS/BFS spanning trees and computes weighted shortest distances.
#[derive(Parser, Debug)]
#[command(name = "unitgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// YAML configuration (relation weights, bootstrap units)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Shorten unit names (`getty@tty1.service` becomes `tty1`)
    #[arg(long, global = true)]
    pub short_labels: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the unit traversals start from
    ///
    /// The root is the unit with the fewest incoming edges, skipping the
    /// bootstrap units (`init.scope` by default). Ties go to the unit that
    /// appears first in the dump.
    Root(RootArgs),

    /// Print the depth-first spanning tree
    Dfs(TreeArgs),

    /// Print the breadth-first spanning tree
    Bfs(TreeArgs),

    /// Weighted shortest distance (and one shortest path) to a unit
    ///
    /// Edge weights come from the relation kind: Requires 1, Wants 3,
    /// Before/After 10, Conflicts 1000, anything else 1.
    Path(PathArgs),

    /// Show node and edge counts
    Stats(StatsArgs),
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Execute the CLI command
    pub fn execute(&self) -> Result<()> {
        use crate::analysis::TraversalOrder;
        use crate::app::App;
        use crate::output::{LabelStyle, OutputMode};

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        let labels = if self.short_labels {
            LabelStyle::Short
        } else {
            LabelStyle::Full
        };
        let config = self.config.as_deref();

        match &self.command {
            Some(Commands::Root(args)) => {
                let app = App::from_files(&args.file, config)?;
                execute::execute_root(&app, args, output_mode)
            }
            Some(Commands::Dfs(args)) => {
                let app = App::from_files(&args.file, config)?;
                execute::execute_tree(
                    &app,
                    args,
                    TraversalOrder::DepthFirst,
                    output_mode,
                    labels,
                )
            }
            Some(Commands::Bfs(args)) => {
                let app = App::from_files(&args.file, config)?;
                execute::execute_tree(
                    &app,
                    args,
                    TraversalOrder::BreadthFirst,
                    output_mode,
                    labels,
                )
            }
            Some(Commands::Path(args)) => {
                let app = App::from_files(&args.file, config)?;
                execute::execute_path(&app, args, output_mode, labels)
            }
            Some(Commands::Stats(args)) => {
                let app = App::from_files(&args.file, config)?;
                execute::execute_stats(&app, args, output_mode)
            }
            None => {
                println!("Unitgraph systemd dependency analysis");
                println!("Use --help for more information");
                Ok(())
            }
        }
    }
}
