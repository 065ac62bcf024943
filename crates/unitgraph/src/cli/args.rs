//! CLI argument structs for all commands.
//!
//! Each command has its own argument struct with clap derive attributes
//! for parsing and validation.

use clap::Parser;
use std::path::PathBuf;

use super::validators::validate_unit_name;
use crate::domain::UnitId;

/// Arguments for the `root` command
#[derive(Parser, Debug, Clone)]
pub struct RootArgs {
    /// Dependency dump produced by `systemd-analyze dot`
    pub file: PathBuf,
}

/// Arguments for the `dfs` and `bfs` commands
#[derive(Parser, Debug, Clone)]
pub struct TreeArgs {
    /// Dependency dump produced by `systemd-analyze dot`
    pub file: PathBuf,

    /// Start unit (defaults to the automatically selected root)
    ///
    /// A unit that does not exist in the graph produces a tree holding only
    /// that unit.
    #[arg(short, long, value_parser = validate_unit_name)]
    pub root: Option<UnitId>,
}

/// Arguments for the `path` command
#[derive(Parser, Debug, Clone)]
pub struct PathArgs {
    /// Dependency dump produced by `systemd-analyze dot`
    pub file: PathBuf,

    /// Unit to compute the distance to
    #[arg(value_parser = validate_unit_name)]
    pub target: UnitId,

    /// Source unit (defaults to the automatically selected root)
    #[arg(short, long, value_parser = validate_unit_name)]
    pub from: Option<UnitId>,
}

/// Arguments for the `stats` command
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Dependency dump produced by `systemd-analyze dot`
    pub file: PathBuf,
}
