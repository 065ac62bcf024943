//! Command execution logic.
//!
//! This module contains the implementation of all CLI commands.

use anyhow::Result;

use super::args::{PathArgs, RootArgs, StatsArgs, TreeArgs};
use crate::analysis::TraversalOrder;
use crate::app::App;
use crate::output::{self, LabelStyle, OutputMode};

/// Execute the root command
pub fn execute_root(app: &App, _args: &RootArgs, output_mode: OutputMode) -> Result<()> {
    let root = app.root()?;
    output::print_root(&root, output_mode)?;
    Ok(())
}

/// Execute the dfs and bfs commands
pub fn execute_tree(
    app: &App,
    args: &TreeArgs,
    order: TraversalOrder,
    output_mode: OutputMode,
    labels: LabelStyle,
) -> Result<()> {
    let tree = app.spanning_tree(order, args.root.as_ref())?;
    tracing::info!(
        %order,
        root = %tree.root().id,
        units = tree.node_count(),
        "Spanning tree ready"
    );
    output::print_tree(&tree, output_mode, labels)?;
    Ok(())
}

/// Execute the path command
pub fn execute_path(
    app: &App,
    args: &PathArgs,
    output_mode: OutputMode,
    labels: LabelStyle,
) -> Result<()> {
    let report = app.shortest_path(&args.target, args.from.as_ref())?;
    if !report.is_reachable() {
        tracing::info!(
            source = %report.source,
            target = %report.target,
            "Target is unreachable"
        );
    }
    output::print_path_report(&report, output_mode, labels)?;
    Ok(())
}

/// Execute the stats command
pub fn execute_stats(app: &App, _args: &StatsArgs, output_mode: OutputMode) -> Result<()> {
    output::print_stats(&app.stats(), output_mode)?;
    Ok(())
}
