//! Output formatting for CLI commands.
//!
//! This module provides utilities for formatting command output in both
//! human-readable text format and JSON format for programmatic use.
//!
//! Submodules:
//! - [`color`]: Color and styling helpers
//! - [`tree`]: Spanning tree rendering with ASCII/Unicode connectors

pub mod color;
pub mod tree;

use crate::app::{GraphStats, PathReport};
use crate::domain::UnitId;
use crate::graph::format_label;
use serde::Serialize;
use serde_json::json;
use std::env;
use std::io::{self, Write};

pub use tree::print_tree;

use color::{bold, colorize_distance, colorize_unit, dimmed};

// ============================================================================
// Output Configuration
// ============================================================================

/// Configuration for output formatting.
///
/// This struct holds settings that control how output is formatted:
/// ASCII fallback mode and color output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use ASCII-only connectors and icons instead of Unicode.
    pub use_ascii: bool,
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new `OutputConfig` with explicit values.
    pub fn new(use_ascii: bool, use_colors: bool) -> Self {
        Self {
            use_ascii,
            use_colors,
        }
    }

    /// Create an `OutputConfig` by reading from environment variables.
    ///
    /// Reads:
    /// - `UNITGRAPH_ASCII`: Set to "1" or "true" for ASCII-only output (default: false)
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `UNITGRAPH_COLOR`: Set to "0" or "false" to disable colors (default: true)
    pub fn from_env() -> Self {
        let use_ascii = match env::var("UNITGRAPH_ASCII") {
            Ok(v) if v == "1" || v.eq_ignore_ascii_case("true") => true,
            Ok(v) if v == "0" || v.eq_ignore_ascii_case("false") || v.is_empty() => false,
            Ok(v) => {
                tracing::warn!(
                    env_var = "UNITGRAPH_ASCII",
                    value = %v,
                    "Invalid value (expected '1', 'true', '0', or 'false'), using default"
                );
                false
            }
            Err(_) => false,
        };

        // Respect NO_COLOR standard (https://no-color.org/)
        let use_colors = env::var("NO_COLOR").is_err()
            && env::var("UNITGRAPH_COLOR")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true);

        Self {
            use_ascii,
            use_colors,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_ascii: false,
            use_colors: true,
        }
    }
}

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

/// How unit labels are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelStyle {
    /// The label as it appears in the dump
    #[default]
    Full,
    /// Shortened with [`format_label`]
    Short,
}

impl LabelStyle {
    /// Render `id` in this style.
    pub fn apply(self, id: &UnitId) -> String {
        match self {
            Self::Full => id.to_string(),
            Self::Short => format_label(id.as_str()),
        }
    }
}

// ============================================================================
// Public Dispatch Functions
// ============================================================================

/// Print the selected root unit
pub fn print_root(root: &UnitId, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match mode {
        OutputMode::Text => writeln!(handle, "{root}"),
        OutputMode::Json => write_json(&mut handle, &json!({ "root": root })),
    }
}

/// Print graph summary statistics
pub fn print_stats(stats: &GraphStats, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match mode {
        OutputMode::Text => writeln!(handle, "{}", stats.summary()),
        OutputMode::Json => write_json(&mut handle, stats),
    }
}

/// Print a shortest-path query result
pub fn print_path_report(
    report: &PathReport,
    mode: OutputMode,
    labels: LabelStyle,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let config = OutputConfig::from_env();

    match mode {
        OutputMode::Text => print_path_report_text(&mut handle, report, labels, &config),
        OutputMode::Json => write_json(&mut handle, report),
    }
}

fn write_json<W: Write, T: Serialize>(w: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{json}")
}

// ============================================================================
// Text Formatting
// ============================================================================

fn print_path_report_text<W: Write>(
    w: &mut W,
    report: &PathReport,
    labels: LabelStyle,
    config: &OutputConfig,
) -> io::Result<()> {
    let source = colorize_unit(&labels.apply(&report.source), config);
    let target = colorize_unit(&labels.apply(&report.target), config);

    if !report.distance.is_finite() {
        writeln!(
            w,
            "{} is {} from {}",
            target,
            colorize_distance(report.distance, config),
            source
        )?;
        return Ok(());
    }

    writeln!(
        w,
        "{} {} {}: {}",
        source,
        dimmed("->", config),
        target,
        colorize_distance(report.distance, config)
    )?;

    if let Some(path) = &report.path {
        let arrow = if config.use_ascii { " -> " } else { " → " };
        let hops: Vec<String> = path
            .iter()
            .map(|id| colorize_unit(&labels.apply(id), config))
            .collect();
        writeln!(
            w,
            "  {} {}",
            bold("Path:", config),
            hops.join(&dimmed(arrow, config))
        )?;
    }

    Ok(())
}
