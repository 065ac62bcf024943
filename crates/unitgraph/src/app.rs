//! Application context for CLI command execution.
//!
//! This module provides the `App` struct that owns the loaded graph and
//! configuration and answers the queries the CLI exposes.
//!
//! # Example
//!
//! ```no_run
//! use unitgraph::app::App;
//! use unitgraph::analysis::TraversalOrder;
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let app = App::from_files(Path::new("dependency_graph.dot"), None)?;
//!     let tree = app.spanning_tree(TraversalOrder::DepthFirst, None)?;
//!     println!("{} units reachable", tree.node_count());
//!     Ok(())
//! }
//! ```

use crate::analysis::{
    self, Distance, SpanningTree, TraversalOrder, WeightedAdjacency, shortest_distances,
};
use crate::config::AnalysisConfig;
use crate::domain::UnitId;
use crate::error::{Error, Result};
use crate::graph::{DependencyGraph, load_dot};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::path::Path;

/// Application context for CLI operations.
///
/// Holds the graph and the configuration. Every query borrows them
/// immutably, so one `App` can answer any number of queries.
#[derive(Debug, Clone)]
pub struct App {
    graph: DependencyGraph,
    config: AnalysisConfig,
}

/// Summary counts of a loaded graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    /// Graph name from the dump header
    pub name: Option<String>,
    /// Number of units
    pub nodes: usize,
    /// Number of edges
    pub edges: usize,
}

impl GraphStats {
    /// One-line summary, e.g. `DiGraph named 'systemd' with 3 nodes and 2 edges`.
    pub fn summary(&self) -> String {
        match &self.name {
            Some(name) => format!(
                "DiGraph named '{}' with {} nodes and {} edges",
                name, self.nodes, self.edges
            ),
            None => format!("DiGraph with {} nodes and {} edges", self.nodes, self.edges),
        }
    }
}

/// Result of a shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathReport {
    /// Unit the distances were computed from
    pub source: UnitId,
    /// Queried unit
    pub target: UnitId,
    /// Shortest distance, [`Distance::Infinite`] if unreachable
    pub distance: Distance,
    /// One shortest path, source and target included; `None` if unreachable
    pub path: Option<Vec<UnitId>>,
}

impl PathReport {
    /// Whether the target can be reached from the source.
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}

impl Serialize for PathReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PathReport", 5)?;
        state.serialize_field("source", &self.source)?;
        state.serialize_field("target", &self.target)?;
        state.serialize_field("reachable", &self.is_reachable())?;
        state.serialize_field("distance", &self.distance)?;
        state.serialize_field("path", &self.path)?;
        state.end()
    }
}

impl App {
    /// Create an App over an already loaded graph.
    pub fn new(graph: DependencyGraph, config: AnalysisConfig) -> Self {
        Self { graph, config }
    }

    /// Load the graph from a DOT dump and the configuration from an optional
    /// YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be read or parsed.
    pub fn from_files(graph_path: &Path, config_path: Option<&Path>) -> Result<Self> {
        let config = AnalysisConfig::load_or_default(config_path)?;
        let graph = load_dot(graph_path)?;
        Ok(Self::new(graph, config))
    }

    /// Select the traversal root, skipping the configured bootstrap units.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoRootAvailable`] if no unit is eligible.
    pub fn root(&self) -> Result<UnitId> {
        analysis::select_root(&self.graph, &self.config.bootstrap_units)
    }

    /// Spanning tree from `start`, or from the selected root if `None`.
    ///
    /// An explicit start unit that is not in the graph yields a single-node
    /// tree rather than an error.
    pub fn spanning_tree(
        &self,
        order: TraversalOrder,
        start: Option<&UnitId>,
    ) -> Result<SpanningTree> {
        let start = match start {
            Some(unit) => {
                if !self.graph.contains(unit) {
                    tracing::warn!(unit = %unit, "Start unit not in graph, tree will hold only it");
                }
                unit.clone()
            }
            None => self.root()?,
        };
        Ok(analysis::spanning_tree(&self.graph, &start, order))
    }

    /// Weighted view of the graph using the configured weight table.
    pub fn weighted(&self) -> WeightedAdjacency {
        WeightedAdjacency::build(&self.graph, &self.config.weights)
    }

    /// Shortest weighted distance (and one shortest path) to `target`, from
    /// `from` or from the selected root if `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingNode`] if `target` or `from` is not in the
    /// graph, and [`Error::NoRootAvailable`] if no root can be selected. An
    /// unreachable target is a successful result with
    /// [`Distance::Infinite`].
    pub fn shortest_path(&self, target: &UnitId, from: Option<&UnitId>) -> Result<PathReport> {
        if !self.graph.contains(target) {
            return Err(Error::MissingNode(target.clone()));
        }
        let source = match from {
            Some(unit) => unit.clone(),
            None => self.root()?,
        };

        let distances = shortest_distances(&self.weighted(), &source)?;
        let distance = distances
            .distance(target)
            .ok_or_else(|| Error::MissingNode(target.clone()))?;
        let path = distances
            .path_to(target)
            .map(|hops| hops.into_iter().cloned().collect());

        Ok(PathReport {
            source,
            target: target.clone(),
            distance,
            path,
        })
    }

    /// Node and edge counts of the graph.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            name: self.graph.name().map(str::to_string),
            nodes: self.graph.node_count(),
            edges: self.graph.edge_count(),
        }
    }
}
