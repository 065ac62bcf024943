//! Read-only dependency graph backed by petgraph.
//!
//! Submodules:
//! - [`dot`]: loader for the DOT dialect written by `systemd-analyze dot`
//! - [`labels`]: label shortening for display
//!
//! # Iteration Order
//!
//! Both node and adjacency iteration follow insertion order: [`units`] yields
//! units in the order the loader first saw them, and [`outgoing`] yields a
//! unit's edges in the order they were added. The root selection and
//! shortest-path tie-breaking rules are defined in terms of this order.
//!
//! [`units`]: DependencyGraph::units
//! [`outgoing`]: DependencyGraph::outgoing

pub mod dot;
pub mod labels;

use crate::domain::{Relation, UnitId};
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

pub use dot::{load_dot, parse_dot};
pub use labels::format_label;

/// Directed unit dependency graph with optional relation labels on edges.
///
/// Edges point from the dependent unit to the unit it references
/// (`a.service -> b.target` for "a requires/wants/orders against b").
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// Name from the `digraph NAME {` header, if any
    name: Option<String>,
    graph: DiGraph<UnitId, Option<Relation>>,
    node_map: HashMap<UnitId, NodeIndex>,
}

impl DependencyGraph {
    /// Create an empty, unnamed graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with the given name.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Build a graph from `(from, to, relation)` triples, in order.
    ///
    /// Mostly useful in tests and examples.
    pub fn from_edges<'a, I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str, Option<Relation>)>,
    {
        let mut graph = Self::new();
        for (from, to, relation) in edges {
            graph.add_dependency(UnitId::from(from), UnitId::from(to), relation);
        }
        graph
    }

    /// Graph name from the dump header.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Add a unit if it is not present yet, returning its index.
    pub(crate) fn add_unit(&mut self, id: UnitId) -> NodeIndex {
        if let Some(&index) = self.node_map.get(&id) {
            return index;
        }
        let index = self.graph.add_node(id.clone());
        self.node_map.insert(id, index);
        index
    }

    /// Add an edge `from -> to`, adding either unit if needed.
    ///
    /// A second edge between the same ordered pair overwrites the relation of
    /// the first one and keeps its position in adjacency order.
    pub(crate) fn add_dependency(&mut self, from: UnitId, to: UnitId, relation: Option<Relation>) {
        let from = self.add_unit(from);
        let to = self.add_unit(to);
        self.graph.update_edge(from, to, relation);
    }

    /// Number of units.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the graph has no units at all.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Whether `id` is a unit of this graph.
    pub fn contains(&self, id: &UnitId) -> bool {
        self.node_map.contains_key(id)
    }

    /// All units in insertion order.
    pub fn units(&self) -> impl Iterator<Item = &UnitId> {
        self.graph.node_indices().map(|index| &self.graph[index])
    }

    /// Number of edges pointing at `id`, or `None` if the unit is unknown.
    pub fn in_degree(&self, id: &UnitId) -> Option<usize> {
        self.index_of(id).map(|index| self.in_degree_at(index))
    }

    /// Direct dependencies of `id` in adjacency order, or `None` if the unit
    /// is unknown.
    pub fn dependencies_of(&self, id: &UnitId) -> Option<Vec<(&UnitId, Option<&Relation>)>> {
        let index = self.index_of(id)?;
        Some(
            self.outgoing(index)
                .into_iter()
                .map(|(target, relation)| (&self.graph[target], relation))
                .collect(),
        )
    }

    pub(crate) fn index_of(&self, id: &UnitId) -> Option<NodeIndex> {
        self.node_map.get(id).copied()
    }

    pub(crate) fn unit(&self, index: NodeIndex) -> &UnitId {
        &self.graph[index]
    }

    pub(crate) fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub(crate) fn in_degree_at(&self, index: NodeIndex) -> usize {
        self.graph
            .edges_directed(index, Direction::Incoming)
            .count()
    }

    /// Outgoing edges of `index` in insertion order.
    ///
    /// petgraph walks a node's edge list newest-first, so the list is
    /// reversed here to present the order the edges were added in.
    pub(crate) fn outgoing(&self, index: NodeIndex) -> Vec<(NodeIndex, Option<&Relation>)> {
        let mut edges: Vec<_> = self
            .graph
            .edges(index)
            .map(|edge| (edge.target(), edge.weight().as_ref()))
            .collect();
        edges.reverse();
        edges
    }

    pub(crate) fn inner(&self) -> &DiGraph<UnitId, Option<Relation>> {
        &self.graph
    }
}
