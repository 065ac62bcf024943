//! Relation-based edge weights.
//!
//! Shortest-path queries treat each dependency edge as a cost derived from
//! its relation kind: a hard `Requires` is cheap to follow, a `Conflicts`
//! edge is nearly prohibitive.

use crate::domain::{Relation, UnitId};
use crate::graph::DependencyGraph;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Weight of a `Requires` edge
pub const REQUIRES_WEIGHT: u64 = 1;
/// Weight of a `Wants` edge
pub const WANTS_WEIGHT: u64 = 3;
/// Weight of a `Before` edge
pub const BEFORE_WEIGHT: u64 = 10;
/// Weight of an `After` edge
pub const AFTER_WEIGHT: u64 = 10;
/// Weight of a `Conflicts` edge
pub const CONFLICTS_WEIGHT: u64 = 1000;
/// Weight of unlabeled edges and unrecognized relation kinds
pub const DEFAULT_WEIGHT: u64 = REQUIRES_WEIGHT;

/// Relation kind → edge weight table.
///
/// Weights are unsigned, so every derived adjacency satisfies Dijkstra's
/// non-negativity precondition. In YAML the keys are the relation names:
///
/// ```yaml
/// Requires: 1
/// Wants: 3
/// Before: 10
/// After: 10
/// Conflicts: 1000
/// Default: 1
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default, deny_unknown_fields)]
pub struct WeightTable {
    /// Weight for `Requires`
    pub requires: u64,
    /// Weight for `Wants`
    pub wants: u64,
    /// Weight for `Before`
    pub before: u64,
    /// Weight for `After`
    pub after: u64,
    /// Weight for `Conflicts`
    pub conflicts: u64,
    /// Weight for edges without a relation or with any other relation kind
    pub default: u64,
}

impl Default for WeightTable {
    fn default() -> Self {
        Self {
            requires: REQUIRES_WEIGHT,
            wants: WANTS_WEIGHT,
            before: BEFORE_WEIGHT,
            after: AFTER_WEIGHT,
            conflicts: CONFLICTS_WEIGHT,
            default: DEFAULT_WEIGHT,
        }
    }
}

impl WeightTable {
    /// Weight of an edge with the given relation.
    pub fn weight_for(&self, relation: Option<&Relation>) -> u64 {
        match relation {
            Some(Relation::Requires) => self.requires,
            Some(Relation::Wants) => self.wants,
            Some(Relation::Before) => self.before,
            Some(Relation::After) => self.after,
            Some(Relation::Conflicts) => self.conflicts,
            Some(Relation::Other(_)) | None => self.default,
        }
    }
}

/// Weighted view of a [`DependencyGraph`].
///
/// Holds every unit of the source graph (sinks have no neighbors) in the same
/// order, with each edge's relation replaced by its weight. Immutable once
/// built.
#[derive(Debug, Clone)]
pub struct WeightedAdjacency {
    graph: DiGraph<UnitId, u64>,
    node_map: HashMap<UnitId, NodeIndex>,
}

impl WeightedAdjacency {
    /// Derive the weighted view of `graph` using `table`.
    pub fn build(graph: &DependencyGraph, table: &WeightTable) -> Self {
        let weighted = graph
            .inner()
            .map(|_, id| id.clone(), |_, relation| table.weight_for(relation.as_ref()));
        let node_map = weighted
            .node_indices()
            .map(|index| (weighted[index].clone(), index))
            .collect();

        tracing::debug!(
            nodes = weighted.node_count(),
            edges = weighted.edge_count(),
            "Built weighted adjacency"
        );
        Self {
            graph: weighted,
            node_map,
        }
    }

    /// Number of units.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of weighted edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether `id` is a unit of this adjacency.
    pub fn contains(&self, id: &UnitId) -> bool {
        self.node_map.contains_key(id)
    }

    /// All units in the source graph's insertion order.
    pub fn units(&self) -> impl Iterator<Item = &UnitId> {
        self.graph.node_indices().map(|index| &self.graph[index])
    }

    /// Weight of the edge `from -> to`, if there is one.
    pub fn weight(&self, from: &UnitId, to: &UnitId) -> Option<u64> {
        let from = self.index_of(from)?;
        let to = self.index_of(to)?;
        self.graph
            .find_edge(from, to)
            .and_then(|edge| self.graph.edge_weight(edge))
            .copied()
    }

    /// Weighted neighbors of `id` in adjacency order.
    pub fn neighbors(&self, id: &UnitId) -> Vec<(&UnitId, u64)> {
        self.index_of(id)
            .map(|index| {
                self.outgoing(index)
                    .into_iter()
                    .map(|(target, weight)| (&self.graph[target], weight))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Every unit with its weighted neighbors, in order.
    pub fn entries(&self) -> Vec<(&UnitId, Vec<(&UnitId, u64)>)> {
        self.units().map(|id| (id, self.neighbors(id))).collect()
    }

    /// The underlying petgraph graph.
    pub fn as_graph(&self) -> &DiGraph<UnitId, u64> {
        &self.graph
    }

    pub(crate) fn index_of(&self, id: &UnitId) -> Option<NodeIndex> {
        self.node_map.get(id).copied()
    }

    pub(crate) fn unit(&self, index: NodeIndex) -> &UnitId {
        &self.graph[index]
    }

    /// Outgoing `(target, weight)` pairs of `index` in insertion order.
    pub(crate) fn outgoing(&self, index: NodeIndex) -> Vec<(NodeIndex, u64)> {
        let mut edges: Vec<_> = self
            .graph
            .edges(index)
            .map(|edge| (edge.target(), *edge.weight()))
            .collect();
        edges.reverse();
        edges
    }
}

impl PartialEq for WeightedAdjacency {
    fn eq(&self, other: &Self) -> bool {
        self.entries() == other.entries()
    }
}

impl Eq for WeightedAdjacency {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(Relation::Requires), 1)]
    #[case(Some(Relation::Wants), 3)]
    #[case(Some(Relation::Before), 10)]
    #[case(Some(Relation::After), 10)]
    #[case(Some(Relation::Conflicts), 1000)]
    #[case(Some(Relation::Other("Requisite".to_string())), 1)]
    #[case(None, 1)]
    fn test_default_weight_table(#[case] relation: Option<Relation>, #[case] expected: u64) {
        assert_eq!(WeightTable::default().weight_for(relation.as_ref()), expected);
    }

    #[test]
    fn test_build_weighted_adjacency() {
        let graph = DependencyGraph::from_edges([
            ("a", "b", Some(Relation::Requires)),
            ("b", "c", Some(Relation::Conflicts)),
            ("a", "c", Some(Relation::Wants)),
        ]);

        let adjacency = WeightedAdjacency::build(&graph, &WeightTable::default());

        let a = UnitId::from("a");
        let b = UnitId::from("b");
        let c = UnitId::from("c");
        assert_eq!(adjacency.weight(&a, &b), Some(1));
        assert_eq!(adjacency.weight(&a, &c), Some(3));
        assert_eq!(adjacency.weight(&b, &c), Some(1000));
        assert_eq!(adjacency.weight(&c, &a), None);
        assert_eq!(adjacency.edge_count(), 3);
    }

    #[test]
    fn test_sinks_are_kept_with_no_neighbors() {
        let graph = DependencyGraph::from_edges([("a", "b", None)]);
        let adjacency = WeightedAdjacency::build(&graph, &WeightTable::default());

        assert!(adjacency.contains(&UnitId::from("b")));
        assert!(adjacency.neighbors(&UnitId::from("b")).is_empty());
        let units: Vec<_> = adjacency.units().map(UnitId::as_str).collect();
        assert_eq!(units, vec!["a", "b"]);
    }

    #[test]
    fn test_custom_table_is_applied() {
        let graph =
            DependencyGraph::from_edges([("a", "b", Some(Relation::Wants)), ("a", "c", None)]);
        let table = WeightTable {
            wants: 7,
            default: 2,
            ..WeightTable::default()
        };

        let adjacency = WeightedAdjacency::build(&graph, &table);
        let neighbors: Vec<_> = adjacency
            .neighbors(&UnitId::from("a"))
            .into_iter()
            .map(|(id, w)| (id.as_str(), w))
            .collect();
        assert_eq!(neighbors, vec![("b", 7), ("c", 2)]);
    }

    #[test]
    fn test_build_is_idempotent() {
        let graph = DependencyGraph::from_edges([
            ("a", "b", Some(Relation::After)),
            ("b", "a", Some(Relation::Before)),
            ("b", "c", None),
        ]);
        let table = WeightTable::default();

        assert_eq!(
            WeightedAdjacency::build(&graph, &table),
            WeightedAdjacency::build(&graph, &table)
        );
    }

    #[test]
    fn test_weight_table_yaml_partial_override() {
        let table: WeightTable = serde_yaml::from_str("Wants: 5\nConflicts: 50\n").unwrap();
        assert_eq!(table.wants, 5);
        assert_eq!(table.conflicts, 50);
        assert_eq!(table.requires, REQUIRES_WEIGHT);
        assert_eq!(table.default, DEFAULT_WEIGHT);
    }

    #[test]
    fn test_weight_table_rejects_negative_and_unknown_keys() {
        assert!(serde_yaml::from_str::<WeightTable>("Wants: -1\n").is_err());
        assert!(serde_yaml::from_str::<WeightTable>("Requisite: 2\n").is_err());
    }
}
