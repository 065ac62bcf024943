//! Property tests for the traversals and the shortest-path engine.

use petgraph::algo::dijkstra;
use petgraph::visit::Dfs;
use proptest::prelude::*;
use std::collections::HashSet;
use std::fmt::Write;
use unitgraph::analysis::{
    Distance, TraversalOrder, WeightTable, WeightedAdjacency, shortest_distances, spanning_tree,
};
use unitgraph::domain::UnitId;
use unitgraph::graph::{DependencyGraph, parse_dot};

const RELATIONS: [Option<&str>; 6] = [
    Some("Requires"),
    Some("Wants"),
    Some("Before"),
    Some("After"),
    Some("Conflicts"),
    None,
];

/// Random graph as (unit count, edges as (from, to, relation slot)).
fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize, usize)>)> {
    (1usize..12).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n, 0..RELATIONS.len()), 0..30),
        )
    })
}

/// Render the random graph as a dump so every unit exists, edges or not.
fn build_graph(units: usize, edges: &[(usize, usize, usize)]) -> DependencyGraph {
    let mut dump = String::from("digraph {\n");
    for i in 0..units {
        writeln!(dump, "  \"u{i}\";").unwrap();
    }
    for &(from, to, relation) in edges {
        let written = match RELATIONS[relation] {
            Some(name) => writeln!(dump, "  \"u{from}\"->\"u{to}\" [relation=\"{name}\"];"),
            None => writeln!(dump, "  \"u{from}\"->\"u{to}\";"),
        };
        written.unwrap();
    }
    dump.push_str("}\n");
    parse_dot(&dump).unwrap()
}

fn table_strategy() -> impl Strategy<Value = WeightTable> {
    (0u64..20, 0u64..20, 0u64..20, 0u64..20, 0u64..20, 0u64..20).prop_map(
        |(requires, wants, before, after, conflicts, default)| WeightTable {
            requires,
            wants,
            before,
            after,
            conflicts,
            default,
        },
    )
}

/// Units reachable from `start`, computed independently with petgraph.
fn reachable(adjacency: &WeightedAdjacency, start: &UnitId) -> HashSet<UnitId> {
    let graph = adjacency.as_graph();
    let Some(start_index) = graph.node_indices().find(|&i| &graph[i] == start) else {
        return HashSet::new();
    };
    let mut dfs = Dfs::new(graph, start_index);
    let mut seen = HashSet::new();
    while let Some(index) = dfs.next(graph) {
        seen.insert(graph[index].clone());
    }
    seen
}

fn order_of(depth_first: bool) -> TraversalOrder {
    if depth_first {
        TraversalOrder::DepthFirst
    } else {
        TraversalOrder::BreadthFirst
    }
}

proptest! {
    #[test]
    fn prop_tree_spans_exactly_the_reachable_units(
        (units, edges) in graph_strategy(),
        start in 0usize..12,
        depth_first in any::<bool>(),
    ) {
        let graph = build_graph(units, &edges);
        let start = UnitId::new(format!("u{}", start % units));
        let order = order_of(depth_first);
        let tree = spanning_tree(&graph, &start, order);
        let adjacency = WeightedAdjacency::build(&graph, &WeightTable::default());

        let in_tree: HashSet<UnitId> = tree.nodes().map(|node| node.id.clone()).collect();
        prop_assert_eq!(in_tree.len(), tree.node_count());
        prop_assert_eq!(&in_tree, &reachable(&adjacency, &start));

        prop_assert!(tree.parent_of(&start).is_none());
        for node in tree.nodes().skip(1) {
            let parent = tree.parent_of(&node.id);
            prop_assert!(parent.is_some(), "{} has no parent", node.id);
            let parent = parent.unwrap();
            let targets: Vec<UnitId> = graph
                .dependencies_of(parent)
                .unwrap()
                .into_iter()
                .map(|(to, _)| to.clone())
                .collect();
            prop_assert!(targets.contains(&node.id), "{} -> {} is not an edge", parent, node.id);
        }
    }

    #[test]
    fn prop_traversals_are_deterministic(
        (units, edges) in graph_strategy(),
        depth_first in any::<bool>(),
    ) {
        let order = order_of(depth_first);
        let start = UnitId::from("u0");
        let first = spanning_tree(&build_graph(units, &edges), &start, order);
        let second = spanning_tree(&build_graph(units, &edges), &start, order);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_distances_match_petgraph_dijkstra(
        (units, edges) in graph_strategy(),
        table in table_strategy(),
        start in 0usize..12,
    ) {
        let graph = build_graph(units, &edges);
        let adjacency = WeightedAdjacency::build(&graph, &table);
        let source = UnitId::new(format!("u{}", start % units));
        let distances = shortest_distances(&adjacency, &source).unwrap();

        let inner = adjacency.as_graph();
        let source_index = inner.node_indices().find(|&i| inner[i] == source).unwrap();
        let expected = dijkstra(inner, source_index, None, |edge| *edge.weight());

        prop_assert_eq!(distances.distance(&source), Some(Distance::Finite(0)));
        for index in inner.node_indices() {
            let want = expected
                .get(&index)
                .map_or(Distance::Infinite, |&d| Distance::Finite(d));
            prop_assert_eq!(distances.distance(&inner[index]), Some(want));
        }
    }

    #[test]
    fn prop_predecessor_edges_are_tight(
        (units, edges) in graph_strategy(),
        table in table_strategy(),
    ) {
        let graph = build_graph(units, &edges);
        let adjacency = WeightedAdjacency::build(&graph, &table);
        let source = UnitId::from("u0");
        let distances = shortest_distances(&adjacency, &source).unwrap();

        for (unit, distance) in distances.iter() {
            let Some(predecessor) = distances.predecessor(unit) else {
                prop_assert!(unit == &source || !distance.is_finite());
                continue;
            };
            let weight = adjacency.weight(predecessor, unit).unwrap();
            let before = distances.distance(predecessor).and_then(Distance::value).unwrap();
            prop_assert_eq!(distance, Distance::Finite(before + weight));
        }
    }

    #[test]
    fn prop_weight_assignment_is_idempotent(
        (units, edges) in graph_strategy(),
        table in table_strategy(),
    ) {
        let graph = build_graph(units, &edges);
        prop_assert_eq!(
            WeightedAdjacency::build(&graph, &table),
            WeightedAdjacency::build(&graph, &table)
        );
    }
}
