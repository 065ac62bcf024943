//! Depth-first and breadth-first spanning trees.
//!
//! Both traversals are iterative (explicit stack or queue), so graph depth
//! never turns into call depth. Neighbors are explored in the graph's
//! adjacency order. A start unit missing from the graph yields a tree holding
//! only that unit.

use super::tree::SpanningTree;
use crate::domain::{Relation, UnitId};
use crate::graph::DependencyGraph;
use petgraph::graph::NodeIndex;
use std::collections::{HashSet, VecDeque};
use std::fmt;

/// Exploration order of a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Descend into the first unvisited neighbor before its siblings
    DepthFirst,
    /// Expand all neighbors of a unit before any of theirs
    BreadthFirst,
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DepthFirst => write!(f, "DFS"),
            Self::BreadthFirst => write!(f, "BFS"),
        }
    }
}

/// Build the spanning tree of `graph` rooted at `start` in the given order.
pub fn spanning_tree(
    graph: &DependencyGraph,
    start: &UnitId,
    order: TraversalOrder,
) -> SpanningTree {
    let tree = match order {
        TraversalOrder::DepthFirst => dfs_tree(graph, start),
        TraversalOrder::BreadthFirst => bfs_tree(graph, start),
    };
    tracing::debug!(
        %order,
        root = %start,
        nodes = tree.node_count(),
        "Built spanning tree"
    );
    tree
}

/// One level of the explicit DFS stack: the tree slot being expanded and the
/// neighbors it has not looked at yet.
struct Frame<'g> {
    slot: usize,
    pending: std::vec::IntoIter<(NodeIndex, Option<&'g Relation>)>,
}

/// Depth-first spanning tree rooted at `start`.
///
/// A neighbor is marked visited the moment its tree edge is recorded, before
/// its own neighbors are looked at, so cross edges in cyclic graphs never
/// revisit it.
pub fn dfs_tree(graph: &DependencyGraph, start: &UnitId) -> SpanningTree {
    let mut tree = SpanningTree::new(start.clone());
    let Some(start_index) = graph.index_of(start) else {
        tracing::debug!(root = %start, "Start unit not in graph, returning single-node tree");
        return tree;
    };

    let mut visited = HashSet::from([start_index]);
    let mut stack = vec![Frame {
        slot: 0,
        pending: graph.outgoing(start_index).into_iter(),
    }];

    while let Some(frame) = stack.last_mut() {
        let parent_slot = frame.slot;
        let Some((neighbor, relation)) = frame.pending.next() else {
            stack.pop();
            continue;
        };

        if visited.insert(neighbor) {
            tracing::trace!(to = %graph.unit(neighbor), parent_slot, "DFS tree edge");
            let slot = tree.attach(parent_slot, graph.unit(neighbor).clone(), relation.cloned());
            stack.push(Frame {
                slot,
                pending: graph.outgoing(neighbor).into_iter(),
            });
        }
    }

    tree
}

/// Breadth-first spanning tree rooted at `start`.
///
/// Units are marked visited when dequeued for expansion. A neighbor joins the
/// tree, with the unit being expanded as its parent, only if it is neither
/// visited nor already waiting in the queue, so each unit gets exactly one
/// parent.
pub fn bfs_tree(graph: &DependencyGraph, start: &UnitId) -> SpanningTree {
    let mut tree = SpanningTree::new(start.clone());
    let Some(start_index) = graph.index_of(start) else {
        tracing::debug!(root = %start, "Start unit not in graph, returning single-node tree");
        return tree;
    };

    let mut visited = HashSet::new();
    let mut discovered = HashSet::from([start_index]);
    let mut queue: VecDeque<(NodeIndex, usize)> = VecDeque::from([(start_index, 0)]);

    while let Some((current, slot)) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }

        for (neighbor, relation) in graph.outgoing(current) {
            if visited.contains(&neighbor) || !discovered.insert(neighbor) {
                continue;
            }
            tracing::trace!(
                from = %graph.unit(current),
                to = %graph.unit(neighbor),
                "BFS tree edge"
            );
            let child = tree.attach(slot, graph.unit(neighbor).clone(), relation.cloned());
            queue.push_back((neighbor, child));
        }
    }

    tree
}
