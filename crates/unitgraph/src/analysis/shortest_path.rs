//! Single-source shortest paths (Dijkstra) over a [`WeightedAdjacency`].
//!
//! The selection step scans the unfinalized units in adjacency order and
//! takes the first one with the smallest tentative distance, so results are
//! reproducible for a given graph. Only distances are guaranteed; when
//! several shortest paths exist, which one [`DistanceMap::path_to`] reports
//! depends on that order.

use super::weights::WeightedAdjacency;
use crate::domain::UnitId;
use crate::error::{Error, Result};
use petgraph::graph::NodeIndex;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Cumulative path weight from the source.
///
/// `Infinite` orders after every `Finite` value and marks units the source
/// cannot reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    /// Reachable with this total weight
    Finite(u64),
    /// Not reachable from the source
    Infinite,
}

impl Distance {
    /// Distance of the source to itself.
    pub const ZERO: Self = Self::Finite(0);

    /// Whether the unit is reachable.
    pub fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// The numeric distance, `None` if unreachable.
    pub fn value(self) -> Option<u64> {
        match self {
            Self::Finite(value) => Some(value),
            Self::Infinite => None,
        }
    }

    /// Extend by one edge. Saturates instead of overflowing.
    fn extend(self, weight: u64) -> Self {
        match self {
            Self::Finite(value) => Self::Finite(value.saturating_add(weight)),
            Self::Infinite => Self::Infinite,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(value) => write!(f, "{value}"),
            Self::Infinite => write!(f, "unreachable"),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Finite(value) => serializer.serialize_u64(*value),
            Self::Infinite => serializer.serialize_none(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    unit: UnitId,
    distance: Distance,
    predecessor: Option<usize>,
}

/// Result of [`shortest_distances`]: the final distance of every unit of the
/// adjacency, plus the predecessor each reachable unit was last relaxed
/// through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    source: UnitId,
    entries: Vec<Entry>,
    slots: HashMap<UnitId, usize>,
}

impl DistanceMap {
    /// The source unit.
    pub fn source(&self) -> &UnitId {
        &self.source
    }

    /// Distance to `id`, or `None` if `id` is not a unit of the adjacency.
    ///
    /// Unknown units are an input error, distinct from
    /// [`Distance::Infinite`] (known but unreachable).
    pub fn distance(&self, id: &UnitId) -> Option<Distance> {
        self.entry(id).map(|entry| entry.distance)
    }

    /// The unit preceding `id` on the reported shortest path.
    pub fn predecessor(&self, id: &UnitId) -> Option<&UnitId> {
        let slot = self.entry(id)?.predecessor?;
        self.entries.get(slot).map(|entry| &entry.unit)
    }

    /// One shortest path from the source to `id`, both ends included.
    ///
    /// `None` if `id` is unknown or unreachable.
    pub fn path_to(&self, id: &UnitId) -> Option<Vec<&UnitId>> {
        let mut slot = *self.slots.get(id)?;
        let mut path = Vec::new();
        loop {
            let entry = self.entries.get(slot)?;
            if !entry.distance.is_finite() {
                return None;
            }
            path.push(&entry.unit);
            match entry.predecessor {
                Some(previous) => slot = previous,
                None => break,
            }
        }
        path.reverse();
        Some(path)
    }

    /// `(unit, distance)` pairs in adjacency order.
    pub fn iter(&self) -> impl Iterator<Item = (&UnitId, Distance)> {
        self.entries.iter().map(|entry| (&entry.unit, entry.distance))
    }

    /// Number of units with a finite distance, source included.
    pub fn reachable_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.distance.is_finite())
            .count()
    }

    fn entry(&self, id: &UnitId) -> Option<&Entry> {
        self.slots.get(id).and_then(|&slot| self.entries.get(slot))
    }
}

/// Compute the shortest distance from `source` to every unit of `adjacency`.
///
/// # Errors
///
/// Returns [`Error::MissingNode`] if `source` is not a unit of the adjacency.
pub fn shortest_distances(adjacency: &WeightedAdjacency, source: &UnitId) -> Result<DistanceMap> {
    let source_index = adjacency
        .index_of(source)
        .ok_or_else(|| Error::MissingNode(source.clone()))?;

    let node_count = adjacency.node_count();
    let mut distances = vec![Distance::Infinite; node_count];
    let mut predecessors: Vec<Option<NodeIndex>> = vec![None; node_count];
    distances[source_index.index()] = Distance::ZERO;

    let mut unfinalized: Vec<NodeIndex> = adjacency.as_graph().node_indices().collect();

    loop {
        // min_by_key keeps the first of several equal minima.
        let Some((position, current)) = unfinalized
            .iter()
            .copied()
            .enumerate()
            .min_by_key(|&(_, index)| distances[index.index()])
        else {
            break;
        };

        let current_distance = distances[current.index()];
        if current_distance == Distance::Infinite {
            tracing::trace!(remaining = unfinalized.len(), "Remaining units unreachable");
            break;
        }

        for (neighbor, weight) in adjacency.outgoing(current) {
            let candidate = current_distance.extend(weight);
            if candidate < distances[neighbor.index()] {
                distances[neighbor.index()] = candidate;
                predecessors[neighbor.index()] = Some(current);
            }
        }

        tracing::trace!(unit = %adjacency.unit(current), distance = %current_distance, "Finalized");
        unfinalized.remove(position);
    }

    let entries: Vec<Entry> = adjacency
        .as_graph()
        .node_indices()
        .map(|index| Entry {
            unit: adjacency.unit(index).clone(),
            distance: distances[index.index()],
            predecessor: predecessors[index.index()].map(NodeIndex::index),
        })
        .collect();
    let slots = entries
        .iter()
        .enumerate()
        .map(|(slot, entry)| (entry.unit.clone(), slot))
        .collect();

    let map = DistanceMap {
        source: source.clone(),
        entries,
        slots,
    };
    tracing::debug!(
        source = %source,
        reachable = map.reachable_count(),
        total = node_count,
        "Computed shortest distances"
    );
    Ok(map)
}
