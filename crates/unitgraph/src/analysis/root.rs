//! Start unit selection for graphs without a designated entry point.

use crate::domain::UnitId;
use crate::error::{Error, Result};
use crate::graph::DependencyGraph;

/// The process-management root unit. Every unit hangs off it, so it is never
/// an interesting traversal root.
pub const BOOTSTRAP_UNIT: &str = "init.scope";

/// Pick the unit with the smallest in-degree, ignoring `excluded` units.
///
/// Ties go to the unit that comes first in the graph's insertion order.
///
/// # Errors
///
/// Returns [`Error::NoRootAvailable`] if the graph has no unit left after
/// filtering. Callers should stop the requested operation there.
pub fn select_root(graph: &DependencyGraph, excluded: &[UnitId]) -> Result<UnitId> {
    let mut best: Option<(usize, &UnitId)> = None;

    for index in graph.node_indices() {
        let unit = graph.unit(index);
        if excluded.contains(unit) {
            continue;
        }
        let in_degree = graph.in_degree_at(index);
        // Strict comparison keeps the first minimum.
        if best.is_none_or(|(min, _)| in_degree < min) {
            best = Some((in_degree, unit));
        }
    }

    let (in_degree, root) = best.ok_or(Error::NoRootAvailable)?;
    tracing::debug!(root = %root, in_degree, "Selected root unit");
    Ok(root.clone())
}
