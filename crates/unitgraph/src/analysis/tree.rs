//! Arena-backed spanning tree produced by the traversals.

use crate::domain::{Relation, UnitId};
use std::collections::HashMap;

/// A unit in a [`SpanningTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Unit at this position
    pub id: UnitId,
    /// Arena slot of the parent, `None` for the root
    pub parent: Option<usize>,
    /// Relation of the edge that discovered this unit, `None` for the root
    /// and for unlabeled edges
    pub relation: Option<Relation>,
    /// Arena slots of the children, in discovery order
    pub children: Vec<usize>,
}

/// Spanning tree over the units reachable from a root.
///
/// Nodes live in a single arena in discovery order; slot 0 is always the
/// root. Every other node has exactly one parent, and parents are always
/// discovered before their children, so parent links can never form a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    nodes: Vec<TreeNode>,
    slots: HashMap<UnitId, usize>,
}

impl SpanningTree {
    /// Create a tree holding only `root`.
    pub fn new(root: UnitId) -> Self {
        let mut slots = HashMap::new();
        slots.insert(root.clone(), 0);
        Self {
            nodes: vec![TreeNode {
                id: root,
                parent: None,
                relation: None,
                children: Vec::new(),
            }],
            slots,
        }
    }

    /// Attach `id` under the node at slot `parent`, returning its new slot.
    ///
    /// Callers must not attach a unit twice; the traversals guarantee this
    /// with their visited sets.
    pub(crate) fn attach(
        &mut self,
        parent: usize,
        id: UnitId,
        relation: Option<Relation>,
    ) -> usize {
        debug_assert!(!self.slots.contains_key(&id), "unit attached twice: {id}");
        let slot = self.nodes.len();
        self.slots.insert(id.clone(), slot);
        self.nodes.push(TreeNode {
            id,
            parent: Some(parent),
            relation,
            children: Vec::new(),
        });
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.push(slot);
        }
        slot
    }

    /// The root node.
    pub fn root(&self) -> &TreeNode {
        &self.nodes[0]
    }

    /// Number of units in the tree, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether `id` is part of the tree.
    pub fn contains(&self, id: &UnitId) -> bool {
        self.slots.contains_key(id)
    }

    /// Node at arena slot `slot`.
    pub fn node(&self, slot: usize) -> Option<&TreeNode> {
        self.nodes.get(slot)
    }

    /// Node for unit `id`.
    pub fn get(&self, id: &UnitId) -> Option<&TreeNode> {
        self.slots.get(id).and_then(|&slot| self.nodes.get(slot))
    }

    /// All nodes in discovery order, root first.
    pub fn nodes(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.iter()
    }

    /// Parent unit of `id`, `None` for the root or an unknown unit.
    pub fn parent_of(&self, id: &UnitId) -> Option<&UnitId> {
        let parent = self.get(id)?.parent?;
        self.nodes.get(parent).map(|node| &node.id)
    }

    /// Children of `id` in discovery order.
    pub fn children_of(&self, id: &UnitId) -> Vec<&UnitId> {
        self.get(id)
            .map(|node| {
                node.children
                    .iter()
                    .filter_map(|&slot| self.nodes.get(slot))
                    .map(|child| &child.id)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Tree edges `(parent, child)` in discovery order.
    pub fn edges(&self) -> Vec<(&UnitId, &UnitId)> {
        self.nodes
            .iter()
            .filter_map(|node| {
                let parent = self.nodes.get(node.parent?)?;
                Some((&parent.id, &node.id))
            })
            .collect()
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SpanningTree {
        let mut tree = SpanningTree::new(UnitId::from("root"));
        let a = tree.attach(0, UnitId::from("a"), Some(Relation::Requires));
        tree.attach(0, UnitId::from("b"), None);
        tree.attach(a, UnitId::from("c"), Some(Relation::Wants));
        tree
    }

    #[test]
    fn test_single_node_tree() {
        let tree = SpanningTree::new(UnitId::from("solo"));
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.root().id.as_str(), "solo");
        assert!(tree.root().parent.is_none());
        assert!(tree.edges().is_empty());
    }

    #[test]
    fn test_children_in_discovery_order() {
        let tree = sample();
        let children: Vec<_> = tree
            .children_of(&UnitId::from("root"))
            .into_iter()
            .map(UnitId::as_str)
            .collect();
        assert_eq!(children, vec!["a", "b"]);
    }

    #[test]
    fn test_parent_links() {
        let tree = sample();
        assert_eq!(tree.parent_of(&UnitId::from("c")), Some(&UnitId::from("a")));
        assert_eq!(tree.parent_of(&UnitId::from("root")), None);
        assert_eq!(tree.parent_of(&UnitId::from("zzz")), None);
        assert_eq!(
            tree.get(&UnitId::from("c")).unwrap().relation,
            Some(Relation::Wants)
        );
    }

    #[test]
    fn test_edges_in_discovery_order() {
        let tree = sample();
        let edges: Vec<_> = tree
            .edges()
            .into_iter()
            .map(|(p, c)| (p.as_str(), c.as_str()))
            .collect();
        assert_eq!(edges, vec![("root", "a"), ("root", "b"), ("a", "c")]);
    }
}
