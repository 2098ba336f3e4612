//! Expanded-Set Controller
//!
//! Which nodes of a tree page are currently open.

use std::collections::HashSet;

use crate::node::{collect_ids, NodeId, TreeNode};

/// Set of node ids currently shown expanded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedSet {
    ids: HashSet<NodeId>,
}

impl ExpandedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the set with every id in the forest
    pub fn initialize_from_tree(&mut self, forest: &[TreeNode]) {
        self.ids = collect_ids(forest).into_iter().collect();
    }

    /// Open every node (same result as initialization, callable on demand)
    pub fn expand_all(&mut self, forest: &[TreeNode]) {
        self.initialize_from_tree(forest);
    }

    pub fn collapse_all(&mut self) {
        self.ids.clear();
    }

    /// Flip membership of `id`, leaving every other id untouched.
    /// Returns whether the node is expanded afterwards.
    pub fn toggle(&mut self, id: NodeId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ids.iter().copied()
    }
}

/// Pre-order `(id, child count)` pairs. Two forests with equal shapes
/// have the same ids in the same places; names and flags are ignored.
fn topology(forest: &[TreeNode]) -> Vec<(NodeId, usize)> {
    let mut shape = Vec::new();
    let mut stack: Vec<&TreeNode> = forest.iter().rev().collect();
    while let Some(node) = stack.pop() {
        shape.push((node.id, node.children.len()));
        stack.extend(node.children.iter().rev());
    }
    shape
}

/// Expanded set bound to the shape of the last tree it was initialized
/// from.
///
/// A refetch with the same ids in the same places keeps the user's
/// toggles, even when names or active flags changed. Only a structural
/// change resets everything to expanded.
#[derive(Debug, Clone, Default)]
pub struct TreeViewState {
    pub expanded: ExpandedSet,
    last_topology: Option<Vec<(NodeId, usize)>>,
}

impl TreeViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a successfully fetched tree. Returns true when the expanded
    /// set was reinitialized.
    pub fn on_tree_loaded(&mut self, forest: &[TreeNode]) -> bool {
        let shape = topology(forest);
        if self.last_topology.as_ref() == Some(&shape) {
            return false;
        }
        self.expanded.initialize_from_tree(forest);
        self.last_topology = Some(shape);
        true
    }

    pub fn has_loaded(&self) -> bool {
        self.last_topology.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::count_total_in_tree;

    fn sample() -> Vec<TreeNode> {
        vec![TreeNode::new(1, "Root").with_children(vec![
            TreeNode::new(2, "Leaf"),
            TreeNode::new(3, "Branch").with_children(vec![TreeNode::new(4, "Nested")]),
        ])]
    }

    fn ids(set: &ExpandedSet) -> Vec<NodeId> {
        let mut ids: Vec<_> = set.iter().collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn test_initialize_matches_total_count() {
        let forest = sample();
        let mut set = ExpandedSet::new();
        set.initialize_from_tree(&forest);
        assert_eq!(set.len(), count_total_in_tree(&forest));
        assert_eq!(ids(&set), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_initialize_replaces_previous_contents() {
        let mut set = ExpandedSet::new();
        set.toggle(99);
        set.initialize_from_tree(&sample());
        assert!(!set.is_expanded(99));
    }

    #[test]
    fn test_collapse_all_empties() {
        let mut set = ExpandedSet::new();
        set.collapse_all();
        assert!(set.is_empty());

        set.initialize_from_tree(&sample());
        set.toggle(42);
        set.collapse_all();
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_expand_all_idempotent() {
        let forest = sample();
        let mut once = ExpandedSet::new();
        once.expand_all(&forest);
        let mut twice = once.clone();
        twice.expand_all(&forest);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_toggle_is_own_inverse() {
        let mut set = ExpandedSet::new();
        set.initialize_from_tree(&sample());
        let before = set.clone();

        assert!(!set.toggle(3));
        assert!(set.toggle(3));
        assert_eq!(set, before);

        assert!(set.toggle(10));
        assert!(!set.toggle(10));
        assert_eq!(set, before);
    }

    #[test]
    fn test_toggle_touches_only_one_id() {
        let mut set = ExpandedSet::new();
        set.initialize_from_tree(&sample());
        set.toggle(2);
        assert_eq!(ids(&set), vec![1, 3, 4]);
    }

    #[test]
    fn test_identical_refetch_keeps_toggles() {
        let mut state = TreeViewState::new();
        assert!(!state.has_loaded());
        assert!(state.on_tree_loaded(&sample()));
        state.expanded.toggle(1);

        assert!(!state.on_tree_loaded(&sample()));
        assert!(!state.expanded.is_expanded(1));
    }

    #[test]
    fn test_changed_tree_reinitializes() {
        let mut state = TreeViewState::new();
        state.on_tree_loaded(&sample());
        state.expanded.collapse_all();

        let mut changed = sample();
        changed[0].children.remove(0);
        assert!(state.on_tree_loaded(&changed));
        assert_eq!(ids(&state.expanded), vec![1, 3, 4]);
    }

    #[test]
    fn test_status_only_refetch_keeps_toggles() {
        let mut state = TreeViewState::new();
        state.on_tree_loaded(&sample());
        state.expanded.toggle(3);

        let mut refetched = sample();
        refetched[0].children[0].is_active = false;
        refetched[0].children[1].name = "Renamed".to_string();
        assert!(!state.on_tree_loaded(&refetched));
        assert!(!state.expanded.is_expanded(3));
        assert!(state.expanded.is_expanded(1));
    }

    #[test]
    fn test_moved_node_reinitializes() {
        let mut state = TreeViewState::new();
        state.on_tree_loaded(&sample());
        state.expanded.collapse_all();

        // Same ids, node 4 moved under node 2
        let moved = vec![TreeNode::new(1, "Root").with_children(vec![
            TreeNode::new(2, "Leaf").with_children(vec![TreeNode::new(4, "Nested")]),
            TreeNode::new(3, "Branch"),
        ])];
        assert!(state.on_tree_loaded(&moved));
        assert_eq!(ids(&state.expanded), vec![1, 2, 3, 4]);
    }
}
