//! Stats Aggregator
//!
//! Summary counts shown above a tree page. Active/inactive come from the
//! flat list, root and nested totals from the tree. The two payloads are
//! fetched separately, so each family is only present once its own fetch
//! succeeded, and `consistency` reports when they disagree.

use crate::node::{count_total_in_tree, max_depth, TreeNode};

/// Anything carrying an active flag (flat list rows)
pub trait ActiveFlag {
    fn is_active(&self) -> bool;
}

impl ActiveFlag for TreeNode {
    fn is_active(&self) -> bool {
        self.is_active
    }
}

/// Counts over the flat list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlatStats {
    /// Backend's global count for the flat endpoint
    pub total: u64,
    pub active: usize,
    pub inactive: usize,
    /// Rows actually present in the flat page
    pub loaded: usize,
}

impl FlatStats {
    pub fn compute<T: ActiveFlag>(items: &[T], total_count: u64) -> Self {
        let active = items.iter().filter(|item| item.is_active()).count();
        Self {
            total: total_count,
            active,
            inactive: items.len() - active,
            loaded: items.len(),
        }
    }
}

/// Counts over the nested tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub roots: usize,
    pub total_in_tree: usize,
    /// Levels in the tree
    pub levels: usize,
}

impl TreeStats {
    pub fn compute(forest: &[TreeNode]) -> Self {
        Self {
            roots: forest.len(),
            total_in_tree: count_total_in_tree(forest),
            levels: max_depth(forest),
        }
    }
}

/// Both stat families; `None` until the matching fetch succeeds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub flat: Option<FlatStats>,
    pub tree: Option<TreeStats>,
}

/// How the flat and tree stat families relate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consistency {
    Consistent,
    /// At least one family has not loaded, nothing to compare
    Incomplete,
    /// Flat page holds fewer rows than the backend reports
    Truncated { loaded: usize, total: u64 },
    /// Tree and flat totals describe different snapshots
    Diverged { flat: u64, tree: usize },
}

impl Stats {
    /// `flat` is the loaded rows with the backend total, `forest` the
    /// loaded tree. Pass `None` for a fetch that is pending or failed.
    pub fn compute<T: ActiveFlag>(flat: Option<(&[T], u64)>, forest: Option<&[TreeNode]>) -> Self {
        Self {
            flat: flat.map(|(items, total_count)| FlatStats::compute(items, total_count)),
            tree: forest.map(TreeStats::compute),
        }
    }

    pub fn consistency(&self) -> Consistency {
        let (Some(flat), Some(tree)) = (self.flat, self.tree) else {
            return Consistency::Incomplete;
        };
        if (flat.loaded as u64) < flat.total {
            Consistency::Truncated {
                loaded: flat.loaded,
                total: flat.total,
            }
        } else if flat.total != tree.total_in_tree as u64 {
            Consistency::Diverged {
                flat: flat.total,
                tree: tree.total_in_tree,
            }
        } else {
            Consistency::Consistent
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row(bool);

    impl ActiveFlag for Row {
        fn is_active(&self) -> bool {
            self.0
        }
    }

    fn sample() -> Vec<TreeNode> {
        vec![TreeNode::new(1, "Root").with_children(vec![
            TreeNode::new(2, "Leaf").inactive(),
            TreeNode::new(3, "Branch").with_children(vec![TreeNode::new(4, "Nested")]),
        ])]
    }

    #[test]
    fn test_compute() {
        let flat = vec![Row(true), Row(false), Row(true), Row(true)];
        let tree = sample();
        let stats = Stats::compute(Some((&flat[..], 4)), Some(&tree[..]));
        let counts = stats.flat.unwrap();
        assert_eq!(counts.active, 3);
        assert_eq!(counts.inactive, 1);
        assert_eq!(
            stats.tree,
            Some(TreeStats { roots: 1, total_in_tree: 4, levels: 3 })
        );
        assert_eq!(stats.consistency(), Consistency::Consistent);
    }

    #[test]
    fn test_empty_sources() {
        let rows: Vec<Row> = Vec::new();
        let tree: Vec<TreeNode> = Vec::new();
        let stats = Stats::compute(Some((&rows[..], 0)), Some(&tree[..]));
        assert_eq!(stats.flat, Some(FlatStats::default()));
        assert_eq!(stats.tree, Some(TreeStats::default()));
        assert_eq!(stats.consistency(), Consistency::Consistent);
    }

    #[test]
    fn test_pending_list_is_not_divergence() {
        let tree = sample();
        let stats = Stats::compute::<Row>(None, Some(&tree[..]));
        assert_eq!(stats.flat, None);
        assert_eq!(stats.tree.map(|t| t.total_in_tree), Some(4));
        assert_eq!(stats.consistency(), Consistency::Incomplete);
    }

    #[test]
    fn test_pending_tree_keeps_flat_counts() {
        let flat = vec![Row(true), Row(false)];
        let stats = Stats::compute(Some((&flat[..], 2)), None);
        assert_eq!(stats.flat.map(|f| f.inactive), Some(1));
        assert_eq!(stats.tree, None);
        assert_eq!(stats.consistency(), Consistency::Incomplete);
    }

    #[test]
    fn test_active_counts_ignore_tree() {
        // Inactive flags in the tree do not leak into the flat counts
        let flat = vec![Row(true); 4];
        let tree = sample();
        let stats = Stats::compute(Some((&flat[..], 4)), Some(&tree[..]));
        assert_eq!(stats.flat.map(|f| f.inactive), Some(0));
    }

    #[test]
    fn test_truncated_flat_page() {
        let flat = vec![Row(true); 2];
        let tree = sample();
        let stats = Stats::compute(Some((&flat[..], 1500)), Some(&tree[..]));
        assert_eq!(stats.consistency(), Consistency::Truncated { loaded: 2, total: 1500 });
    }

    #[test]
    fn test_diverged_snapshots() {
        let flat = vec![Row(true); 5];
        let tree = sample();
        let stats = Stats::compute(Some((&flat[..], 5)), Some(&tree[..]));
        assert_eq!(stats.consistency(), Consistency::Diverged { flat: 5, tree: 4 });
    }
}
