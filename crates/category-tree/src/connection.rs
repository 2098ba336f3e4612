//! Connector Line Topology
//!
//! Which guide lines a tree row draws, and where. Topology is computed
//! once and is the same for both text directions; only the edge the
//! offsets are measured from changes.

use serde::{Deserialize, Serialize};

use crate::expanded::ExpandedSet;
use crate::node::TreeNode;

/// Per-ancestor "does a vertical line continue here" flags.
///
/// A node at depth D carries D entries. Entry `i` is true when the
/// ancestor at depth `i` is not the last child of its own parent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionPath(Vec<bool>);

impl ConnectionPath {
    /// Path of a top-level node (no ancestors)
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_levels(levels: Vec<bool>) -> Self {
        Self(levels)
    }

    /// Path handed to the children of a node at `depth`.
    ///
    /// Roots have no parent connector, so they are never terminal and
    /// level 0 is always marked as continuing.
    pub fn child_path(&self, depth: usize, is_last: bool) -> Self {
        let mut levels = self.0.clone();
        levels.resize(depth, false);
        levels.push(depth == 0 || !is_last);
        Self(levels)
    }

    pub fn continues_at(&self, level: usize) -> bool {
        self.0.get(level).copied().unwrap_or(false)
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn levels(&self) -> &[bool] {
        &self.0
    }
}

/// Text direction of the page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    /// CSS property offsets are measured from
    pub fn inline_start(&self) -> &'static str {
        match self {
            Direction::Ltr => "left",
            Direction::Rtl => "right",
        }
    }

    pub fn as_attr(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    /// Row padding for a node at `depth`
    pub fn indent_style(&self, depth: usize, indent_px: u32) -> String {
        let padding = u32::try_from(depth).unwrap_or(u32::MAX).saturating_mul(indent_px);
        format!("padding-{}: {}px;", self.inline_start(), padding)
    }

    /// Absolute position of a connector segment
    pub fn offset_style(&self, offset_px: u32) -> String {
        format!("{}: {}px;", self.inline_start(), offset_px)
    }
}

/// Shape of one guide segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorKind {
    /// Ancestor line passing through the row (│)
    Through,
    /// Elbow to a child with siblings below (├)
    Tee,
    /// Elbow to the last child (└)
    Corner,
}

impl ConnectorKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ConnectorKind::Through => "tree-line through",
            ConnectorKind::Tee => "tree-line tee",
            ConnectorKind::Corner => "tree-line corner",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectorSegment {
    pub level: usize,
    pub kind: ConnectorKind,
}

impl ConnectorSegment {
    /// Distance from the inline-start edge, centered in the level's column
    pub fn offset(&self, indent_px: u32) -> u32 {
        u32::try_from(self.level)
            .unwrap_or(u32::MAX)
            .saturating_mul(indent_px)
            .saturating_add(indent_px / 2)
    }
}

/// Guide segments for a row at `depth`, given its inherited path.
///
/// Column `level` carries a through-line when the ancestor one level
/// deeper still has siblings below it. The last column is the row's
/// own elbow.
pub fn connector_segments(path: &ConnectionPath, depth: usize, is_last: bool) -> Vec<ConnectorSegment> {
    if depth == 0 {
        return Vec::new();
    }
    let mut segments: Vec<ConnectorSegment> = (0..depth - 1)
        .filter(|level| path.continues_at(level + 1))
        .map(|level| ConnectorSegment {
            level,
            kind: ConnectorKind::Through,
        })
        .collect();
    segments.push(ConnectorSegment {
        level: depth - 1,
        kind: if is_last {
            ConnectorKind::Corner
        } else {
            ConnectorKind::Tee
        },
    });
    segments
}

/// A row of the tree as it appears on screen
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleRow<'a> {
    pub node: &'a TreeNode,
    pub depth: usize,
    pub is_last: bool,
    pub path: ConnectionPath,
}

impl VisibleRow<'_> {
    pub fn segments(&self) -> Vec<ConnectorSegment> {
        connector_segments(&self.path, self.depth, self.is_last)
    }
}

/// Flatten the forest into display order, descending only into
/// expanded nodes.
pub fn visible_rows<'a>(forest: &'a [TreeNode], expanded: &ExpandedSet) -> Vec<VisibleRow<'a>> {
    fn push_siblings<'a>(
        stack: &mut Vec<VisibleRow<'a>>,
        siblings: &'a [TreeNode],
        depth: usize,
        path: &ConnectionPath,
    ) {
        let last = siblings.len().saturating_sub(1);
        for (index, node) in siblings.iter().enumerate().rev() {
            stack.push(VisibleRow {
                node,
                depth,
                is_last: index == last,
                path: path.clone(),
            });
        }
    }

    let mut rows = Vec::new();
    let mut stack = Vec::new();
    push_siblings(&mut stack, forest, 0, &ConnectionPath::root());

    while let Some(row) = stack.pop() {
        if row.node.has_children() && expanded.is_expanded(row.node.id) {
            let child_path = row.path.child_path(row.depth, row.is_last);
            push_siblings(&mut stack, &row.node.children, row.depth + 1, &child_path);
        }
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `[{1: [{2}, {3: [{4}]}]}]`
    fn sample() -> Vec<TreeNode> {
        vec![TreeNode::new(1, "Root").with_children(vec![
            TreeNode::new(2, "Leaf"),
            TreeNode::new(3, "Branch").with_children(vec![TreeNode::new(4, "Nested")]),
        ])]
    }

    fn all_expanded(forest: &[TreeNode]) -> ExpandedSet {
        let mut set = ExpandedSet::new();
        set.initialize_from_tree(forest);
        set
    }

    fn row<'r, 'a>(rows: &'r [VisibleRow<'a>], id: u32) -> &'r VisibleRow<'a> {
        rows.iter().find(|r| r.node.id == id).unwrap()
    }

    #[test]
    fn test_child_path_last_and_non_last() {
        let parent = ConnectionPath::from_levels(vec![true]);
        assert!(!parent.child_path(1, true).continues_at(1));
        assert!(parent.child_path(1, false).continues_at(1));
        assert_eq!(parent.child_path(1, true).depth(), 2);
    }

    #[test]
    fn test_root_level_always_continues() {
        let root = ConnectionPath::root();
        assert_eq!(root.child_path(0, true).levels(), &[true]);
        assert_eq!(root.child_path(0, false).levels(), &[true]);
    }

    #[test]
    fn test_sample_paths() {
        let forest = sample();
        let rows = visible_rows(&forest, &all_expanded(&forest));

        let order: Vec<u32> = rows.iter().map(|r| r.node.id).collect();
        assert_eq!(order, vec![1, 2, 3, 4]);

        assert_eq!(row(&rows, 4).depth, 2);
        assert_eq!(row(&rows, 4).path.levels(), &[true, false]);
        assert_eq!(row(&rows, 2).path.levels(), &[true]);
        assert!(!row(&rows, 2).is_last);
        assert!(row(&rows, 3).is_last);
    }

    #[test]
    fn test_collapsed_node_hides_descendants() {
        let forest = sample();
        let mut expanded = all_expanded(&forest);
        expanded.toggle(3);
        let ids: Vec<u32> = visible_rows(&forest, &expanded).iter().map(|r| r.node.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        expanded.collapse_all();
        assert_eq!(visible_rows(&forest, &expanded).len(), 1);
    }

    #[test]
    fn test_expanded_leaf_is_noop() {
        let forest = vec![TreeNode::new(1, "Leaf")];
        let mut expanded = ExpandedSet::new();
        expanded.toggle(1);
        assert_eq!(visible_rows(&forest, &expanded).len(), 1);
    }

    #[test]
    fn test_segments_for_sample() {
        let forest = sample();
        let rows = visible_rows(&forest, &all_expanded(&forest));

        assert!(row(&rows, 1).segments().is_empty());
        assert_eq!(
            row(&rows, 2).segments(),
            vec![ConnectorSegment { level: 0, kind: ConnectorKind::Tee }]
        );
        // Node 3 is the last child of 1, so nothing passes beside node 4
        assert_eq!(
            row(&rows, 4).segments(),
            vec![ConnectorSegment { level: 1, kind: ConnectorKind::Corner }]
        );
    }

    #[test]
    fn test_through_line_when_ancestor_has_later_sibling() {
        // 1 -> [2 -> [3], 4]: row 3 needs a line in column 0 down to 4
        let forest = vec![TreeNode::new(1, "a").with_children(vec![
            TreeNode::new(2, "b").with_children(vec![TreeNode::new(3, "c")]),
            TreeNode::new(4, "d"),
        ])];
        let rows = visible_rows(&forest, &all_expanded(&forest));
        assert_eq!(
            row(&rows, 3).segments(),
            vec![
                ConnectorSegment { level: 0, kind: ConnectorKind::Through },
                ConnectorSegment { level: 1, kind: ConnectorKind::Corner },
            ]
        );
    }

    #[test]
    fn test_direction_mirrors_offsets_only() {
        let segment = ConnectorSegment { level: 2, kind: ConnectorKind::Tee };
        assert_eq!(segment.offset(20), 50);
        assert_eq!(Direction::Ltr.offset_style(50), "left: 50px;");
        assert_eq!(Direction::Rtl.offset_style(50), "right: 50px;");
        assert_eq!(Direction::Rtl.indent_style(3, 20), "padding-right: 60px;");
    }

    #[test]
    fn test_huge_indent_saturates() {
        let segment = ConnectorSegment { level: 3, kind: ConnectorKind::Corner };
        assert_eq!(segment.offset(4_000_000_000), u32::MAX);
        assert_eq!(
            Direction::Ltr.indent_style(2, 4_000_000_000),
            format!("padding-left: {}px;", u32::MAX)
        );
    }

    #[test]
    fn test_direction_deserializes_lowercase() {
        let dir: Direction = serde_json::from_str("\"rtl\"").unwrap();
        assert_eq!(dir, Direction::Rtl);
    }
}
