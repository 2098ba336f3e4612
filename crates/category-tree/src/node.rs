//! Tree Node Model
//!
//! The single recursive record every hierarchical page renders, plus
//! the whole-forest walks used by the controller and the stats.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Node identifier (matches backend integer ids)
pub type NodeId = u32;

/// Deepest tree accepted from the API unless configured otherwise
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// One entity in hierarchical form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    pub id: NodeId,
    pub name: String,
    pub is_active: bool,
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_active: true,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Payload validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("node id {0} appears more than once")]
    DuplicateId(NodeId),

    #[error("node {id} is at depth {depth}, limit is {limit}")]
    TooDeep { id: NodeId, depth: usize, limit: usize },
}

/// Count every node in the forest, nested descendants included
pub fn count_total_in_tree(forest: &[TreeNode]) -> usize {
    let mut stack: Vec<&TreeNode> = forest.iter().collect();
    let mut total = 0;
    while let Some(node) = stack.pop() {
        total += 1;
        stack.extend(node.children.iter());
    }
    total
}

/// Every node id in the forest, pre-order
pub fn collect_ids(forest: &[TreeNode]) -> Vec<NodeId> {
    let mut ids = Vec::new();
    let mut stack: Vec<&TreeNode> = forest.iter().rev().collect();
    while let Some(node) = stack.pop() {
        ids.push(node.id);
        stack.extend(node.children.iter().rev());
    }
    ids
}

/// Number of levels in the forest (0 when empty, 1 for roots only)
pub fn max_depth(forest: &[TreeNode]) -> usize {
    let mut stack: Vec<(&TreeNode, usize)> = forest.iter().map(|n| (n, 1)).collect();
    let mut deepest = 0;
    while let Some((node, level)) = stack.pop() {
        deepest = deepest.max(level);
        stack.extend(node.children.iter().map(|c| (c, level + 1)));
    }
    deepest
}

/// Check a freshly parsed forest before it reaches the view.
///
/// Rendering recurses once per level, so depth is capped here rather
/// than in the components. Duplicate ids would make the expanded set
/// ambiguous.
pub fn validate_forest(forest: &[TreeNode], limit: usize) -> Result<(), TreeError> {
    let mut seen = HashSet::new();
    let mut stack: Vec<(&TreeNode, usize)> = forest.iter().map(|n| (n, 0)).collect();
    while let Some((node, depth)) = stack.pop() {
        if depth >= limit {
            return Err(TreeError::TooDeep {
                id: node.id,
                depth,
                limit,
            });
        }
        if !seen.insert(node.id) {
            return Err(TreeError::DuplicateId(node.id));
        }
        stack.extend(node.children.iter().map(|c| (c, depth + 1)));
    }
    Ok(())
}
