//! Category Tree
//!
//! Framework-independent state for hierarchical entity viewers:
//! the recursive node type, the expanded-id set, connector line
//! topology and summary statistics.
//!
//! Nothing here touches the DOM, so the same logic backs every tree
//! page and is tested natively.

mod connection;
mod expanded;
mod node;
mod stats;

pub use connection::{
    connector_segments, visible_rows, ConnectionPath, ConnectorKind, ConnectorSegment, Direction,
    VisibleRow,
};
pub use expanded::{ExpandedSet, TreeViewState};
pub use node::{
    collect_ids, count_total_in_tree, max_depth, validate_forest, NodeId, TreeError,
    TreeNode, DEFAULT_MAX_DEPTH,
};
pub use stats::{ActiveFlag, Consistency, FlatStats, Stats, TreeStats};
