//! Tree Page Data Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. One store is
//! created per mounted tree page and provided to its children.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::ApiResult;
use crate::models::{FlatCategory, FlatPage, TreeNode};

/// Fetch state of one query
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Data fetched for a tree page, field-level reactive
#[derive(Clone, Debug, Default, Store)]
pub struct PageData {
    /// Nested payload from the tree endpoint
    pub tree: Vec<TreeNode>,
    /// Rows from the flat endpoint
    pub flat: Vec<FlatCategory>,
    /// Backend's global count for the flat endpoint
    pub total_count: u64,
    pub tree_status: LoadStatus,
    pub list_status: LoadStatus,
}

/// Type alias for the store
pub type PageStore = Store<PageData>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Record a tree fetch. A failure keeps the previous tree but flips the
/// status so the view shows its placeholder.
pub fn store_apply_tree(store: &PageStore, result: ApiResult<Vec<TreeNode>>) {
    match result {
        Ok(tree) => {
            store.tree().set(tree);
            store.tree_status().set(LoadStatus::Ready);
        }
        Err(err) => {
            log::error!("[STORE] Tree load failed: {}", err);
            store.tree_status().set(LoadStatus::Failed(err.to_string()));
        }
    }
}

/// Record a flat-list fetch
pub fn store_apply_flat(store: &PageStore, result: ApiResult<FlatPage<FlatCategory>>) {
    match result {
        Ok(page) => {
            store.flat().set(page.items);
            store.total_count().set(page.total_count);
            store.list_status().set(LoadStatus::Ready);
        }
        Err(err) => {
            log::error!("[STORE] List load failed: {}", err);
            store.list_status().set(LoadStatus::Failed(err.to_string()));
        }
    }
}
