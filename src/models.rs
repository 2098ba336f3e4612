//! Frontend Models
//!
//! Data structures matching backend payloads.

use category_tree::ActiveFlag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use category_tree::{NodeId, TreeNode};

/// Category row from the flat (paginated) endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatCategory {
    pub id: NodeId,
    pub name: String,
    pub is_active: bool,
    #[serde(default)]
    pub parent_id: Option<NodeId>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ActiveFlag for FlatCategory {
    fn is_active(&self) -> bool {
        self.is_active
    }
}

/// One page of a flat listing plus the backend's global count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatPage<T> {
    pub items: Vec<T>,
    pub total_count: u64,
}

impl<T> Default for FlatPage<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }
}

/// Error body the backend sends with non-success responses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Hierarchical entity types that get a tree page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Categories,
    ProductCategories,
}

impl EntityKind {
    pub const ALL: [EntityKind; 2] = [EntityKind::Categories, EntityKind::ProductCategories];

    pub fn title(&self) -> &'static str {
        match self {
            EntityKind::Categories => "Categories",
            EntityKind::ProductCategories => "Product Categories",
        }
    }

    /// REST collection path under the API base
    pub fn resource(&self) -> &'static str {
        match self {
            EntityKind::Categories => "categories",
            EntityKind::ProductCategories => "product-categories",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_page_payload() {
        let json = serde_json::json!({
            "items": [
                { "id": 1, "name": "Food", "isActive": true, "createdAt": "2026-01-02T03:04:05Z" },
                { "id": 2, "name": "Drinks", "isActive": false, "parentId": 1 }
            ],
            "totalCount": 12
        });
        let page: FlatPage<FlatCategory> = serde_json::from_value(json).unwrap();
        assert_eq!(page.total_count, 12);
        assert_eq!(page.items[1].parent_id, Some(1));
        assert!(page.items[0].created_at.is_some());
        assert!(page.items[1].created_at.is_none());
    }

    #[test]
    fn test_resources_are_distinct() {
        assert_ne!(
            EntityKind::Categories.resource(),
            EntityKind::ProductCategories.resource()
        );
    }
}
