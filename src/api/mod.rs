//! Category Service
//!
//! The data source behind a tree page. The browser talks to the REST
//! backend through [`HttpCategoryApi`]; tests substitute an in-memory
//! implementation.

mod http;

pub use http::HttpCategoryApi;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{FlatCategory, FlatPage, NodeId, TreeNode};
use crate::notifications::NoticeLevel;

/// Operations a hierarchical page needs from its backend
#[async_trait(?Send)]
pub trait CategoryApi {
    /// Nested forest of every node
    async fn get_tree(&self) -> ApiResult<Vec<TreeNode>>;

    /// First page of the flat listing
    async fn get_flat_list(&self, page_size: u32) -> ApiResult<FlatPage<FlatCategory>>;

    async fn toggle_active(&self, id: NodeId) -> ApiResult<()>;

    async fn delete(&self, id: NodeId) -> ApiResult<()>;
}

/// Write operations triggered from a tree row or table row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    ToggleActive(NodeId),
    Delete(NodeId),
}

impl Mutation {
    pub fn id(&self) -> NodeId {
        match self {
            Mutation::ToggleActive(id) | Mutation::Delete(id) => *id,
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            Mutation::ToggleActive(_) => "update status of",
            Mutation::Delete(_) => "delete",
        }
    }
}

/// What the page should do once a mutation settles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    /// Refetch tree and flat list
    pub invalidate: bool,
    pub level: NoticeLevel,
    pub message: String,
}

/// Run a mutation and translate the result for the page.
///
/// Success invalidates both queries. Failure only produces a
/// notification; nothing was applied locally, so nothing is rolled back.
pub async fn perform_mutation(api: &dyn CategoryApi, mutation: Mutation) -> MutationOutcome {
    let result = match mutation {
        Mutation::ToggleActive(id) => api.toggle_active(id).await,
        Mutation::Delete(id) => api.delete(id).await,
    };

    match result {
        Ok(()) => {
            log::info!("[API] {:?} succeeded", mutation);
            MutationOutcome {
                invalidate: true,
                level: NoticeLevel::Success,
                message: match mutation {
                    Mutation::ToggleActive(id) => format!("Status of #{} updated", id),
                    Mutation::Delete(id) => format!("#{} deleted", id),
                },
            }
        }
        Err(err) => {
            log::error!("[API] {:?} failed: {}", mutation, err);
            MutationOutcome {
                invalidate: false,
                level: NoticeLevel::Error,
                message: format!("Could not {} #{}: {}", mutation.verb(), mutation.id(), err),
            }
        }
    }
}
