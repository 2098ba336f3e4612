//! REST Client
//!
//! `CategoryApi` over the marketplace admin REST service.

use async_trait::async_trait;
use category_tree::validate_forest;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::CategoryApi;
use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{EntityKind, ErrorBody, FlatCategory, FlatPage, NodeId, TreeNode};

/// HTTP-backed data source for one entity kind
#[derive(Debug, Clone)]
pub struct HttpCategoryApi {
    client: Client,
    base_url: String,
    kind: EntityKind,
    max_depth: usize,
}

impl HttpCategoryApi {
    pub fn new(config: &AppConfig, kind: EntityKind) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            kind,
            max_depth: config.max_tree_depth,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, self.kind.resource())
    }

    pub(crate) fn tree_request(&self) -> RequestBuilder {
        self.client.get(format!("{}/tree", self.collection_url()))
    }

    pub(crate) fn list_request(&self, page_size: u32) -> RequestBuilder {
        self.client
            .get(self.collection_url())
            .query(&[("page", 1), ("limit", page_size)])
    }

    pub(crate) fn toggle_request(&self, id: NodeId) -> RequestBuilder {
        self.client.request(
            Method::PATCH,
            format!("{}/{}/toggle-active", self.collection_url(), id),
        )
    }

    pub(crate) fn delete_request(&self, id: NodeId) -> RequestBuilder {
        self.client.delete(format!("{}/{}", self.collection_url(), id))
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body, status.canonical_reason());
        log::warn!("[API] {} {} -> {}", self.kind.resource(), status.as_u16(), message);
        Err(ApiError::http(status.as_u16(), message))
    }

    async fn fetch_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let body = self.send(request).await?.text().await?;
        serde_json::from_str(&body).map_err(ApiError::decode)
    }
}

/// Human message for a failed response: the body's `message` field,
/// else the status reason.
pub(crate) fn error_message(body: &str, reason: Option<&str>) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| reason.unwrap_or("Request failed").to_string())
}

/// Parse a tree payload and reject malformed shapes once, here
pub(crate) fn decode_tree(body: &str, max_depth: usize) -> ApiResult<Vec<TreeNode>> {
    let forest: Vec<TreeNode> = serde_json::from_str(body).map_err(ApiError::decode)?;
    validate_forest(&forest, max_depth)?;
    Ok(forest)
}

#[async_trait(?Send)]
impl CategoryApi for HttpCategoryApi {
    async fn get_tree(&self) -> ApiResult<Vec<TreeNode>> {
        log::debug!("[API] GET {} tree", self.kind.resource());
        let body = self.send(self.tree_request()).await?.text().await?;
        let forest = decode_tree(&body, self.max_depth)?;
        log::debug!("[API] Loaded {} root nodes", forest.len());
        Ok(forest)
    }

    async fn get_flat_list(&self, page_size: u32) -> ApiResult<FlatPage<FlatCategory>> {
        log::debug!("[API] GET {} list (limit {})", self.kind.resource(), page_size);
        self.fetch_json(self.list_request(page_size)).await
    }

    async fn toggle_active(&self, id: NodeId) -> ApiResult<()> {
        self.send(self.toggle_request(id)).await.map(|_| ())
    }

    async fn delete(&self, id: NodeId) -> ApiResult<()> {
        self.send(self.delete_request(id)).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use category_tree::TreeError;

    fn api(kind: EntityKind) -> HttpCategoryApi {
        let config = AppConfig {
            api_base_url: "https://admin.example.com/api/".to_string(),
            ..AppConfig::default()
        };
        HttpCategoryApi::new(&config, kind)
    }

    #[test]
    fn test_request_urls() {
        let api = api(EntityKind::ProductCategories);

        let tree = api.tree_request().build().unwrap();
        assert_eq!(tree.url().as_str(), "https://admin.example.com/api/product-categories/tree");

        let list = api.list_request(1000).build().unwrap();
        assert_eq!(
            list.url().as_str(),
            "https://admin.example.com/api/product-categories?page=1&limit=1000"
        );

        let toggle = api.toggle_request(7).build().unwrap();
        assert_eq!(*toggle.method(), Method::PATCH);
        assert_eq!(
            toggle.url().as_str(),
            "https://admin.example.com/api/product-categories/7/toggle-active"
        );

        let delete = api.delete_request(7).build().unwrap();
        assert_eq!(*delete.method(), Method::DELETE);
        assert_eq!(delete.url().path(), "/api/product-categories/7");
    }

    #[test]
    fn test_error_message_prefers_body() {
        assert_eq!(
            error_message(r#"{"message":"Category has products"}"#, Some("Conflict")),
            "Category has products"
        );
        assert_eq!(error_message("<html>oops</html>", Some("Bad Gateway")), "Bad Gateway");
        assert_eq!(error_message(r#"{"message":""}"#, None), "Request failed");
    }

    #[test]
    fn test_decode_tree_validates() {
        let ok = r#"[{"id":1,"name":"A","isActive":true,"children":[{"id":2,"name":"B","isActive":true}]}]"#;
        assert_eq!(decode_tree(ok, 8).unwrap().len(), 1);

        let dup = r#"[{"id":1,"name":"A","isActive":true},{"id":1,"name":"B","isActive":true}]"#;
        assert!(matches!(
            decode_tree(dup, 8),
            Err(ApiError::InvalidTree(TreeError::DuplicateId(1)))
        ));

        assert!(matches!(decode_tree(ok, 1), Err(ApiError::InvalidTree(_))));
        assert!(matches!(decode_tree(r#"{"id":1}"#, 8), Err(ApiError::Decode(_))));
    }
}
