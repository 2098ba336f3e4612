//! Error Types
//!
//! Failures crossing the HTTP boundary.

use category_tree::TreeError;

/// Errors from the category REST service
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request never produced a response
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success status from the backend
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Body did not match the expected payload shape
    #[error("Response parse error: {0}")]
    Decode(String),

    /// Tree parsed but failed structural checks
    #[error("Invalid tree payload: {0}")]
    InvalidTree(#[from] TreeError),
}

impl ApiError {
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    pub fn decode(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
