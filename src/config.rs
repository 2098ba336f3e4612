//! Dashboard Configuration
//!
//! Defaults, overridden by `ADMIN_API_BASE_URL` at build time and by a
//! JSON block in the host page:
//!
//! ```html
//! <script id="admin-config" type="application/json">
//!   { "apiBaseUrl": "https://admin.example.com/api", "direction": "rtl" }
//! </script>
//! ```

use category_tree::{Direction, DEFAULT_MAX_DEPTH};
use log::LevelFilter;
use serde::Deserialize;

/// Id of the `<script>` element holding page-level overrides
pub const CONFIG_ELEMENT_ID: &str = "admin-config";

/// Largest flat page the backend serves
pub const DEFAULT_FLAT_PAGE_SIZE: u32 = 1000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub api_base_url: String,
    pub flat_page_size: u32,
    pub max_tree_depth: usize,
    pub indent_px: u32,
    pub direction: Direction,
    pub search_debounce_ms: u32,
    pub notification_ttl_ms: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("ADMIN_API_BASE_URL").unwrap_or("/api").to_string(),
            flat_page_size: DEFAULT_FLAT_PAGE_SIZE,
            max_tree_depth: DEFAULT_MAX_DEPTH,
            indent_px: 24,
            direction: Direction::Ltr,
            search_debounce_ms: 300,
            notification_ttl_ms: 4000,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a JSON override block
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("apiBaseUrl is empty".into()));
        }
        if !(1..=10_000).contains(&self.flat_page_size) {
            return Err(ConfigError::Invalid(format!(
                "flatPageSize {} outside 1..=10000",
                self.flat_page_size
            )));
        }
        if !(1..=256).contains(&self.max_tree_depth) {
            return Err(ConfigError::Invalid(format!(
                "maxTreeDepth {} outside 1..=256",
                self.max_tree_depth
            )));
        }
        if !(1..=200).contains(&self.indent_px) {
            return Err(ConfigError::Invalid(format!(
                "indentPx {} outside 1..=200",
                self.indent_px
            )));
        }
        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(ConfigError::Invalid(format!("unknown logLevel '{}'", self.log_level)));
        }
        Ok(())
    }

    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Read overrides from the host page, if it carries any.
    ///
    /// A relative base URL is resolved against the page origin, since
    /// the browser HTTP client only accepts absolute URLs.
    pub fn load() -> Result<Self, ConfigError> {
        let document = web_sys::window().and_then(|w| w.document());
        let json = document
            .as_ref()
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
            .filter(|text| !text.trim().is_empty());

        let config = match json {
            Some(json) => Self::from_json(&json)?,
            None => Self::default(),
        };
        Ok(config.resolve_against_page())
    }

    /// Make `api_base_url` absolute using the current page origin
    pub fn resolve_against_page(mut self) -> Self {
        let origin = web_sys::window().and_then(|w| w.location().origin().ok());
        self.api_base_url = resolve_base_url(&self.api_base_url, origin.as_deref());
        self
    }
}

/// Join a possibly relative base URL onto the page origin and drop any
/// trailing slash.
pub fn resolve_base_url(base: &str, origin: Option<&str>) -> String {
    let base = base.trim().trim_end_matches('/');
    match origin {
        Some(origin) if base.starts_with('/') => {
            format!("{}{}", origin.trim_end_matches('/'), base)
        }
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.flat_page_size, 1000);
        assert_eq!(config.log_level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{ "direction": "rtl", "indentPx": 16 }"#).unwrap();
        assert_eq!(config.direction, Direction::Rtl);
        assert_eq!(config.indent_px, 16);
        assert_eq!(config.flat_page_size, DEFAULT_FLAT_PAGE_SIZE);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            AppConfig::from_json(r#"{ "flatPageSize": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{ "apiBaseUrl": "  " }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{ "logLevel": "loud" }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{ "indentPx": 4000000000 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{ "indentPx": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(AppConfig::from_json("{ nope"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_resolve_base_url() {
        assert_eq!(
            resolve_base_url("/api/", Some("https://admin.example.com")),
            "https://admin.example.com/api"
        );
        assert_eq!(
            resolve_base_url("https://api.example.com/v1/", Some("https://admin.example.com")),
            "https://api.example.com/v1"
        );
        assert_eq!(resolve_base_url("/api", None), "/api");
    }
}
