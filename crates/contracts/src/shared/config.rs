//! Console configuration: API hosts and per-resource endpoint overrides.
//!
//! The browser bundle has no file system, so the configuration is a TOML
//! document embedded at build time. The frontend passes the optional build
//! overrides to [`load_config`] once at startup.

use crate::domain::common::descriptor::expand_path;
use crate::domain::common::{Operation, RecordId, ResourceDescriptor};
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    /// Keyed by resource key, e.g. `a002_news`
    #[serde(default)]
    pub resources: HashMap<String, ResourceOverride>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

/// Per-resource overrides; paths may contain `{id}`
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ResourceOverride {
    pub base_url: Option<String>,
    pub list: Option<String>,
    pub create: Option<String>,
    pub update: Option<String>,
    pub delete: Option<String>,
}

impl ResourceOverride {
    fn path(&self, operation: Operation) -> Option<&str> {
        match operation {
            Operation::List => self.list.as_deref(),
            Operation::Create => self.create.as_deref(),
            Operation::Update => self.update.as_deref(),
            Operation::Delete => self.delete.as_deref(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "https://bakend-wtc-4.onrender.com"

[resources.a002_news]
base_url = "https://bakend-wtc.onrender.com"
"#;

pub fn parse_config(text: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(text)?)
}

/// Resolve the effective configuration.
///
/// Order:
/// 1. `document` (a full TOML document), falling back to [`DEFAULT_CONFIG`] if it does not parse
/// 2. `base_url` replaces `[api].base_url`
pub fn load_config(document: Option<&str>, base_url: Option<&str>) -> Config {
    let mut config = match document.map(parse_config) {
        Some(Ok(config)) => {
            log::info!("Using configuration supplied at build time");
            config
        }
        Some(Err(e)) => {
            log::warn!("{e}; using default embedded configuration");
            default_config()
        }
        None => default_config(),
    };

    if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
        log::info!("API base URL overridden: {url}");
        config.api.base_url = url.to_string();
    }
    config
}

fn default_config() -> Config {
    // Embedded document is covered by tests; fall back to an empty base
    // (same-origin requests) rather than panic in the browser.
    parse_config(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::error!("Default configuration is broken: {e}");
        Config {
            api: ApiConfig {
                base_url: String::new(),
            },
            resources: HashMap::new(),
        }
    })
}

impl Config {
    fn resource(&self, key: &str) -> Option<&ResourceOverride> {
        self.resources.get(key)
    }

    /// Host of a resource without trailing slash
    pub fn base_url(&self, key: &str) -> &str {
        self.resource(key)
            .and_then(|r| r.base_url.as_deref())
            .unwrap_or(self.api.base_url.as_str())
            .trim_end_matches('/')
    }

    /// Path template for an operation, override first
    pub fn path<'a>(&'a self, descriptor: &'static ResourceDescriptor, operation: Operation) -> &'a str {
        self.resource(descriptor.key)
            .and_then(|r| r.path(operation))
            .unwrap_or(descriptor.endpoints.route(operation).path)
    }

    /// Absolute URL of an operation, with `{id}` substituted
    pub fn endpoint_url(
        &self,
        descriptor: &'static ResourceDescriptor,
        operation: Operation,
        id: Option<&RecordId>,
    ) -> String {
        format!(
            "{}{}",
            self.base_url(descriptor.key),
            expand_path(self.path(descriptor, operation), id)
        )
    }

    /// List URL of `source` as served by `owner`'s host, used for the
    /// options of `owner`'s select fields.
    pub fn options_url(
        &self,
        owner: &'static ResourceDescriptor,
        source: &'static ResourceDescriptor,
    ) -> String {
        format!(
            "{}{}",
            self.base_url(owner.key),
            expand_path(self.path(source, Operation::List), None)
        )
    }

    /// Absolute URL of a file path returned by a resource (e.g. news images).
    /// Already absolute URLs are returned unchanged.
    pub fn asset_url(&self, key: &str, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let base = self.base_url(key);
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{a001_category, a002_news, a003_news_type};

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.base_url, "https://bakend-wtc-4.onrender.com");
    }

    #[test]
    fn test_news_uses_its_own_host() {
        let config = load_config(None, None);
        assert_eq!(
            config.endpoint_url(&a002_news::DESCRIPTOR, Operation::List, None),
            "https://bakend-wtc.onrender.com/api/v1/news"
        );
        assert_eq!(
            config.endpoint_url(&a003_news_type::DESCRIPTOR, Operation::List, None),
            "https://bakend-wtc-4.onrender.com/api/v1/news-type"
        );
    }

    #[test]
    fn test_news_type_options_come_from_news_host() {
        let config = load_config(None, None);
        assert_eq!(
            config.options_url(&a002_news::DESCRIPTOR, &a003_news_type::DESCRIPTOR),
            "https://bakend-wtc.onrender.com/api/v1/news-type"
        );
    }

    #[test]
    fn test_endpoint_url_with_id() {
        let config = load_config(None, None);
        let id = RecordId::new("65a1");
        assert_eq!(
            config.endpoint_url(&a002_news::DESCRIPTOR, Operation::Update, Some(&id)),
            "https://bakend-wtc.onrender.com/api/v1/news/65a1"
        );
        assert_eq!(
            config.endpoint_url(&a002_news::DESCRIPTOR, Operation::Create, None),
            "https://bakend-wtc.onrender.com/api/v1/news/create"
        );
    }

    #[test]
    fn test_delete_path_override() {
        let config = load_config(
            Some(
                r#"
                [api]
                base_url = "http://localhost:8080/"

                [resources.a001_category]
                delete = "/api/v1/categories/{id}"
                "#,
            ),
            None,
        );
        let id = RecordId::new("7");
        assert_eq!(
            config.endpoint_url(&a001_category::DESCRIPTOR, Operation::Delete, Some(&id)),
            "http://localhost:8080/api/v1/categories/7"
        );
        // Not overridden: observed path
        assert_eq!(
            config.endpoint_url(&a001_category::DESCRIPTOR, Operation::Update, Some(&id)),
            "http://localhost:8080/api/v1/categories/7"
        );
    }

    #[test]
    fn test_invalid_document_falls_back_to_default() {
        let config = load_config(Some("[api"), None);
        assert_eq!(config, load_config(None, None));
    }

    #[test]
    fn test_base_url_override() {
        let config = load_config(None, Some(" http://127.0.0.1:3000 "));
        assert_eq!(config.base_url("a001_category"), "http://127.0.0.1:3000");
        // Explicit per-resource host still wins
        assert_eq!(config.base_url("a002_news"), "https://bakend-wtc.onrender.com");
    }

    #[test]
    fn test_asset_url() {
        let config = load_config(None, None);
        assert_eq!(
            config.asset_url("a002_news", "/uploads/a.jpg"),
            "https://bakend-wtc.onrender.com/uploads/a.jpg"
        );
        assert_eq!(
            config.asset_url("a002_news", "uploads/a.jpg"),
            "https://bakend-wtc.onrender.com/uploads/a.jpg"
        );
        assert_eq!(
            config.asset_url("a002_news", "https://cdn.example.com/a.jpg"),
            "https://cdn.example.com/a.jpg"
        );
    }
}
