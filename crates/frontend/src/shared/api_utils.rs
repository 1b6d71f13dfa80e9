//! API utilities for frontend-backend communication
//!
//! Resolves endpoint and asset URLs from the console configuration.
//!
//! The configuration is embedded at build time:
//! - `ADMIN_CONSOLE_CONFIG` - full TOML document replacing the default
//! - `ADMIN_API_BASE_URL` - only replaces `[api].base_url`

use contracts::domain::common::{Operation, RecordId, ResourceDescriptor};
use contracts::shared::config::{load_config, Config};
use once_cell::sync::Lazy;

static CONFIG: Lazy<Config> = Lazy::new(|| {
    load_config(
        option_env!("ADMIN_CONSOLE_CONFIG"),
        option_env!("ADMIN_API_BASE_URL"),
    )
});

pub fn config() -> &'static Config {
    &CONFIG
}

/// Build the absolute URL of a resource operation
///
/// # Example
/// ```rust,ignore
/// let url = endpoint_url(&a002_news::DESCRIPTOR, Operation::Delete, Some(&id));
/// ```
pub fn endpoint_url(
    descriptor: &'static ResourceDescriptor,
    operation: Operation,
    id: Option<&RecordId>,
) -> String {
    config().endpoint_url(descriptor, operation, id)
}

/// Resolve a file path returned by a resource against that resource's host
pub fn asset_url(resource_key: &str, path: &str) -> String {
    config().asset_url(resource_key, path)
}
