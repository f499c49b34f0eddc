//! Widget configuration: gateway base URL and shop domain.
//!
//! # Design
//! - The gateway URL is fixed at build time through `SHOPLOOK_API_URL`.
//! - The shop comes from the host page: `?shop=` first, then the mount element's `data-shop`.

use thiserror::Error;

/// Gateway used when no build-time URL is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8081";
/// Element the widget mounts into when present.
pub const MOUNT_ELEMENT_ID: &str = "shoplook-root";
/// Attribute on the mount element carrying the shop domain.
pub const SHOP_ATTRIBUTE: &str = "data-shop";

/// Configuration problems detected at boot.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither the page query nor the mount element named a shop.
    #[error("no shop domain in the page query or the data-shop attribute")]
    MissingShop,
}

/// Resolved widget configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Gateway base URL without a trailing slash.
    pub api_base_url: String,
    /// Shop domain, e.g. `demo.myshopify.com`.
    pub shop: String,
}

impl WidgetConfig {
    /// Resolve the configuration from the page's query string and the mount
    /// element's shop attribute.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingShop`] when no shop can be found.
    pub fn resolve(search: &str, shop_attribute: Option<&str>) -> Result<Self, ConfigError> {
        let shop = shop_from_query(search)
            .or_else(|| shop_attribute.and_then(non_empty))
            .ok_or(ConfigError::MissingShop)?;
        Ok(Self {
            api_base_url: api_base_url(),
            shop,
        })
    }
}

/// Gateway base URL baked in at build time.
#[must_use]
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("SHOPLOOK_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

/// Trim whitespace and trailing slashes; blank input maps to the default.
#[must_use]
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Extract the `shop` parameter from a `location.search` string.
#[must_use]
pub fn shop_from_query(search: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "shop")
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .and_then(|value| non_empty(&value))
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
