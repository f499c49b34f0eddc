//! Data-access interfaces injected into the widget's components.
//!
//! # Design
//! - Components depend on these traits, never on the HTTP client directly.
//! - Futures are `?Send`; the browser executor is single-threaded.

use crate::services::error::ApiError;
use async_trait::async_trait;
use shoplook_models::{Look, Product, ViewStats};

/// Source of the looks published by a shop.
#[async_trait(?Send)]
pub trait LookSource {
    /// Looks for `shop`, in display order.
    async fn fetch_looks(&self, shop: &str) -> Result<Vec<Look>, ApiError>;
}

/// Source of product details.
#[async_trait(?Send)]
pub trait ProductSource {
    /// Products of `shop` whose canonical ids are in `ids`.
    async fn fetch_products(&self, shop: &str, ids: &[String]) -> Result<Vec<Product>, ApiError>;
}

/// View counters backing the free-plan gate.
#[async_trait(?Send)]
pub trait UsageGateway {
    /// Record one widget view for `shop`.
    async fn record_view(&self, shop: &str) -> Result<(), ApiError>;
    /// Current counters for `shop`.
    async fn view_stats(&self, shop: &str) -> Result<ViewStats, ApiError>;
}

/// Everything the widget needs from the gateway.
pub trait Gateway: LookSource + ProductSource + UsageGateway {}

impl<T> Gateway for T where T: LookSource + ProductSource + UsageGateway {}
