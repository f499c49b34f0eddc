//! HTTP client for the Shoplook gateway (REST).

use crate::services::error::ApiError;
use crate::services::gateway::{LookSource, ProductSource, UsageGateway};
use crate::services::paths::{get_views_path, looks_path, post_views_path, products_path};
use async_trait::async_trait;
use gloo::console;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shoplook_models::{Look, Product, RecordList, ViewStats};

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get(&self, path: &str) -> Result<Response, ApiError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|err| ApiError::network(err.to_string()))?;
        if response.ok() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(
            response.status(),
            &body,
            &response.status_text(),
        ))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.get(path)
            .await?
            .json::<T>()
            .await
            .map_err(|err| ApiError::decode(err.to_string()))
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        entity: &str,
    ) -> Result<Vec<T>, ApiError> {
        let list: RecordList<T> = self.get_json(path).await?;
        if list.dropped > 0 {
            console::warn!(format!(
                "shoplook dropped {} {entity} record(s) without a usable id",
                list.dropped
            ));
        }
        Ok(list.items)
    }
}

#[async_trait(?Send)]
impl LookSource for ApiClient {
    async fn fetch_looks(&self, shop: &str) -> Result<Vec<Look>, ApiError> {
        let looks: Vec<Look> = self.get_list(&looks_path(shop), "look").await?;
        let skipped: usize = looks.iter().map(|look| look.skipped_products).sum();
        if skipped > 0 {
            console::warn!(format!(
                "shoplook skipped {skipped} product reference(s) without a usable id"
            ));
        }
        Ok(looks)
    }
}

#[async_trait(?Send)]
impl ProductSource for ApiClient {
    async fn fetch_products(&self, shop: &str, ids: &[String]) -> Result<Vec<Product>, ApiError> {
        self.get_list(&products_path(shop, ids), "product").await
    }
}

#[async_trait(?Send)]
impl UsageGateway for ApiClient {
    async fn record_view(&self, shop: &str) -> Result<(), ApiError> {
        self.get(&post_views_path(shop)).await?;
        Ok(())
    }

    async fn view_stats(&self, shop: &str) -> Result<ViewStats, ApiError> {
        self.get_json(&get_views_path(shop)).await
    }
}
