//! Gateway handle shared by the widget's components.
//!
//! # Design
//! - Create exactly one gateway per widget boot.
//! - Components receive the handle as a prop, never through globals.

use crate::services::api::ApiClient;
use crate::services::gateway::Gateway;
use std::rc::Rc;

/// Shared gateway handle for feature components.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Gateway implementation used for every request.
    pub(crate) client: Rc<dyn Gateway>,
}

impl ApiCtx {
    /// Create a handle backed by the HTTP client for `base_url`.
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Rc::new(ApiClient::new(base_url)),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
