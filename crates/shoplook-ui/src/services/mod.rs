//! Gateway access: data-access traits, the error type, and the HTTP client.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod error;
pub mod gateway;
pub mod paths;
