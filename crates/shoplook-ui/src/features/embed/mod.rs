//! Embed route: the look carousel, the usage gate, and the products modal lifecycle.
//!
//! # Design
//! - All state lives in one reducer (`core::store::EmbedState`).
//! - The usage check never surfaces errors to the shopper; failures are logged and ignored.

mod view;

pub(crate) use view::EmbedRoute;
