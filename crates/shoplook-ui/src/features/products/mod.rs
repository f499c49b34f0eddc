//! Products modal feature.
//!
//! # Design
//! - Fetch once per mount; the embed route remounts the modal for each look.
//! - Reuse the shared fetch reducer and view selector.

mod view;

pub(crate) use view::ProductsModal;
