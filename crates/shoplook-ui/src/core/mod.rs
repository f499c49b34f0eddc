//! Core, DOM-free state and decision logic for the widget.
pub mod config;
pub mod copy;
pub mod fetch;
pub mod lifecycle;
pub mod links;
pub mod modal;
pub mod store;
pub mod usage;
