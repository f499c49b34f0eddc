//! Presentational building blocks for the widget.
//!
//! # Design
//! - Components are prop-driven and never talk to the gateway.
//! - Class names follow the DaisyUI vocabulary used by the host stylesheet.

pub(crate) mod carousel;
pub(crate) mod fetch_error;
pub(crate) mod look_card;
pub(crate) mod modal;
pub(crate) mod product_card;
pub(crate) mod skeleton;

pub(crate) use carousel::{Carousel, MediaCarousel};
pub(crate) use fetch_error::FetchErrorPanel;
pub(crate) use look_card::{LookCard, LookSelection};
pub(crate) use modal::Modal;
pub(crate) use product_card::ProductCard;
pub(crate) use skeleton::Skeleton;
