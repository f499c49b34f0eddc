//! Feature controllers: the embed route and the products modal.

pub(crate) mod embed;
pub(crate) mod products;
