//! Outbound storefront links.

/// Storefront product page for a product opened from a look.
///
/// The format is consumed by storefront analytics and is kept byte-for-byte:
/// no scheme upgrade and no escaping of the interpolated values.
#[must_use]
pub fn product_url(shop: &str, handle: &str, look_id: &str) -> String {
    format!("http://{shop}/products/{handle}?app=shoplook&lookid={look_id}")
}
