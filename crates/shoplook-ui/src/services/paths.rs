//! Gateway endpoint paths. Query values are percent-encoded.

use urlencoding::encode;

/// `GET` path listing the looks of a shop.
#[must_use]
pub fn looks_path(shop: &str) -> String {
    format!("/api/looks?shop={}", encode(shop))
}

/// `GET` path for the products with the given canonical ids.
#[must_use]
pub fn products_path(shop: &str, ids: &[String]) -> String {
    let joined = ids
        .iter()
        .map(|id| encode(id).into_owned())
        .collect::<Vec<_>>()
        .join(",");
    format!("/api/products?shop={}&products={joined}", encode(shop))
}

/// `GET` path that records one widget view.
#[must_use]
pub fn post_views_path(shop: &str) -> String {
    format!("/api/post_views?shop={}", encode(shop))
}

/// `GET` path returning the view counters.
#[must_use]
pub fn get_views_path(shop: &str) -> String {
    format!("/api/get_views?shop={}", encode(shop))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHOP: &str = "demo.myshopify.com";

    #[test]
    fn usage_paths_match_gateway_routes() {
        assert_eq!(post_views_path(SHOP), "/api/post_views?shop=demo.myshopify.com");
        assert_eq!(get_views_path(SHOP), "/api/get_views?shop=demo.myshopify.com");
    }

    #[test]
    fn list_paths_encode_query_values() {
        assert_eq!(looks_path("a&b"), "/api/looks?shop=a%26b");
        let ids = vec!["7001".to_string(), "gid://shopify/Product/7".to_string()];
        assert_eq!(
            products_path(SHOP, &ids),
            "/api/products?shop=demo.myshopify.com&products=7001,gid%3A%2F%2Fshopify%2FProduct%2F7"
        );
    }
}
