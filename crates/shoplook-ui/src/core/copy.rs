//! Shopper-facing copy.

/// Shown instead of the carousel once a free-plan shop exceeds its view limit.
pub const LIMIT_MESSAGE: &str = "Your free trial limit has been exceeded. Please visit the Lookbook app dashboard from your Shopify admin page to subscribe to the paid plan.";
/// Products modal heading.
pub const MODAL_TITLE: &str = "Shop the products in this look";
/// Look card call to action.
pub const SHOP_THE_LOOK: &str = "Shop The Look";
/// Product card call to action.
pub const VIEW_PRODUCT: &str = "View Product";
/// Retry button in the error panel.
pub const TRY_AGAIN: &str = "Try Again";

/// Caption under a look's media.
#[must_use]
pub fn products_caption(count: usize) -> String {
    format!("{count} products in this look")
}

/// Caption under a product's media; omitted when the product has no variants.
#[must_use]
pub fn variants_caption(count: usize) -> Option<String> {
    (count > 0).then(|| format!("{count} variants available"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captions_include_counts() {
        assert_eq!(products_caption(0), "0 products in this look");
        assert_eq!(products_caption(3), "3 products in this look");
        assert_eq!(variants_caption(2).as_deref(), Some("2 variants available"));
    }

    #[test]
    fn variants_caption_is_hidden_without_variants() {
        assert_eq!(variants_caption(0), None);
    }
}
