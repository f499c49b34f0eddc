//! Product card linking out to the storefront product page.

use crate::components::MediaCarousel;
use crate::core::copy::{VIEW_PRODUCT, variants_caption};
use shoplook_models::Product;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ProductCardProps {
    pub product: Product,
    /// Storefront URL, opened in a new browsing context.
    pub href: AttrValue,
}

#[function_component(ProductCard)]
pub(crate) fn product_card(props: &ProductCardProps) -> Html {
    let product = &props.product;
    html! {
        <div class="shoplook-product w-full max-w-[240px] p-4">
            <MediaCarousel medias={product.images.clone()} width={220} height={320} />
            <div class="flex flex-col items-center gap-1 pt-3">
                { variants_caption(product.variant_count()).map(|caption| html! {
                    <span class="text-xs uppercase text-gray-500">{caption}</span>
                }).unwrap_or_default() }
                <h2 class="text-center text-base font-medium">{product.title.clone()}</h2>
                <a
                    class="btn btn-block btn-sm mt-2"
                    href={props.href.clone()}
                    target="_blank"
                    rel="noopener"
                >
                    {VIEW_PRODUCT}
                    <span aria-hidden="true">{" ↗"}</span>
                </a>
            </div>
        </div>
    }
}
