//! Look card: media, product count, name, and the shop-the-look action.

use crate::components::MediaCarousel;
use crate::core::copy::{SHOP_THE_LOOK, products_caption};
use shoplook_models::Look;
use yew::prelude::*;

/// Look selected by the shopper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct LookSelection {
    pub look_id: String,
    pub product_ids: Vec<String>,
}

#[derive(Properties, PartialEq)]
pub(crate) struct LookCardProps {
    pub look: Look,
    pub on_select: Callback<LookSelection>,
}

#[function_component(LookCard)]
pub(crate) fn look_card(props: &LookCardProps) -> Html {
    let look = &props.look;
    let on_click = {
        let on_select = props.on_select.clone();
        let selection = LookSelection {
            look_id: look.id.clone(),
            product_ids: look.products.clone(),
        };
        Callback::from(move |_: MouseEvent| on_select.emit(selection.clone()))
    };

    html! {
        <div class="shoplook-look card w-full max-w-[330px] bg-base-100 p-4">
            <MediaCarousel medias={look.medias.clone()} width={275} height={400} />
            <div class="flex flex-col items-center gap-1 pt-3">
                <span class="text-xs uppercase text-gray-500">
                    {products_caption(look.product_count())}
                </span>
                <h2 class="text-xl font-medium">{look.name.clone()}</h2>
                <button class="btn btn-block mt-2" type="button" onclick={on_click}>
                    {SHOP_THE_LOOK}
                </button>
            </div>
        </div>
    }
}
