//! Widget boot: configuration, gateway wiring, and mounting.

use crate::core::config::{MOUNT_ELEMENT_ID, SHOP_ATTRIBUTE, WidgetConfig};
use crate::features::embed::EmbedRoute;
use api::ApiCtx;
use gloo::console;
use gloo::utils::{document, window};
use yew::prelude::*;

pub(crate) mod api;

#[derive(Properties, PartialEq)]
struct ShoplookAppProps {
    config: WidgetConfig,
}

#[function_component(ShoplookApp)]
fn shoplook_app(props: &ShoplookAppProps) -> Html {
    let api_base_url = props.config.api_base_url.clone();
    let gateway = use_memo(move |_| ApiCtx::new(api_base_url), ());
    html! {
        <EmbedRoute
            shop={AttrValue::from(props.config.shop.clone())}
            gateway={(*gateway).clone()}
        />
    }
}

/// Mount the widget into `#shoplook-root`, or the document body when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let root = document().get_element_by_id(MOUNT_ELEMENT_ID);
    let search = window().location().search().unwrap_or_default();
    let shop_attribute = root
        .as_ref()
        .and_then(|element| element.get_attribute(SHOP_ATTRIBUTE));
    let config = match WidgetConfig::resolve(&search, shop_attribute.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            console::error!("shoplook widget not mounted", err.to_string());
            return;
        }
    };
    let props = ShoplookAppProps { config };
    if let Some(root) = root {
        yew::Renderer::<ShoplookApp>::with_root_and_props(root, props).render();
    } else {
        yew::Renderer::<ShoplookApp>::with_props(props).render();
    }
}
