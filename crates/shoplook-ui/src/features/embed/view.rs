use crate::app::api::ApiCtx;
use crate::components::{Carousel, FetchErrorPanel, LookCard, LookSelection, Skeleton};
use crate::core::copy::LIMIT_MESSAGE;
use crate::core::fetch::{FetchAction, TicketIssuer, ViewRenderers};
use crate::core::lifecycle::MountFlag;
use crate::core::store::{EmbedAction, EmbedState, settle_looks};
use crate::core::usage::{check_usage, describe_usage_failure, settle_usage};
use crate::features::products::ProductsModal;
use gloo::console;
use shoplook_models::Look;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EmbedRouteProps {
    pub shop: AttrValue,
    pub gateway: ApiCtx,
}

struct LookRenderers {
    on_retry: Callback<()>,
    on_select: Callback<LookSelection>,
}

impl ViewRenderers<Look> for LookRenderers {
    type Output = Html;

    fn loading(&self, placeholders: usize) -> Html {
        html! {
            <>
                { for (0..placeholders).map(|_| html! {
                    <div class="carousel-item flex justify-center">
                        <Skeleton width="275px" height="400px" />
                    </div>
                }) }
            </>
        }
    }

    fn error(&self, message: &str) -> Html {
        html! {
            <div class="carousel-item w-full justify-center">
                <FetchErrorPanel
                    message={AttrValue::from(message.to_string())}
                    on_retry={self.on_retry.clone()}
                />
            </div>
        }
    }

    fn empty(&self) -> Html {
        Html::default()
    }

    fn items(&self, looks: &[Look]) -> Html {
        html! {
            <>
                { for looks.iter().map(|look| html! {
                    <div key={look.id.clone()} class="carousel-item">
                        <LookCard look={look.clone()} on_select={self.on_select.clone()} />
                    </div>
                }) }
            </>
        }
    }
}

#[function_component(EmbedRoute)]
pub(crate) fn embed_route(props: &EmbedRouteProps) -> Html {
    let state = use_reducer(EmbedState::default);
    let issuer = use_memo(|_| TicketIssuer::default(), ());
    let mount = use_memo(|_| MountFlag::mounted(), ());

    let load_looks = {
        let gateway = props.gateway.clone();
        let shop = props.shop.clone();
        let dispatcher = state.dispatcher();
        let issuer = issuer.clone();
        let mount = (*mount).clone();
        Callback::from(move |()| {
            let ticket = issuer.issue();
            dispatcher.dispatch(EmbedAction::Looks(FetchAction::Begin(ticket)));
            let client = gateway.client.clone();
            let shop = shop.clone();
            let dispatcher = dispatcher.clone();
            let mount = mount.clone();
            spawn_local(async move {
                let action = settle_looks(client.as_ref(), &shop, ticket).await;
                mount.if_mounted(|| dispatcher.dispatch(EmbedAction::Looks(action)));
            });
        })
    };

    {
        let load_looks = load_looks.clone();
        let client = props.gateway.client.clone();
        let shop = props.shop.clone();
        let dispatcher = state.dispatcher();
        let mount = (*mount).clone();
        use_effect_with_deps(
            move |_| {
                load_looks.emit(());
                let usage_mount = mount.clone();
                spawn_local(async move {
                    let result = check_usage(client.as_ref(), &shop).await;
                    let gate = settle_usage(result, |err| {
                        console::warn!(describe_usage_failure(err));
                    });
                    usage_mount.if_mounted(|| dispatcher.dispatch(EmbedAction::UsageChecked(gate)));
                });
                move || mount.unmount()
            },
            (),
        );
    }

    if state.limit_reached {
        return html! {
            <div class="shoplook-embed container mx-auto max-w-7xl py-5">
                <p class="text-center text-sm font-semibold">{LIMIT_MESSAGE}</p>
            </div>
        };
    }

    let on_select = {
        let dispatcher = state.dispatcher();
        Callback::from(move |selection: LookSelection| {
            dispatcher.dispatch(EmbedAction::OpenLook {
                look_id: selection.look_id,
                product_ids: selection.product_ids,
            });
        })
    };
    let on_close = {
        let dispatcher = state.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(EmbedAction::CloseModal))
    };

    let renderers = LookRenderers {
        on_retry: load_looks,
        on_select,
    };

    let modal = state.modal.open_look().map_or_else(Html::default, |look_id| {
        html! {
            <ProductsModal
                key={look_id.to_string()}
                open={state.modal.is_open}
                product_ids={state.modal.product_ids.clone()}
                look_id={AttrValue::from(look_id.to_string())}
                shop={props.shop.clone()}
                gateway={props.gateway.clone()}
                on_close={on_close}
            />
        }
    });

    html! {
        <div class="shoplook-embed container mx-auto max-w-7xl py-5">
            <Carousel>
                { state.looks.render_with(&renderers) }
            </Carousel>
            { modal }
        </div>
    }
}
