use crate::app::api::ApiCtx;
use crate::components::{Carousel, FetchErrorPanel, Modal, ProductCard, Skeleton};
use crate::core::copy::MODAL_TITLE;
use crate::core::fetch::{FetchAction, FetchState, TicketIssuer, ViewRenderers};
use crate::core::lifecycle::MountFlag;
use crate::core::links::product_url;
use crate::core::store::settle_products;
use shoplook_models::Product;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ProductsModalProps {
    pub open: bool,
    pub product_ids: Vec<String>,
    pub look_id: AttrValue,
    pub shop: AttrValue,
    pub gateway: ApiCtx,
    pub on_close: Callback<()>,
}

struct ProductRenderers<'a> {
    shop: &'a str,
    look_id: &'a str,
    on_retry: Callback<()>,
}

impl ViewRenderers<Product> for ProductRenderers<'_> {
    type Output = Html;

    fn loading(&self, placeholders: usize) -> Html {
        html! {
            <div class="grid grid-cols-[repeat(auto-fill,minmax(220px,1fr))] gap-2.5">
                { for (0..placeholders).map(|_| html! {
                    <div class="flex justify-center p-4">
                        <Skeleton width="160px" height="182px" />
                    </div>
                }) }
            </div>
        }
    }

    fn error(&self, message: &str) -> Html {
        html! {
            <FetchErrorPanel
                message={AttrValue::from(message.to_string())}
                on_retry={self.on_retry.clone()}
            />
        }
    }

    fn empty(&self) -> Html {
        Html::default()
    }

    fn items(&self, products: &[Product]) -> Html {
        html! {
            <Carousel>
                { for products.iter().map(|product| html! {
                    <div key={product.id.clone()} class="carousel-item justify-center">
                        <ProductCard
                            product={product.clone()}
                            href={AttrValue::from(product_url(self.shop, &product.handle, self.look_id))}
                        />
                    </div>
                }) }
            </Carousel>
        }
    }
}

#[function_component(ProductsModal)]
pub(crate) fn products_modal(props: &ProductsModalProps) -> Html {
    let products = use_reducer(FetchState::<Product>::default);
    let issuer = use_memo(|_| TicketIssuer::default(), ());
    let mount = use_memo(|_| MountFlag::mounted(), ());

    let load = {
        let gateway = props.gateway.clone();
        let shop = props.shop.clone();
        let ids = props.product_ids.clone();
        let dispatcher = products.dispatcher();
        let issuer = issuer.clone();
        let mount = (*mount).clone();
        Callback::from(move |()| {
            let ticket = issuer.issue();
            dispatcher.dispatch(FetchAction::Begin(ticket));
            let client = gateway.client.clone();
            let shop = shop.clone();
            let ids = ids.clone();
            let dispatcher = dispatcher.clone();
            let mount = mount.clone();
            spawn_local(async move {
                let action = settle_products(client.as_ref(), &shop, &ids, ticket).await;
                mount.if_mounted(|| dispatcher.dispatch(action));
            });
        })
    };

    {
        let load = load.clone();
        let mount = (*mount).clone();
        use_effect_with_deps(
            move |_| {
                load.emit(());
                move || mount.unmount()
            },
            (),
        );
    }

    let renderers = ProductRenderers {
        shop: &props.shop,
        look_id: &props.look_id,
        on_retry: load,
    };

    html! {
        <Modal
            open={props.open}
            title={AttrValue::from(MODAL_TITLE)}
            on_close={props.on_close.clone()}
        >
            { products.render_with(&renderers) }
        </Modal>
    }
}
