use crate::core::modal::closes_modal;
use gloo::console;
use web_sys::HtmlElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    pub open: bool,
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub on_close: Callback<()>,
}

/// Centered dialog; the close button, a backdrop click and Escape all emit `on_close`.
#[function_component(Modal)]
pub(crate) fn modal(props: &ModalProps) -> Html {
    let dialog_ref = use_node_ref();
    {
        let dialog_ref = dialog_ref.clone();
        use_effect_with_deps(
            move |open| {
                if *open
                    && let Some(dialog) = dialog_ref.cast::<HtmlElement>()
                    && dialog.focus().is_err()
                {
                    console::warn!("shoplook modal could not take focus");
                }
                || ()
            },
            props.open,
        );
    }
    let on_keydown = {
        let on_close = props.on_close.clone();
        Callback::from(move |event: KeyboardEvent| {
            if closes_modal(&event.key()) {
                event.prevent_default();
                on_close.emit(());
            }
        })
    };
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div
            class={classes!("modal", "modal-middle", props.open.then_some("modal-open"))}
            role="dialog"
            aria-modal="true"
            aria-label={props.title.clone()}
            tabindex="-1"
            ref={dialog_ref}
            onkeydown={on_keydown}
        >
            <div class="modal-box max-w-3xl">
                <button
                    class="btn btn-sm btn-circle btn-outline absolute right-2 top-2"
                    type="button"
                    aria-label="Close"
                    onclick={on_close.clone()}
                >
                    {"✕"}
                </button>
                <h3 class="mt-3 text-center text-lg font-bold">{props.title.clone()}</h3>
                <div class="shoplook-modal-body overflow-y-auto">
                    { for props.children.iter() }
                </div>
            </div>
            <button class="modal-backdrop" type="button" onclick={on_close}></button>
        </div>
    }
}
