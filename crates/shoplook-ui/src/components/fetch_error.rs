//! Failure panel with a retry action.

use crate::core::copy::TRY_AGAIN;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct FetchErrorProps {
    pub message: AttrValue,
    pub on_retry: Callback<()>,
}

#[function_component(FetchErrorPanel)]
pub(crate) fn fetch_error_panel(props: &FetchErrorProps) -> Html {
    let on_click = {
        let on_retry = props.on_retry.clone();
        Callback::from(move |_: MouseEvent| on_retry.emit(()))
    };
    html! {
        <div class="shoplook-error flex flex-col items-center gap-3 p-4" role="alert">
            <h1 class="text-base font-semibold">{props.message.clone()}</h1>
            <div class="divider" />
            <button class="btn" type="button" onclick={on_click}>{TRY_AGAIN}</button>
        </div>
    }
}
