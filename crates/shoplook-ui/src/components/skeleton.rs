use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SkeletonProps {
    pub width: AttrValue,
    pub height: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Skeleton)]
pub(crate) fn skeleton(props: &SkeletonProps) -> Html {
    let style = format!("width:{};height:{};", props.width, props.height);
    html! {
        <div
            class={classes!("skeleton", "rounded-lg", props.class.clone())}
            style={style}
            aria-busy="true"
            aria-live="polite"
        />
    }
}
