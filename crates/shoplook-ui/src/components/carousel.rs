//! Horizontal scroll-snap carousels.

use shoplook_models::Media;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CarouselProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

/// Horizontal row of slides. Children supply their own `carousel-item` wrappers.
#[function_component(Carousel)]
pub(crate) fn carousel(props: &CarouselProps) -> Html {
    html! {
        <div class={classes!("carousel", "carousel-center", "w-full", "gap-4", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct MediaCarouselProps {
    pub medias: Vec<Media>,
    pub width: u32,
    pub height: u32,
}

/// Image strip for a look or product. Renders a blank frame when there is no media.
#[function_component(MediaCarousel)]
pub(crate) fn media_carousel(props: &MediaCarouselProps) -> Html {
    let frame = format!("width:{}px;height:{}px;", props.width, props.height);
    if props.medias.is_empty() {
        return html! { <div class="shoplook-media bg-base-200 rounded-lg" style={frame} /> };
    }
    html! {
        <div class="carousel shoplook-media rounded-lg" style={frame.clone()}>
            { for props.medias.iter().map(|media| html! {
                <div class="carousel-item w-full">
                    <img
                        class="w-full object-cover"
                        src={media.url.clone()}
                        alt={media.alt.clone().unwrap_or_default()}
                        loading="lazy"
                    />
                </div>
            }) }
        </div>
    }
}
