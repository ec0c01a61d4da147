use yew::prelude::*;

use crate::interactions::{use_in_view_once, ANY_OVERLAP, REVEAL_VIEWPORT};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Wrapper that gains `in-view` the first time it scrolls into sight.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view_once(node.clone(), REVEAL_VIEWPORT);

    html! {
        <div ref={node} class={classes!(props.class.clone(), "reveal", in_view.then(|| "in-view"))}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Image whose source is only set once it comes into view.
#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view_once(node.clone(), ANY_OVERLAP);

    let src = in_view.then(|| props.src.clone());
    let deferred = (!in_view).then(|| props.src.clone());

    html! {
        <img
            ref={node}
            class={props.class.clone()}
            alt={props.alt.clone()}
            {src}
            data-src={deferred}
        />
    }
}
