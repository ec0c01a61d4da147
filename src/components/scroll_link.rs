use yew::prelude::*;

use crate::interactions::scroll_to_section;

#[derive(Properties, PartialEq)]
pub struct ScrollLinkProps {
    pub target: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<()>>,
    pub children: Children,
}

/// In-page anchor that smooth-scrolls instead of jumping.
#[function_component(ScrollLink)]
pub fn scroll_link(props: &ScrollLinkProps) -> Html {
    let onclick = {
        let target = props.target.clone();
        let after = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(&target);
            if let Some(after) = &after {
                after.emit(());
            }
        })
    };

    html! {
        <a href={format!("#{}", props.target)} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
