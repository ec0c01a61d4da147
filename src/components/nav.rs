use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, Node};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::components::scroll_link::ScrollLink;
use crate::config;
use crate::copy::Locale;
use crate::interactions::nav_is_raised;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub locale: Locale,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let copy = props.locale.copy();
    let menu_open = use_state_eq(|| false);
    let is_scrolled = use_state_eq(|| false);
    let nav_ref = use_node_ref();

    {
        let is_scrolled = is_scrolled.clone();
        use_event_with_window("scroll", move |_: Event| {
            let scroll_y = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            is_scrolled.set(nav_is_raised(scroll_y));
        });
    }

    // Clicking anywhere outside the navbar closes the mobile menu.
    {
        let menu_open = menu_open.clone();
        let nav_ref = nav_ref.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|w| w.document());
                let click_callback = Closure::<dyn Fn(Event)>::new(move |e: Event| {
                    let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                    let inside = match (nav_ref.cast::<Node>(), target) {
                        (Some(nav), Some(target)) => nav.contains(Some(&target)),
                        _ => false,
                    };
                    if !inside {
                        menu_open.set(false);
                    }
                });

                if let Some(document) = &document {
                    if let Err(e) = document.add_event_listener_with_callback(
                        "click",
                        click_callback.as_ref().unchecked_ref(),
                    ) {
                        warn!("Could not listen for outside clicks: {:?}", e);
                    }
                }

                move || {
                    if let Some(document) = document {
                        if let Err(e) = document.remove_event_listener_with_callback(
                            "click",
                            click_callback.as_ref().unchecked_ref(),
                        ) {
                            warn!("Could not stop listening for outside clicks: {:?}", e);
                        }
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };

    let other = match props.locale {
        Locale::En => Route::Spanish,
        Locale::Es => Route::Home,
    };

    html! {
        <nav ref={nav_ref} class={classes!("navbar", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <ScrollLink target="home" class="nav-logo">
                    {"Salva Clients"}
                </ScrollLink>

                <button
                    class={classes!("hamburger", (*menu_open).then(|| "active"))}
                    aria-label="Menu"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-menu", (*menu_open).then(|| "active"))}>
                    <ScrollLink target="services" class="nav-link" onclick={close_menu.clone()}>
                        {copy.nav_services}
                    </ScrollLink>
                    <ScrollLink target="why-us" class="nav-link" onclick={close_menu.clone()}>
                        {copy.nav_why_us}
                    </ScrollLink>
                    <ScrollLink target="contact" class="nav-link" onclick={close_menu.clone()}>
                        {copy.nav_contact}
                    </ScrollLink>
                    <div onclick={let close = close_menu.clone(); move |_: MouseEvent| close.emit(())}>
                        <Link<Route> to={other} classes="nav-link nav-language">
                            {copy.nav_other_language}
                        </Link<Route>>
                    </div>
                    <a href={config::EMERGENCY_PHONE_HREF} class="nav-call">
                        {copy.nav_call}
                    </a>
                </div>
            </div>
        </nav>
    }
}
