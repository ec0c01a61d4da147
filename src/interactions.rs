use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions,
};
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub threshold: f64,
    pub root_margin: &'static str,
}

/// Cards fade in a little before they are fully on screen.
pub const REVEAL_VIEWPORT: Viewport = Viewport {
    threshold: 0.1,
    root_margin: "0px 0px -50px 0px",
};

pub const ANY_OVERLAP: Viewport = Viewport {
    threshold: 0.0,
    root_margin: "0px",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    CallEmergency,
    JumpToContact,
}

/// Maps a `keydown` to a page shortcut. Typing into a field or holding a
/// modifier never triggers one.
pub fn shortcut_for(key: &str, typing: bool, modifier: bool) -> Option<Shortcut> {
    if typing || modifier {
        return None;
    }
    match key {
        "e" | "E" => Some(Shortcut::CallEmergency),
        "c" | "C" => Some(Shortcut::JumpToContact),
        _ => None,
    }
}

pub fn is_text_entry(tag_name: &str) -> bool {
    matches!(
        tag_name.to_ascii_uppercase().as_str(),
        "INPUT" | "TEXTAREA" | "SELECT"
    )
}

pub fn nav_is_raised(scroll_y: f64) -> bool {
    scroll_y > config::NAVBAR_SHADOW_THRESHOLD_PX
}

pub fn scroll_target_top(offset_top: i32) -> f64 {
    f64::from(offset_top - config::NAVBAR_OFFSET_PX)
}

/// Next value shown by an animated counter, `None` once it has arrived.
pub fn counter_next(current: i64, target: i64) -> Option<i64> {
    if current >= target {
        return None;
    }
    let increment = target as f64 / f64::from(config::COUNTER_STEPS);
    let next = (current as f64 + increment).ceil() as i64;
    Some(next.min(target))
}

pub fn footer_notice(text: &str, year: i32) -> String {
    if text.contains("2026") {
        text.replace("2026", &year.to_string())
    } else {
        text.to_string()
    }
}

/// Smooth-scrolls the window so the element with `id` sits just below the
/// fixed navbar. Unknown ids are ignored.
pub fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let target = window
        .document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let Some(target) = target else {
        warn!("No section with id {}", id);
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(scroll_target_top(target.offset_top()));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_with_scroll_to_options(&options);
}

pub fn scroll_into_view(id: &str) {
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    if let Some(target) = target {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

pub fn click_first(selector: &str) {
    let link = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(selector).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    match link {
        Some(link) => link.click(),
        None => warn!("Nothing matches {}", selector),
    }
}

pub fn run_shortcut(shortcut: Shortcut) {
    match shortcut {
        Shortcut::CallEmergency => click_first("a[href^=\"tel:\"]"),
        Shortcut::JumpToContact => scroll_into_view("contact"),
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_once(
    node: &NodeRef,
    viewport: Viewport,
    on_enter: impl Fn() + 'static,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let element = node.cast::<Element>()?;

    let callback: ObserverCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                observer.unobserve(&entry.target());
                on_enter();
            }
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(viewport.threshold));
    options.set_root_margin(viewport.root_margin);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(&element);
            Some((observer, callback))
        }
        Err(e) => {
            warn!("IntersectionObserver unavailable: {:?}", e);
            None
        }
    }
}

/// True from the first time `node` intersects the viewport on.
#[hook]
pub fn use_in_view_once(node: NodeRef, viewport: Viewport) -> bool {
    let seen = use_state_eq(|| false);

    {
        let seen = seen.clone();
        use_effect_with_deps(
            move |_| {
                let observer = observe_once(&node, viewport, move || seen.set(true));
                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    *seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcuts_are_case_insensitive() {
        assert_eq!(shortcut_for("e", false, false), Some(Shortcut::CallEmergency));
        assert_eq!(shortcut_for("E", false, false), Some(Shortcut::CallEmergency));
        assert_eq!(shortcut_for("c", false, false), Some(Shortcut::JumpToContact));
        assert_eq!(shortcut_for("C", false, false), Some(Shortcut::JumpToContact));
        assert_eq!(shortcut_for("x", false, false), None);
        assert_eq!(shortcut_for("Enter", false, false), None);
    }

    #[test]
    fn shortcuts_stay_quiet_while_typing() {
        assert_eq!(shortcut_for("e", true, false), None);
        assert_eq!(shortcut_for("c", false, true), None);
        assert!(is_text_entry("INPUT"));
        assert!(is_text_entry("textarea"));
        assert!(!is_text_entry("A"));
    }

    #[test]
    fn navbar_raises_past_fifty_pixels() {
        assert!(!nav_is_raised(0.0));
        assert!(!nav_is_raised(50.0));
        assert!(nav_is_raised(50.5));
    }

    #[test]
    fn scroll_target_leaves_room_for_navbar() {
        assert_eq!(scroll_target_top(1000), 920.0);
        assert_eq!(scroll_target_top(40), -40.0);
    }

    #[test]
    fn counter_walks_to_target_in_fifty_steps() {
        let mut value = 0;
        let mut steps = 0;
        while let Some(next) = counter_next(value, 12000) {
            assert!(next > value);
            value = next;
            steps += 1;
        }
        assert_eq!(value, 12000);
        assert_eq!(steps, 50);
    }

    #[test]
    fn counter_rounds_up_and_never_overshoots() {
        assert_eq!(counter_next(0, 15), Some(1));
        assert_eq!(counter_next(0, 98), Some(2));
        assert_eq!(counter_next(74, 75), Some(75));
        let mut value = 0;
        while let Some(next) = counter_next(value, 75) {
            value = next;
        }
        assert_eq!(value, 75);
    }

    #[test]
    fn counter_with_nothing_to_count_is_done() {
        assert_eq!(counter_next(0, 0), None);
        assert_eq!(counter_next(0, -5), None);
    }

    #[test]
    fn footer_year_is_replaced() {
        assert_eq!(
            footer_notice("© 2026 Salva Clients.", 2027),
            "© 2027 Salva Clients."
        );
        assert_eq!(footer_notice("© Salva Clients.", 2027), "© Salva Clients.");
    }
}
