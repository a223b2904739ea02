//! Smooth scrolling for `#fragment` links and back/forward between them.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom;
use crate::scroll;

fn fragment_target(fragment: &str) -> Option<HtmlElement> {
    // "#" alone or ids that aren't valid selectors make query_selector throw
    dom::query(fragment)?.dyn_into::<HtmlElement>().ok()
}

fn smooth_scroll_to(target: &HtmlElement) {
    let nav_shown = dom::query(".sticky-nav")
        .map(|nav| dom::has_class(&nav, "visible"))
        .unwrap_or(false);
    let options = ScrollToOptions::new();
    options.set_top(scroll::anchor_top(f64::from(target.offset_top()), nav_shown));
    options.set_behavior(ScrollBehavior::Smooth);
    if let Some(window) = window() {
        window.scroll_to_with_scroll_to_options(&options);
    }
}

fn on_document_click(event: Event) {
    let Some(link) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(r##"a[href^="#"]"##).ok().flatten())
    else {
        return;
    };
    let Some(fragment) = link.get_attribute("href") else {
        return;
    };
    let Some(target) = fragment_target(&fragment) else {
        return;
    };

    event.prevent_default();
    smooth_scroll_to(&target);

    // Record the fragment without letting the browser jump to it
    if let Some(history) = window().and_then(|w| w.history().ok()) {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&fragment));
    }
}

fn scroll_to_hash() {
    let Some(hash) = window().and_then(|w| w.location().hash().ok()) else {
        return;
    };
    if hash.is_empty() {
        return;
    }
    if let Some(target) = fragment_target(&hash) {
        smooth_scroll_to(&target);
    }
}

pub struct AnchorNavigation {
    on_click: Closure<dyn Fn(Event)>,
    on_hash_change: Closure<dyn Fn()>,
}

impl AnchorNavigation {
    pub fn attach() -> Option<Self> {
        let window = window()?;
        let document = window.document()?;

        let on_click = Closure::<dyn Fn(Event)>::new(on_document_click);
        let on_hash_change = Closure::<dyn Fn()>::new(scroll_to_hash);
        let _ = document
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        let _ = window
            .add_event_listener_with_callback("hashchange", on_hash_change.as_ref().unchecked_ref());

        Some(Self {
            on_click,
            on_hash_change,
        })
    }

    pub fn detach(self) {
        let Some(window) = window() else {
            return;
        };
        if let Some(document) = window.document() {
            let _ = document
                .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref());
        }
        let _ = window.remove_event_listener_with_callback(
            "hashchange",
            self.on_hash_change.as_ref().unchecked_ref(),
        );
    }
}
