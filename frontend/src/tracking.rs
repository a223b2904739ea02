//! Active step tracking, either through an `IntersectionObserver` or, on
//! browsers without one, a debounced scroll listener.

use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Array, Reflect};
use web_sys::{window, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::Callback;

use crate::config;
use crate::debounce::Debounced;
use crate::dom;
use crate::scroll::{self, StepExtent};

const SECTION_SELECTOR: &str = ".step-section";

/// Whichever strategy was picked at mount. Dropping it without `detach`
/// leaves listeners attached, so always detach on unmount.
pub enum StepTracking {
    Observer {
        observer: IntersectionObserver,
        _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    },
    Scroll {
        listener: Closure<dyn Fn()>,
        debounced: Debounced,
    },
}

impl StepTracking {
    /// Picks a strategy once and starts reporting the active step (or `None`)
    /// through `on_active`.
    pub fn attach(on_active: Callback<Option<u32>>) -> Option<Self> {
        let sections = dom::document_html(SECTION_SELECTOR);
        if sections.is_empty() {
            debug!("No step sections, step tracking disabled");
            return None;
        }

        if supports_intersection_observer() {
            Self::observe(&sections, on_active)
        } else {
            Self::listen(on_active)
        }
    }

    fn observe(sections: &[HtmlElement], on_active: Callback<Option<u32>>) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        on_active.emit(scroll::step_number(&entry.target().id()));
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_root_margin(config::STEP_ROOT_MARGIN);
        options.set_threshold(&JsValue::from_f64(0.0));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;
        for section in sections {
            observer.observe(section);
        }

        debug!("Tracking steps with IntersectionObserver");
        Some(StepTracking::Observer {
            observer,
            _callback: callback,
        })
    }

    fn listen(on_active: Callback<Option<u32>>) -> Option<Self> {
        let window = window()?;
        let debounced = Debounced::new(config::STEP_DEBOUNCE_MS, move || {
            on_active.emit(current_step());
        });

        let listener = Closure::<dyn Fn()>::new({
            let debounced = debounced.clone();
            move || debounced.trigger()
        });
        window
            .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            .ok()?;

        debug!("Tracking steps with scroll fallback");
        Some(StepTracking::Scroll {
            listener,
            debounced,
        })
    }

    pub fn detach(self) {
        match self {
            StepTracking::Observer { observer, .. } => observer.disconnect(),
            StepTracking::Scroll {
                listener,
                debounced,
            } => {
                debounced.cancel();
                if let Some(window) = window() {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        }
    }
}

fn supports_intersection_observer() -> bool {
    window()
        .map(|w| Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

fn current_step() -> Option<u32> {
    let extents: Vec<StepExtent> = dom::document_html(SECTION_SELECTOR)
        .iter()
        .map(|section| {
            StepExtent::new(
                f64::from(section.offset_top()),
                f64::from(section.offset_height()),
            )
        })
        .collect();
    let trigger = scroll::trigger_point(dom::scroll_y(), dom::viewport_height());
    scroll::active_step(&extents, trigger)
}
