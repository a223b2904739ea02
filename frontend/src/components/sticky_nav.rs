use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

use crate::config;
use crate::debounce::Debounced;
use crate::dom;
use crate::scroll;
use crate::tracking::StepTracking;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepLink {
    pub step: u32,
    pub label: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct StickyNavProps {
    pub steps: &'static [StepLink],
}

fn past_hero() -> Option<bool> {
    let hero = dom::query_html("#hero")?;
    Some(scroll::nav_visible(
        dom::scroll_y(),
        f64::from(hero.offset_top()),
        f64::from(hero.offset_height()),
    ))
}

#[function_component(StickyNav)]
pub fn sticky_nav(props: &StickyNavProps) -> Html {
    // Scroll fires far more often than either value changes
    let visible = use_state_eq(|| false);
    let active_step = use_state_eq(|| None::<u32>);

    // Show once the hero is nearly gone
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let update = move || {
                    if let Some(past) = past_hero() {
                        visible.set(past);
                    }
                };
                update();

                let debounced = Debounced::new(config::NAV_DEBOUNCE_MS, update);
                let listener = Closure::<dyn Fn()>::new({
                    let debounced = debounced.clone();
                    move || debounced.trigger()
                });
                let attached = window().filter(|w| {
                    w.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
                        .is_ok()
                });

                move || {
                    debounced.cancel();
                    if let Some(window) = attached {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    {
        let active_step = active_step.clone();
        use_effect_with_deps(
            move |_| {
                let tracking = StepTracking::attach(Callback::from(move |step: Option<u32>| {
                    debug!("Active step {:?}", step);
                    active_step.set(step);
                }));
                move || {
                    if let Some(tracking) = tracking {
                        tracking.detach();
                    }
                }
            },
            (),
        );
    }

    html! {
        <nav class={classes!("sticky-nav", (*visible).then(|| "visible"))} aria-label="Steps">
            <div class="sticky-nav-inner" role="tablist">
                <a href="#hero" class="sticky-nav-logo">{"vibe2lead"}</a>
                {
                    props.steps.iter().map(|link| {
                        let active = *active_step == Some(link.step);
                        html! {
                            <a
                                href={format!("#step-{}", link.step)}
                                class={classes!("step-link", active.then(|| "active"))}
                                data-step={link.step.to_string()}
                                role="tab"
                                aria-selected={if active { "true" } else { "false" }}
                            >
                                <span class="step-number">{link.step.to_string()}</span>
                                <span class="step-label">{link.label}</span>
                            </a>
                        }
                    }).collect::<Html>()
                }
            </div>
        </nav>
    }
}
