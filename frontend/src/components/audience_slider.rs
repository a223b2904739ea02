use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::audience::Audience;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AudienceCopy {
    pub audience: Audience,
    pub heading: &'static str,
    pub body: &'static str,
}

/// What one slider shows for a given audience.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SliderView {
    pub selected: Audience,
    pub highlight_position: usize,
}

impl SliderView {
    pub fn new(selected: Audience) -> Self {
        Self {
            selected,
            highlight_position: selected.position(),
        }
    }

    pub fn is_selected(&self, option: Audience) -> bool {
        option == self.selected
    }

    /// Blocks tagged with anything other than the selection are hidden.
    pub fn is_hidden(&self, block: Audience) -> bool {
        block != self.selected
    }
}

fn aria_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[derive(Properties, PartialEq)]
pub struct AudienceSliderProps {
    pub audience: Audience,
    /// Receives the clicked option's raw `data-audience`.
    pub on_select: Callback<Option<String>>,
    pub slider_class: &'static str,
    pub content_class: &'static str,
    pub copy: &'static [AudienceCopy],
}

#[function_component(AudienceSlider)]
pub fn audience_slider(props: &AudienceSliderProps) -> Html {
    let view = SliderView::new(props.audience);

    let onclick = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: MouseEvent| {
            let tag = e
                .current_target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|option| option.get_attribute("data-audience"));
            on_select.emit(tag);
        })
    };

    html! {
        <div class="audience-picker">
            <div class={props.slider_class} role="tablist" aria-label="Choose your audience">
                <span class="slider-highlight" data-position={view.highlight_position.to_string()} aria-hidden="true"></span>
                {
                    Audience::ALL.iter().map(|&option| {
                        let selected = view.is_selected(option);
                        html! {
                            <button
                                type="button"
                                role="tab"
                                class={classes!("slider-option", selected.then(|| "active"))}
                                data-audience={option.as_str()}
                                aria-selected={aria_bool(selected)}
                                onclick={onclick.clone()}
                            >
                                {option.label()}
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>
            <div class="audience-panels">
                {
                    props.copy.iter().map(|copy| {
                        let hidden = view.is_hidden(copy.audience);
                        html! {
                            <div
                                class={classes!(props.content_class, hidden.then(|| "hidden"))}
                                data-audience={copy.audience.as_str()}
                                role="tabpanel"
                                aria-hidden={aria_bool(hidden)}
                            >
                                <h3>{copy.heading}</h3>
                                <p>{copy.body}</p>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audience::apply_selection;
    use crate::preference::{MemoryPreferenceStore, PreferenceStore};

    fn visible_blocks(view: &SliderView) -> Vec<Audience> {
        Audience::ALL
            .into_iter()
            .filter(|block| !view.is_hidden(*block))
            .collect()
    }

    #[test]
    fn exactly_the_matching_block_is_shown() {
        for audience in Audience::ALL {
            let view = SliderView::new(audience);
            assert_eq!(visible_blocks(&view), vec![audience]);
            assert_eq!(
                Audience::ALL.iter().filter(|o| view.is_selected(**o)).count(),
                1
            );
        }
    }

    #[test]
    fn highlight_tracks_ordinal() {
        assert_eq!(SliderView::new(Audience::Public).highlight_position, 1);
        assert_eq!(SliderView::new(Audience::Startup).highlight_position, 3);
    }

    /// Both sliders render from one shared value and share one click handler.
    struct Page {
        store: MemoryPreferenceStore,
        audience: Audience,
    }

    impl Page {
        fn load(store: MemoryPreferenceStore) -> Self {
            let audience = store.get();
            Self { store, audience }
        }

        fn click(&mut self, tag: Option<&str>) {
            self.audience = apply_selection(&self.store, self.audience, tag);
        }

        fn sliders(&self) -> (SliderView, SliderView) {
            (SliderView::new(self.audience), SliderView::new(self.audience))
        }
    }

    #[test]
    fn selection_on_either_slider_updates_both_and_persists() {
        let mut page = Page::load(MemoryPreferenceStore::default());
        assert_eq!(page.audience, Audience::Public);

        // step 3 slider
        page.click(Some("commercial"));
        let (step3, step5) = page.sliders();
        assert_eq!(visible_blocks(&step3), vec![Audience::Commercial]);
        assert_eq!(visible_blocks(&step5), vec![Audience::Commercial]);
        assert_eq!(step5.highlight_position, 2);
        assert_eq!(page.store.raw(), Some("commercial".to_string()));

        // step 5 slider
        page.click(Some("startup"));
        let (step3, step5) = page.sliders();
        assert_eq!(step3.selected, Audience::Startup);
        assert_eq!(step5.selected, Audience::Startup);
        assert_eq!(page.store.raw(), Some("startup".to_string()));

        // a reload picks the choice back up
        let reloaded = Page::load(page.store);
        assert_eq!(reloaded.audience, Audience::Startup);
    }

    #[test]
    fn invalid_or_missing_tag_leaves_both_sliders_alone() {
        let mut page = Page::load(MemoryPreferenceStore::with_value("startup"));
        for tag in [Some("agency"), Some(""), Some("Commercial"), None] {
            page.click(tag);
            let (step3, step5) = page.sliders();
            assert_eq!(step3.selected, Audience::Startup);
            assert_eq!(step5.selected, Audience::Startup);
            assert_eq!(page.store.raw(), Some("startup".to_string()));
        }
    }

    #[test]
    fn broken_storage_still_switches_the_page() {
        let mut page = Page::load(MemoryPreferenceStore::broken());
        page.click(Some("commercial"));
        let (step3, step5) = page.sliders();
        assert_eq!(step3.selected, Audience::Commercial);
        assert_eq!(step5.selected, Audience::Commercial);
    }
}
