use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};
use yew::prelude::*;

use crate::animation::{BookEvent, BookMachine, BookStep, BookStyles, LayerStyle};
use crate::config;
use crate::dom;

const PAGE_COUNT: usize = 5;

/// Plays [`BookStep`]s against the `.book` markup.
struct BookDriver {
    book: HtmlElement,
    cover: HtmlElement,
    pages: Vec<HtmlElement>,
    machine: RefCell<BookMachine>,
}

impl BookDriver {
    fn find() -> Option<Rc<Self>> {
        let book = dom::query_html(".book")?;
        let Some(cover) = dom::query_html(".book .book-cover") else {
            gloo_console::warn!("Book illustration has no cover, click toggle disabled");
            return None;
        };
        let pages = dom::query_all_html(&book, ".page");
        let machine = RefCell::new(BookMachine::new(pages.len()));
        Some(Rc::new(Self {
            book,
            cover,
            pages,
            machine,
        }))
    }

    fn dispatch(self: &Rc<Self>, event: BookEvent) {
        let steps = {
            let mut machine = self.machine.borrow_mut();
            if event == BookEvent::Click && machine.is_busy() {
                debug!("Book is still moving, click ignored");
            }
            let steps = machine.handle(event);
            debug!("Book {:?} after {:?}", machine.phase(), event);
            steps
        };
        for step in steps {
            match step {
                BookStep::Paint(styles) => self.paint(&styles),
                BookStep::Reflow => {
                    let _ = self.book.offset_width();
                }
                BookStep::Wait { ms, then } => {
                    let driver = self.clone();
                    Timeout::new(ms, move || driver.dispatch(then)).forget();
                }
            }
        }
    }

    fn paint(&self, styles: &BookStyles) {
        let _ = self
            .book
            .class_list()
            .toggle_with_force("closing", styles.closing);
        paint_layer(&self.cover, &styles.cover);
        for (page, style) in self.pages.iter().zip(&styles.pages) {
            paint_layer(page, style);
        }
    }
}

fn paint_layer(element: &HtmlElement, layer: &LayerStyle) {
    let style = element.style();
    for (property, value) in [
        ("animation", &layer.animation),
        ("transition", &layer.transition),
        ("transform", &layer.transform),
    ] {
        let _ = style.set_property(property, value.as_deref().unwrap_or(""));
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[function_component(Book)]
pub fn book() -> Html {
    use_effect_with_deps(
        move |_| {
            let mut teardown: Option<(HtmlElement, Closure<dyn Fn()>, Timeout)> = None;

            if prefers_reduced_motion() {
                debug!("Reduced motion requested, book stays static");
            } else if let Some(driver) = BookDriver::find() {
                let _ = driver.book.style().set_property("cursor", "pointer");

                let intro = {
                    let driver = driver.clone();
                    Timeout::new(config::BOOK_OPEN_MS, move || {
                        driver.dispatch(BookEvent::IntroFinished)
                    })
                };
                let on_click = Closure::<dyn Fn()>::new({
                    let driver = driver.clone();
                    move || driver.dispatch(BookEvent::Click)
                });
                if driver
                    .book
                    .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
                    .is_ok()
                {
                    teardown = Some((driver.book.clone(), on_click, intro));
                }
            }

            move || {
                if let Some((book, on_click, intro)) = teardown {
                    drop(intro);
                    let _ = book.remove_event_listener_with_callback(
                        "click",
                        on_click.as_ref().unchecked_ref(),
                    );
                }
            }
        },
        (),
    );

    html! {
        <div class="book" aria-hidden="true">
            <div class="book-back"></div>
            {
                (1..=PAGE_COUNT).map(|n| html! {
                    <div class={classes!("page", format!("page-{}", n))}></div>
                }).collect::<Html>()
            }
            <div class="book-cover">
                <span class="book-title">{"vibe2lead"}</span>
            </div>
        </div>
    }
}
