//! Thin helpers over `web_sys` lookups. Every lookup is optional so a page
//! missing some markup just skips the behavior that needed it.

use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlElement};

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub fn query_html(selector: &str) -> Option<HtmlElement> {
    query(selector)?.dyn_into::<HtmlElement>().ok()
}

pub fn query_all_html(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn document_html(selector: &str) -> Vec<HtmlElement> {
    match document().and_then(|d| d.document_element()) {
        Some(root) => query_all_html(&root, selector),
        None => Vec::new(),
    }
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}
