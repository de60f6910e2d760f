//! DOM Helpers
//!
//! Thin lookups over the server-rendered page. Missing elements yield `None`
//! and callers skip the update.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlDocument, HtmlElement};

use pantry_core::{csrf, PantryConfig};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|win| win.document())
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

/// All elements matching `selector`, in document order
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|doc| doc.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_text(id: &str, text: &str) {
    if let Some(el) = element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

pub fn set_display(id: &str, value: &str) {
    if let Some(el) = html_element_by_id(id) {
        set_style(&el, "display", value);
    }
}

/// `None` clears the inline value
pub fn set_body_overflow(value: Option<&str>) {
    let Some(body) = document().and_then(|doc| doc.body()) else {
        return;
    };
    let style = body.style();
    let _ = match value {
        Some(v) => style.set_property("overflow", v),
        None => style.remove_property("overflow").map(|_| ()),
    };
}

pub fn set_class(id: &str, class: &str, on: bool) {
    if let Some(el) = element_by_id(id) {
        let _ = el.class_list().toggle_with_force(class, on);
    }
}

/// Blocking browser confirm; a missing window counts as "no"
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Current CSRF token, read fresh from the page each call
pub fn csrf_token(config: &PantryConfig) -> String {
    let Some(doc) = document() else {
        return String::new();
    };
    let meta_content = doc
        .query_selector(&config.csrf_meta_selector)
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"));
    let cookie = doc
        .dyn_ref::<HtmlDocument>()
        .and_then(|html| html.cookie().ok())
        .unwrap_or_default();
    csrf::resolve_token(meta_content.as_deref(), &cookie, &config.csrf_cookie)
}
