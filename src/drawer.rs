//! Drawer Controller
//!
//! The `open` class on the drawer and overlay is the only state.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use pantry_core::config::{DRAWER_OVERLAY_ID, PANTRY_DRAWER_ID};

use crate::{dom, logging};

const OPEN_CLASS: &str = "open";

pub fn open() {
    dom::set_class(PANTRY_DRAWER_ID, OPEN_CLASS, true);
    dom::set_class(DRAWER_OVERLAY_ID, OPEN_CLASS, true);
    dom::set_body_overflow(Some("hidden"));
}

pub fn close() {
    dom::set_class(PANTRY_DRAWER_ID, OPEN_CLASS, false);
    dom::set_class(DRAWER_OVERLAY_ID, OPEN_CLASS, false);
    dom::set_body_overflow(None);
}

/// Close on Escape for the lifetime of the page
pub fn bind_escape_key() {
    let Some(doc) = dom::document() else {
        return;
    };
    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            close();
        }
    });
    if doc
        .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())
        .is_err()
    {
        logging::warn("DRAWER", "failed to bind Escape listener");
    }
    on_keydown.forget();
}
