//! Emoji Image Renderer
//!
//! Swaps `[data-emoji]` text for Noto images, falling back to the glyph when
//! the image fails to load.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlImageElement};

use pantry_core::config::{EMOJI_ATTR, EMOJI_SELECTOR, EMOJI_WRAP_CLASS};
use pantry_core::emoji::{emoji_to_url, render_each, RenderStep};

use crate::{dom, logging};

/// Safe to call repeatedly; rendered elements are skipped
pub fn render_emoji_images(asset_base: &str) {
    let Some(doc) = dom::document() else {
        return;
    };
    let tally = render_each(dom::query_all(EMOJI_SELECTOR), |el| render_one(&doc, el, asset_base));
    if tally.rendered > 0 {
        logging::info("EMOJI", &format!("Rendered {} emoji images", tally.rendered));
    }
    if tally.failed > 0 {
        logging::warn("EMOJI", &format!("{} emoji elements left as text", tally.failed));
    }
}

fn render_one(doc: &Document, el: &Element, asset_base: &str) -> Result<RenderStep, JsValue> {
    let Some(emoji) = el.get_attribute(EMOJI_ATTR) else {
        return Ok(RenderStep::Skipped);
    };
    if emoji.trim().is_empty() {
        return Ok(RenderStep::Skipped);
    }
    if matches!(el.query_selector("img"), Ok(Some(_))) {
        return Ok(RenderStep::Skipped);
    }

    let img = doc.create_element("img")?.dyn_into::<HtmlImageElement>()?;
    img.set_src(&emoji_to_url(asset_base, &emoji));
    img.set_alt(&emoji);

    let on_error = Closure::once_into_js({
        let el = el.clone();
        let img = img.clone();
        move || fall_back_to_text(&el, &img, &emoji)
    });
    img.set_onerror(Some(on_error.unchecked_ref()));

    el.set_inner_html("");
    el.append_child(&img)?;
    Ok(RenderStep::Rendered)
}

fn fall_back_to_text(el: &Element, img: &HtmlImageElement, emoji: &str) {
    img.remove();
    el.set_text_content(Some(emoji));
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        dom::set_style(html, "font-size", "inherit");
    }

    // The decorative wrapper's filter/animation distorts plain glyphs
    let Some(parent) = el.parent_element() else {
        return;
    };
    if !parent.class_list().contains(EMOJI_WRAP_CLASS) {
        return;
    }
    if let Some(wrap) = parent.dyn_ref::<HtmlElement>() {
        dom::set_style(wrap, "filter", "none");
        dom::set_style(wrap, "animation", "none");
    }
}
