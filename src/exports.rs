//! Page Exports
//!
//! Functions the server-rendered markup calls (`openDrawer()`,
//! `togglePantry(id)`, ...). Each one forwards to the installed context.

use wasm_bindgen::prelude::*;

use pantry_core::{IngredientId, ToastKind, ToggleAction};

use crate::context::{self, PantryContext};
use crate::{drawer, emoji, logging};

fn installed() -> Option<PantryContext> {
    let ctx = context::current();
    if ctx.is_none() {
        logging::warn("PANTRY", "called before the pantry was mounted");
    }
    ctx
}

#[wasm_bindgen(js_name = openDrawer)]
pub fn open_drawer() {
    drawer::open();
}

#[wasm_bindgen(js_name = closeDrawer)]
pub fn close_drawer() {
    drawer::close();
}

#[wasm_bindgen(js_name = loadPantry)]
pub async fn load_pantry() {
    if let Some(ctx) = installed() {
        ctx.load().await;
    }
}

/// `action` is "toggle" (default), "remove" or "add"
#[wasm_bindgen(js_name = togglePantry)]
pub async fn toggle_pantry(ingredient_id: u32, action: Option<String>) {
    let action = action.as_deref().map(ToggleAction::from_str).unwrap_or_default();
    if let Some(ctx) = installed() {
        ctx.toggle(IngredientId(ingredient_id), action).await;
    }
}

/// The name is accepted for markup compatibility and not used
#[wasm_bindgen(js_name = removeFromPantry)]
pub async fn remove_from_pantry(ingredient_id: u32, _name: Option<String>) {
    if let Some(ctx) = installed() {
        ctx.remove(IngredientId(ingredient_id)).await;
    }
}

#[wasm_bindgen(js_name = clearPantry)]
pub async fn clear_pantry() {
    if let Some(ctx) = installed() {
        ctx.clear().await;
    }
}

#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: String, kind: Option<String>) {
    let kind = kind.as_deref().map(ToastKind::from_str).unwrap_or_default();
    if let Some(ctx) = installed() {
        ctx.show_toast(message, kind);
    }
}

#[wasm_bindgen(js_name = renderEmojiImages)]
pub fn render_emoji_images() {
    let base = context::current()
        .map(|ctx| ctx.config().emoji_asset_base)
        .unwrap_or_else(|| pantry_core::PantryConfig::default().emoji_asset_base);
    emoji::render_emoji_images(&base);
}
