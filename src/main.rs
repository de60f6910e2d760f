//! Pantry UI Entry Point
//!
//! Mounts the pantry drawer and toast stack into the server-rendered page,
//! then loads the pantry.

mod api;
mod components;
mod context;
mod dom;
mod drawer;
mod emoji;
mod exports;
mod logging;
mod store;
mod sync;

use leptos::mount::mount_to;
use leptos::prelude::*;
use any_spawner::Executor;

use components::{PantryItems, ToastStack};
use context::PantryContext;
use pantry_core::config::{PANTRY_ITEMS_CONTAINER_ID, TOAST_CONTAINER_ID};
use pantry_core::PantryConfig;

fn main() {
    console_error_panic_hook::set_once();
    // Already initialised is fine
    let _ = Executor::init_wasm_bindgen();

    let config = PantryConfig::default();
    let emoji_base = config.emoji_asset_base.clone();
    let ctx = PantryContext::new(config);
    context::install(ctx);

    match dom::html_element_by_id(TOAST_CONTAINER_ID) {
        Some(container) => mount_to(container, move || {
            provide_context(ctx);
            view! { <ToastStack /> }
        })
        .forget(),
        None => logging::warn("TOAST", &format!("#{} not found", TOAST_CONTAINER_ID)),
    }

    match dom::html_element_by_id(PANTRY_ITEMS_CONTAINER_ID) {
        Some(container) => {
            // Drop any server-rendered placeholder
            container.set_inner_html("");
            mount_to(container, move || {
                provide_context(ctx);
                view! { <PantryItems /> }
            })
            .forget();
        }
        None => logging::warn("PANTRY", &format!("#{} not found", PANTRY_ITEMS_CONTAINER_ID)),
    }

    // Root owner for page-wide effects; lives as long as the page
    let owner = Owner::new();
    owner.with(|| sync::bind_page_state(ctx));
    std::mem::forget(owner);

    drawer::bind_escape_key();
    emoji::render_emoji_images(&emoji_base);
    ctx.spawn_load();
}
