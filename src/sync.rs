//! Page Sync
//!
//! The count badge, the "find recipes" action and every "add to pantry"
//! button elsewhere on the page mirror the store, whether or not the drawer
//! body is mounted.

use std::collections::HashSet;

use leptos::prelude::*;

use pantry_core::config::{FIND_RECIPES_BTN_ID, INGREDIENT_BUTTON_SELECTOR, INGREDIENT_ID_ATTR, PANTRY_COUNT_ID};
use pantry_core::view::IN_PANTRY_CLASS;
use pantry_core::{IngredientId, PageSummary, PantryButtonState};

use crate::context::PantryContext;
use crate::dom;
use crate::store::store_ingredients;

/// Must run under a live reactive owner
pub fn bind_page_state(ctx: PantryContext) {
    Effect::new(move |_| {
        let summary = PageSummary::from_ingredients(&store_ingredients(&ctx.store));
        dom::set_text(PANTRY_COUNT_ID, &summary.count.to_string());
        dom::set_display(FIND_RECIPES_BTN_ID, summary.find_recipes_display);
        sync_pantry_buttons(&summary.owned);
    });
}

pub fn sync_pantry_buttons(owned: &HashSet<IngredientId>) {
    for btn in dom::query_all(INGREDIENT_BUTTON_SELECTOR) {
        let raw_id = btn.get_attribute(INGREDIENT_ID_ATTR).unwrap_or_default();
        let state = PantryButtonState::for_attr(&raw_id, owned);
        let _ = btn.class_list().toggle_with_force(IN_PANTRY_CLASS, state.in_pantry);
        let _ = btn.set_attribute("title", state.title());
    }
}
