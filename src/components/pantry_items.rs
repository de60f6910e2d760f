//! Pantry Items Component
//!
//! Drawer body: grouped ingredient tags, or the empty state.

use leptos::prelude::*;

use pantry_core::view::{EMPTY_HINT, EMPTY_ICON, EMPTY_TITLE};
use pantry_core::{CategoryGroup, PantryView};

use crate::context::PantryContext;
use crate::store::store_ingredients;

const CATEGORY_LABEL_STYLE: &str = "font-size:0.65rem;font-weight:600;text-transform:uppercase;letter-spacing:0.15em;color:var(--gold);margin-bottom:10px;padding-bottom:6px;border-bottom:1px solid var(--border);";

#[component]
pub fn PantryItems() -> impl IntoView {
    let ctx = use_context::<PantryContext>().expect("PantryContext should be provided");

    let pantry_view = Memo::new(move |_| PantryView::from_ingredients(&store_ingredients(&ctx.store)));

    view! {
        {move || match pantry_view.get() {
            PantryView::Empty => view! { <EmptyPantry /> }.into_any(),
            PantryView::Grouped(groups) => groups
                .into_iter()
                .map(|group| view! { <CategorySection group=group /> })
                .collect_view()
                .into_any(),
        }}
    }
}

#[component]
fn EmptyPantry() -> impl IntoView {
    view! {
        <div class="empty-pantry">
            <div class="big-icon">{EMPTY_ICON}</div>
            <p>{EMPTY_TITLE}<br />{EMPTY_HINT}</p>
        </div>
    }
}

/// One category heading with its removable tags
#[component]
fn CategorySection(group: CategoryGroup) -> impl IntoView {
    let ctx = use_context::<PantryContext>().expect("PantryContext should be provided");
    let CategoryGroup { category, items } = group;

    view! {
        <div style="margin-bottom:20px;">
            <div style=CATEGORY_LABEL_STYLE>{category}</div>
            <div>
                {items.into_iter().map(|item| {
                    let id = item.id;
                    view! {
                        <span class="pantry-tag">
                            {item.name}
                            <button
                                title="Remove"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    ctx.spawn_remove(id);
                                }
                            >
                                "×"
                            </button>
                        </span>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
