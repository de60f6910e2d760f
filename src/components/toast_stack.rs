//! Toast Stack Component
//!
//! Renders into `#toast-container`; the context removes each toast when its
//! timer fires.

use leptos::prelude::*;

use crate::context::PantryContext;

#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_context::<PantryContext>().expect("PantryContext should be provided");

    view! {
        <For
            each=move || ctx.toasts()
            key=|toast| toast.id
            children=move |toast| {
                view! { <div class=toast.kind.class() inner_html=toast.message></div> }
            }
        />
    }
}
