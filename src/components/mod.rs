//! UI Components
//!
//! Leptos components mounted into the server-rendered page.

mod pantry_items;
mod toast_stack;

pub use pantry_items::PantryItems;
pub use toast_stack::ToastStack;
