//! Pantry State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use pantry_core::{Ingredient, RequestSequencer, Ticket};

/// Pantry snapshot plus reload bookkeeping
#[derive(Clone, Debug, Default, Store)]
pub struct PantryState {
    /// Full snapshot from the last applied reload
    pub ingredients: Vec<Ingredient>,
    pub sequencer: RequestSequencer,
}

/// Type alias for the store
pub type PantryStore = Store<PantryState>;

// ========================
// Store Helper Functions
// ========================

/// Tracked read of the current snapshot
pub fn store_ingredients(store: &PantryStore) -> Vec<Ingredient> {
    store.ingredients().get()
}

/// Take a ticket before issuing a reload request
pub fn store_issue_ticket(store: &PantryStore) -> Ticket {
    store.sequencer().write().issue()
}

/// Replace the snapshot wholesale unless a newer reload already landed
pub fn store_apply_snapshot(store: &PantryStore, ticket: Ticket, ingredients: Vec<Ingredient>) -> bool {
    if !store.sequencer().write().accept(ticket) {
        return false;
    }
    store.ingredients().set(ingredients);
    true
}
