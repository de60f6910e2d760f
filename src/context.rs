//! Pantry Context
//!
//! The single controller that owns the pantry store and the toast stack.
//! Components get it via the Leptos Context API; page-level exports reach it
//! through the handle registered with [`install`].

use std::cell::Cell;

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use pantry_core::flow::{self, LoadOutcome, MutationOutcome, PantryApi, PantryUi};
use pantry_core::models::{ClearResponse, PantryListResponse, ToggleRequest, ToggleResponse};
use pantry_core::{Ingredient, IngredientId, PantryConfig, Ticket, Toast, ToastKind, ToastStack, ToggleAction};

use crate::api::{self, ApiError};
use crate::store::{store_apply_snapshot, store_issue_ticket, PantryState, PantryStore};
use crate::{dom, logging};

const TAG: &str = "PANTRY";

thread_local! {
    static INSTALLED: Cell<Option<PantryContext>> = const { Cell::new(None) };
}

/// Register the controller for the page-level exports
pub fn install(ctx: PantryContext) {
    INSTALLED.with(|slot| slot.set(Some(ctx)));
}

pub fn current() -> Option<PantryContext> {
    INSTALLED.with(|slot| slot.get())
}

/// App-wide pantry state and operations
#[derive(Clone, Copy)]
pub struct PantryContext {
    pub store: PantryStore,
    toasts: RwSignal<ToastStack>,
    config: StoredValue<PantryConfig>,
}

impl PantryContext {
    pub fn new(config: PantryConfig) -> Self {
        Self {
            store: Store::new(PantryState::default()),
            toasts: RwSignal::new(ToastStack::new()),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> PantryConfig {
        self.config.get_value()
    }

    /// Tracked list of visible toasts, oldest first
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.with(|stack| stack.toasts().to_vec())
    }

    // ========================
    // Pantry Operations
    // ========================

    /// Fetch the full pantry and replace the store. Failures leave the
    /// previous snapshot on screen.
    pub async fn load(self) {
        log_load(&flow::load(&self, &self).await);
    }

    pub async fn toggle(self, id: IngredientId, action: ToggleAction) {
        let (outcome, reloaded) = flow::toggle(&self, &self, id, action).await;
        log_mutation(&format!("{} {}", action.as_str(), id), &outcome, reloaded.as_ref());
    }

    pub async fn remove(self, id: IngredientId) {
        let (outcome, reloaded) = flow::remove(&self, &self, id).await;
        log_mutation(&format!("remove {}", id), &outcome, reloaded.as_ref());
    }

    pub async fn clear(self) {
        let message = self.config.with_value(|c| c.clear_confirm.clone());
        let (outcome, reloaded) = flow::clear(&self, &self, &message).await;
        log_mutation("clear", &outcome, reloaded.as_ref());
    }

    // Fire-and-forget variants for event handlers

    pub fn spawn_load(self) {
        spawn_local(self.load());
    }

    pub fn spawn_remove(self, id: IngredientId) {
        spawn_local(self.remove(id));
    }

    // ========================
    // Toasts
    // ========================

    /// `message` is inserted as markup. Each toast expires on its own timer.
    pub fn show_toast(self, message: impl Into<String>, kind: ToastKind) {
        let message = message.into();
        let Some(id) = self.toasts.try_update(|stack| stack.push(message, kind)) else {
            return;
        };
        let ms = self.config.with_value(|c| c.toast_ms);
        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(ms).await;
            toasts.update(|stack| {
                stack.dismiss(id);
            });
        });
    }
}

#[async_trait(?Send)]
impl PantryApi for PantryContext {
    type Error = ApiError;

    async fn fetch_pantry(&self) -> Result<PantryListResponse, ApiError> {
        api::list_pantry(&self.config()).await
    }

    async fn toggle_pantry(&self, request: ToggleRequest) -> Result<ToggleResponse, ApiError> {
        let config = self.config();
        let csrf = dom::csrf_token(&config);
        api::toggle_pantry(&config, &csrf, request).await
    }

    async fn clear_pantry(&self) -> Result<ClearResponse, ApiError> {
        let config = self.config();
        let csrf = dom::csrf_token(&config);
        api::clear_pantry(&config, &csrf).await
    }
}

impl PantryUi for PantryContext {
    fn confirm(&self, message: &str) -> bool {
        dom::confirm(message)
    }

    fn notify(&self, message: String, kind: ToastKind) {
        self.show_toast(message, kind);
    }

    fn issue_ticket(&self) -> Ticket {
        store_issue_ticket(&self.store)
    }

    fn apply_snapshot(&self, ticket: Ticket, ingredients: Vec<Ingredient>) -> bool {
        store_apply_snapshot(&self.store, ticket, ingredients)
    }
}

fn log_load(outcome: &LoadOutcome) {
    match outcome {
        LoadOutcome::Applied { count } => logging::info(TAG, &format!("Loaded {} ingredients", count)),
        LoadOutcome::Stale(ticket) => logging::warn(TAG, &format!("Dropped stale pantry snapshot ({:?})", ticket)),
        LoadOutcome::Failed(e) => logging::error(TAG, &format!("Failed to load pantry: {}", e)),
    }
}

fn log_mutation(what: &str, outcome: &MutationOutcome, reloaded: Option<&LoadOutcome>) {
    match outcome {
        MutationOutcome::Toggled { name, in_pantry } => {
            logging::info(TAG, &format!("{}: {} in pantry = {}", what, name, in_pantry))
        }
        MutationOutcome::Cleared { remaining } => {
            logging::info(TAG, &format!("Pantry cleared, {} remaining", remaining))
        }
        MutationOutcome::Declined => {}
        MutationOutcome::Failed(e) => logging::warn(TAG, &format!("{} failed: {}", what, e)),
    }
    if let Some(reloaded) = reloaded {
        log_load(reloaded);
    }
}
