//! Pantry Flows
//!
//! Load, toggle and clear sequencing, independent of the browser. The HTTP
//! calls sit behind [`PantryApi`]; confirmation, toasts and the snapshot
//! store sit behind [`PantryUi`].

use std::fmt::Display;

use async_trait::async_trait;

use crate::models::{ClearResponse, Ingredient, IngredientId, PantryListResponse, ToggleAction, ToggleRequest, ToggleResponse};
use crate::sequence::Ticket;
use crate::toast::{toggle_message, ToastKind, CLEARED_MESSAGE};

/// The three pantry endpoints
#[async_trait(?Send)]
pub trait PantryApi {
    type Error: Display;

    async fn fetch_pantry(&self) -> Result<PantryListResponse, Self::Error>;
    async fn toggle_pantry(&self, request: ToggleRequest) -> Result<ToggleResponse, Self::Error>;
    async fn clear_pantry(&self) -> Result<ClearResponse, Self::Error>;
}

/// Page-side effects of the flows
pub trait PantryUi {
    fn confirm(&self, message: &str) -> bool;
    fn notify(&self, message: String, kind: ToastKind);
    fn issue_ticket(&self) -> Ticket;
    /// False when a newer snapshot is already applied
    fn apply_snapshot(&self, ticket: Ticket, ingredients: Vec<Ingredient>) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied { count: usize },
    Stale(Ticket),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    Toggled { name: String, in_pantry: bool },
    Cleared { remaining: usize },
    Declined,
    Failed(String),
}

pub async fn load<A: PantryApi, U: PantryUi>(api: &A, ui: &U) -> LoadOutcome {
    let ticket = ui.issue_ticket();
    match api.fetch_pantry().await {
        Ok(resp) => {
            let count = resp.ingredients.len();
            if ui.apply_snapshot(ticket, resp.ingredients) {
                LoadOutcome::Applied { count }
            } else {
                LoadOutcome::Stale(ticket)
            }
        }
        Err(e) => LoadOutcome::Failed(e.to_string()),
    }
}

/// Reloads before the toast so the toast never describes a state the drawer
/// doesn't show yet. Failures reload nothing and show nothing.
pub async fn toggle<A: PantryApi, U: PantryUi>(
    api: &A,
    ui: &U,
    id: IngredientId,
    action: ToggleAction,
) -> (MutationOutcome, Option<LoadOutcome>) {
    let request = ToggleRequest { ingredient_id: id, action };
    let resp = match api.toggle_pantry(request).await {
        Ok(resp) if resp.success => resp,
        Ok(resp) => {
            let reason = resp.error.unwrap_or_else(|| "rejected".to_string());
            return (MutationOutcome::Failed(reason), None);
        }
        Err(e) => return (MutationOutcome::Failed(e.to_string()), None),
    };

    let reloaded = load(api, ui).await;
    let (message, kind) = toggle_message(&resp);
    ui.notify(message, kind);
    let outcome = MutationOutcome::Toggled { name: resp.name, in_pantry: resp.in_pantry };
    (outcome, Some(reloaded))
}

pub async fn remove<A: PantryApi, U: PantryUi>(
    api: &A,
    ui: &U,
    id: IngredientId,
) -> (MutationOutcome, Option<LoadOutcome>) {
    toggle(api, ui, id, ToggleAction::Remove).await
}

/// Declining the confirmation sends nothing
pub async fn clear<A: PantryApi, U: PantryUi>(
    api: &A,
    ui: &U,
    confirm_message: &str,
) -> (MutationOutcome, Option<LoadOutcome>) {
    if !ui.confirm(confirm_message) {
        return (MutationOutcome::Declined, None);
    }
    let resp = match api.clear_pantry().await {
        Ok(resp) if resp.success => resp,
        Ok(_) => return (MutationOutcome::Failed("rejected".to_string()), None),
        Err(e) => return (MutationOutcome::Failed(e.to_string()), None),
    };

    let reloaded = load(api, ui).await;
    ui.notify(CLEARED_MESSAGE.to_string(), ToastKind::Neutral);
    (MutationOutcome::Cleared { remaining: resp.count }, Some(reloaded))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::fmt;

    use super::*;
    use crate::sequence::RequestSequencer;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Failure {
        Rejected,
        Status(u16),
        Network,
    }

    impl fmt::Display for Failure {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Failure::Rejected => write!(f, "rejected"),
                Failure::Status(code) => write!(f, "status {}", code),
                Failure::Network => write!(f, "network down"),
            }
        }
    }

    /// In-memory server plus page, recording every step in order
    struct FakePage {
        catalog: Vec<Ingredient>,
        server: RefCell<Vec<Ingredient>>,
        store: RefCell<Vec<Ingredient>>,
        sequencer: RefCell<RequestSequencer>,
        toasts: RefCell<Vec<(String, ToastKind)>>,
        calls: RefCell<Vec<String>>,
        confirm_answer: bool,
        toggle_failure: Option<Failure>,
    }

    impl FakePage {
        fn new(owned: &[u32]) -> Self {
            let catalog = vec![
                Ingredient::new(1, "Onion", "Vegetables"),
                Ingredient::new(2, "Cumin", "Spices"),
                Ingredient::new(3, "Milk", "Dairy & Eggs"),
            ];
            let server: Vec<Ingredient> = catalog.iter().filter(|i| owned.contains(&i.id.0)).cloned().collect();
            Self {
                catalog,
                store: RefCell::new(server.clone()),
                server: RefCell::new(server),
                sequencer: RefCell::new(RequestSequencer::new()),
                toasts: RefCell::new(Vec::new()),
                calls: RefCell::new(Vec::new()),
                confirm_answer: true,
                toggle_failure: None,
            }
        }

        fn store_ids(&self) -> Vec<u32> {
            self.store.borrow().iter().map(|i| i.id.0).collect()
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl PantryApi for FakePage {
        type Error = Failure;

        async fn fetch_pantry(&self) -> Result<PantryListResponse, Failure> {
            self.calls.borrow_mut().push("fetch".to_string());
            Ok(PantryListResponse { ingredients: self.server.borrow().clone() })
        }

        async fn toggle_pantry(&self, request: ToggleRequest) -> Result<ToggleResponse, Failure> {
            self.calls.borrow_mut().push(format!("toggle {} {}", request.ingredient_id, request.action.as_str()));
            match self.toggle_failure {
                Some(Failure::Rejected) => {
                    return Ok(ToggleResponse { success: false, error: Some("Not found".to_string()), ..Default::default() })
                }
                Some(failure) => return Err(failure),
                None => {}
            }
            let item = self.catalog.iter().find(|i| i.id == request.ingredient_id).cloned().ok_or(Failure::Status(404))?;
            let mut server = self.server.borrow_mut();
            let present = server.iter().any(|i| i.id == item.id);
            let add = request.action == ToggleAction::Add || (request.action == ToggleAction::Toggle && !present);
            if add {
                if !present {
                    server.push(item.clone());
                }
            } else {
                server.retain(|i| i.id != item.id);
            }
            Ok(ToggleResponse { success: true, in_pantry: add, name: item.name, error: None })
        }

        async fn clear_pantry(&self) -> Result<ClearResponse, Failure> {
            self.calls.borrow_mut().push("clear".to_string());
            self.server.borrow_mut().clear();
            Ok(ClearResponse { success: true, count: 0 })
        }
    }

    impl PantryUi for FakePage {
        fn confirm(&self, _message: &str) -> bool {
            self.calls.borrow_mut().push("confirm".to_string());
            self.confirm_answer
        }

        fn notify(&self, message: String, kind: ToastKind) {
            self.calls.borrow_mut().push("toast".to_string());
            self.toasts.borrow_mut().push((message, kind));
        }

        fn issue_ticket(&self) -> Ticket {
            self.sequencer.borrow_mut().issue()
        }

        fn apply_snapshot(&self, ticket: Ticket, ingredients: Vec<Ingredient>) -> bool {
            if !self.sequencer.borrow_mut().accept(ticket) {
                return false;
            }
            self.calls.borrow_mut().push("apply".to_string());
            *self.store.borrow_mut() = ingredients;
            true
        }
    }

    #[tokio::test]
    async fn test_load_replaces_store() {
        let page = FakePage::new(&[1, 3]);
        page.store.borrow_mut().clear();
        let outcome = load(&page, &page).await;
        assert_eq!(outcome, LoadOutcome::Applied { count: 2 });
        assert_eq!(page.store_ids(), vec![1, 3]);
    }

    #[tokio::test]
    async fn test_toggle_absent_adds_then_reloads_before_success_toast() {
        let page = FakePage::new(&[1]);
        let (outcome, reloaded) = toggle(&page, &page, IngredientId(2), ToggleAction::Toggle).await;

        assert_eq!(outcome, MutationOutcome::Toggled { name: "Cumin".to_string(), in_pantry: true });
        assert_eq!(reloaded, Some(LoadOutcome::Applied { count: 2 }));
        assert_eq!(page.store_ids(), vec![1, 2]);
        assert_eq!(page.calls(), vec!["toggle 2 toggle", "fetch", "apply", "toast"]);
        assert_eq!(*page.toasts.borrow(), vec![("✦ Cumin added to pantry".to_string(), ToastKind::Success)]);
    }

    #[tokio::test]
    async fn test_toggle_present_removes_with_plain_toast() {
        let page = FakePage::new(&[1, 2]);
        toggle(&page, &page, IngredientId(1), ToggleAction::Toggle).await;

        assert_eq!(page.store_ids(), vec![2]);
        assert_eq!(*page.toasts.borrow(), vec![("Removed Onion".to_string(), ToastKind::Neutral)]);
    }

    #[tokio::test]
    async fn test_toggle_failure_shows_no_toast() {
        for failure in [Failure::Rejected, Failure::Status(500), Failure::Network] {
            let mut page = FakePage::new(&[1]);
            page.toggle_failure = Some(failure);
            let (outcome, reloaded) = toggle(&page, &page, IngredientId(2), ToggleAction::Toggle).await;

            assert!(matches!(outcome, MutationOutcome::Failed(_)), "{:?}", failure);
            assert_eq!(reloaded, None);
            assert_eq!(page.calls(), vec!["toggle 2 toggle"]);
            assert!(page.toasts.borrow().is_empty());
            assert_eq!(page.store_ids(), vec![1]);
        }
    }

    #[tokio::test]
    async fn test_unknown_ingredient_is_a_failure() {
        let page = FakePage::new(&[1]);
        let (outcome, _) = toggle(&page, &page, IngredientId(99), ToggleAction::Toggle).await;
        assert_eq!(outcome, MutationOutcome::Failed("status 404".to_string()));
        assert!(page.toasts.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_remove_matches_toggle_remove() {
        let by_remove = FakePage::new(&[1, 2]);
        let by_toggle = FakePage::new(&[1, 2]);

        let a = remove(&by_remove, &by_remove, IngredientId(2)).await;
        let b = toggle(&by_toggle, &by_toggle, IngredientId(2), ToggleAction::Remove).await;

        assert_eq!(a, b);
        assert_eq!(by_remove.calls(), by_toggle.calls());
        assert_eq!(by_remove.calls()[0], "toggle 2 remove");
        assert_eq!(by_remove.store_ids(), by_toggle.store_ids());
        assert_eq!(*by_remove.toasts.borrow(), *by_toggle.toasts.borrow());
    }

    #[tokio::test]
    async fn test_clear_declined_sends_nothing() {
        let mut page = FakePage::new(&[1, 2]);
        page.confirm_answer = false;
        let (outcome, reloaded) = clear(&page, &page, "Clear?").await;

        assert_eq!(outcome, MutationOutcome::Declined);
        assert_eq!(reloaded, None);
        assert_eq!(page.calls(), vec!["confirm"]);
        assert_eq!(page.store_ids(), vec![1, 2]);
        assert!(page.toasts.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_clear_confirmed_empties_store() {
        let page = FakePage::new(&[1, 2]);
        let (outcome, reloaded) = clear(&page, &page, "Clear?").await;

        assert_eq!(outcome, MutationOutcome::Cleared { remaining: 0 });
        assert_eq!(reloaded, Some(LoadOutcome::Applied { count: 0 }));
        assert!(page.store_ids().is_empty());
        assert_eq!(page.calls(), vec!["confirm", "clear", "fetch", "apply", "toast"]);
        assert_eq!(*page.toasts.borrow(), vec![(CLEARED_MESSAGE.to_string(), ToastKind::Neutral)]);
    }

    #[tokio::test]
    async fn test_stale_snapshot_not_applied() {
        let page = FakePage::new(&[1]);
        let older = page.issue_ticket();
        let outcome = load(&page, &page).await;
        assert_eq!(outcome, LoadOutcome::Applied { count: 1 });
        assert!(!page.apply_snapshot(older, Vec::new()));
        assert_eq!(page.store_ids(), vec![1]);
    }
}
