//! Pantry Core
//!
//! Browser-independent pieces of the pantry drawer: models and wire types,
//! the state → view mapping, and the small parsers the UI relies on.

pub mod config;
pub mod csrf;
pub mod emoji;
pub mod flow;
pub mod models;
pub mod sequence;
pub mod toast;
pub mod view;

pub use config::PantryConfig;
pub use models::{Ingredient, IngredientId, ToggleAction};
pub use sequence::{RequestSequencer, Ticket};
pub use toast::{Toast, ToastId, ToastKind, ToastStack};
pub use view::{CategoryGroup, PageSummary, PantryButtonState, PantryView};
