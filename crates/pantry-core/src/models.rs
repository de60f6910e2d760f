//! Pantry Models
//!
//! Ingredient records and the JSON bodies exchanged with the pantry API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned ingredient identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientId(pub u32);

impl fmt::Display for IngredientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ingredient the visitor owns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_lower: Option<String>,
}

impl Ingredient {
    pub fn new(id: u32, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: IngredientId(id),
            name: name.into(),
            category: category.into(),
            name_lower: None,
        }
    }
}

/// What the toggle endpoint should do with an ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToggleAction {
    /// Flip membership
    #[default]
    Toggle,
    /// Caller knows the item is present
    Remove,
    /// Caller knows the item is absent
    Add,
}

impl ToggleAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToggleAction::Toggle => "toggle",
            ToggleAction::Remove => "remove",
            ToggleAction::Add => "add",
        }
    }

    /// Unknown or missing values fall back to `Toggle`
    pub fn from_str(s: &str) -> Self {
        match s {
            "remove" => ToggleAction::Remove,
            "add" => ToggleAction::Add,
            _ => ToggleAction::Toggle,
        }
    }
}

// ========================
// Wire Types
// ========================

/// `GET /api/pantry/`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PantryListResponse {
    pub ingredients: Vec<Ingredient>,
}

/// `POST /api/pantry/toggle/` body
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ToggleRequest {
    pub ingredient_id: IngredientId,
    pub action: ToggleAction,
}

/// `POST /api/pantry/toggle/` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToggleResponse {
    pub success: bool,
    #[serde(default)]
    pub in_pantry: bool,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub error: Option<String>,
}

/// `POST /api/pantry/clear/` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClearResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub count: usize,
}
