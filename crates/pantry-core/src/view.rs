//! Pantry View
//!
//! Pure mapping from the pantry snapshot to what the drawer shows.

use std::collections::{HashMap, HashSet};

use crate::models::{Ingredient, IngredientId};

pub const EMPTY_ICON: &str = "🧺";
pub const EMPTY_TITLE: &str = "Your pantry is empty.";
pub const EMPTY_HINT: &str = "Add ingredients from the home page.";

pub const IN_PANTRY_CLASS: &str = "in-pantry";
pub const TITLE_REMOVE: &str = "Remove from pantry";
pub const TITLE_ADD: &str = "Add to pantry";

/// One labelled section of the drawer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: String,
    pub items: Vec<Ingredient>,
}

/// What the drawer body renders for a given snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PantryView {
    Empty,
    Grouped(Vec<CategoryGroup>),
}

impl PantryView {
    pub fn from_ingredients(items: &[Ingredient]) -> Self {
        if items.is_empty() {
            PantryView::Empty
        } else {
            PantryView::Grouped(group_by_category(items))
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, PantryView::Empty)
    }

    /// CSS `display` value for the "find recipes" action
    pub fn find_recipes_display(&self) -> &'static str {
        if self.is_empty() { "none" } else { "flex" }
    }
}

/// Group by category, keeping first-seen category order and item order
pub fn group_by_category(items: &[Ingredient]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for item in items {
        let slot = *index.entry(item.category.as_str()).or_insert_with(|| {
            groups.push(CategoryGroup {
                category: item.category.clone(),
                items: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].items.push(item.clone());
    }
    groups
}

/// Visual state of an "add to pantry" button elsewhere on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PantryButtonState {
    pub in_pantry: bool,
}

impl PantryButtonState {
    /// `raw_id` is the unparsed `data-ing-id` value; garbage counts as absent
    pub fn for_attr(raw_id: &str, owned: &HashSet<IngredientId>) -> Self {
        let in_pantry = raw_id
            .trim()
            .parse::<u32>()
            .map(|id| owned.contains(&IngredientId(id)))
            .unwrap_or(false);
        Self { in_pantry }
    }

    pub fn title(&self) -> &'static str {
        if self.in_pantry { TITLE_REMOVE } else { TITLE_ADD }
    }
}

/// State of the page elements outside the drawer body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    pub count: usize,
    pub find_recipes_display: &'static str,
    pub owned: HashSet<IngredientId>,
}

impl PageSummary {
    pub fn from_ingredients(items: &[Ingredient]) -> Self {
        let display = if items.is_empty() { "none" } else { "flex" };
        Self {
            count: items.len(),
            find_recipes_display: display,
            owned: owned_ids(items),
        }
    }
}

/// Id set for button sync lookups
pub fn owned_ids(items: &[Ingredient]) -> HashSet<IngredientId> {
    items.iter().map(|i| i.id).collect()
}
