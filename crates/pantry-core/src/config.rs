//! Pantry Configuration
//!
//! Endpoints, page hooks and UI strings the drawer is wired to.

/// Element ids the drawer binds to
pub const PANTRY_COUNT_ID: &str = "pantry-count";
pub const PANTRY_ITEMS_CONTAINER_ID: &str = "pantry-items-container";
pub const FIND_RECIPES_BTN_ID: &str = "find-recipes-btn";
pub const PANTRY_DRAWER_ID: &str = "pantry-drawer";
pub const DRAWER_OVERLAY_ID: &str = "drawer-overlay";
pub const TOAST_CONTAINER_ID: &str = "toast-container";

/// Attribute selectors
pub const INGREDIENT_BUTTON_SELECTOR: &str = "[data-ing-id]";
pub const INGREDIENT_ID_ATTR: &str = "data-ing-id";
pub const EMOJI_SELECTOR: &str = "[data-emoji]";
pub const EMOJI_ATTR: &str = "data-emoji";
pub const EMOJI_WRAP_CLASS: &str = "emoji-3d-wrap";

/// Runtime configuration for the pantry drawer
#[derive(Debug, Clone, PartialEq)]
pub struct PantryConfig {
    pub list_url: String,
    pub toggle_url: String,
    pub clear_url: String,
    /// Header carrying the CSRF token on mutating requests
    pub csrf_header: String,
    pub csrf_meta_selector: String,
    pub csrf_cookie: String,
    pub toast_ms: u32,
    pub emoji_asset_base: String,
    pub clear_confirm: String,
}

impl Default for PantryConfig {
    fn default() -> Self {
        Self {
            list_url: "/api/pantry/".to_string(),
            toggle_url: "/api/pantry/toggle/".to_string(),
            clear_url: "/api/pantry/clear/".to_string(),
            csrf_header: "X-CSRFToken".to_string(),
            csrf_meta_selector: r#"meta[name="csrf-token"]"#.to_string(),
            csrf_cookie: "csrftoken".to_string(),
            toast_ms: 3000,
            emoji_asset_base: "https://fonts.gstatic.com/s/e/notoemoji/latest".to_string(),
            clear_confirm: "Clear all items from your pantry?".to_string(),
        }
    }
}
