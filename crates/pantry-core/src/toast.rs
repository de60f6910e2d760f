//! Toast Bookkeeping
//!
//! Toasts stack without a cap; each one is dismissed by its own id.

use crate::models::ToggleResponse;

pub const CLEARED_MESSAGE: &str = "Pantry cleared";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Neutral,
    Success,
}

impl ToastKind {
    pub fn from_str(s: &str) -> Self {
        match s {
            "success" => ToastKind::Success,
            _ => ToastKind::Neutral,
        }
    }

    /// Class attribute for the toast element
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Neutral => "toast",
            ToastKind::Success => "toast success",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    /// Raw markup
    pub message: String,
    pub kind: ToastKind,
}

/// Currently visible toasts, oldest first
#[derive(Debug, Clone, Default)]
pub struct ToastStack {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push(Toast { id, message: message.into(), kind });
        id
    }

    /// Returns false if the toast was already gone
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Message shown after a successful toggle
pub fn toggle_message(resp: &ToggleResponse) -> (String, ToastKind) {
    let name = escape_html(&resp.name);
    if resp.in_pantry {
        (format!("✦ {} added to pantry", name), ToastKind::Success)
    } else {
        (format!("Removed {}", name), ToastKind::Neutral)
    }
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
