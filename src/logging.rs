//! Console Logging
//!
//! Tagged browser console output, e.g. `[PANTRY] Loaded 4 ingredients`.

pub fn info(tag: &str, msg: &str) {
    web_sys::console::log_1(&format!("[{}] {}", tag, msg).into());
}

pub fn warn(tag: &str, msg: &str) {
    web_sys::console::warn_1(&format!("[{}] {}", tag, msg).into());
}

pub fn error(tag: &str, msg: &str) {
    web_sys::console::error_1(&format!("[{}] {}", tag, msg).into());
}
