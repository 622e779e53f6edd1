//! Blocking user notifications.
//!
//! Order validation and submission outcomes are surfaced through the
//! browser's alert dialog; catalog problems use the inline banner instead.

use web_sys::window;

pub fn alert(message: &str) {
    if let Some(w) = window() {
        let _ = w.alert_with_message(message);
    }
}
