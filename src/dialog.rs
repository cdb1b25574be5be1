//! User-facing dialogs.

/// Blocking alert shown when a mutation fails. Local state stays as-is;
/// the user re-triggers the action.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
