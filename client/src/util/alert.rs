//! Blocking browser alert for synchronous form validation failures.
//!
//! TRADE-OFFS
//! ==========
//! Only validation uses a modal alert; every service error renders inline.
//! SSR and test builds log instead.

/// Show `message` in a blocking `window.alert`.
pub fn blocking_alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
            return;
        }
    }
    log::warn!("alert: {message}");
}
