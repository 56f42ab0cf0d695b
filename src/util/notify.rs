//! Blocking user notifications.
//!
//! Failed network actions surface to the user as a browser alert and
//! nothing else; the action is over and the user retries manually.

/// Show a blocking alert with the given message.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        log::warn!("alert: {message}");
    }
}
