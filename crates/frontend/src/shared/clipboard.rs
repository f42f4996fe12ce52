//! Clipboard utilities for copying text to clipboard
//!
//! Uses the Web Clipboard API. Failures are logged and otherwise silent:
//! the user simply does not get the "copied" acknowledgment.

use wasm_bindgen_futures::spawn_local;

/// Copy text to the system clipboard, fire-and-forget.
pub fn copy_to_clipboard(text: &str) {
    let text = text.to_owned();
    spawn_local(async move {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            if wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text))
                .await
                .is_err()
            {
                log::warn!("clipboard write failed");
            }
        }
    });
}

/// Copy text to clipboard with a callback on success
///
/// Useful when you need to show an acknowledgment after copying.
pub fn copy_to_clipboard_with_callback<F>(text: &str, on_success: F)
where
    F: FnOnce() + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            match wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await {
                Ok(_) => on_success(),
                Err(_) => log::warn!("clipboard write failed"),
            }
        }
    });
}
