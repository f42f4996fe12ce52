//! URL helpers for content resources
//!
//! Catalog content (YAML definitions of atoms) is served as static assets
//! from the same origin as the console itself.

/// Get the base URL of the current origin
///
/// # Returns
/// - Origin base URL like "http://localhost:8080" or "https://console.example.com"
/// - Empty string if window is not available
pub fn asset_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location.host().unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}", protocol, host)
}

/// Build a full asset URL from a content path
///
/// # Arguments
/// * `path` - The content path declared by a catalog item, e.g. "/atoms/atom-x.yaml"
pub fn asset_url(path: &str) -> String {
    format!("{}{}", asset_base(), path)
}
