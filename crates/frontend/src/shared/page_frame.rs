//! PageFrame — standard root wrapper for every page rendered in the main area.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  — `"{entity}--{category}"`, e.g. `"primitives--custom"`
//!   - `data-page-category`  — one of the PAGE_CAT_* constants

use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper that sets standard metadata on every page.
///
/// Automatically adds the BEM modifier class based on category:
/// - `list`    → `page`
/// - `detail`  → `page page--detail`
/// - `usecase` → `page`
/// - `custom`  → `page page--custom`
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`, e.g. `"primitives--custom"`.
    /// Used for DOM inspection and IDE navigation.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_CUSTOM => "page page--custom",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div
            id=page_id
            class=full_class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
