//! Page category constants for page standardization.
//!
//! Every page rendered in the main area must declare:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"primitives--custom"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the entity name searchable: copy the id from
//! the browser DOM Inspector, paste into IDE search, and you land in the
//! `domain/primitives/` directory.

/// List of records — table with filters/pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Use-case wizard / action page.
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Intentionally custom design — free-form, exempt from structural checks.
pub const PAGE_CAT_CUSTOM: &str = "custom";

/// Categories where standard structure (`page__header` + `page__content`) is required.
pub const STANDARD_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DETAIL, PAGE_CAT_USECASE];

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_USECASE,
    PAGE_CAT_CUSTOM,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_page_ids() {
        assert!(is_valid_page_id("primitives--custom"));
        assert!(is_valid_page_id("primitives--detail"));
    }

    #[test]
    fn test_invalid_page_ids() {
        assert!(!is_valid_page_id("primitives"));
        assert!(!is_valid_page_id("--custom"));
        assert!(!is_valid_page_id("primitives--"));
    }

    #[test]
    fn test_standard_categories_are_known() {
        for cat in STANDARD_CATEGORIES {
            assert!(ALL_CATEGORIES.contains(cat));
        }
    }
}
