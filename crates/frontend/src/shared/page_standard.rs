//! Page category constants.
//!
//! Every page declares an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"a001_user--list"`) and a `data-page-category` with one of the
//! constants below.

/// List of records: table with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Analytical dashboard view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// System administration page.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, category)) if !entity.is_empty() && !category.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_user--list"));
        assert!(!is_valid_page_id("a001_user"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_user--"));
    }
}
