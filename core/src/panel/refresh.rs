//! Dashboard activity refresh gating.

/// Container of the activity feed.
pub const ACTIVITY_LIST_SELECTOR: &str = ".activity-list";

/// Shown inside the feed while it refreshes. Static markup.
pub const REFRESH_INDICATOR_HTML: &str =
    r#"<div class="text-center"><i class="fas fa-spinner fa-spin"></i> Refreshing...</div>"#;

/// The periodic refresh only runs on admin pages.
pub fn is_dashboard(path: &str) -> bool {
    path.contains("/admin")
}

/// A tick refreshes only while the page is visible.
pub fn should_refresh(document_hidden: bool) -> bool {
    !document_hidden
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_dashboard() {
        assert!(is_dashboard("/admin"));
        assert!(is_dashboard("/admin/manage_admins"));
        assert!(!is_dashboard("/access"));
        assert!(!is_dashboard("/"));
    }

    #[test]
    fn test_hidden_tab_skips_refresh() {
        assert!(should_refresh(false));
        assert!(!should_refresh(true));
    }
}
