//! In-page anchor links.

pub const ANCHOR_LINKS_SELECTOR: &str = r##"a[href^="#"]"##;

/// Fragment selector to scroll to, or `None` for a bare `#`.
pub fn scroll_target(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_target() {
        assert_eq!(scroll_target("#users"), Some("#users"));
        assert_eq!(scroll_target("#"), None);
        assert_eq!(scroll_target(""), None);
        assert_eq!(scroll_target("/admin#users"), None);
    }
}
