//! Confirmation prompts for destructive links.

/// Selector matching every link that needs a confirmation.
pub const CONFIRMED_LINKS_SELECTOR: &str = r#"a[href*="/delete_user/"], a[href*="/change_status/"]"#;

/// Prompt to show before following `href`, if it needs one.
pub fn prompt_for(href: &str) -> Option<String> {
    if href.contains("/delete_user/") {
        return Some(
            "Are you sure you want to delete this user? This action cannot be undone.".to_string(),
        );
    }

    if href.contains("/change_status/") {
        let action = if href.contains("/banned") { "ban" } else { "allow" };
        return Some(format!("Are you sure you want to {action} this user?"));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_prompt() {
        let prompt = prompt_for("https://panel.local/admin/delete_user/42").unwrap();
        assert!(prompt.contains("delete this user"));
        assert!(prompt.contains("cannot be undone"));
    }

    #[test]
    fn test_status_prompts() {
        assert_eq!(
            prompt_for("/admin/change_status/42/banned").as_deref(),
            Some("Are you sure you want to ban this user?")
        );
        assert_eq!(
            prompt_for("/admin/change_status/42/allowed").as_deref(),
            Some("Are you sure you want to allow this user?")
        );
    }

    #[test]
    fn test_other_links_need_no_prompt() {
        assert!(prompt_for("/admin/users").is_none());
        assert!(prompt_for("#top").is_none());
    }
}
