//! Global keyboard shortcuts.

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Go to `path`. When `requires_link` is set, only if the page
    /// already links somewhere under that prefix (i.e. the user may go there).
    Navigate {
        path: &'static str,
        requires_link: Option<&'static str>,
    },
    /// Hide every open modal.
    CloseModals,
}

impl Shortcut {
    /// Whether the browser's default handling must be suppressed.
    pub fn prevents_default(&self) -> bool {
        matches!(self, Shortcut::Navigate { .. })
    }

    /// Selector that must match for a navigation to proceed.
    pub fn required_selector(&self) -> Option<String> {
        match self {
            Shortcut::Navigate {
                requires_link: Some(prefix),
                ..
            } => Some(format!(r#"a[href*="{prefix}"]"#)),
            _ => None,
        }
    }
}

/// Map a `keydown` (key value and Alt state) to a shortcut.
pub fn resolve(key: &str, alt: bool) -> Option<Shortcut> {
    match (key, alt) {
        ("a", true) => Some(Shortcut::Navigate {
            path: "/access",
            requires_link: None,
        }),
        ("d", true) => Some(Shortcut::Navigate {
            path: "/admin",
            requires_link: Some("/admin"),
        }),
        ("r", true) => Some(Shortcut::Navigate {
            path: "/reports",
            requires_link: Some("/reports"),
        }),
        ("Escape", _) => Some(Shortcut::CloseModals),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alt_navigation() {
        assert_eq!(
            resolve("a", true),
            Some(Shortcut::Navigate {
                path: "/access",
                requires_link: None
            })
        );

        let dashboard = resolve("d", true).unwrap();
        assert!(dashboard.prevents_default());
        assert_eq!(
            dashboard.required_selector().as_deref(),
            Some(r#"a[href*="/admin"]"#)
        );

        let reports = resolve("r", true).unwrap();
        assert_eq!(
            reports.required_selector().as_deref(),
            Some(r#"a[href*="/reports"]"#)
        );
    }

    #[test]
    fn test_plain_letters_are_ignored() {
        assert_eq!(resolve("a", false), None);
        assert_eq!(resolve("d", false), None);
        assert_eq!(resolve("x", true), None);
    }

    #[test]
    fn test_escape_closes_modals() {
        let shortcut = resolve("Escape", false).unwrap();
        assert_eq!(shortcut, Shortcut::CloseModals);
        assert!(!shortcut.prevents_default());
        assert!(shortcut.required_selector().is_none());
    }
}
