//! Transient user notifications.

use serde::{Deserialize, Serialize};

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Parse a loose severity name, as passed by inline template handlers.
    /// Unknown names fall back to [`Severity::Info`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "error" | "danger" => Severity::Error,
            _ => Severity::Info,
        }
    }

    /// Font Awesome icon and colour classes for the toast header.
    pub fn icon_class(&self) -> &'static str {
        match self {
            Severity::Success => "fas fa-check-circle text-success me-2",
            Severity::Error => "fas fa-exclamation-circle text-danger me-2",
            Severity::Warning => "fas fa-exclamation-triangle text-warning me-2",
            Severity::Info => "fas fa-info-circle text-info me-2",
        }
    }
}

/// Sink for transient notifications.
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_from_name() {
        assert_eq!(Severity::from_name("success"), Severity::Success);
        assert_eq!(Severity::from_name(" Warning "), Severity::Warning);
        assert_eq!(Severity::from_name("error"), Severity::Error);
        assert_eq!(Severity::from_name("danger"), Severity::Error);
        assert_eq!(Severity::from_name("info"), Severity::Info);
        assert_eq!(Severity::from_name("whatever"), Severity::Info);
    }

    #[test]
    fn test_icon_classes() {
        assert!(Severity::Success.icon_class().contains("check-circle"));
        assert!(Severity::Error.icon_class().contains("text-danger"));
        assert!(Severity::Warning.icon_class().contains("exclamation-triangle"));
        assert!(Severity::Info.icon_class().contains("info-circle"));
    }
}
