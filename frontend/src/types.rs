//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Toast Types** - Entries of the notification stack
//! - **Error Types** - DOM and widget failures

use secpanel::Severity;
use std::fmt;
use wasm_bindgen::{JsCast, JsValue};

// =============================================================================
// Toast Types
// =============================================================================

/// A notification currently on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    /// Stable key for the toast stack
    pub id: u64,
    /// Displayed as text
    pub message: String,
    pub severity: Severity,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Review failures are [`secpanel::ReviewError`]s; these cover the browser
/// glue around them.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Missing element or failed DOM call.
    Dom(String),
    /// Bootstrap is not loaded or one of its widgets threw.
    Widget(String),
    /// Embedded configuration could not be used.
    Config(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Dom(msg) => write!(f, "DOM error: {}", msg),
            AppError::Widget(msg) => write!(f, "Widget error: {}", msg),
            AppError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        let msg = value
            .as_string()
            .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
            .unwrap_or_else(|| format!("{:?}", value));
        AppError::Dom(msg)
    }
}

impl From<secpanel::ConfigError> for AppError {
    fn from(err: secpanel::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Widget("bootstrap is not defined".into()).to_string(),
            "Widget error: bootstrap is not defined"
        );
        assert_eq!(AppError::Dom("no body".into()).to_string(), "DOM error: no body");
    }

    #[test]
    fn test_config_error_conversion() {
        let err = secpanel::PanelConfig::from_json("{not json").unwrap_err();
        assert!(matches!(AppError::from(err), AppError::Config(_)));
    }
}
