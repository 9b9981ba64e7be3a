//! Application configuration.
//!
//! Tunables (endpoints, delays) come from [`secpanel::PanelConfig`] and may be
//! overridden by the server through a JSON block embedded in the page:
//!
//! ```html
//! <script type="application/json" id="secpanel-config">
//!   { "reload_delay_ms": 2000 }
//! </script>
//! ```
//!
//! DOM ids and selectors the templates rely on are fixed here.

use secpanel::PanelConfig;

use crate::types::AppResult;

/// Embedded configuration block.
pub const CONFIG_ELEMENT_ID: &str = "secpanel-config";

/// Optional placeholder inside the upload dialog where the review panel is
/// mounted. Without it the dialog's own markup is driven.
pub const REVIEW_MOUNT_ID: &str = "csvReviewMount";

/// Bootstrap modal hosting the upload.
pub const REVIEW_DIALOG_ID: &str = "csvUploadModal";

/// File input read when analyzing and importing.
pub const CSV_INPUT_ID: &str = "csv_file";

// Upload dialog markup, shared by the panel and the server template
pub const ANALYTICS_ID: &str = "csvAnalytics";
pub const TOTAL_RECORDS_ID: &str = "totalRecords";
pub const NEW_RECORDS_ID: &str = "newRecords";
pub const DUPLICATE_RECORDS_ID: &str = "duplicateRecords";
pub const ERROR_RECORDS_ID: &str = "errorRecords";
pub const PREVIEW_BODY_ID: &str = "csvPreviewBody";
pub const ERROR_DETAILS_ID: &str = "errorDetails";
pub const ERROR_LIST_ID: &str = "errorList";
pub const IMPORT_BUTTON_ID: &str = "importBtn";

/// Focused by `startQRScanner`.
pub const QR_INPUT_ID: &str = "qr_code_id";

/// Name of the object published on `window`.
pub const GLOBAL_API_NAME: &str = "SecurityApp";

pub const TOOLTIP_SELECTOR: &str = r#"[data-bs-toggle="tooltip"]"#;
pub const MODAL_SELECTOR: &str = ".modal";
pub const OPEN_MODAL_SELECTOR: &str = ".modal.show";
pub const DISMISSIBLE_ALERT_SELECTOR: &str = ".alert:not(.alert-permanent)";
pub const VALIDATED_FORM_SELECTOR: &str = ".needs-validation";

/// Read the embedded configuration. No block means defaults.
pub fn load_config() -> AppResult<PanelConfig> {
    let raw = gloo_utils::document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    parse_config_block(raw.as_deref())
}

fn parse_config_block(raw: Option<&str>) -> AppResult<PanelConfig> {
    match raw.map(str::trim) {
        None | Some("") => Ok(PanelConfig::default()),
        Some(raw) => Ok(PanelConfig::from_json(raw)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AppError;

    #[test]
    fn test_missing_block_uses_defaults() {
        assert_eq!(parse_config_block(None).unwrap(), PanelConfig::default());
        assert_eq!(parse_config_block(Some("  \n")).unwrap(), PanelConfig::default());
    }

    #[test]
    fn test_block_overrides_defaults() {
        let config = parse_config_block(Some(r#"{"reload_delay_ms": 2000}"#)).unwrap();
        assert_eq!(config.reload_delay_ms, 2000);
        assert_eq!(config.import_url, "/admin/import_csv");
    }

    #[test]
    fn test_invalid_block_is_reported() {
        let err = parse_config_block(Some(r#"{"analyze_url": ""}"#)).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
