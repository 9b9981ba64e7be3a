//! Panel configuration.
//!
//! Every value has a default matching the server templates, so a page
//! without an embedded configuration block works unchanged. Pages can
//! override any subset through a JSON document.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{ConfigError, ConfigResult};

/// Endpoint that analyzes a CSV file without importing it.
pub const DEFAULT_ANALYZE_URL: &str = "/admin/analyze_csv";

/// Endpoint that imports a CSV file.
pub const DEFAULT_IMPORT_URL: &str = "/admin/import_csv";

/// Multipart field carrying the uploaded file.
pub const DEFAULT_UPLOAD_FIELD: &str = "csv_file";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Analysis (dry-run) endpoint
    pub analyze_url: String,
    /// Import (commit) endpoint
    pub import_url: String,
    /// Multipart field name for the CSV file
    pub upload_field: String,
    /// Toast lifetime
    pub toast_timeout_ms: u32,
    /// Delay before flash alerts close themselves
    pub alert_timeout_ms: u32,
    /// Delay between a successful import and the page reload
    pub reload_delay_ms: u32,
    /// Dashboard activity refresh period
    pub refresh_interval_ms: u32,
    /// How long the refresh indicator stays visible
    pub refresh_indicator_ms: u32,
    /// Delay between a scanner's Enter and the form submission
    pub scan_submit_delay_ms: u32,
    /// Simulated scan duration
    pub scan_simulation_ms: u32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            analyze_url: DEFAULT_ANALYZE_URL.to_string(),
            import_url: DEFAULT_IMPORT_URL.to_string(),
            upload_field: DEFAULT_UPLOAD_FIELD.to_string(),
            toast_timeout_ms: 3_000,
            alert_timeout_ms: 5_000,
            reload_delay_ms: 1_500,
            refresh_interval_ms: 30_000,
            refresh_indicator_ms: 1_000,
            scan_submit_delay_ms: 100,
            scan_simulation_ms: 1_500,
        }
    }
}

impl PanelConfig {
    /// Parse and validate a JSON configuration. Missing keys keep their defaults.
    pub fn from_json(raw: &str) -> ConfigResult<Self> {
        let config: PanelConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that would make the panel unusable.
    pub fn validate(&self) -> ConfigResult<()> {
        let urls = [
            ("analyze_url", &self.analyze_url),
            ("import_url", &self.import_url),
            ("upload_field", &self.upload_field),
        ];
        for (field, value) in urls {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    field,
                    message: "must not be empty".to_string(),
                });
            }
        }

        if self.refresh_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "refresh_interval_ms",
                message: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    pub fn reload_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.reload_delay_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PanelConfig::default();
        assert_eq!(config.analyze_url, "/admin/analyze_csv");
        assert_eq!(config.import_url, "/admin/import_csv");
        assert_eq!(config.upload_field, "csv_file");
        assert_eq!(config.toast_timeout_ms, 3_000);
        assert_eq!(config.reload_delay(), Duration::from_millis(1_500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = PanelConfig::from_json(r#"{"import_url": "/v2/import", "reload_delay_ms": 0}"#)
            .unwrap();
        assert_eq!(config.import_url, "/v2/import");
        assert_eq!(config.reload_delay_ms, 0);
        assert_eq!(config.analyze_url, DEFAULT_ANALYZE_URL);
        assert_eq!(config.alert_timeout_ms, 5_000);
    }

    #[test]
    fn test_empty_url_rejected() {
        let err = PanelConfig::from_json(r#"{"analyze_url": "  "}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "analyze_url", .. }));
    }

    #[test]
    fn test_zero_refresh_interval_rejected() {
        let err = PanelConfig::from_json(r#"{"refresh_interval_ms": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "refresh_interval_ms", .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = PanelConfig::from_json("{analyze_url:").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
