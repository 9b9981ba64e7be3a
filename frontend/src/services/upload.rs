//! HTTP transport for the CSV review endpoints.

use gloo_net::http::Request;
use secpanel::{Endpoint, PanelConfig, ReviewTransport, TransportError, TransportResult};
use web_sys::{File, FormData};

/// Posts the selected CSV as a single-part multipart form.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    analyze_url: String,
    import_url: String,
    upload_field: String,
}

impl HttpTransport {
    pub fn new(config: &PanelConfig) -> Self {
        Self {
            analyze_url: config.analyze_url.clone(),
            import_url: config.import_url.clone(),
            upload_field: config.upload_field.clone(),
        }
    }

    pub fn url(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::Analyze => &self.analyze_url,
            Endpoint::Import => &self.import_url,
        }
    }

    fn form(&self, file: &File) -> TransportResult<FormData> {
        let form_data = FormData::new()
            .map_err(|e| TransportError::Request(format!("Failed to create FormData: {:?}", e)))?;
        form_data
            .append_with_blob(&self.upload_field, file)
            .map_err(|e| TransportError::Request(format!("Failed to append file: {:?}", e)))?;
        Ok(form_data)
    }
}

impl ReviewTransport for HttpTransport {
    type Upload = File;

    async fn submit(&self, endpoint: Endpoint, upload: &File) -> TransportResult<String> {
        let url = self.url(endpoint);
        let request = Request::post(url)
            .body(self.form(upload)?)
            .map_err(|e| TransportError::Request(format!("Failed to build request: {}", e)))?;

        log::debug!("POST {} ({} bytes)", url, upload.size());

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Request(format!("HTTP request failed: {}", e)))?;

        // The JSON body decides, whatever the status.
        if !response.ok() {
            log::warn!("{} answered {}", url, response.status());
        }

        response
            .text()
            .await
            .map_err(|e| TransportError::Request(format!("Failed to read response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secpanel::{parse_reply, AnalysisResult, ImportReceipt, ServerReply};

    #[test]
    fn test_urls_follow_config() {
        let config = PanelConfig {
            analyze_url: "/panel/dry_run".into(),
            ..PanelConfig::default()
        };
        let transport = HttpTransport::new(&config);
        assert_eq!(transport.url(Endpoint::Analyze), "/panel/dry_run");
        assert_eq!(transport.url(Endpoint::Import), "/admin/import_csv");
    }

    #[test]
    fn test_analysis_deserialization() {
        // Body returned by the panel's analyze endpoint
        let json = r#"{
            "success": true,
            "total_records": 3,
            "new_records": 1,
            "duplicate_records": 1,
            "error_records": 1,
            "preview": [
                {
                    "complete_name": "Ada Lovelace",
                    "qr_code_id": "EMP123",
                    "status": "allowed",
                    "import_status": "New",
                    "has_errors": false,
                    "error_count": 0,
                    "errors": []
                },
                {
                    "full_name": "Grace Hopper",
                    "barcode": "GUEST789",
                    "status": "banned",
                    "import_status": "Error",
                    "has_errors": true,
                    "error_count": 2,
                    "errors": ["Missing email", "Invalid phone"]
                }
            ],
            "errors": ["Row 3: Missing email"],
            "undefined_fields": ["nickname"],
            "field_explanations": null,
            "validation_summary": {
                "required_fields": {"full_name": "Full name", "qr_code_id": "Badge code"},
                "optional_fields": {},
                "format_requirements": {"phone": "Digits only"}
            }
        }"#;

        let reply: ServerReply<AnalysisResult> = parse_reply(json, "Error analyzing CSV").unwrap();
        let ServerReply::Accepted(analysis) = reply else {
            panic!("analysis should be accepted");
        };
        assert_eq!(analysis.total_records, 3);
        assert_eq!(analysis.preview.len(), 2);
        assert_eq!(analysis.preview[1].identity_code(), "GUEST789");
        assert!(analysis.field_explanations.is_empty());
        assert_eq!(
            analysis
                .validation_summary
                .as_ref()
                .map(|summary| summary.required_fields.len()),
            Some(2)
        );
    }

    #[test]
    fn test_import_rejection_deserialization() {
        let reply: ServerReply<ImportReceipt> =
            parse_reply(r#"{"success": false, "message": "Database locked"}"#, "Import failed").unwrap();
        assert_eq!(reply, ServerReply::Rejected("Database locked".to_string()));
    }
}
