//! Wire types exchanged with the CSV endpoints.
//!
//! Both endpoints answer with a JSON object carrying a `success` flag.
//! On success the remaining keys form the payload; on failure only
//! `message` is meaningful. [`parse_reply`] splits the two cases.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::TransportResult;

// =============================================================================
// Analysis
// =============================================================================

/// Dry-run report for an uploaded CSV file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub total_records: usize,
    #[serde(default)]
    pub new_records: usize,
    #[serde(default)]
    pub duplicate_records: usize,
    #[serde(default)]
    pub error_records: usize,

    /// Bounded sample of the records, chosen by the server
    #[serde(default, deserialize_with = "null_as_default")]
    pub preview: Vec<PreviewRecord>,

    /// File-level error messages
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<String>,

    /// Column names the server did not recognize
    #[serde(default, deserialize_with = "null_as_default")]
    pub undefined_fields: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub field_explanations: Vec<FieldExplanation>,

    #[serde(default)]
    pub validation_summary: Option<ValidationSummary>,
}

/// One previewed CSV row.
///
/// The server has used two naming schemes over time, so both are accepted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PreviewRecord {
    #[serde(default)]
    pub complete_name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub qr_code_id: Option<String>,

    /// Access status, e.g. `allowed`, `banned`, `Active`
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,

    /// Import classification, e.g. `New`, `Duplicate`, `Error`
    #[serde(default, deserialize_with = "null_as_default")]
    pub import_status: String,

    #[serde(default)]
    pub has_errors: bool,
    #[serde(default)]
    pub error_count: Option<usize>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<String>,
}

impl PreviewRecord {
    pub fn display_name(&self) -> &str {
        non_empty(&self.complete_name)
            .or_else(|| non_empty(&self.full_name))
            .unwrap_or_default()
    }

    pub fn identity_code(&self) -> &str {
        non_empty(&self.barcode)
            .or_else(|| non_empty(&self.qr_code_id))
            .unwrap_or_default()
    }

    /// Number of validation errors, preferring the server's count.
    pub fn error_total(&self) -> usize {
        self.error_count.unwrap_or(self.errors.len())
    }

    /// Whether the row carries per-record validation errors.
    pub fn is_flagged(&self) -> bool {
        self.has_errors || !self.errors.is_empty()
    }
}

/// Human explanation of a field problem.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldExplanation {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub suggestions: Vec<String>,
}

/// CSV format reference sent alongside errors.
///
/// Maps keep the server's key order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub required_fields: Map<String, Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub optional_fields: Map<String, Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub format_requirements: Map<String, Value>,
}

// =============================================================================
// Import
// =============================================================================

/// Result of a committed import.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImportReceipt {
    #[serde(default)]
    pub imported_count: usize,
}

// =============================================================================
// Envelope
// =============================================================================

/// Application-level answer of an endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerReply<T> {
    /// `success: true` with its payload
    Accepted(T),
    /// `success: false` (or missing) with the message to show
    Rejected(String),
}

/// Split a response body into accepted payload or rejection message.
///
/// `fallback` is used when a rejection carries no usable message.
/// A body that is not a JSON object, or whose payload does not match `T`,
/// is a transport-level decode error.
pub fn parse_reply<T: DeserializeOwned>(body: &str, fallback: &str) -> TransportResult<ServerReply<T>> {
    let value: Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(crate::error::TransportError::Decode(
            "expected a JSON object".to_string(),
        ));
    }

    if value.get("success").and_then(Value::as_bool) == Some(true) {
        let payload = serde_json::from_value(value)?;
        return Ok(ServerReply::Accepted(payload));
    }

    let message = value
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(fallback)
        .to_string();
    Ok(ServerReply::Rejected(message))
}

/// Render a summary map value as display text.
pub fn note_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
