//! View models for the analysis panel.
//!
//! [`AnalysisView::from_result`] turns an [`AnalysisResult`] into plain
//! data that a renderer binds as text. Nothing here produces markup.

use crate::models::{note_text, AnalysisResult, FieldExplanation, PreviewRecord, ValidationSummary};
use serde_json::{Map, Value};

/// Optional fields listed in the format guide.
pub const OPTIONAL_FIELDS_SHOWN: usize = 4;

// =============================================================================
// Badges
// =============================================================================

/// Bootstrap contextual colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Secondary,
}

impl Tone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Danger => "danger",
            Tone::Secondary => "secondary",
        }
    }

    /// Full class list for a badge of this tone.
    pub fn badge_class(&self) -> String {
        format!("badge bg-{}", self.css_class())
    }
}

/// A labelled badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub tone: Tone,
}

/// Access status of a previewed person.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessStatus {
    Allowed,
    Blocked,
}

impl AccessStatus {
    pub fn from_label(label: &str) -> Self {
        match label {
            "allowed" | "Active" => AccessStatus::Allowed,
            _ => AccessStatus::Blocked,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            AccessStatus::Allowed => Tone::Success,
            AccessStatus::Blocked => Tone::Danger,
        }
    }
}

/// What the import would do with a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportClass {
    New,
    Duplicate,
    Error,
    Unknown,
}

impl ImportClass {
    pub fn from_label(label: &str) -> Self {
        match label {
            "New" => ImportClass::New,
            "Duplicate" => ImportClass::Duplicate,
            "Error" => ImportClass::Error,
            _ => ImportClass::Unknown,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            ImportClass::New => Tone::Success,
            ImportClass::Duplicate => Tone::Warning,
            ImportClass::Error => Tone::Danger,
            ImportClass::Unknown => Tone::Secondary,
        }
    }
}

// =============================================================================
// Panel
// =============================================================================

/// Everything the analytics panel displays.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisView {
    pub summary: Summary,
    pub rows: Vec<PreviewRow>,
    /// `None` hides the error panel
    pub error_panel: Option<ErrorPanel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: usize,
    pub new: usize,
    pub duplicate: usize,
    pub error: usize,
}

/// One line of the preview table.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewRow {
    pub name: String,
    pub code: String,
    pub status: Badge,
    pub import_class: Badge,
    /// e.g. "2 error(s)"
    pub error_note: Option<String>,
    /// Row gets the warning treatment
    pub flagged: bool,
    /// Hover text listing the record's errors
    pub hover: Option<String>,
}

impl PreviewRow {
    pub fn from_record(record: &PreviewRecord) -> Self {
        let error_total = record.error_total();
        Self {
            name: record.display_name().to_string(),
            code: record.identity_code().to_string(),
            status: Badge {
                label: record.status.clone(),
                tone: AccessStatus::from_label(&record.status).tone(),
            },
            import_class: Badge {
                label: record.import_status.clone(),
                tone: ImportClass::from_label(&record.import_status).tone(),
            },
            error_note: (error_total > 0).then(|| format!("{error_total} error(s)")),
            flagged: record.is_flagged(),
            hover: (!record.errors.is_empty()).then(|| record.errors.join("; ")),
        }
    }

    pub fn row_class(&self) -> &'static str {
        if self.flagged {
            "table-warning"
        } else {
            ""
        }
    }
}

/// Errors and guidance shown under the preview.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorPanel {
    pub errors: Vec<String>,
    pub unrecognized_columns: Vec<String>,
    pub explanations: Vec<FieldExplanation>,
    pub guide: Option<FormatGuide>,
}

impl ErrorPanel {
    /// A rule separates plain errors from column/field guidance.
    pub fn has_separator(&self) -> bool {
        !self.unrecognized_columns.is_empty() || !self.explanations.is_empty()
    }
}

/// A `field - description` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNote {
    pub field: String,
    pub text: String,
}

/// Fixed-layout CSV format reference.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatGuide {
    pub required: Vec<FieldNote>,
    /// First [`OPTIONAL_FIELDS_SHOWN`] optional fields
    pub optional: Vec<FieldNote>,
    /// More optional fields exist than are listed
    pub more_optional: bool,
    pub formats: Vec<FieldNote>,
}

impl FormatGuide {
    pub fn from_summary(summary: &ValidationSummary) -> Self {
        let optional = notes(&summary.optional_fields);
        let more_optional = optional.len() > OPTIONAL_FIELDS_SHOWN;
        Self {
            required: notes(&summary.required_fields),
            optional: optional.into_iter().take(OPTIONAL_FIELDS_SHOWN).collect(),
            more_optional,
            formats: notes(&summary.format_requirements),
        }
    }
}

fn notes(map: &Map<String, Value>) -> Vec<FieldNote> {
    map.iter()
        .map(|(field, value)| FieldNote {
            field: field.clone(),
            text: note_text(value),
        })
        .collect()
}

impl AnalysisView {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let error_panel = (!result.errors.is_empty()).then(|| ErrorPanel {
            errors: result.errors.clone(),
            unrecognized_columns: result.undefined_fields.clone(),
            explanations: result.field_explanations.clone(),
            guide: result.validation_summary.as_ref().map(FormatGuide::from_summary),
        });

        Self {
            summary: Summary {
                total: result.total_records,
                new: result.new_records,
                duplicate: result.duplicate_records,
                error: result.error_records,
            },
            rows: result.preview.iter().map(PreviewRow::from_record).collect(),
            error_panel,
        }
    }
}

// =============================================================================
// Import action
// =============================================================================

/// State of the import button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportAction {
    #[default]
    Hidden,
    /// Visible, enabled, labelled with the number of new records
    Ready { count: usize },
    /// Visible, disabled while the import request runs
    Busy { count: usize },
}

impl ImportAction {
    /// Action to offer after an analysis.
    pub fn for_result(result: &AnalysisResult) -> Self {
        if result.new_records > 0 {
            ImportAction::Ready {
                count: result.new_records,
            }
        } else {
            ImportAction::Hidden
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, ImportAction::Hidden)
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, ImportAction::Ready { .. })
    }

    pub fn label(&self) -> String {
        match self {
            ImportAction::Hidden => String::new(),
            ImportAction::Ready { count } => format!("Import {count} Records"),
            ImportAction::Busy { .. } => "Importing...".to_string(),
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            ImportAction::Busy { .. } => "fas fa-spinner fa-spin me-2",
            _ => "fas fa-upload me-2",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(status: &str, import_status: &str) -> PreviewRecord {
        PreviewRecord {
            full_name: Some("Ada Lovelace".into()),
            qr_code_id: Some("USER001".into()),
            status: status.into(),
            import_status: import_status.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_status_badges() {
        assert_eq!(PreviewRow::from_record(&record("allowed", "New")).status.tone, Tone::Success);
        assert_eq!(PreviewRow::from_record(&record("Active", "New")).status.tone, Tone::Success);

        let row = PreviewRow::from_record(&record("banned", "New"));
        assert_eq!(row.status.tone, Tone::Danger);
        assert_eq!(row.status.label, "banned");
    }

    #[test]
    fn test_import_class_badges() {
        let tone = |label| PreviewRow::from_record(&record("allowed", label)).import_class.tone;
        assert_eq!(tone("New"), Tone::Success);
        assert_eq!(tone("Duplicate"), Tone::Warning);
        assert_eq!(tone("Error"), Tone::Danger);
        assert_eq!(tone("Pending"), Tone::Secondary);
        assert_eq!(Tone::Secondary.badge_class(), "badge bg-secondary");
    }

    #[test]
    fn test_flagged_row_hover_joins_errors() {
        let mut flagged = record("allowed", "Error");
        flagged.errors = vec!["Missing name".into(), "Bad code".into()];

        let row = PreviewRow::from_record(&flagged);
        assert!(row.flagged);
        assert_eq!(row.row_class(), "table-warning");
        assert_eq!(row.hover.as_deref(), Some("Missing name; Bad code"));
        assert_eq!(row.error_note.as_deref(), Some("2 error(s)"));
    }

    #[test]
    fn test_clean_row() {
        let row = PreviewRow::from_record(&record("allowed", "New"));
        assert!(!row.flagged);
        assert_eq!(row.row_class(), "");
        assert!(row.hover.is_none());
        assert!(row.error_note.is_none());
        assert_eq!(row.name, "Ada Lovelace");
        assert_eq!(row.code, "USER001");
    }

    #[test]
    fn test_no_error_panel_without_errors() {
        let result = AnalysisResult {
            undefined_fields: vec!["nickname".into()],
            field_explanations: vec![FieldExplanation::default()],
            validation_summary: Some(ValidationSummary::default()),
            ..Default::default()
        };
        assert!(AnalysisView::from_result(&result).error_panel.is_none());
    }

    #[test]
    fn test_error_panel_layout() {
        let result = AnalysisResult {
            errors: vec!["Row 3: Missing full_name or qr_code_id".into()],
            undefined_fields: vec!["nickname".into()],
            validation_summary: Some(ValidationSummary {
                required_fields: json!({"full_name": "Name", "qr_code_id": "Code"})
                    .as_object()
                    .cloned()
                    .unwrap(),
                optional_fields: json!({"a": "1", "b": "2", "c": "3", "d": "4", "e": "5"})
                    .as_object()
                    .cloned()
                    .unwrap(),
                format_requirements: json!({"qr_code_id": "Uppercase"})
                    .as_object()
                    .cloned()
                    .unwrap(),
            }),
            ..Default::default()
        };

        let panel = AnalysisView::from_result(&result).error_panel.unwrap();
        assert!(panel.has_separator());
        assert_eq!(panel.unrecognized_columns, ["nickname"]);

        let guide = panel.guide.unwrap();
        assert_eq!(guide.required.len(), 2);
        let optional: Vec<&str> = guide.optional.iter().map(|n| n.field.as_str()).collect();
        assert_eq!(optional, ["a", "b", "c", "d"]);
        assert!(guide.more_optional);
        assert_eq!(guide.formats[0].text, "Uppercase");
    }

    #[test]
    fn test_error_panel_without_guidance_has_no_separator() {
        let result = AnalysisResult {
            errors: vec!["oops".into()],
            ..Default::default()
        };
        let panel = AnalysisView::from_result(&result).error_panel.unwrap();
        assert!(!panel.has_separator());
        assert!(panel.guide.is_none());
    }

    #[test]
    fn test_import_action() {
        let mut result = AnalysisResult::default();
        assert_eq!(ImportAction::for_result(&result), ImportAction::Hidden);

        result.new_records = 3;
        let action = ImportAction::for_result(&result);
        assert_eq!(action, ImportAction::Ready { count: 3 });
        assert!(action.is_visible() && action.is_enabled());
        assert_eq!(action.label(), "Import 3 Records");

        let busy = ImportAction::Busy { count: 3 };
        assert!(busy.is_visible() && !busy.is_enabled());
        assert_eq!(busy.label(), "Importing...");
        assert!(busy.icon_class().contains("fa-spin"));
    }
}
