//! Analysis results of the CSV review.
//!
//! Pure rendering of a [`secpanel::AnalysisView`]; every server-provided
//! string is bound as text.

use leptos::*;
use secpanel::review::{ErrorPanel, FieldNote, FormatGuide, PreviewRow};
use secpanel::{AnalysisView, FieldExplanation};

use crate::config::{
    ANALYTICS_ID, DUPLICATE_RECORDS_ID, ERROR_DETAILS_ID, ERROR_LIST_ID, ERROR_RECORDS_ID,
    NEW_RECORDS_ID, PREVIEW_BODY_ID, TOTAL_RECORDS_ID,
};

#[component]
pub fn AnalyticsPanel(analysis: AnalysisView) -> impl IntoView {
    let AnalysisView {
        summary,
        rows,
        error_panel,
    } = analysis;

    view! {
        <div id=ANALYTICS_ID class="mt-4">
            <div class="row text-center mb-3">
                <SummaryCard id=TOTAL_RECORDS_ID label="Total" value=summary.total tone="primary"/>
                <SummaryCard id=NEW_RECORDS_ID label="New" value=summary.new tone="success"/>
                <SummaryCard id=DUPLICATE_RECORDS_ID label="Duplicates" value=summary.duplicate tone="warning"/>
                <SummaryCard id=ERROR_RECORDS_ID label="Errors" value=summary.error tone="danger"/>
            </div>

            <div class="table-responsive">
                <table class="table table-sm table-hover">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Code"</th>
                            <th>"Status"</th>
                            <th>"Import"</th>
                        </tr>
                    </thead>
                    <tbody id=PREVIEW_BODY_ID>
                        {rows.into_iter().map(|row| view! { <PreviewLine row=row/> }).collect_view()}
                    </tbody>
                </table>
            </div>

            {error_panel.map(|panel| view! { <ErrorDetails panel=panel/> })}
        </div>
    }
}

#[component]
fn SummaryCard(
    id: &'static str,
    label: &'static str,
    value: usize,
    /// Bootstrap colour of the border
    tone: &'static str,
) -> impl IntoView {
    view! {
        <div class="col-3">
            <div class=format!("card border-{}", tone)>
                <div class="card-body p-2">
                    <h4 class="mb-0" id=id>{value}</h4>
                    <small class="text-muted">{label}</small>
                </div>
            </div>
        </div>
    }
}

/// One preview table row.
#[component]
pub fn PreviewLine(row: PreviewRow) -> impl IntoView {
    let row_class = row.row_class();
    let PreviewRow {
        name,
        code,
        status,
        import_class,
        error_note,
        flagged,
        hover,
    } = row;

    view! {
        <tr class=row_class title=hover>
            <td>
                {name}
                {flagged.then(|| view! {
                    <i class="fas fa-exclamation-triangle text-warning ms-2" title="Has validation errors"></i>
                })}
            </td>
            <td><code>{code}</code></td>
            <td><span class=status.tone.badge_class()>{status.label}</span></td>
            <td>
                <span class=import_class.tone.badge_class()>{import_class.label}</span>
                {error_note.map(|note| view! { <small class="text-danger d-block">{note}</small> })}
            </td>
        </tr>
    }
}

#[component]
fn ErrorDetails(panel: ErrorPanel) -> impl IntoView {
    view! {
        <div id=ERROR_DETAILS_ID class="mt-3">
            <h6 class="text-danger">
                <i class="fas fa-exclamation-triangle me-2"></i>"Issues Found"
            </h6>
            <div id=ERROR_LIST_ID>
                <ErrorEntries panel=panel/>
            </div>
        </div>
    }
}

/// Errors, unrecognized columns and guidance, without the heading.
#[component]
pub fn ErrorEntries(panel: ErrorPanel) -> impl IntoView {
    let separator = panel.has_separator();
    let ErrorPanel {
        errors,
        unrecognized_columns,
        explanations,
        guide,
    } = panel;

    let unrecognized = (!unrecognized_columns.is_empty()).then(|| {
        view! {
            <h6 class="text-warning mt-3 mb-2">
                <i class="fas fa-question-circle me-2"></i>"Unrecognized Columns"
            </h6>
            <ul class="list-unstyled ms-3">
                {unrecognized_columns
                    .into_iter()
                    .map(|field| view! {
                        <li class="text-warning small">
                            <i class="fas fa-arrow-right me-2"></i><code>{field}</code>
                        </li>
                    })
                    .collect_view()}
            </ul>
        }
    });

    view! {
        <ul class="list-unstyled">
            {errors
                .into_iter()
                .map(|error| view! {
                    <li class="text-danger mb-1">
                        <i class="fas fa-exclamation-circle me-2"></i>{error}
                    </li>
                })
                .collect_view()}
        </ul>
        {separator.then(|| view! { <hr/> })}
        {unrecognized}
        {explanations
            .into_iter()
            .map(|explanation| view! { <Explanation explanation=explanation/> })
            .collect_view()}
        {guide.map(|guide| view! { <FormatGuideCard guide=guide/> })}
    }
}

#[component]
fn Explanation(explanation: FieldExplanation) -> impl IntoView {
    view! {
        <div class="alert alert-warning mt-3">
            <h6 class="alert-heading">{explanation.title}</h6>
            <p class="mb-2">{explanation.description}</p>
            <hr/>
            <ul class="mb-0">
                {explanation
                    .suggestions
                    .into_iter()
                    .map(|suggestion| view! { <li>{suggestion}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn FormatGuideCard(guide: FormatGuide) -> impl IntoView {
    let FormatGuide {
        required,
        optional,
        more_optional,
        formats,
    } = guide;

    view! {
        <div class="alert alert-info mt-3">
            <h6 class="alert-heading">
                <i class="fas fa-info-circle me-2"></i>"CSV Format Guide"
            </h6>
            <div class="row">
                <div class="col-md-6">
                    <h6 class="text-success">"Required Fields:"</h6>
                    <ul class="small">{field_notes(required, " - ")}</ul>
                </div>
                <div class="col-md-6">
                    <h6 class="text-primary">"Optional Fields:"</h6>
                    <ul class="small">{field_notes(optional, " - ")}</ul>
                    {more_optional.then(|| view! { <small class="text-muted">"...and more"</small> })}
                </div>
            </div>
            <hr/>
            <h6 class="text-warning">"Format Requirements:"</h6>
            <ul class="small mb-0">{field_notes(formats, ": ")}</ul>
        </div>
    }
}

fn field_notes(notes: Vec<FieldNote>, separator: &'static str) -> impl IntoView {
    notes
        .into_iter()
        .map(|note| view! { <li><code>{note.field}</code>{separator}{note.text}</li> })
        .collect_view()
}
