//! Review results in the upload dialog the server renders.
//!
//! Pages without a `#csvReviewMount` placeholder carry their own analytics
//! block and import button. Effects keep those elements in step with the
//! [`PanelView`] signals, so `analyzeCSV()`/`importCSV()` from the
//! template's handlers behave like the mounted panel.

use std::rc::Rc;

use leptos::*;
use secpanel::review::ErrorPanel;
use secpanel::{AnalysisView, ImportAction};
use web_sys::{Document, Event, HtmlButtonElement, HtmlElement};

use crate::components::{ErrorEntries, LiveReviewFlow, PanelView, PreviewLine};
use crate::config::{
    ANALYTICS_ID, CSV_INPUT_ID, DUPLICATE_RECORDS_ID, ERROR_DETAILS_ID, ERROR_LIST_ID,
    ERROR_RECORDS_ID, IMPORT_BUTTON_ID, NEW_RECORDS_ID, PREVIEW_BODY_ID, TOTAL_RECORDS_ID,
};
use crate::dom::{element_by_id, listen};
use crate::types::AppResult;

/// Drive the dialog markup from `panel`. Returns `false` when the page has
/// no analytics block.
pub fn bind_upload_dialog(flow: &Rc<LiveReviewFlow>, panel: PanelView) -> AppResult<bool> {
    let document = gloo_utils::document();
    if document.get_element_by_id(ANALYTICS_ID).is_none() {
        return Ok(false);
    }

    if let Some(input) = document.get_element_by_id(CSV_INPUT_ID) {
        let flow = Rc::clone(flow);
        listen(&input, "change", move |_: Event| flow.reset())?;
    }

    let analysis = panel.analysis();
    create_effect({
        let document = document.clone();
        move |_| {
            if let Err(err) = render_analysis(&document, analysis.get().as_ref()) {
                log::warn!("Analysis not rendered: {}", err);
            }
        }
    });

    let action = panel.action();
    create_effect(move |_| {
        if let Err(err) = render_import_button(&document, action.get()) {
            log::warn!("Import button not updated: {}", err);
        }
    });

    log::debug!("Upload dialog bound to the review flow");
    Ok(true)
}

fn render_analysis(document: &Document, analysis: Option<&AnalysisView>) -> AppResult<()> {
    let container: HtmlElement = element_by_id(document, ANALYTICS_ID)?;
    let Some(analysis) = analysis else {
        container.style().set_property("display", "none")?;
        return Ok(());
    };

    let summary = &analysis.summary;
    for (id, value) in [
        (TOTAL_RECORDS_ID, summary.total),
        (NEW_RECORDS_ID, summary.new),
        (DUPLICATE_RECORDS_ID, summary.duplicate),
        (ERROR_RECORDS_ID, summary.error),
    ] {
        if let Some(counter) = document.get_element_by_id(id) {
            counter.set_text_content(Some(&value.to_string()));
        }
    }

    let body: HtmlElement = element_by_id(document, PREVIEW_BODY_ID)?;
    body.set_inner_html("");
    let rows = analysis.rows.clone();
    mount_to(body, move || {
        rows.into_iter()
            .map(|row| view! { <PreviewLine row=row/> })
            .collect_view()
    });

    render_error_panel(document, analysis.error_panel.clone())?;
    container.style().set_property("display", "block")?;
    Ok(())
}

fn render_error_panel(document: &Document, panel: Option<ErrorPanel>) -> AppResult<()> {
    let details: HtmlElement = element_by_id(document, ERROR_DETAILS_ID)?;
    let Some(panel) = panel else {
        details.style().set_property("display", "none")?;
        return Ok(());
    };

    let list: HtmlElement = element_by_id(document, ERROR_LIST_ID)?;
    list.set_inner_html("");
    mount_to(list, move || view! { <ErrorEntries panel=panel/> });
    details.style().set_property("display", "block")?;
    Ok(())
}

fn render_import_button(document: &Document, action: ImportAction) -> AppResult<()> {
    if document.get_element_by_id(IMPORT_BUTTON_ID).is_none() {
        return Ok(());
    }
    let button: HtmlButtonElement = element_by_id(document, IMPORT_BUTTON_ID)?;
    let display = if action.is_visible() { "inline-block" } else { "none" };
    button.style().set_property("display", display)?;
    button.set_disabled(!action.is_enabled());
    if !action.is_visible() {
        return Ok(());
    }

    let icon = document.create_element("i")?;
    icon.set_class_name(action.icon_class());
    button.set_inner_html("");
    button.append_child(&icon)?;
    button.append_with_str_1(&action.label())?;
    Ok(())
}
