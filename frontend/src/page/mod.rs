//! Progressive enhancement of the server-rendered pages.
//!
//! Each step attaches listeners or timers to markup that is already in the
//! document. A step that fails is logged and skipped; the others still run.

mod alerts;
mod forms;
mod links;
mod refresh;
mod scan;
mod shortcuts;
mod widgets;

pub use refresh::refresh_activity;

use secpanel::PanelConfig;
use web_sys::Document;

use crate::types::AppResult;

type Step = fn(&Document, &PanelConfig) -> AppResult<()>;

const STEPS: [(&str, Step); 8] = [
    ("widgets", widgets::init_widgets),
    ("alert dismissal", alerts::schedule_alert_dismissal),
    ("scan inputs", scan::wire_scan_inputs),
    ("confirmations", links::wire_confirmations),
    ("form validation", forms::wire_form_validation),
    ("smooth scroll", links::wire_smooth_scroll),
    ("keyboard shortcuts", shortcuts::wire_shortcuts),
    ("activity refresh", refresh::wire_activity_refresh),
];

/// Wire every enhancement into the current document.
pub fn wire_page(config: &PanelConfig) {
    let document = gloo_utils::document();
    for (name, step) in STEPS {
        if let Err(err) = step(&document, config) {
            log::warn!("{} not wired: {}", name, err);
        }
    }
    log::info!("Page enhancements wired");
}
