//! CSV upload review: file selection, analysis and import.
//!
//! One [`LiveReviewFlow`] per page drives both the mounted panel and the
//! `analyzeCSV`/`importCSV` handlers of the upload dialog; state
//! transitions and messages live in the core crate.

use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use leptos::*;
use secpanel::review::Operation;
use secpanel::{AnalysisView, FilePicker, ImportAction, PanelConfig, ReviewFlow, ReviewView};
use web_sys::{File, HtmlInputElement};

use crate::components::{AnalyticsPanel, Toaster};
use crate::config::{CSV_INPUT_ID, IMPORT_BUTTON_ID, REVIEW_DIALOG_ID};
use crate::dom::element_by_id;
use crate::services::{hide_modal, HttpTransport};

/// Review flow as wired in the browser.
pub type LiveReviewFlow = ReviewFlow<HttpTransport, FileInputPicker, Toaster, PanelView>;

/// Build the page's review flow around `panel`.
pub fn create_review_flow(config: &PanelConfig, toaster: Toaster, panel: PanelView) -> Rc<LiveReviewFlow> {
    Rc::new(ReviewFlow::new(
        HttpTransport::new(config),
        FileInputPicker::new(CSV_INPUT_ID),
        toaster,
        panel,
        config.reload_delay(),
    ))
}

/// Run `operation` in the background. Failures are already reported.
pub fn start_review(flow: &Rc<LiveReviewFlow>, operation: Operation) {
    let flow = Rc::clone(flow);
    spawn_local(async move {
        let outcome = match operation {
            Operation::Analyze => flow.analyze().await,
            Operation::Import => flow.import().await,
        };
        if let Err(err) = outcome {
            log::debug!("{:?} ended without result: {}", operation, err);
        }
    });
}

/// Signal-backed [`ReviewView`].
#[derive(Clone, Copy)]
pub struct PanelView {
    analysis: RwSignal<Option<AnalysisView>>,
    action: RwSignal<ImportAction>,
    analyzing: RwSignal<bool>,
}

impl PanelView {
    pub fn new() -> Self {
        Self {
            analysis: create_rw_signal(None),
            action: create_rw_signal(ImportAction::Hidden),
            analyzing: create_rw_signal(false),
        }
    }

    pub fn analysis(&self) -> ReadSignal<Option<AnalysisView>> {
        self.analysis.read_only()
    }

    pub fn action(&self) -> ReadSignal<ImportAction> {
        self.action.read_only()
    }

    pub fn analyzing(&self) -> ReadSignal<bool> {
        self.analyzing.read_only()
    }
}

impl Default for PanelView {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewView for PanelView {
    fn show_analysis(&self, analysis: Option<AnalysisView>) {
        self.analysis.set(analysis);
    }

    fn set_import_action(&self, action: ImportAction) {
        self.action.set(action);
    }

    fn set_analyzing(&self, analyzing: bool) {
        self.analyzing.set(analyzing);
    }

    fn close_dialog(&self) {
        let Some(dialog) = gloo_utils::document().get_element_by_id(REVIEW_DIALOG_ID) else {
            log::debug!("No #{} dialog to close", REVIEW_DIALOG_ID);
            return;
        };
        if let Err(err) = hide_modal(&dialog) {
            log::warn!("Could not close the review dialog: {}", err);
        }
    }

    fn schedule_reload(&self, delay: Duration) {
        let delay_ms = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(delay_ms, || {
            if let Err(err) = gloo_utils::window().location().reload() {
                log::error!("Page reload failed: {:?}", err);
            }
        })
        .forget();
    }
}

/// Reads the file chosen in the `<input type="file">` with the given id,
/// whether the panel rendered it or the page template did.
#[derive(Clone, Copy)]
pub struct FileInputPicker {
    input_id: &'static str,
}

impl FileInputPicker {
    pub fn new(input_id: &'static str) -> Self {
        Self { input_id }
    }
}

impl FilePicker for FileInputPicker {
    type Upload = File;

    fn selected(&self) -> Option<File> {
        let input = element_by_id::<HtmlInputElement>(&gloo_utils::document(), self.input_id)
            .map_err(|err| log::debug!("No file input: {}", err))
            .ok()?;
        input.files()?.get(0)
    }
}

#[component]
pub fn CsvReviewPanel(flow: Rc<LiveReviewFlow>, panel: PanelView) -> impl IntoView {
    // A new selection starts over
    let on_file_change = {
        let flow = Rc::clone(&flow);
        move |_| flow.reset()
    };

    let on_analyze = {
        let flow = Rc::clone(&flow);
        move |_| start_review(&flow, Operation::Analyze)
    };

    let on_import = move |_| start_review(&flow, Operation::Import);

    let action = panel.action();
    let analyzing = panel.analyzing();
    let import_display = move || if action.get().is_visible() { "inline-block" } else { "none" };
    let import_disabled = move || !action.get().is_enabled();

    view! {
        <div class="csv-review">
            <div class="mb-3">
                <label for=CSV_INPUT_ID class="form-label">"CSV file"</label>
                <input
                    type="file"
                    id=CSV_INPUT_ID
                    name="csv_file"
                    class="form-control"
                    accept=".csv"
                    on:change=on_file_change
                />
            </div>

            <div class="d-flex gap-2">
                <button
                    type="button"
                    class="btn btn-outline-primary"
                    id="analyzeBtn"
                    prop:disabled=move || analyzing.get()
                    on:click=on_analyze
                >
                    {move || if analyzing.get() {
                        view! { <i class="fas fa-spinner fa-spin me-2"></i>"Analyzing..." }.into_view()
                    } else {
                        view! { <i class="fas fa-search me-2"></i>"Analyze" }.into_view()
                    }}
                </button>
                <button
                    type="button"
                    class="btn btn-success"
                    id=IMPORT_BUTTON_ID
                    style:display=import_display
                    prop:disabled=import_disabled
                    on:click=on_import
                >
                    <i class=move || action.get().icon_class()></i>
                    {move || action.get().label()}
                </button>
            </div>

            {move || panel.analysis().get().map(|analysis| view! { <AnalyticsPanel analysis=analysis/> })}
        </div>
    }
}
