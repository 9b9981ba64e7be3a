//! Badge code inputs: upper-case as typed, submit shortly after a scanner's Enter.

use gloo_timers::callback::Timeout;
use secpanel::panel::{is_scan_terminator, normalize_code, SCAN_INPUT_SELECTOR};
use secpanel::PanelConfig;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlInputElement, KeyboardEvent};

use crate::dom::{listen, log_failure, query_all};
use crate::types::AppResult;

pub fn wire_scan_inputs(document: &Document, config: &PanelConfig) -> AppResult<()> {
    let delay_ms = config.scan_submit_delay_ms;

    for element in query_all(document, SCAN_INPUT_SELECTOR)? {
        let Ok(input) = element.dyn_into::<HtmlInputElement>() else {
            continue;
        };

        let target = input.clone();
        listen(&input, "input", move |_: Event| {
            target.set_value(&normalize_code(&target.value()));
        })?;

        let target = input.clone();
        listen(&input, "keypress", move |event: KeyboardEvent| {
            if !is_scan_terminator(&event.key()) {
                return;
            }
            // Let the scanner finish typing before submitting
            let input = target.clone();
            Timeout::new(delay_ms, move || {
                if let Some(form) = input.form() {
                    log_failure("scan submit", form.submit());
                }
            })
            .forget();
        })?;
    }
    Ok(())
}
