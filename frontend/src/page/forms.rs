use secpanel::PanelConfig;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlFormElement};

use crate::config::VALIDATED_FORM_SELECTOR;
use crate::dom::{listen, log_failure, query_all};
use crate::types::AppResult;

/// Block invalid submissions of `.needs-validation` forms and show feedback.
pub fn wire_form_validation(document: &Document, _config: &PanelConfig) -> AppResult<()> {
    for element in query_all(document, VALIDATED_FORM_SELECTOR)? {
        let Ok(form) = element.dyn_into::<HtmlFormElement>() else {
            continue;
        };

        let target = form.clone();
        listen(&form, "submit", move |event: Event| {
            if !target.check_validity() {
                event.prevent_default();
                event.stop_propagation();
            }
            log_failure("form validation", target.class_list().add_1("was-validated"));
        })?;
    }
    Ok(())
}
