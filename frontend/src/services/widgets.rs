//! Bootstrap widget bindings.
//!
//! Bootstrap is loaded by the page as a global script. Every constructor is
//! imported with `catch` so a missing library surfaces as
//! [`AppError::Widget`] instead of a trap.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::config::{MODAL_SELECTOR, TOOLTIP_SELECTOR};
use crate::dom::query_all;
use crate::types::{AppError, AppResult};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Tooltip;

    #[wasm_bindgen(constructor, catch, js_namespace = bootstrap)]
    fn new(element: &Element) -> Result<Tooltip, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Modal;

    #[wasm_bindgen(constructor, catch, js_namespace = bootstrap)]
    fn new(element: &Element) -> Result<Modal, JsValue>;

    #[wasm_bindgen(static_method_of = Modal, js_namespace = bootstrap, js_name = getInstance, catch)]
    fn get_instance(element: &Element) -> Result<Option<Modal>, JsValue>;

    #[wasm_bindgen(method)]
    fn hide(this: &Modal);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Alert;

    #[wasm_bindgen(constructor, catch, js_namespace = bootstrap)]
    fn new(element: &Element) -> Result<Alert, JsValue>;

    #[wasm_bindgen(method)]
    fn close(this: &Alert);
}

fn widget_error(err: JsValue) -> AppError {
    AppError::Widget(AppError::from(err).to_string())
}

/// Whether `window.bootstrap` is defined.
pub fn bootstrap_available() -> bool {
    js_sys::Reflect::has(&gloo_utils::window(), &JsValue::from_str("bootstrap")).unwrap_or(false)
}

/// Attach a tooltip to every trigger. Returns how many were created.
pub fn init_tooltips(document: &Document) -> AppResult<usize> {
    let triggers = query_all(document, TOOLTIP_SELECTOR)?;
    for trigger in &triggers {
        Tooltip::new(trigger).map_err(widget_error)?;
    }
    Ok(triggers.len())
}

/// Register every `.modal` with Bootstrap so it can be looked up later.
pub fn init_modals(document: &Document) -> AppResult<usize> {
    let modals = query_all(document, MODAL_SELECTOR)?;
    for modal in &modals {
        Modal::new(modal).map_err(widget_error)?;
    }
    Ok(modals.len())
}

/// Hide a registered modal. Unregistered elements are left alone.
pub fn hide_modal(element: &Element) -> AppResult<()> {
    if let Some(modal) = Modal::get_instance(element).map_err(widget_error)? {
        modal.hide();
    }
    Ok(())
}

/// Close (fade out and remove) an alert.
pub fn close_alert(element: &Element) -> AppResult<()> {
    Alert::new(element).map_err(widget_error)?.close();
    Ok(())
}
