//! Small DOM helpers shared by the page wiring.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget};

use crate::types::{AppError, AppResult};

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> AppResult<Vec<Element>> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// First element matching `selector`.
pub fn query_one(document: &Document, selector: &str) -> AppResult<Option<Element>> {
    Ok(document.query_selector(selector)?)
}

pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> AppResult<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| AppError::Dom(format!("no element with id `{}`", id)))?
        .dyn_into::<T>()
        .map_err(|_| AppError::Dom(format!("element `{}` has an unexpected type", id)))
}

/// Attach `handler` for the page's lifetime.
///
/// The handler receives the event already cast to `E`; events of another
/// type are ignored.
pub fn listen<E, F>(target: &EventTarget, event: &str, mut handler: F) -> AppResult<()>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            handler(event);
        }
    });
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Log a DOM call that failed inside an event handler.
pub fn log_failure(context: &str, outcome: Result<(), JsValue>) {
    if let Err(err) = outcome {
        log::warn!("{}: {}", context, AppError::from(err));
    }
}
