//! `window.SecurityApp`, the functions inline template handlers call.
//!
//! | JS name                 | Behaviour                                      |
//! |-------------------------|------------------------------------------------|
//! | `showToast(msg, type)`  | push a toast (`type` defaults to `info`)       |
//! | `refreshActivityData()` | flash the activity feed refresh indicator      |
//! | `formatTimestamp(ts)`   | `DD/MM/YYYY HH:MM:SS` in local time            |
//! | `simulateQRScan()`      | `Promise` of a demo badge code                 |
//! | `startQRScanner()`      | focus the badge code input                     |
//! | `analyzeCSV()`          | analyze the file chosen in `#csv_file`         |
//! | `importCSV()`           | import it once analyzed                        |

use std::rc::Rc;

use js_sys::{Object, Promise, Reflect};
use secpanel::panel::{format_epoch_millis, format_timestamp};
use secpanel::review::Operation;
use secpanel::{Notifier, PanelConfig, Severity};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::components::{start_review, LiveReviewFlow, Toaster};
use crate::config::GLOBAL_API_NAME;
use crate::page::refresh_activity;
use crate::services::{focus_scan_input, simulate_scan};
use crate::types::AppResult;

/// Published names, in the order `functions` builds them.
pub const API_FUNCTIONS: [&str; 7] = [
    "showToast",
    "refreshActivityData",
    "formatTimestamp",
    "simulateQRScan",
    "startQRScanner",
    "analyzeCSV",
    "importCSV",
];

#[wasm_bindgen]
extern "C" {
    /// The global `String()` conversion.
    #[wasm_bindgen(js_name = String)]
    fn js_string(value: &JsValue) -> String;
}

/// Build the API object and attach it to `window`.
pub fn publish(toaster: Toaster, flow: Rc<LiveReviewFlow>, config: &PanelConfig) -> AppResult<()> {
    let api = Object::new();
    for (name, function) in API_FUNCTIONS.into_iter().zip(functions(toaster, flow, config)) {
        Reflect::set(&api, &JsValue::from_str(name), &function)?;
    }

    Reflect::set(&gloo_utils::window(), &JsValue::from_str(GLOBAL_API_NAME), &api)?;
    log::info!("window.{} published", GLOBAL_API_NAME);
    Ok(())
}

/// The closures live as long as the page.
fn functions(toaster: Toaster, flow: Rc<LiveReviewFlow>, config: &PanelConfig) -> [JsValue; 7] {
    let indicator_ms = config.refresh_indicator_ms;
    let scan_ms = config.scan_simulation_ms;
    let import_flow = Rc::clone(&flow);

    [
        Closure::<dyn Fn(JsValue, JsValue)>::new(move |message: JsValue, kind: JsValue| {
            let severity = kind.as_string().map(|k| Severity::from_name(&k)).unwrap_or_default();
            toaster.notify(&display_text(&message), severity);
        })
        .into_js_value(),
        Closure::<dyn Fn()>::new(move || refresh_activity(&gloo_utils::document(), indicator_ms))
            .into_js_value(),
        Closure::<dyn Fn(JsValue) -> JsValue>::new(|raw: JsValue| {
            let formatted = match raw.as_string() {
                Some(text) => Some(local_timestamp(&text)),
                None => raw.as_f64().and_then(local_epoch_millis),
            };
            formatted.map(|text| JsValue::from_str(&text)).unwrap_or(raw)
        })
        .into_js_value(),
        Closure::<dyn Fn() -> Promise>::new(move || {
            future_to_promise(async move { Ok(JsValue::from_str(&simulate_scan(scan_ms).await)) })
        })
        .into_js_value(),
        Closure::<dyn Fn()>::new(|| {
            if let Err(err) = focus_scan_input() {
                log::debug!("Scanner input not focused: {}", err);
            }
        })
        .into_js_value(),
        Closure::<dyn Fn()>::new(move || start_review(&flow, Operation::Analyze)).into_js_value(),
        Closure::<dyn Fn()>::new(move || start_review(&import_flow, Operation::Import))
            .into_js_value(),
    ]
}

/// Message text the way a template literal would print `value`.
fn display_text(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.as_f64() {
        Some(number) => number_text(number),
        None => js_string(value),
    }
}

fn number_text(number: f64) -> String {
    if number.is_nan() {
        "NaN".to_string()
    } else if number.is_infinite() {
        (if number > 0.0 { "Infinity" } else { "-Infinity" }).to_string()
    } else if number == 0.0 {
        // covers -0
        "0".to_string()
    } else {
        number.to_string()
    }
}

/// Render in the browser's time zone; anything unparseable comes back as is.
fn local_timestamp(raw: &str) -> String {
    format_timestamp(raw, &chrono::Local).unwrap_or_else(|| raw.to_string())
}

/// Numbers are milliseconds since the epoch, truncated like `new Date(n)`.
fn local_epoch_millis(millis: f64) -> Option<String> {
    if !millis.is_finite() {
        return None;
    }
    format_epoch_millis(millis.trunc() as i64, &chrono::Local)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_timestamp() {
        assert_eq!(local_timestamp("2025-06-01T08:30:00"), "01/06/2025 08:30:00");
    }

    #[test]
    fn test_unparseable_timestamp_is_returned_unchanged() {
        assert_eq!(local_timestamp("last tuesday"), "last tuesday");
        assert_eq!(local_timestamp(""), "");
    }

    #[test]
    fn test_epoch_millis_are_truncated() {
        assert_eq!(
            local_epoch_millis(1_748_766_600_999.9),
            format_epoch_millis(1_748_766_600_999, &chrono::Local)
        );
        assert!(local_epoch_millis(1_748_766_600_000.0).is_some());
        assert!(local_epoch_millis(f64::NAN).is_none());
        assert!(local_epoch_millis(f64::INFINITY).is_none());
    }

    #[test]
    fn test_numbers_print_like_javascript() {
        assert_eq!(number_text(42.0), "42");
        assert_eq!(number_text(-1.5), "-1.5");
        assert_eq!(number_text(-0.0), "0");
        assert_eq!(number_text(f64::NAN), "NaN");
        assert_eq!(number_text(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_template_handlers_are_published() {
        for name in ["showToast", "formatTimestamp", "simulateQRScan", "analyzeCSV", "importCSV"] {
            assert!(API_FUNCTIONS.contains(&name), "{name} missing");
        }
        let mut names = API_FUNCTIONS.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), API_FUNCTIONS.len());
    }
}
