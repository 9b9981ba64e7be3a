//! Flash alerts close themselves unless marked `.alert-permanent`.

use gloo_timers::callback::Timeout;
use secpanel::PanelConfig;
use web_sys::Document;

use crate::config::DISMISSIBLE_ALERT_SELECTOR;
use crate::dom::query_all;
use crate::services::close_alert;
use crate::types::AppResult;

pub fn schedule_alert_dismissal(document: &Document, config: &PanelConfig) -> AppResult<()> {
    let alerts = query_all(document, DISMISSIBLE_ALERT_SELECTOR)?;
    if alerts.is_empty() {
        return Ok(());
    }

    Timeout::new(config.alert_timeout_ms, move || {
        for alert in &alerts {
            if let Err(err) = close_alert(alert) {
                log::debug!("Alert left open: {}", err);
            }
        }
    })
    .forget();
    Ok(())
}
