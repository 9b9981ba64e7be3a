//! Periodic activity feed refresh on admin pages.

use gloo_timers::callback::{Interval, Timeout};
use secpanel::panel::{is_dashboard, should_refresh, ACTIVITY_LIST_SELECTOR, REFRESH_INDICATOR_HTML};
use secpanel::PanelConfig;
use web_sys::Document;

use crate::dom::query_one;
use crate::types::AppResult;

pub fn wire_activity_refresh(document: &Document, config: &PanelConfig) -> AppResult<()> {
    let path = gloo_utils::window().location().pathname()?;
    if !is_dashboard(&path) {
        return Ok(());
    }

    let document = document.clone();
    let indicator_ms = config.refresh_indicator_ms;
    Interval::new(config.refresh_interval_ms, move || {
        if should_refresh(document.hidden()) {
            refresh_activity(&document, indicator_ms);
        }
    })
    .forget();

    log::info!("Activity refresh every {} ms", config.refresh_interval_ms);
    Ok(())
}

/// Show the refresh indicator in the activity feed, then restore the feed.
pub fn refresh_activity(document: &Document, indicator_ms: u32) {
    let Ok(Some(list)) = query_one(document, ACTIVITY_LIST_SELECTOR) else {
        return;
    };

    let content = list.inner_html();
    list.set_inner_html(REFRESH_INDICATOR_HTML);
    Timeout::new(indicator_ms, move || list.set_inner_html(&content)).forget();
}
