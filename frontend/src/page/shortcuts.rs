use secpanel::panel::{resolve, Shortcut};
use secpanel::PanelConfig;
use web_sys::{Document, KeyboardEvent};

use crate::config::OPEN_MODAL_SELECTOR;
use crate::dom::{listen, log_failure, query_all, query_one};
use crate::services::hide_modal;
use crate::types::AppResult;

/// Alt+A / Alt+D / Alt+R navigation and Escape to close modals.
pub fn wire_shortcuts(document: &Document, _config: &PanelConfig) -> AppResult<()> {
    let page = document.clone();
    listen(document, "keydown", move |event: KeyboardEvent| {
        let Some(shortcut) = resolve(&event.key(), event.alt_key()) else {
            return;
        };
        if shortcut.prevents_default() {
            event.prevent_default();
        }

        match shortcut {
            Shortcut::Navigate { path, .. } => {
                if let Some(selector) = shortcut.required_selector() {
                    if !matches!(query_one(&page, &selector), Ok(Some(_))) {
                        return;
                    }
                }
                log_failure("shortcut navigation", gloo_utils::window().location().set_href(path));
            }
            Shortcut::CloseModals => close_open_modals(&page),
        }
    })
}

fn close_open_modals(document: &Document) {
    let modals = match query_all(document, OPEN_MODAL_SELECTOR) {
        Ok(modals) => modals,
        Err(err) => {
            log::warn!("Open modals not found: {}", err);
            return;
        }
    };
    for modal in &modals {
        if let Err(err) = hide_modal(modal) {
            log::debug!("Modal left open: {}", err);
        }
    }
}
