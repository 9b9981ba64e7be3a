//! Link behaviours: confirmation before destructive actions, smooth in-page scrolling.

use secpanel::panel::{prompt_for, scroll_target, ANCHOR_LINKS_SELECTOR, CONFIRMED_LINKS_SELECTOR};
use secpanel::PanelConfig;
use web_sys::{Document, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom::{listen, query_all};
use crate::types::AppResult;

pub fn wire_confirmations(document: &Document, _config: &PanelConfig) -> AppResult<()> {
    for link in query_all(document, CONFIRMED_LINKS_SELECTOR)? {
        let anchor = link.clone();
        listen(&link, "click", move |event: Event| {
            let Some(prompt) = anchor.get_attribute("href").as_deref().and_then(prompt_for) else {
                return;
            };
            let confirmed = gloo_utils::window()
                .confirm_with_message(&prompt)
                .unwrap_or(false);
            if !confirmed {
                event.prevent_default();
            }
        })?;
    }
    Ok(())
}

pub fn wire_smooth_scroll(document: &Document, _config: &PanelConfig) -> AppResult<()> {
    for link in query_all(document, ANCHOR_LINKS_SELECTOR)? {
        let anchor = link.clone();
        let document = document.clone();
        listen(&link, "click", move |event: Event| {
            let href = anchor.get_attribute("href");
            let Some(selector) = href.as_deref().and_then(scroll_target) else {
                return;
            };
            // Fragments that are not valid selectors throw
            let Ok(Some(target)) = document.query_selector(selector) else {
                return;
            };

            event.prevent_default();
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        })?;
    }
    Ok(())
}
