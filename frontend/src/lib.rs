//! Security Panel - Frontend Rust/Leptos Application
//!
//! A WebAssembly layer over the server-rendered admin pages of the access
//! control service. It enhances existing markup and mounts two Leptos
//! components around one CSV review flow.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  start: panic hook, console logger, embedded config          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  page::wire_page (existing markup)                           │
//! │  ├── Bootstrap tooltips, modals, alert auto-dismiss          │
//! │  ├── badge code inputs, confirmations, form validation       │
//! │  └── smooth scroll, keyboard shortcuts, activity refresh     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  App (Leptos)                                                │
//! │  ├── ToastHost (body)                                        │
//! │  ├── CsvReviewPanel (portal into #csvReviewMount), or        │
//! │  └── bind_upload_dialog (template's #csvAnalytics)           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  window.SecurityApp (inline template handlers)               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Embedded configuration, DOM ids and selectors
//! - [`types`] - Common types (Toast, AppError)
//! - [`components`] - UI components (toasts, CSV review, analytics)
//! - [`services`] - HTTP transport, Bootstrap bindings, scanner helpers
//! - [`page`] - Listeners and timers on server-rendered markup
//! - [`api`] - Functions published on `window.SecurityApp`

use std::rc::Rc;

use leptos::*;
use secpanel::PanelConfig;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod api;
pub mod components;
pub mod config;
pub mod dom;
pub mod page;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{AppError, AppResult, Toast};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point, runs when the module is instantiated.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Security panel starting");

    let config = load_config().unwrap_or_else(|err| {
        log::warn!("{}, falling back to defaults", err);
        PanelConfig::default()
    });

    mount_to_body(move || view! { <App config=config/> });
}

#[component]
pub fn App(config: PanelConfig) -> impl IntoView {
    let toaster = Toaster::new(config.toast_timeout_ms);
    let panel = PanelView::new();
    let flow = create_review_flow(&config, toaster, panel);

    page::wire_page(&config);

    if let Err(err) = api::publish(toaster, Rc::clone(&flow), &config) {
        log::error!("window.{} not published: {}", GLOBAL_API_NAME, err);
    }

    // A placeholder gets the full panel; otherwise the template's dialog is driven
    let review_mount = gloo_utils::document().get_element_by_id(REVIEW_MOUNT_ID);
    if review_mount.is_none() {
        if let Err(err) = bind_upload_dialog(&flow, panel) {
            log::error!("Upload dialog not bound: {}", err);
        }
    }

    view! {
        <ToastHost toaster=toaster/>
        {review_mount.map(|mount| view! {
            <Portal mount=mount>
                <CsvReviewPanel flow=Rc::clone(&flow) panel=panel/>
            </Portal>
        })}
    }
}
