//! Toast notifications.
//!
//! [`Toaster`] is the page-wide [`Notifier`]: the review flow, the global
//! `showToast` function and anything else push into the same stack, which
//! [`ToastHost`] renders in the top-right corner.

use gloo_timers::callback::Timeout;
use leptos::*;
use secpanel::{Notifier, Severity};

use crate::types::Toast;

/// Handle on the toast stack. Cheap to copy into closures.
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    timeout_ms: u32,
}

impl Toaster {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(0),
            timeout_ms,
        }
    }

    /// Toasts currently on screen, oldest first.
    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    /// Show `message` and schedule its removal.
    pub fn push(&self, message: &str, severity: Severity) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                message: message.to_string(),
                severity,
            })
        });

        let toaster = *self;
        Timeout::new(self.timeout_ms, move || toaster.dismiss(id)).forget();
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    }
}

impl Notifier for Toaster {
    fn notify(&self, message: &str, severity: Severity) {
        log::debug!("toast ({:?}): {}", severity, message);
        self.push(message, severity);
    }
}

/// Fixed container for the toast stack.
#[component]
pub fn ToastHost(toaster: Toaster) -> impl IntoView {
    view! {
        <div class="toast-container position-fixed top-0 end-0 p-3">
            <For
                each=move || toaster.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class="toast show" role="alert" aria-live="assertive" aria-atomic="true">
                            <div class="toast-header">
                                <i class=toast.severity.icon_class()></i>
                                <strong class="me-auto">"System"</strong>
                                <button
                                    type="button"
                                    class="btn-close"
                                    aria-label="Close"
                                    on:click=move |_| toaster.dismiss(id)
                                ></button>
                            </div>
                            <div class="toast-body">{toast.message}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
