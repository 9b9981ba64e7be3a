//! Analyze → review → import driver.
//!
//! [`ReviewFlow`] owns the [`ReviewSession`] and talks to four collaborators:
//! the transport, the file picker, the notifier and the view. The session
//! is borrowed only between suspension points, so a click arriving while a
//! request is pending sees a consistent state (and is refused as busy).

use std::cell::{Ref, RefCell};
use std::time::Duration;

use crate::error::{ReviewError, ReviewResult, TransportResult};
use crate::models::{parse_reply, AnalysisResult, ImportReceipt, ServerReply};
use crate::notify::{Notifier, Severity};

use super::session::{ReviewSession, ReviewState};
use super::view::{AnalysisView, ImportAction};

// =============================================================================
// Collaborators
// =============================================================================

/// Server endpoint targeted by a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Analyze,
    Import,
}

/// Sends the selected file to an endpoint and returns the raw body.
///
/// The HTTP status is not interpreted; the JSON body decides.
#[allow(async_fn_in_trait)]
pub trait ReviewTransport {
    type Upload;

    async fn submit(&self, endpoint: Endpoint, upload: &Self::Upload) -> TransportResult<String>;
}

/// Gives access to the currently selected file, if any.
pub trait FilePicker {
    type Upload;

    fn selected(&self) -> Option<Self::Upload>;
}

/// Receives rendering instructions.
pub trait ReviewView {
    /// `None` hides the analytics panel.
    fn show_analysis(&self, analysis: Option<AnalysisView>);

    fn set_import_action(&self, action: ImportAction);

    /// `true` while an analysis request is pending.
    fn set_analyzing(&self, analyzing: bool);

    /// Close the dialog hosting the review.
    fn close_dialog(&self);

    /// Reload the page once `delay` has elapsed.
    fn schedule_reload(&self, delay: Duration);
}

// =============================================================================
// Messages
// =============================================================================

/// Which user action failed, for message selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Analyze,
    Import,
}

impl Operation {
    /// Shown when the server rejects without a message.
    pub fn rejected_fallback(&self) -> &'static str {
        match self {
            Operation::Analyze => "Error analyzing CSV",
            Operation::Import => "Import failed",
        }
    }

    /// Shown on network or decoding failures.
    pub fn transport_message(&self) -> &'static str {
        match self {
            Operation::Analyze => "Error analyzing CSV file",
            Operation::Import => "Error importing CSV file",
        }
    }
}

pub const NO_FILE_MESSAGE: &str = "Please select a CSV file first";
pub const NOT_ANALYZED_MESSAGE: &str = "Please analyze the CSV first";

// =============================================================================
// Flow
// =============================================================================

pub struct ReviewFlow<T, P, N, V> {
    transport: T,
    picker: P,
    notifier: N,
    view: V,
    reload_delay: Duration,
    session: RefCell<ReviewSession>,
}

impl<T, P, N, V> ReviewFlow<T, P, N, V>
where
    T: ReviewTransport,
    P: FilePicker<Upload = T::Upload>,
    N: Notifier,
    V: ReviewView,
{
    pub fn new(transport: T, picker: P, notifier: N, view: V, reload_delay: Duration) -> Self {
        Self {
            transport,
            picker,
            notifier,
            view,
            reload_delay,
            session: RefCell::new(ReviewSession::new()),
        }
    }

    pub fn state(&self) -> ReviewState {
        self.session.borrow().state()
    }

    /// The stored analysis. Do not hold the guard across an `.await`.
    pub fn analysis(&self) -> Ref<'_, ReviewSession> {
        self.session.borrow()
    }

    /// Dry-run the selected file and render the server's analysis.
    pub async fn analyze(&self) -> ReviewResult<()> {
        let outcome = self.run_analysis().await;
        if let Err(err) = &outcome {
            self.report(Operation::Analyze, err);
        }
        outcome
    }

    /// Import the selected file after a successful analysis.
    pub async fn import(&self) -> ReviewResult<()> {
        let outcome = self.run_import().await;
        if let Err(err) = &outcome {
            self.report(Operation::Import, err);
        }
        outcome
    }

    /// Forget the current analysis because another file was selected.
    pub fn reset(&self) {
        if self.session.borrow_mut().reset() {
            self.view.show_analysis(None);
            self.view.set_import_action(ImportAction::Hidden);
            self.view.set_analyzing(false);
        }
    }

    async fn run_analysis(&self) -> ReviewResult<()> {
        let upload = self.picker.selected().ok_or(ReviewError::NoFileSelected)?;
        let ticket = self.session.borrow_mut().begin_analysis()?;

        self.view.show_analysis(None);
        self.view.set_import_action(ImportAction::Hidden);
        self.view.set_analyzing(true);

        log::info!("Analyzing CSV file");
        let reply = self.exchange::<AnalysisResult>(Endpoint::Analyze, &upload).await;

        let mut session = self.session.borrow_mut();
        let outcome = match reply {
            Ok(ServerReply::Accepted(result)) => {
                session.complete_analysis(ticket, result).map(|stored| {
                    Ok((AnalysisView::from_result(stored), ImportAction::for_result(stored)))
                })
            }
            Ok(ServerReply::Rejected(message)) => session
                .fail_analysis(ticket)
                .then(|| Err(ReviewError::ServerRejected(message))),
            Err(err) => session.fail_analysis(ticket).then(|| Err(err.into())),
        };
        drop(session);

        // A reset or a newer analysis already owns the panel
        let Some(outcome) = outcome else {
            log::debug!("Ignoring the outcome of an outdated analysis");
            return Ok(());
        };
        self.view.set_analyzing(false);
        let (view, action) = outcome?;

        log::info!(
            "Analysis: {} total, {} new, {} duplicate, {} error",
            view.summary.total,
            view.summary.new,
            view.summary.duplicate,
            view.summary.error
        );
        self.view.show_analysis(Some(view));
        self.view.set_import_action(action);
        Ok(())
    }

    async fn run_import(&self) -> ReviewResult<()> {
        {
            let session = self.session.borrow();
            if session.state().is_locked() {
                return Err(ReviewError::Busy);
            }
            if session.result().is_none() {
                return Err(ReviewError::NotAnalyzed);
            }
        }
        let upload = self.picker.selected().ok_or(ReviewError::NoFileSelected)?;
        let count = self.session.borrow_mut().begin_import()?;

        self.view.set_import_action(ImportAction::Busy { count });

        log::info!("Importing CSV file ({count} new records expected)");
        let reply = self.exchange::<ImportReceipt>(Endpoint::Import, &upload).await;

        match reply {
            Ok(ServerReply::Accepted(receipt)) => {
                self.session.borrow_mut().complete_import();
                log::info!("Imported {} records", receipt.imported_count);
                self.notifier.notify(
                    &format!("Successfully imported {} records", receipt.imported_count),
                    Severity::Success,
                );
                self.view.close_dialog();
                self.view.schedule_reload(self.reload_delay);
                Ok(())
            }
            Ok(ServerReply::Rejected(message)) => {
                self.restore_import_action();
                Err(ReviewError::ServerRejected(message))
            }
            Err(err) => {
                self.restore_import_action();
                Err(err.into())
            }
        }
    }

    async fn exchange<R>(&self, endpoint: Endpoint, upload: &T::Upload) -> TransportResult<ServerReply<R>>
    where
        R: serde::de::DeserializeOwned,
    {
        let operation = match endpoint {
            Endpoint::Analyze => Operation::Analyze,
            Endpoint::Import => Operation::Import,
        };
        let body = self.transport.submit(endpoint, upload).await?;
        parse_reply(&body, operation.rejected_fallback())
    }

    fn restore_import_action(&self) {
        let count = self.session.borrow_mut().fail_import();
        self.view.set_import_action(ImportAction::Ready { count });
    }

    fn report(&self, operation: Operation, err: &ReviewError) {
        match err {
            ReviewError::NoFileSelected => self.notifier.notify(NO_FILE_MESSAGE, Severity::Error),
            ReviewError::NotAnalyzed => self.notifier.notify(NOT_ANALYZED_MESSAGE, Severity::Error),
            ReviewError::ServerRejected(message) => {
                log::warn!("{operation:?} rejected by server: {message}");
                self.notifier.notify(message, Severity::Error);
            }
            ReviewError::TransportFailure(cause) => {
                log::error!("{operation:?} failed: {cause}");
                self.notifier
                    .notify(operation.transport_message(), Severity::Error);
            }
            ReviewError::Busy => log::debug!("{operation:?} ignored: another operation is in progress"),
        }
    }
}
