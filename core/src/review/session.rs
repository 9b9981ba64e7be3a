//! Synchronous review state machine.
//!
//! ```text
//!   Idle ──analyze──▶ Analyzing ──ok──▶ Analyzed ──import──▶ Importing ──ok──▶ Imported
//!    ▲                    │                ▲                     │
//!    └──────failure───────┘                └───────failure───────┘
//! ```
//!
//! The session owns the single stored [`AnalysisResult`]. It performs no
//! I/O: [`super::ReviewFlow`] calls `begin_*` before a request and the
//! matching `complete_*`/`fail_*` after it.

use crate::error::{ReviewError, ReviewResult};
use crate::models::AnalysisResult;

/// Where the review of the selected file stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewState {
    #[default]
    Idle,
    Analyzing,
    Analyzed,
    Importing,
    Imported,
}

impl ReviewState {
    /// A request is running or the session is finished.
    pub fn is_locked(&self) -> bool {
        matches!(
            self,
            ReviewState::Analyzing | ReviewState::Importing | ReviewState::Imported
        )
    }
}

/// Identifies the analysis request a completion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisTicket(u64);

/// Review state for one file selection.
#[derive(Debug, Default)]
pub struct ReviewSession {
    state: ReviewState,
    result: Option<AnalysisResult>,
    generation: u64,
}

impl ReviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ReviewState {
        self.state
    }

    /// The stored analysis, if the last one succeeded.
    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn begin_analysis(&mut self) -> ReviewResult<AnalysisTicket> {
        if self.state.is_locked() {
            return Err(ReviewError::Busy);
        }
        self.state = ReviewState::Analyzing;
        self.generation += 1;
        Ok(AnalysisTicket(self.generation))
    }

    /// Store a successful analysis, replacing any previous one.
    ///
    /// Returns `None` when the ticket is stale (the file changed meanwhile).
    pub fn complete_analysis(
        &mut self,
        ticket: AnalysisTicket,
        result: AnalysisResult,
    ) -> Option<&AnalysisResult> {
        if !self.owns(ticket) {
            log::debug!("Dropping stale analysis result");
            return None;
        }
        self.state = ReviewState::Analyzed;
        self.result = Some(result);
        self.result.as_ref()
    }

    /// Back to `Idle`; the previous analysis no longer matches what is shown.
    ///
    /// Returns `false` when the ticket is stale.
    pub fn fail_analysis(&mut self, ticket: AnalysisTicket) -> bool {
        if !self.owns(ticket) {
            return false;
        }
        self.state = ReviewState::Idle;
        self.result = None;
        true
    }

    /// Enter `Importing`. Returns the new-record count for the button label.
    pub fn begin_import(&mut self) -> ReviewResult<usize> {
        if self.state.is_locked() {
            return Err(ReviewError::Busy);
        }
        let count = self
            .result
            .as_ref()
            .map(|result| result.new_records)
            .ok_or(ReviewError::NotAnalyzed)?;
        self.state = ReviewState::Importing;
        Ok(count)
    }

    /// Terminal: the analysis is consumed.
    pub fn complete_import(&mut self) {
        self.state = ReviewState::Imported;
        self.result = None;
    }

    /// Back to `Analyzed`. Returns the new-record count to restore the label.
    pub fn fail_import(&mut self) -> usize {
        self.state = ReviewState::Analyzed;
        self.result
            .as_ref()
            .map(|result| result.new_records)
            .unwrap_or_default()
    }

    /// Start over for a newly selected file.
    ///
    /// Ignored while an import runs or after it completed. An analysis in
    /// flight is invalidated. Returns whether the session was reset.
    pub fn reset(&mut self) -> bool {
        if matches!(self.state, ReviewState::Importing | ReviewState::Imported) {
            return false;
        }
        self.generation += 1;
        self.state = ReviewState::Idle;
        self.result = None;
        true
    }

    fn owns(&self, ticket: AnalysisTicket) -> bool {
        ticket.0 == self.generation && self.state == ReviewState::Analyzing
    }
}
