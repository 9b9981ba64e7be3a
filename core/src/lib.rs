//! # Secpanel - client logic for the security access control admin panel
//!
//! Everything here is plain Rust so it can be tested natively. The
//! `secpanel-frontend` crate binds it to the browser.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  CSV file   │────▶│   Analyze   │────▶│   Review    │────▶│   Import    │
//! │  (picker)   │     │  (server)   │     │ (view model)│     │  (server)   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use secpanel::{PanelConfig, ReviewFlow};
//!
//! let config = PanelConfig::default();
//! let flow = ReviewFlow::new(transport, picker, notifier, view, config.reload_delay());
//! flow.analyze().await;
//! flow.import().await;
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types for transport, review and config
//! - [`config`] - Panel configuration and defaults
//! - [`models`] - Server payloads (analysis, preview records, receipts)
//! - [`notify`] - Toast severities and the notifier seam
//! - [`review`] - Analyze/review/import state machine and view models
//! - [`panel`] - Rules for confirmations, shortcuts, scans, refresh and timestamps

// Core modules
pub mod config;
pub mod error;
pub mod models;

// Notifications
pub mod notify;

// CSV review
pub mod review;

// Page rules
pub mod panel;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ConfigError, ConfigResult, ReviewError, ReviewResult, TransportError, TransportResult,
};

// =============================================================================
// Re-exports - Configuration
// =============================================================================

pub use config::{PanelConfig, DEFAULT_ANALYZE_URL, DEFAULT_IMPORT_URL, DEFAULT_UPLOAD_FIELD};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    parse_reply, AnalysisResult, FieldExplanation, ImportReceipt, PreviewRecord, ServerReply,
    ValidationSummary,
};

// =============================================================================
// Re-exports - Review
// =============================================================================

pub use notify::{Notifier, Severity};
pub use review::{
    AnalysisView, Endpoint, FilePicker, ImportAction, ReviewFlow, ReviewState, ReviewTransport,
    ReviewView,
};
