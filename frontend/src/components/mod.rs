//! UI Components for the security panel.
//!
//! # Feature Components
//! - [`ToastHost`] - Notification stack fed by [`Toaster`]
//! - [`CsvReviewPanel`] - CSV analyze/review/import inside the upload dialog
//! - [`AnalyticsPanel`] - Summary, preview table and error guidance
//! - [`bind_upload_dialog`] - Same results in the server-rendered dialog

mod analytics;
mod dialog;
mod review;
mod toast;

pub use analytics::*;
pub use dialog::*;
pub use review::*;
pub use toast::*;
