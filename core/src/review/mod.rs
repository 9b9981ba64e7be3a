//! CSV upload review: analyze, inspect, then import.
//!
//! - [`session`] - synchronous state machine owning the stored analysis
//! - [`flow`] - async driver and its collaborator traits
//! - [`view`] - view models for the analytics panel and import button

pub mod flow;
pub mod session;
pub mod view;

pub use flow::{
    Endpoint, FilePicker, Operation, ReviewFlow, ReviewTransport, ReviewView,
    NOT_ANALYZED_MESSAGE, NO_FILE_MESSAGE,
};
pub use session::{AnalysisTicket, ReviewSession, ReviewState};
pub use view::{
    AccessStatus, AnalysisView, Badge, ErrorPanel, FieldNote, FormatGuide, ImportAction,
    ImportClass, PreviewRow, Summary, Tone, OPTIONAL_FIELDS_SHOWN,
};
