//! Browser-facing services.
//!
//! # Services
//!
//! - [`upload`] - HTTP transport for the analyze/import endpoints
//! - [`widgets`] - Bootstrap Tooltip, Modal and Alert bindings
//! - [`scanner`] - QR-code focus and scan simulation
//!
//! # JavaScript Bindings
//!
//! [`widgets`] binds to the global `bootstrap` object loaded by the page.

pub mod scanner;
pub mod upload;
pub mod widgets;

pub use scanner::*;
pub use upload::*;
pub use widgets::*;
