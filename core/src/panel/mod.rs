//! DOM-independent rules behind the page enhancements.
//!
//! The frontend owns the listeners; these functions decide what a click,
//! key press or timer tick should do.

pub mod anchor;
pub mod confirm;
pub mod refresh;
pub mod scan;
pub mod shortcuts;
pub mod timestamp;

pub use anchor::{scroll_target, ANCHOR_LINKS_SELECTOR};
pub use confirm::{prompt_for, CONFIRMED_LINKS_SELECTOR};
pub use refresh::{is_dashboard, should_refresh, ACTIVITY_LIST_SELECTOR, REFRESH_INDICATOR_HTML};
pub use scan::{is_scan_terminator, normalize_code, DEMO_CODES, SCAN_INPUT_SELECTOR};
pub use shortcuts::{resolve, Shortcut};
pub use timestamp::{format_epoch_millis, format_timestamp};
