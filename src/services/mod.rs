//! Services module - Pure text logic behind the two tool pages.
//!
//! The services are **framework-agnostic** and have no dependencies on the UI layer, making
//! them testable and reusable from any front end.
//!
//! # Components
//!
//! - [`join`]: splits raw text on line boundaries, drops blank lines and joins the rest
//!   with `"; "`.
//! - [`pattern`]: builds the masked pattern of a batch of equal-length strings (common
//!   prefix kept, diverging tail replaced by `X`).
//! - [`requests`]: what the GUI calls on a button press. Normalises text area input,
//!   performs the "at least one string" and "same length" checks, and renders outcomes
//!   into result labels.
//!
//! Every function here is synchronous and side-effect free apart from tracing events.
//!
//! # Usage Example
//!
//! ```
//! use text_utils::services::{handle_pattern_request, join_lines};
//!
//! assert_eq!(join_lines("a\n\nb"), "a; b");
//! assert_eq!(handle_pattern_request("abc\nabd").label(), "abX");
//! assert_eq!(
//!     handle_pattern_request("abc\nab").label(),
//!     "All strings must share the same length."
//! );
//! ```

pub mod join;
pub mod pattern;
pub mod requests;

pub use join::{SEPARATOR, join_lines, non_blank_lines, split_lines};
pub use pattern::{PLACEHOLDER, PatternError, common_prefix, masked_pattern};
pub use requests::{PatternOutcome, handle_join_request, handle_pattern_request, pattern_candidates};
