//! Price-range filter with auto-submit
//!
//! Watches the min/max price fields and resubmits the filter form after a
//! pause in edits. One shared timer covers both fields, so a burst of edits
//! across the pair produces a single submission.

pub mod filter_render;
mod filter_state;

pub use filter_state::{FilterState, FormSubmission};
