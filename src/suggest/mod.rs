//! Search suggestion widget
//!
//! Turns keystrokes into debounced requests against the storefront's
//! suggestion endpoint and manages the dropdown's visibility. Fetches run on
//! a background worker thread; failures are logged and absorbed, so the only
//! visible effect of a broken endpoint is that no suggestions appear.

mod client;
mod debouncer;
pub mod suggest_render;
mod suggest_state;
mod types;
mod worker;

pub use client::{SuggestClient, SuggestError};
pub use debouncer::Debouncer;
pub use suggest_state::{MIN_QUERY_LEN, SuggestState, Visibility};
pub use types::{Suggestion, SuggestionKind, SuggestionsPayload};
pub use worker::{FetchRequest, FetchResponse, spawn_worker};
