//! soko - interactive storefront search for the terminal
//!
//! A search bar with a debounced live-suggestion dropdown backed by a remote
//! endpoint, plus a price-range filter that resubmits after a pause in edits.
//! The binary in `main.rs` wires these modules to a real terminal; everything
//! here is testable without one.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod layout;
pub mod notification;
pub mod suggest;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;
