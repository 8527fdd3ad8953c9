//! Suggestion panel state machine
//!
//! Visibility is an explicit two-state machine rather than a side effect of
//! rendering, so the widget is fully testable without a terminal. Hiding
//! keeps the rendered rows: a later focus event re-shows them, which is why
//! `show` only checks for the presence of rows, not for a fresh query.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::Instant;

use crate::layout::Region;

use super::debouncer::Debouncer;
use super::types::Suggestion;
use super::worker::{FetchRequest, FetchResponse};

/// Queries shorter than this never hit the endpoint
pub const MIN_QUERY_LEN: usize = 2;

/// Whether the dropdown is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// State of the search-suggestion widget
pub struct SuggestState {
    visibility: Visibility,
    rows: Vec<Suggestion>,
    selected: Option<usize>,
    debouncer: Debouncer,
    /// Query captured when the debounce was scheduled; the fetch that fires
    /// uses exactly this text
    pending_query: Option<String>,
    /// Increments per dispatched fetch; responses for older ids are stale
    request_id: u64,
    request_tx: Option<Sender<FetchRequest>>,
    response_rx: Option<Receiver<FetchResponse>>,
}

impl SuggestState {
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            visibility: Visibility::Hidden,
            rows: Vec::new(),
            selected: None,
            debouncer: Debouncer::new(debounce_ms),
            pending_query: None,
            request_id: 0,
            request_tx: None,
            response_rx: None,
        }
    }

    /// Attach the worker channels
    pub fn connect(&mut self, request_tx: Sender<FetchRequest>, response_rx: Receiver<FetchResponse>) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    pub fn rows(&self) -> &[Suggestion] {
        &self.rows
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn fetch_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// React to edited input text
    ///
    /// Short queries cancel any pending fetch and hide immediately; anything
    /// else (re)schedules the fetch, so within a burst of keystrokes only
    /// the last one's query goes out.
    pub fn on_input(&mut self, text: &str, now: Instant) {
        let query = text.trim();

        if query.chars().count() < MIN_QUERY_LEN {
            self.debouncer.cancel();
            self.pending_query = None;
            self.hide();
            return;
        }

        self.pending_query = Some(query.to_string());
        self.debouncer.schedule(now);
    }

    /// Advance the timer and drain worker responses
    pub fn on_tick(&mut self, now: Instant) {
        if self.debouncer.fire_if_due(now)
            && let Some(query) = self.pending_query.take()
        {
            self.dispatch_fetch(query);
        }

        self.drain_responses();
    }

    fn dispatch_fetch(&mut self, query: String) {
        let Some(tx) = &self.request_tx else {
            return;
        };

        self.request_id = self.request_id.wrapping_add(1);
        let request = FetchRequest {
            query,
            request_id: self.request_id,
        };

        if tx.send(request).is_err() {
            log::debug!("suggestion worker is gone, dropping fetch");
        }
    }

    fn drain_responses(&mut self) {
        loop {
            let response = match &self.response_rx {
                Some(rx) => match rx.try_recv() {
                    Ok(response) => response,
                    Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return,
                },
                None => return,
            };

            match response {
                FetchResponse::Loaded {
                    request_id,
                    suggestions,
                } if request_id == self.request_id => {
                    self.display(suggestions);
                }
                FetchResponse::Loaded { request_id, .. } => {
                    log::debug!("dropping stale suggestion response {}", request_id);
                }
                // Failure was logged by the worker; the panel keeps its state
                FetchResponse::Failed { .. } => {}
            }
        }
    }

    /// Replace the rows with a fresh result list
    ///
    /// An empty list hides the panel; a non-empty one shows it.
    pub fn display(&mut self, suggestions: Vec<Suggestion>) {
        if suggestions.is_empty() {
            self.hide();
            return;
        }

        self.rows = suggestions;
        self.selected = None;
        self.visibility = Visibility::Visible;
    }

    /// Show the panel if it has rows to show
    ///
    /// A zero-row panel stays hidden even when asked directly, e.g. from a
    /// focus event before any query ran.
    pub fn show(&mut self) {
        if !self.rows.is_empty() {
            self.visibility = Visibility::Visible;
        }
    }

    /// Hide unconditionally (the no-originating-event path)
    pub fn hide(&mut self) {
        self.visibility = Visibility::Hidden;
        self.selected = None;
    }

    /// Hide in response to a click, unless it landed on the panel itself or
    /// on the search input
    ///
    /// The exemption is what lets a click on a suggestion row activate it
    /// before document-level dismissal would close the panel.
    pub fn dismiss(&mut self, target: Option<Region>) {
        if matches!(
            target,
            Some(Region::SuggestionsPanel) | Some(Region::SearchInput)
        ) {
            return;
        }
        self.hide();
    }

    /// Move the selection down, wrapping past the end
    pub fn select_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < self.rows.len() => i + 1,
            Some(_) => 0,
            None => 0,
        });
    }

    /// Move the selection up, wrapping past the start
    pub fn select_prev(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => self.rows.len() - 1,
            Some(i) => i - 1,
        });
    }

    /// Follow a suggestion row, hiding the panel
    ///
    /// Returns the followed suggestion so the caller can record the
    /// navigation.
    pub fn activate(&mut self, index: usize) -> Option<Suggestion> {
        let suggestion = self.rows.get(index).cloned()?;
        self.hide();
        Some(suggestion)
    }

    /// Follow the keyboard-selected row, if any
    pub fn activate_selected(&mut self) -> Option<Suggestion> {
        let index = self.selected?;
        self.activate(index)
    }
}

#[cfg(test)]
#[path = "suggest_state_tests.rs"]
mod suggest_state_tests;
