use std::time::Instant;

use crate::config::Config;
use crate::filter::{FilterState, FormSubmission};
use crate::layout::LayoutRegions;
use crate::notification::NotificationState;
use crate::suggest::{SuggestState, Suggestion};

use super::input_state::InputState;

/// Which component has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    SearchInput,
    PriceMin,
    PriceMax,
}

/// Application state
pub struct App {
    pub input: InputState,
    pub suggest: SuggestState,
    pub filter: FilterState,
    /// Disabled filter pane: not rendered, not focusable, never submits
    pub filter_enabled: bool,
    pub focus: Focus,
    pub layout: LayoutRegions,
    pub notification: NotificationState,
    /// What the surrounding page would have received: followed suggestion
    /// links and submitted filter forms, newest last
    pub activity: Vec<String>,
    pub should_quit: bool,
}

impl App {
    /// Create a new App instance from configuration
    pub fn new(config: &Config) -> Self {
        Self {
            input: InputState::new(),
            suggest: SuggestState::new(config.timing.suggest_debounce_ms),
            filter: FilterState::new(config.timing.filter_debounce_ms),
            filter_enabled: config.filter.enabled,
            focus: Focus::SearchInput, // Start with the search input focused
            layout: LayoutRegions::default(),
            notification: NotificationState::new(),
            activity: Vec::new(),
            should_quit: false,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Move focus to a component
    ///
    /// Gaining focus on the search input re-shows previously rendered
    /// suggestions, the focus-event behavior of the widget.
    pub fn set_focus(&mut self, focus: Focus) {
        let gained_search = focus == Focus::SearchInput && self.focus != Focus::SearchInput;
        self.focus = focus;
        if gained_search {
            self.suggest.show();
        }
    }

    /// Cycle focus through the visible components
    pub fn cycle_focus(&mut self, forward: bool) {
        let next = if self.filter_enabled {
            match (self.focus, forward) {
                (Focus::SearchInput, true) => Focus::PriceMin,
                (Focus::PriceMin, true) => Focus::PriceMax,
                (Focus::PriceMax, true) => Focus::SearchInput,
                (Focus::SearchInput, false) => Focus::PriceMax,
                (Focus::PriceMin, false) => Focus::SearchInput,
                (Focus::PriceMax, false) => Focus::PriceMin,
            }
        } else {
            Focus::SearchInput
        };
        self.set_focus(next);
    }

    /// Record a followed suggestion link
    pub fn follow(&mut self, suggestion: &Suggestion, now: Instant) {
        log::debug!("following suggestion {}", suggestion.url);
        self.activity.push(format!("open {}", suggestion.url));
        self.notification.show(format!("Opening {}", suggestion.url), now);
    }

    /// Record a submitted filter form
    pub fn submit_filter(&mut self, submission: FormSubmission, now: Instant) {
        log::info!(
            "filter form submitted: min_price={:?} max_price={:?}",
            submission.min_price,
            submission.max_price
        );
        self.activity.push(format!(
            "filter min_price={} max_price={}",
            submission.min_price, submission.max_price
        ));
        self.notification.show("Filters applied", now);
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
