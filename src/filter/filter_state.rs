use std::time::Instant;

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::suggest::Debouncer;

/// The filter form's payload, handed to the page on submit
///
/// Values are the raw field text; validating them is the receiving form's
/// concern, not this widget's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    pub min_price: String,
    pub max_price: String,
}

/// State of the price-range auto-submit behavior
pub struct FilterState {
    pub min_input: TextArea<'static>,
    pub max_input: TextArea<'static>,
    /// One timer for the pair: edits on either field reschedule it
    debouncer: Debouncer,
}

fn price_field(title: &str) -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {title} "))
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text("0");
    textarea
}

impl FilterState {
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            min_input: price_field("Min price"),
            max_input: price_field("Max price"),
            debouncer: Debouncer::new(debounce_ms),
        }
    }

    pub fn min_price(&self) -> &str {
        self.min_input.lines()[0].as_ref()
    }

    pub fn max_price(&self) -> &str {
        self.max_input.lines()[0].as_ref()
    }

    pub fn submit_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// A field's content changed; (re)start the submit countdown
    pub fn on_change(&mut self, now: Instant) {
        self.debouncer.schedule(now);
    }

    /// Produce the submission once the countdown has elapsed
    pub fn on_tick(&mut self, now: Instant) -> Option<FormSubmission> {
        if !self.debouncer.fire_if_due(now) {
            return None;
        }

        Some(FormSubmission {
            min_price: self.min_price().to_string(),
            max_price: self.max_price().to_string(),
        })
    }
}

#[cfg(test)]
#[path = "filter_state_tests.rs"]
mod filter_state_tests;
