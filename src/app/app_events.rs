use std::io;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

use super::app_state::{App, Focus};
use super::mouse_click;

impl App {
    /// Wait briefly for input and dispatch whatever arrives
    pub fn handle_events(&mut self, timeout: Duration) -> io::Result<()> {
        if !event::poll(timeout)? {
            return Ok(());
        }

        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event, Instant::now());
            }
            Event::Mouse(mouse_event)
                if mouse_event.kind == MouseEventKind::Down(MouseButton::Left) =>
            {
                // The document-level click: dismissal plus region routing
                mouse_click::handle_click(
                    self,
                    mouse_event.column,
                    mouse_event.row,
                    Instant::now(),
                );
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        // Try global keys first
        if self.handle_global_keys(key) {
            return;
        }

        // Not a global key, delegate to the focused component
        match self.focus {
            Focus::SearchInput => self.handle_search_key(key, now),
            Focus::PriceMin | Focus::PriceMax => self.handle_price_key(key, now),
        }
    }

    /// Handle keys that work regardless of focus
    /// Returns true if the key was handled
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                true
            }
            KeyCode::Tab => {
                self.cycle_focus(true);
                true
            }
            KeyCode::BackTab => {
                self.cycle_focus(false);
                true
            }
            _ => false,
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent, now: Instant) {
        // Panel navigation takes priority while suggestions are shown
        if self.suggest.is_visible() {
            match key.code {
                KeyCode::Down => {
                    self.suggest.select_next();
                    return;
                }
                KeyCode::Up => {
                    self.suggest.select_prev();
                    return;
                }
                KeyCode::Enter => {
                    if let Some(suggestion) = self.suggest.activate_selected() {
                        self.follow(&suggestion, now);
                    }
                    return;
                }
                KeyCode::Esc => {
                    self.suggest.hide();
                    return;
                }
                _ => {}
            }
        }

        // Keep the field single-line
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            return;
        }

        if self.input.textarea.input(key) {
            let query = self.input.query().to_string();
            self.suggest.on_input(&query, now);
        }
    }

    fn handle_price_key(&mut self, key: KeyEvent, now: Instant) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            return;
        }

        let textarea = match self.focus {
            Focus::PriceMax => &mut self.filter.max_input,
            _ => &mut self.filter.min_input,
        };

        if textarea.input(key) {
            self.filter.on_change(now);
        }
    }

    /// Advance timers and drain worker responses
    pub fn on_tick(&mut self, now: Instant) {
        self.suggest.on_tick(now);

        if self.filter_enabled
            && let Some(submission) = self.filter.on_tick(now)
        {
            self.submit_filter(submission, now);
        }

        self.notification.tick(now);
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
