//! Mouse click handling
//!
//! Every left click is the document-level event: the suggestion panel is
//! dismissed unless the click landed on the panel itself or on the search
//! input, then the click is routed to the component it hit.

use std::time::Instant;

use ratatui::layout::Rect;

use crate::layout::{Region, region_at};

use super::app_state::{App, Focus};

/// Handle a left mouse button click at a screen position
pub fn handle_click(app: &mut App, x: u16, y: u16, now: Instant) {
    let region = region_at(&app.layout, x, y);
    let panel = app.layout.suggestions_panel;

    // Dismissal first; it is a no-op for clicks on the panel or the input
    app.suggest.dismiss(region);

    match region {
        Some(Region::SearchInput) => {
            app.set_focus(Focus::SearchInput);
        }
        Some(Region::SuggestionsPanel) => {
            if let Some(panel) = panel
                && let Some(index) = row_index_at(panel, y)
                && let Some(suggestion) = app.suggest.activate(index)
            {
                app.follow(&suggestion, now);
            }
        }
        Some(Region::PriceMin) if app.filter_enabled => {
            app.set_focus(Focus::PriceMin);
        }
        Some(Region::PriceMax) if app.filter_enabled => {
            app.set_focus(Focus::PriceMax);
        }
        // Clicks elsewhere only dismiss
        _ => {}
    }
}

/// Map a click row inside the panel to a suggestion index
///
/// The panel is bordered, so the first row sits one line below the top edge.
fn row_index_at(panel: Rect, y: u16) -> Option<usize> {
    if y <= panel.y || y + 1 >= panel.y + panel.height {
        return None;
    }
    Some((y - panel.y - 1) as usize)
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
