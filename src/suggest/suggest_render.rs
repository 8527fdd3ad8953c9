//! Suggestion dropdown rendering
//!
//! Draws the panel as an overlay directly under the search input, one row
//! per suggestion: kind icon, name, then the category label in muted text.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::widgets::popup::{clear_area, dropdown_below_anchor};

use super::types::Suggestion;

/// Render the dropdown under the input and record its region for hit tests
///
/// Callers only invoke this while the panel is visible; a visible panel
/// always has at least one row.
pub fn render_dropdown(app: &mut App, frame: &mut Frame, input_area: Rect) {
    let rows = app.suggest.rows();
    let height = rows.len() as u16 + 2;
    let width = dropdown_width(rows, input_area.width);

    let area = dropdown_below_anchor(input_area, frame.area(), width, height);
    if area.height < 3 {
        // Not enough room under the input to show even one row
        return;
    }

    app.layout.suggestions_panel = Some(area);

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(i, suggestion)| suggestion_row(suggestion, app.suggest.selected() == Some(i)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(Color::Cyan)),
    );

    clear_area(frame, area);
    frame.render_widget(list, area);
}

/// Wide enough for the longest row, but never wider than the input
fn dropdown_width(rows: &[Suggestion], input_width: u16) -> u16 {
    let content = rows
        .iter()
        .map(|s| s.name.width() + s.category_label().width() + 6)
        .max()
        .unwrap_or(0) as u16;

    content.max(20).min(input_width)
}

fn suggestion_row(suggestion: &Suggestion, selected: bool) -> ListItem<'_> {
    let mut line = Line::from(vec![
        Span::styled(suggestion.kind.icon(), Style::default().fg(Color::Yellow)),
        Span::raw(" "),
        Span::raw(suggestion.name.as_str()),
        Span::raw("  "),
        Span::styled(
            suggestion.category_label(),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    if selected {
        line = line.style(Style::default().add_modifier(Modifier::REVERSED));
    }

    ListItem::new(line)
}

#[cfg(test)]
#[path = "suggest_render_tests.rs"]
mod suggest_render_tests;
