//! Price filter pane rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
};

use crate::app::{App, Focus};

/// Render the min/max price fields side by side and record their regions
pub fn render_fields(app: &mut App, frame: &mut Frame, area: Rect) {
    let columns =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);

    style_field(app, Focus::PriceMin);
    style_field(app, Focus::PriceMax);

    frame.render_widget(&app.filter.min_input, columns[0]);
    frame.render_widget(&app.filter.max_input, columns[1]);

    app.layout.price_min = Some(columns[0]);
    app.layout.price_max = Some(columns[1]);
}

/// Border reflects focus, matching the other input fields
fn style_field(app: &mut App, field: Focus) {
    let focused = app.focus == field;
    let border_color = if focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let (input, title) = match field {
        Focus::PriceMin => (&mut app.filter.min_input, " Min price "),
        _ => (&mut app.filter.max_input, " Max price "),
    };

    input.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border_color)),
    );
}
