use std::time::Instant;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::state::NotificationState;

/// Render the notification in the bottom-right corner, if one is active
pub fn render_notification(frame: &mut Frame, state: &NotificationState, now: Instant) {
    let Some(message) = state.active(now) else {
        return;
    };

    let area = frame.area();
    let width = (message.len() + 4).min(area.width as usize) as u16;
    let height = 3.min(area.height);

    let popup = Rect {
        x: area.width.saturating_sub(width),
        y: area.height.saturating_sub(height),
        width,
        height,
    };

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(message).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        ),
        popup,
    );
}
