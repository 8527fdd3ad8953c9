use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::filter::filter_render;
use crate::notification::render_notification;
use crate::suggest::suggest_render;

use super::app_state::{App, Focus};

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout.reset();

        let (input_area, filter_area, activity_area, help_area) = if self.filter_enabled {
            let layout = Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(frame.area());
            (layout[0], Some(layout[1]), layout[2], layout[3])
        } else {
            let layout = Layout::vertical([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(frame.area());
            (layout[0], None, layout[1], layout[2])
        };

        self.render_search_input(frame, input_area);

        if let Some(filter_area) = filter_area {
            filter_render::render_fields(self, frame, filter_area);
        }

        self.render_activity_pane(frame, activity_area);
        self.render_help_line(frame, help_area);

        // Overlays go last so they draw over the panes
        if self.suggest.is_visible() {
            suggest_render::render_dropdown(self, frame, input_area);
        }

        render_notification(frame, &self.notification, Instant::now());
    }

    fn render_search_input(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focus == Focus::SearchInput {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        self.input.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_widget(&self.input.textarea, area);
        self.layout.search_input = Some(area);
    }

    /// The stand-in for the surrounding page: followed links and submitted
    /// filter forms, newest at the bottom
    fn render_activity_pane(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Activity ")
            .border_style(Style::default().fg(Color::DarkGray));

        let visible_lines = area.height.saturating_sub(2) as usize;
        let start = self.activity.len().saturating_sub(visible_lines);
        let lines: Vec<Line> = self.activity[start..]
            .iter()
            .map(|entry| Line::from(entry.as_str()))
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
        self.layout.activity_pane = Some(area);
    }

    fn render_help_line(&self, frame: &mut Frame, area: Rect) {
        let help = " Tab: focus · ↑/↓: select · Enter: open · Esc: dismiss · Ctrl+C: quit ";
        frame.render_widget(
            Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
            area,
        );
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
