use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Place a dropdown directly under an anchor, clamped to the frame
///
/// The dropdown opens downward from the anchor's bottom edge. Width and
/// height are clamped so the rect never leaves the frame area.
pub fn dropdown_below_anchor(anchor: Rect, frame_area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = anchor.x;
    let popup_y = anchor.y.saturating_add(anchor.height);

    let max_width = frame_area.width.saturating_sub(popup_x);
    let max_height = frame_area.height.saturating_sub(popup_y);

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(max_width),
        height: height.min(max_height),
    }
}

pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    Rect {
        x: area.x + horizontal_margin,
        y: area.y + vertical_margin,
        width: area.width.saturating_sub(horizontal_margin * 2),
        height: area.height.saturating_sub(vertical_margin * 2),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
