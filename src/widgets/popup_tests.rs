//! Tests for popup rect helpers

use ratatui::layout::Rect;

use super::{dropdown_below_anchor, inset_rect};

#[test]
fn test_dropdown_opens_below_anchor() {
    let frame = Rect::new(0, 0, 80, 24);
    let anchor = Rect::new(0, 0, 40, 3);

    let dropdown = dropdown_below_anchor(anchor, frame, 40, 6);

    assert_eq!(dropdown.x, 0);
    assert_eq!(dropdown.y, 3);
    assert_eq!(dropdown.width, 40);
    assert_eq!(dropdown.height, 6);
}

#[test]
fn test_dropdown_clamped_to_frame_bottom() {
    let frame = Rect::new(0, 0, 80, 10);
    let anchor = Rect::new(0, 5, 40, 3);

    let dropdown = dropdown_below_anchor(anchor, frame, 40, 6);

    // Only two rows remain under the anchor
    assert_eq!(dropdown.y, 8);
    assert_eq!(dropdown.height, 2);
}

#[test]
fn test_dropdown_clamped_to_frame_right() {
    let frame = Rect::new(0, 0, 30, 24);
    let anchor = Rect::new(10, 0, 20, 3);

    let dropdown = dropdown_below_anchor(anchor, frame, 40, 4);

    assert_eq!(dropdown.width, 20);
}

#[test]
fn test_dropdown_below_full_height_anchor_is_empty() {
    let frame = Rect::new(0, 0, 80, 3);
    let anchor = Rect::new(0, 0, 40, 3);

    let dropdown = dropdown_below_anchor(anchor, frame, 40, 4);

    assert_eq!(dropdown.height, 0);
}

#[test]
fn test_inset_rect() {
    let area = Rect::new(2, 2, 20, 10);
    let inner = inset_rect(area, 1, 1);

    assert_eq!(inner, Rect::new(3, 3, 18, 8));
}

#[test]
fn test_inset_rect_saturates_on_small_area() {
    let area = Rect::new(0, 0, 1, 1);
    let inner = inset_rect(area, 2, 2);

    assert_eq!(inner.width, 0);
    assert_eq!(inner.height, 0);
}
