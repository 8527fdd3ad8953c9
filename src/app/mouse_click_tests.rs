//! Tests for mouse click handling

use std::time::Instant;

use ratatui::layout::Rect;

use crate::suggest::{Suggestion, SuggestionKind};
use crate::test_utils::test_app;

use super::super::app_state::{App, Focus};
use super::handle_click;

fn product(name: &str) -> Suggestion {
    Suggestion {
        kind: SuggestionKind::Product,
        name: name.to_string(),
        category: None,
        url: format!("/market/product/{name}/"),
    }
}

/// An app laid out as if one frame had been drawn:
/// input on top, price fields, activity pane, and a two-row dropdown
fn laid_out_app() -> App {
    let mut app = test_app();
    app.layout.search_input = Some(Rect::new(0, 0, 80, 3));
    app.layout.price_min = Some(Rect::new(0, 3, 40, 3));
    app.layout.price_max = Some(Rect::new(40, 3, 40, 3));
    app.layout.activity_pane = Some(Rect::new(0, 6, 80, 10));

    app.suggest.display(vec![product("lamp"), product("lantern")]);
    // Bordered panel: rows at y=4 and y=5
    app.layout.suggestions_panel = Some(Rect::new(0, 3, 40, 4));
    app
}

#[test]
fn test_click_outside_panel_hides_it() {
    let mut app = laid_out_app();

    // Well below every recorded region
    handle_click(&mut app, 70, 20, Instant::now());

    assert!(!app.suggest.is_visible());
    assert!(app.activity.is_empty());
}

#[test]
fn test_click_on_activity_pane_hides_panel() {
    let mut app = laid_out_app();

    handle_click(&mut app, 60, 10, Instant::now());

    assert!(!app.suggest.is_visible());
}

#[test]
fn test_click_on_search_input_keeps_panel_open() {
    let mut app = laid_out_app();
    app.set_focus(Focus::PriceMin);

    handle_click(&mut app, 10, 1, Instant::now());

    assert!(app.suggest.is_visible());
    assert_eq!(app.focus, Focus::SearchInput);
}

#[test]
fn test_click_on_suggestion_row_follows_it() {
    let mut app = laid_out_app();

    // Second row of the bordered panel
    handle_click(&mut app, 5, 5, Instant::now());

    assert_eq!(app.activity, vec!["open /market/product/lantern/"]);
    assert!(!app.suggest.is_visible());
}

#[test]
fn test_click_on_panel_border_neither_follows_nor_hides() {
    let mut app = laid_out_app();

    // Top border of the panel
    handle_click(&mut app, 5, 3, Instant::now());

    assert!(app.suggest.is_visible());
    assert!(app.activity.is_empty());
}

#[test]
fn test_click_on_price_fields_moves_focus() {
    let mut app = laid_out_app();
    // The dropdown overlays the min field in this layout; hide it first.
    // A hidden panel is not drawn, so its region is cleared (see the
    // `LayoutRegions` invariant: `None` means "not drawn this frame").
    app.suggest.hide();
    app.layout.suggestions_panel = None;

    handle_click(&mut app, 10, 4, Instant::now());
    assert_eq!(app.focus, Focus::PriceMin);

    handle_click(&mut app, 50, 4, Instant::now());
    assert_eq!(app.focus, Focus::PriceMax);
}

#[test]
fn test_click_with_empty_layout_still_dismisses() {
    let mut app = test_app();
    app.suggest.display(vec![product("lamp")]);

    // No regions recorded yet (nothing rendered): plain outside click
    handle_click(&mut app, 5, 5, Instant::now());

    assert!(!app.suggest.is_visible());
}
