//! Tests for application state

use std::time::Instant;

use crate::config;
use crate::suggest::{Suggestion, SuggestionKind};
use crate::test_utils::test_app;

use super::{App, Focus};

fn suggestion() -> Suggestion {
    Suggestion {
        kind: SuggestionKind::Product,
        name: "Solar lamp".to_string(),
        category: Some("Lighting".to_string()),
        url: "/market/product/solar-lamp/".to_string(),
    }
}

#[test]
fn test_app_initialization() {
    let app = test_app();

    assert_eq!(app.focus, Focus::SearchInput);
    assert!(!app.should_quit());
    assert!(app.filter_enabled);
    assert!(app.activity.is_empty());
    assert!(!app.suggest.is_visible());
}

#[test]
fn test_cycle_focus_forward_and_back() {
    let mut app = test_app();

    app.cycle_focus(true);
    assert_eq!(app.focus, Focus::PriceMin);
    app.cycle_focus(true);
    assert_eq!(app.focus, Focus::PriceMax);
    app.cycle_focus(true);
    assert_eq!(app.focus, Focus::SearchInput);

    app.cycle_focus(false);
    assert_eq!(app.focus, Focus::PriceMax);
}

#[test]
fn test_cycle_focus_with_filter_disabled_stays_on_search() {
    let config = config::parse("[filter]\nenabled = false").unwrap();
    let mut app = App::new(&config);

    app.cycle_focus(true);
    assert_eq!(app.focus, Focus::SearchInput);
}

#[test]
fn test_focus_gain_on_search_reshows_rows() {
    let mut app = test_app();

    app.suggest.display(vec![suggestion()]);
    app.suggest.hide();

    app.set_focus(Focus::PriceMin);
    app.set_focus(Focus::SearchInput);

    assert!(app.suggest.is_visible());
}

#[test]
fn test_focus_gain_on_search_with_no_rows_stays_hidden() {
    let mut app = test_app();

    app.set_focus(Focus::PriceMin);
    app.set_focus(Focus::SearchInput);

    assert!(!app.suggest.is_visible());
}

#[test]
fn test_follow_records_activity_and_notification() {
    let now = Instant::now();
    let mut app = test_app();

    app.follow(&suggestion(), now);

    assert_eq!(app.activity, vec!["open /market/product/solar-lamp/"]);
    assert!(
        app.notification
            .active(now)
            .unwrap()
            .contains("/market/product/solar-lamp/")
    );
}

#[test]
fn test_submit_filter_records_activity() {
    let now = Instant::now();
    let mut app = test_app();

    app.submit_filter(
        crate::filter::FormSubmission {
            min_price: "10".to_string(),
            max_price: "50".to_string(),
        },
        now,
    );

    assert_eq!(app.activity, vec!["filter min_price=10 max_price=50"]);
    assert_eq!(app.notification.active(now), Some("Filters applied"));
}
