//! Tests for the debounce timer

use std::time::{Duration, Instant};

use proptest::prelude::*;

use super::Debouncer;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_new_debouncer_is_idle() {
    let mut debouncer = Debouncer::new(300);
    assert!(!debouncer.is_pending());
    assert!(!debouncer.fire_if_due(Instant::now()));
}

#[test]
fn test_fires_once_after_delay() {
    let now = Instant::now();
    let mut debouncer = Debouncer::new(300);

    debouncer.schedule(now);
    assert!(debouncer.is_pending());

    // Not due yet
    assert!(!debouncer.fire_if_due(now + ms(299)));

    // Due exactly at the deadline
    assert!(debouncer.fire_if_due(now + ms(300)));

    // Consumed: does not fire again
    assert!(!debouncer.is_pending());
    assert!(!debouncer.fire_if_due(now + ms(301)));
}

#[test]
fn test_reschedule_replaces_deadline() {
    let now = Instant::now();
    let mut debouncer = Debouncer::new(300);

    debouncer.schedule(now);
    debouncer.schedule(now + ms(200));

    // The first deadline (now + 300) was replaced, nothing fires there
    assert!(!debouncer.fire_if_due(now + ms(300)));

    // The replacement fires at now + 500
    assert!(debouncer.fire_if_due(now + ms(500)));
}

#[test]
fn test_cancel_drops_pending_deadline() {
    let now = Instant::now();
    let mut debouncer = Debouncer::new(300);

    debouncer.schedule(now);
    debouncer.cancel();

    assert!(!debouncer.is_pending());
    assert!(!debouncer.fire_if_due(now + ms(1000)));
}

#[test]
fn test_cancel_when_idle_is_a_noop() {
    let mut debouncer = Debouncer::new(300);
    debouncer.cancel();
    assert!(!debouncer.is_pending());
}

proptest! {
    // For any burst of schedules inside a single window, polling past the
    // last deadline fires exactly once: only the final schedule survives.
    #[test]
    fn prop_burst_of_schedules_fires_once(
        offsets in prop::collection::vec(0u64..300, 1..20)
    ) {
        let base = Instant::now();
        let mut debouncer = Debouncer::new(300);

        let mut last = 0;
        for offset in &offsets {
            // Keystrokes arrive in order within the burst
            let at = last + offset;
            debouncer.schedule(base + ms(at));
            last = at;
        }

        // Poll every 10ms until well past the final deadline
        let mut fires = 0;
        let mut t = 0;
        while t < last + 600 {
            if debouncer.fire_if_due(base + ms(t)) {
                fires += 1;
            }
            t += 10;
        }

        prop_assert_eq!(fires, 1);
        prop_assert!(!debouncer.is_pending());
    }
}
