use super::*;

fn tracker_with(n: usize) -> RevealTracker {
    let mut tracker = RevealTracker::new();
    for i in 0..n {
        tracker.register(RevealId(i));
    }
    tracker
}

#[test]
fn first_intersection_reveals() {
    let mut tracker = tracker_with(1);
    assert_eq!(tracker.observe(RevealId(0), true), RevealAction::Reveal);
    assert!(tracker.is_visible(RevealId(0)));
    assert_eq!(tracker.pending(), 0);
}

#[test]
fn non_intersecting_notification_is_ignored() {
    let mut tracker = tracker_with(1);
    assert_eq!(tracker.observe(RevealId(0), false), RevealAction::Ignore);
    assert!(!tracker.is_visible(RevealId(0)));
    assert_eq!(tracker.pending(), 1);
}

#[test]
fn exit_and_reentry_after_reveal_changes_nothing() {
    let mut tracker = tracker_with(1);
    tracker.observe(RevealId(0), true);
    assert_eq!(tracker.observe(RevealId(0), false), RevealAction::Ignore);
    assert_eq!(tracker.observe(RevealId(0), true), RevealAction::Ignore);
    assert!(tracker.is_visible(RevealId(0)));
}

#[test]
fn reregistering_revealed_element_keeps_it_visible() {
    let mut tracker = tracker_with(1);
    tracker.observe(RevealId(0), true);
    tracker.register(RevealId(0));
    assert!(tracker.is_visible(RevealId(0)));
    assert_eq!(tracker.observe(RevealId(0), true), RevealAction::Ignore);
}

#[test]
fn notifications_in_any_order() {
    let mut tracker = tracker_with(3);
    assert_eq!(tracker.observe(RevealId(2), true), RevealAction::Reveal);
    assert_eq!(tracker.observe(RevealId(0), true), RevealAction::Reveal);
    assert_eq!(tracker.pending(), 1);
    assert!(!tracker.is_visible(RevealId(1)));
}

#[test]
fn unknown_element_is_ignored() {
    let mut tracker = tracker_with(1);
    assert_eq!(tracker.observe(RevealId(7), true), RevealAction::Ignore);
    assert!(!tracker.is_visible(RevealId(7)));
}

#[test]
fn empty_tracker_is_a_noop() {
    let tracker = RevealTracker::new();
    assert_eq!(tracker.pending(), 0);
}
