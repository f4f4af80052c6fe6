use super::*;

#[test]
fn bare_hash_is_placeholder() {
    assert_eq!(scroll_intent("#"), Some(ScrollIntent::Placeholder));
}

#[test]
fn fragment_targets_selector() {
    assert_eq!(scroll_intent("#features"), Some(ScrollIntent::Target("#features".to_owned())));
}

#[test]
fn missing_target_still_classified_as_fragment() {
    assert_eq!(
        scroll_intent("#nonexistent"),
        Some(ScrollIntent::Target("#nonexistent".to_owned()))
    );
}

#[test]
fn non_fragment_links_are_left_alone() {
    assert_eq!(scroll_intent("/pricing"), None);
    assert_eq!(scroll_intent("https://example.com/#top"), None);
    assert_eq!(scroll_intent(""), None);
}
