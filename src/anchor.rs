//! Same-page anchor links.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

use crate::consts::PLACEHOLDER_HREF;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollIntent {
    /// Bare `#`: swallow the click, scroll nowhere.
    Placeholder,
    /// Smooth-scroll to the element matching this selector, if any.
    Target(String),
}

/// Classify a link's `href`. `None` means it is not a fragment link and the
/// browser should handle it.
#[must_use]
pub fn scroll_intent(href: &str) -> Option<ScrollIntent> {
    if !href.starts_with('#') {
        return None;
    }
    if href == PLACEHOLDER_HREF {
        Some(ScrollIntent::Placeholder)
    } else {
        Some(ScrollIntent::Target(href.to_owned()))
    }
}
