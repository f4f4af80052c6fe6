//! Reveal-on-scroll bookkeeping.
//!
//! The host assigns each animatable element a [`RevealId`] in registration
//! order and forwards intersection notifications here. An element is marked
//! visible on its first intersecting notification and is then dropped from
//! observation for good.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashMap;

/// Registration index of an observed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RevealState {
    Watching,
    Visible,
}

/// What the host should do with one notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    /// Add the visible class and stop observing the element.
    Reveal,
    Ignore,
}

#[derive(Debug, Default)]
pub struct RevealTracker {
    states: HashMap<RevealId, RevealState>,
}

impl RevealTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking `id`. Re-registering a revealed element does not bring
    /// it back under observation.
    pub fn register(&mut self, id: RevealId) {
        self.states.entry(id).or_insert(RevealState::Watching);
    }

    /// Handle an intersection notification.
    pub fn observe(&mut self, id: RevealId, is_intersecting: bool) -> RevealAction {
        if !is_intersecting {
            return RevealAction::Ignore;
        }
        match self.states.get_mut(&id) {
            Some(state) if *state == RevealState::Watching => {
                *state = RevealState::Visible;
                RevealAction::Reveal
            }
            _ => RevealAction::Ignore,
        }
    }

    #[must_use]
    pub fn is_visible(&self, id: RevealId) -> bool {
        self.states.get(&id) == Some(&RevealState::Visible)
    }

    /// Number of elements still waiting to come into view.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.states.values().filter(|s| **s == RevealState::Watching).count()
    }
}
