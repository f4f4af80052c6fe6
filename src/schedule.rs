//! Cancellable, keyed deferred work.
//!
//! The host owns the real timers; the core only hands out [`Ticket`]s. When a
//! timer fires the host passes its ticket back, and the work runs only if the
//! ticket is still the latest one issued for its key. Issuing a new ticket or
//! cancelling the key invalidates every older ticket for that key.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::collections::HashMap;
use std::hash::Hash;

/// Handle for one scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket<K> {
    pub key: K,
    generation: u64,
}

#[derive(Debug)]
pub struct Scheduler<K> {
    live: HashMap<K, u64>,
    next_generation: u64,
}

impl<K> Default for Scheduler<K> {
    fn default() -> Self {
        Self { live: HashMap::new(), next_generation: 0 }
    }
}

impl<K: Copy + Eq + Hash> Scheduler<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for `key`, superseding any pending one.
    pub fn issue(&mut self, key: K) -> Ticket<K> {
        self.next_generation += 1;
        self.live.insert(key, self.next_generation);
        Ticket { key, generation: self.next_generation }
    }

    /// Drop the pending ticket for `key`. Returns whether one was pending.
    pub fn cancel(&mut self, key: K) -> bool {
        self.live.remove(&key).is_some()
    }

    #[must_use]
    pub fn is_pending(&self, key: K) -> bool {
        self.live.contains_key(&key)
    }

    #[must_use]
    pub fn is_live(&self, ticket: &Ticket<K>) -> bool {
        self.live.get(&ticket.key) == Some(&ticket.generation)
    }

    /// Consume a fired ticket. Returns `true` if it was still live, in which
    /// case its key is no longer pending.
    pub fn settle(&mut self, ticket: &Ticket<K>) -> bool {
        if self.is_live(ticket) {
            self.live.remove(&ticket.key);
            true
        } else {
            false
        }
    }
}
