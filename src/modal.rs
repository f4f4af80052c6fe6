//! Modal dialogs: open/close state, body scroll lock, deferred reset.
//!
//! Open modals are kept as a stack. The body scroll lock is taken when the
//! first modal opens and released only when the last one closes.
//!
//! Closing a modal schedules a content reset after `reset_delay_ms` so the
//! close transition plays against unchanged content. The reset is keyed by
//! modal: re-opening before it fires cancels the timer and resets right away,
//! so an old timer cannot wipe a dialog the visitor is using again.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::audience::Audience;
use crate::effect::Effect;
use crate::schedule::{Scheduler, Ticket};

#[derive(Debug)]
pub struct ModalManager {
    open: Vec<Audience>,
    resets: Scheduler<Audience>,
    reset_delay_ms: u32,
}

impl ModalManager {
    #[must_use]
    pub fn new(reset_delay_ms: u32) -> Self {
        Self { open: Vec::new(), resets: Scheduler::new(), reset_delay_ms }
    }

    #[must_use]
    pub fn is_open(&self, audience: Audience) -> bool {
        self.open.contains(&audience)
    }

    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        !self.open.is_empty()
    }

    /// Whether a post-close reset is still waiting to run.
    #[must_use]
    pub fn reset_pending(&self, audience: Audience) -> bool {
        self.resets.is_pending(audience)
    }

    pub fn open(&mut self, audience: Audience) -> Vec<Effect> {
        if self.is_open(audience) {
            return Vec::new();
        }
        let mut effects = Vec::new();
        if self.resets.cancel(audience) {
            effects.push(Effect::ResetModal(audience));
        }
        effects.push(Effect::SetModalOpen { audience, open: true });
        if self.open.is_empty() {
            effects.push(Effect::ScrollLock(true));
        }
        self.open.push(audience);
        log::debug!("modal opened: {}", audience.modal_id());
        effects
    }

    pub fn close(&mut self, audience: Audience) -> Vec<Effect> {
        let Some(pos) = self.open.iter().position(|a| *a == audience) else {
            return Vec::new();
        };
        self.open.remove(pos);

        let mut effects = vec![Effect::SetModalOpen { audience, open: false }];
        if self.open.is_empty() {
            effects.push(Effect::ScrollLock(false));
        }
        let ticket = self.resets.issue(audience);
        effects.push(Effect::ScheduleReset { ticket, delay_ms: self.reset_delay_ms });
        log::debug!("modal closed: {}", audience.modal_id());
        effects
    }

    /// Run a pending reset now and drop its timer.
    pub fn flush_reset(&mut self, audience: Audience) -> Vec<Effect> {
        if self.resets.cancel(audience) { vec![Effect::ResetModal(audience)] } else { Vec::new() }
    }

    /// A click landed on the overlay. Only a click on the background itself
    /// closes; clicks inside the dialog bubble up with a different target.
    pub fn overlay_click(&mut self, audience: Audience, target_is_overlay: bool) -> Vec<Effect> {
        if target_is_overlay { self.close(audience) } else { Vec::new() }
    }

    /// A reset timer fired.
    pub fn reset_due(&mut self, ticket: &Ticket<Audience>) -> Vec<Effect> {
        if self.resets.settle(ticket) {
            vec![Effect::ResetModal(ticket.key)]
        } else {
            Vec::new()
        }
    }
}
