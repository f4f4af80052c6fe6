use crate::anchor::{ScrollIntent, scroll_intent};
use crate::audience::Audience;
use crate::config::Config;
use crate::effect::Effect;
use crate::error::PageError;
use crate::form::{FormController, Submission};
use crate::modal::ModalManager;
use crate::reveal::{RevealAction, RevealId, RevealTracker};
use crate::schedule::Ticket;
use crate::transport::DispatchOutcome;

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Core page state: everything that does not depend on the DOM.
///
/// Every event handler returns the [`Effect`]s the host must apply. Kept
/// apart from the browser host so it can be tested natively.
#[derive(Debug)]
pub struct PageCore {
    pub config: Config,
    pub reveal: RevealTracker,
    pub modals: ModalManager,
    pub forms: FormController,
}

impl Default for PageCore {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl PageCore {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            reveal: RevealTracker::new(),
            modals: ModalManager::new(config.reset_delay_ms),
            forms: FormController::new(&config),
            config,
        }
    }

    // --- Reveal ---

    pub fn register_reveal(&mut self, id: RevealId) {
        self.reveal.register(id);
    }

    pub fn on_intersection(&mut self, id: RevealId, is_intersecting: bool) -> Vec<Effect> {
        match self.reveal.observe(id, is_intersecting) {
            RevealAction::Reveal => vec![Effect::Reveal(id)],
            RevealAction::Ignore => Vec::new(),
        }
    }

    // --- Links ---

    /// A fragment link was clicked. Smooth scroll runs first; trigger links
    /// then also open their modal. The host suppresses navigation for every
    /// fragment link.
    pub fn on_link_click(&mut self, href: &str) -> Vec<Effect> {
        let mut effects = Vec::new();
        if let Some(ScrollIntent::Target(selector)) = scroll_intent(href) {
            effects.push(Effect::ScrollTo(selector));
        }
        if let Some(audience) = Audience::from_trigger_href(href) {
            effects.extend(self.open_modal(audience));
        }
        effects
    }

    // --- Modals ---

    pub fn open_modal(&mut self, audience: Audience) -> Vec<Effect> {
        self.modals.open(audience)
    }

    pub fn close_modal(&mut self, audience: Audience) -> Vec<Effect> {
        self.modals.close(audience)
    }

    pub fn on_overlay_click(&mut self, audience: Audience, target_is_overlay: bool) -> Vec<Effect> {
        self.modals.overlay_click(audience, target_is_overlay)
    }

    pub fn on_reset_due(&mut self, ticket: &Ticket<Audience>) -> Vec<Effect> {
        self.modals.reset_due(ticket)
    }

    // --- Forms ---

    /// # Errors
    ///
    /// Returns an error if the payload cannot be encoded.
    pub fn on_submit(
        &mut self,
        audience: Audience,
        button_label: String,
        fields: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Vec<Effect>, PageError> {
        self.forms.begin(audience, button_label, fields)
    }

    /// A submission finished. On success, a content reset still pending
    /// from an earlier close runs first, so the timer cannot later hide the
    /// success panel.
    pub fn on_dispatch_complete(&mut self, submission: Submission, outcome: &DispatchOutcome) -> Vec<Effect> {
        let mut effects = Vec::new();
        if outcome.is_success() {
            effects.extend(self.modals.flush_reset(submission.audience));
        }
        effects.extend(self.forms.finish(submission, outcome));
        effects
    }
}
