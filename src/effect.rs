//! Effects returned by the core for the host to apply to the page.

use crate::audience::Audience;
use crate::form::{SubmitPlan, Submission};
use crate::reveal::RevealId;
use crate::schedule::Ticket;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Add the visible class to an element and stop observing it.
    Reveal(RevealId),
    /// Smooth-scroll to the first element matching the selector.
    ScrollTo(String),
    /// Toggle the open class on a modal overlay.
    SetModalOpen { audience: Audience, open: bool },
    /// Lock or release body scrolling.
    ScrollLock(bool),
    /// Start a timer; hand the ticket back to the core when it fires.
    ScheduleReset { ticket: Ticket<Audience>, delay_ms: u32 },
    /// Clear the form, show the content panel, hide the success panel.
    ResetModal(Audience),
    SetSubmitButton { audience: Audience, label: String, disabled: bool },
    /// Hide the content panel and show the success panel.
    ShowSuccess(Audience),
    /// Blocking user-facing alert.
    Alert(String),
    /// Run the plan and report its outcome back to the core.
    Dispatch { submission: Submission, plan: SubmitPlan },
}
