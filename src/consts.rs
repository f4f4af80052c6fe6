//! Shared constants: DOM selectors, marker classes, delays, and copy.

// ── Reveal-on-scroll ────────────────────────────────────────────

/// Elements animated in when they first scroll into view.
pub const REVEAL_SELECTOR: &str = ".fade-in, .fade-in-up";

/// Class added once an element has been revealed.
pub const VISIBLE_CLASS: &str = "visible";

/// Intersection root margin (viewport root).
pub const REVEAL_ROOT_MARGIN: &str = "0px";

/// Fraction of the element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

// ── Anchors ─────────────────────────────────────────────────────

/// Same-page fragment links.
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Bare fragment used by placeholder links.
pub const PLACEHOLDER_HREF: &str = "#";

// ── Modals ──────────────────────────────────────────────────────

/// Class toggled on a modal container while it is open.
pub const OPEN_CLASS: &str = "open";

/// Overlay background; each modal root carries this class.
pub const OVERLAY_SELECTOR: &str = ".modal-overlay";

/// Elements that close the modal they sit in.
pub const CLOSE_SELECTOR: &str = ".modal-close, .close-success-btn";

/// Dialog box inside an overlay; holds both panels and the form.
pub const CONTAINER_SELECTOR: &str = ".modal-container";

/// Panel holding the form.
pub const CONTENT_SELECTOR: &str = ".modal-content";

/// Panel shown after a successful submission.
pub const SUCCESS_SELECTOR: &str = ".modal-success";

/// Delay between closing a modal and resetting its content, so the close
/// transition is not disturbed.
pub const RESET_DELAY_MS: u32 = 300;

// ── Forms ───────────────────────────────────────────────────────

pub const SUBMIT_SELECTOR: &str = "button[type=\"submit\"]";

/// Submit label shown while a submission is in flight.
pub const SENDING_LABEL: &str = "Sending...";

/// Simulated round-trip when no endpoint is configured.
pub const SIMULATED_DELAY_MS: u32 = 1000;

/// Generic message for a failed dispatch.
pub const FAILURE_ALERT: &str = "Something went wrong. Please try again.";
