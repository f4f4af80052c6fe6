//! Page configuration.
//!
//! Everything is fixed at compile time. The webhook endpoint is taken from
//! `LANDING_WEBHOOK_URL` when the crate is built; without it the endpoint is
//! the placeholder sentinel and submissions are simulated locally.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, RESET_DELAY_MS, SIMULATED_DELAY_MS};

/// Sentinel endpoint meaning "not configured".
pub const PLACEHOLDER_ENDPOINT: &str = "https://script.google.com/macros/s/YOUR_DEPLOYMENT_ID/exec";

/// Webhook endpoint baked in at build time.
pub const WEBHOOK_ENDPOINT: &str = match option_env!("LANDING_WEBHOOK_URL") {
    Some(url) => url,
    None => PLACEHOLDER_ENDPOINT,
};

/// How the webhook request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportMode {
    /// Cross-origin fire-and-forget. The response is opaque: only "sent" or
    /// "failed to send" is observable.
    #[default]
    NoCors,
    /// Regular CORS request. The response status is visible, so a remote
    /// rejection can be told apart from acceptance.
    Cors,
}

/// Intersection observer settings for reveal-on-scroll.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    pub root_margin: String,
    pub threshold: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self { root_margin: REVEAL_ROOT_MARGIN.to_owned(), threshold: REVEAL_THRESHOLD }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub endpoint: String,
    pub transport: TransportMode,
    pub reveal: RevealOptions,
    pub reset_delay_ms: u32,
    pub simulated_delay_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::with_endpoint(WEBHOOK_ENDPOINT)
    }
}

impl Config {
    /// Default settings pointed at `endpoint`.
    #[must_use]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport: TransportMode::default(),
            reveal: RevealOptions::default(),
            reset_delay_ms: RESET_DELAY_MS,
            simulated_delay_ms: SIMULATED_DELAY_MS,
        }
    }

    /// Whether submissions skip the network and succeed after a fixed delay.
    #[must_use]
    pub fn is_simulated(&self) -> bool {
        self.endpoint == PLACEHOLDER_ENDPOINT
    }
}
