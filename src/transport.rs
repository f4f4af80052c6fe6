//! Webhook dispatch.
//!
//! The browser transport sends in `no-cors` mode by default, which makes the
//! response opaque (status 0): the page can tell "sent" from "could not
//! send", but not whether the endpoint accepted the data. With
//! [`TransportMode::Cors`] the status is visible and a non-2xx answer is
//! reported as [`DispatchOutcome::Rejected`].

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::fmt;

use crate::config::TransportMode;
use crate::error::TransportError;
use crate::form::SubmitPlan;

/// A ready-to-send webhook POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookRequest {
    pub endpoint: String,
    pub mode: TransportMode,
    /// JSON-encoded form payload.
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No endpoint configured; success was simulated.
    Simulated,
    /// Sent, response opaque.
    Dispatched,
    Accepted(u16),
    Rejected(u16),
    /// The request layer itself failed.
    Failed(String),
}

impl DispatchOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Simulated | Self::Dispatched | Self::Accepted(_))
    }
}

impl fmt::Display for DispatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simulated => write!(f, "simulated"),
            Self::Dispatched => write!(f, "dispatched (opaque response)"),
            Self::Accepted(status) => write!(f, "accepted ({status})"),
            Self::Rejected(status) => write!(f, "rejected ({status})"),
            Self::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

/// Map a response status to an outcome. Opaque responses report status 0.
#[must_use]
pub fn classify_status(status: u16) -> DispatchOutcome {
    match status {
        0 => DispatchOutcome::Dispatched,
        200..=299 => DispatchOutcome::Accepted(status),
        _ => DispatchOutcome::Rejected(status),
    }
}

/// Clock and network used to carry out a [`SubmitPlan`].
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Send the request and return the response status.
    async fn post(&self, request: &WebhookRequest) -> Result<u16, TransportError>;

    async fn sleep(&self, ms: u32);
}

/// Carry out a submission plan.
pub async fn execute(transport: &impl Transport, plan: &SubmitPlan) -> DispatchOutcome {
    match plan {
        SubmitPlan::Simulate { delay_ms } => {
            transport.sleep(*delay_ms).await;
            DispatchOutcome::Simulated
        }
        SubmitPlan::Post(request) => match transport.post(request).await {
            Ok(status) => classify_status(status),
            Err(err) => DispatchOutcome::Failed(err.to_string()),
        },
    }
}

/// `gloo-net` transport with `gloo-timers` for delays.
#[cfg(feature = "browser")]
pub struct BrowserTransport;

#[cfg(feature = "browser")]
impl Transport for BrowserTransport {
    async fn post(&self, request: &WebhookRequest) -> Result<u16, TransportError> {
        use web_sys::{RequestCache, RequestMode, RequestRedirect};

        let mode = match request.mode {
            TransportMode::NoCors => RequestMode::NoCors,
            TransportMode::Cors => RequestMode::Cors,
        };
        let req = gloo_net::http::Request::post(&request.endpoint)
            .mode(mode)
            .cache(RequestCache::NoCache)
            .redirect(RequestRedirect::Follow)
            .header("Content-Type", "application/json")
            .body(request.body.as_str())
            .map_err(|e| TransportError::Build(e.to_string()))?;
        let resp = req.send().await.map_err(|e| TransportError::Send(e.to_string()))?;
        Ok(resp.status())
    }

    async fn sleep(&self, ms: u32) {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
}
