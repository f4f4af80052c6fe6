//! Error types.
//!
//! Missing DOM targets are not errors; lookups return `Option` and callers
//! skip quietly. These cover the failures that are worth a log line.

/// Failure inside the page host or while preparing a submission.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("payload encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Failure of the request layer itself. A remote rejection is not a
/// transport error; see [`crate::transport::DispatchOutcome`].
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request build failed: {0}")]
    Build(String),
    #[error("request send failed: {0}")]
    Send(String),
}
