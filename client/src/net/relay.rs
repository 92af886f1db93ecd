//! Contact form relay client.
//!
//! Client-side (hydrate): one JSON `POST` via `gloo-net`.
//! Server-side (SSR): submissions are unavailable and return an error.
//!
//! ERROR HANDLING
//! ==============
//! Every failure maps to `RelayError` and then to a failed
//! `SubmissionOutcome`; the form decides what the user sees. There is no
//! retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

use crate::state::contact::{RelayPayload, SubmissionOutcome};

const DEFAULT_RELAY_URL: &str = "https://formsubmit.co/ajax/199b93fccd5350a03067eca9ad77d5da";

/// Failure modes of one relay submission.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RelayError {
    #[error("relay request failed: {0}")]
    Network(String),
    #[error("relay responded with status {0}")]
    Status(u16),
    #[error("could not encode submission: {0}")]
    Encode(String),
    #[error("relay is only reachable from the browser")]
    Unavailable,
}

/// Relay endpoint, overridable at build time with `FOLIO_FORM_RELAY_URL`.
#[must_use]
pub fn relay_url() -> &'static str {
    resolve_url(option_env!("FOLIO_FORM_RELAY_URL"))
}

fn resolve_url(configured: Option<&'static str>) -> &'static str {
    configured.map(str::trim).filter(|url| !url.is_empty()).unwrap_or(DEFAULT_RELAY_URL)
}

/// JSON body for the relay: one string member per form field.
#[cfg(any(test, feature = "hydrate"))]
fn encode_body(payload: &RelayPayload) -> Result<String, RelayError> {
    serde_json::to_string(payload).map_err(|e| RelayError::Encode(e.to_string()))
}

/// Collapse a relay result into the outcome the form state consumes.
#[must_use]
pub fn outcome_from(result: Result<(), RelayError>) -> SubmissionOutcome {
    match result {
        Ok(()) => SubmissionOutcome::Success,
        Err(e) => SubmissionOutcome::Failure(e.to_string()),
    }
}

/// Send the form fields to the relay. Any ok status counts as success.
///
/// # Errors
///
/// Returns `RelayError` when the body cannot be encoded, the request fails,
/// the relay answers with a non-ok status, or when called outside the
/// browser.
pub async fn submit(payload: &RelayPayload) -> Result<(), RelayError> {
    #[cfg(feature = "hydrate")]
    {
        let body = encode_body(payload)?;
        let request = gloo_net::http::Request::post(relay_url())
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .body(body)
            .map_err(|e| RelayError::Encode(e.to_string()))?;
        let resp = request.send().await.map_err(|e| RelayError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(RelayError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(RelayError::Unavailable)
    }
}
