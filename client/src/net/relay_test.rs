use super::*;

// =============================================================
// Endpoint
// =============================================================

#[test]
fn resolve_url_defaults_when_unset() {
    assert_eq!(resolve_url(None), DEFAULT_RELAY_URL);
}

#[test]
fn resolve_url_ignores_blank_override() {
    assert_eq!(resolve_url(Some("  ")), DEFAULT_RELAY_URL);
}

#[test]
fn resolve_url_prefers_override() {
    assert_eq!(resolve_url(Some("https://relay.test/ajax/abc")), "https://relay.test/ajax/abc");
}

#[test]
fn relay_url_is_https() {
    assert!(relay_url().starts_with("https://"));
}

// =============================================================
// Body
// =============================================================

#[test]
fn body_is_flat_json_object_in_key_order() {
    let payload: RelayPayload = [("name", "Ada Lovelace"), ("email", "ada@example.com")]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect();
    assert_eq!(encode_body(&payload).unwrap(), r#"{"email":"ada@example.com","name":"Ada Lovelace"}"#);
}

#[test]
fn body_escapes_newlines_in_message() {
    let mut payload = RelayPayload::new();
    payload.insert("message".to_owned(), "line one\nline two".to_owned());
    let body = encode_body(&payload).unwrap();
    assert_eq!(body, r#"{"message":"line one\nline two"}"#);
}

// =============================================================
// Outcomes
// =============================================================

#[test]
fn ok_result_is_success() {
    assert_eq!(outcome_from(Ok(())), SubmissionOutcome::Success);
}

#[test]
fn status_error_is_failure_with_reason() {
    assert_eq!(
        outcome_from(Err(RelayError::Status(500))),
        SubmissionOutcome::Failure("relay responded with status 500".to_owned())
    );
}

#[test]
fn network_error_message_carries_cause() {
    let err = RelayError::Network("connection reset".to_owned());
    assert_eq!(err.to_string(), "relay request failed: connection reset");
}

// =============================================================
// Submission outside the browser
// =============================================================

#[tokio::test]
async fn submit_without_browser_is_unavailable() {
    let payload = RelayPayload::new();
    assert_eq!(submit(&payload).await, Err(RelayError::Unavailable));
}
