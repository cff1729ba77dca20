//! Response-envelope test helpers
//!
//! Every API response is `{success, data?, error?, timestamp}`. These helpers
//! assert that contract without depending on backend types.

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use serde::Deserialize;
use serde_json::Value;

/// Local envelope struct that mirrors the backend's wire shape
#[derive(Debug, Deserialize)]
pub struct EnvelopeLike {
    pub success: bool,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
    pub timestamp: String,
}

/// Read a response body and parse it as an envelope, asserting the status.
pub async fn read_envelope<B: MessageBody>(
    resp: ServiceResponse<B>,
    expected_status: StatusCode,
) -> EnvelopeLike {
    let status = resp.status();
    let body = actix_web::test::read_body(resp).await;
    let body_str = String::from_utf8(body.to_vec()).expect("Response body should be valid UTF-8");

    assert_eq!(
        status, expected_status,
        "unexpected status, body was: {body_str}"
    );

    let envelope: EnvelopeLike =
        serde_json::from_str(&body_str).expect("Response body should be a JSON envelope");
    assert_timestamp_shape(&envelope.timestamp);
    envelope
}

/// Assert a successful envelope and return its `data` payload.
pub async fn expect_success<B: MessageBody>(
    resp: ServiceResponse<B>,
    expected_status: StatusCode,
) -> Value {
    let envelope = read_envelope(resp, expected_status).await;
    assert!(envelope.success, "expected success:true, got {envelope:?}");
    assert!(
        envelope.error.is_none(),
        "success envelope must not carry an error"
    );
    envelope.data.expect("success envelope should carry data")
}

/// Assert a failed envelope with the given status and error text.
///
/// Error responses must also carry a non-empty `x-trace-id` header.
pub async fn expect_failure<B: MessageBody>(
    resp: ServiceResponse<B>,
    expected_status: StatusCode,
    expected_error_contains: &str,
) -> EnvelopeLike {
    let trace_id = resp
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .expect("x-trace-id header should be present on error responses");
    assert!(!trace_id.is_empty(), "x-trace-id should not be empty");

    let envelope = read_envelope(resp, expected_status).await;
    assert!(!envelope.success, "expected success:false, got {envelope:?}");
    assert!(
        envelope.data.is_none(),
        "failure envelope must not carry data"
    );

    let error = envelope
        .error
        .as_deref()
        .expect("failure envelope should carry an error message");
    assert!(
        error.contains(expected_error_contains),
        "Expected error to contain '{expected_error_contains}', but got '{error}'"
    );
    envelope
}

/// Timestamps are `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn assert_timestamp_shape(ts: &str) {
    assert_eq!(ts.len(), 24, "unexpected timestamp shape: {ts}");
    assert!(ts.ends_with('Z'), "timestamp must be UTC: {ts}");
    assert_eq!(&ts[10..11], "T", "unexpected timestamp shape: {ts}");
    assert_eq!(&ts[19..20], ".", "timestamp must carry milliseconds: {ts}");
}
