//! Client-side request metrics.
//!
//! # Metrics
//! - `api_client_requests_total` (counter): requests by method and outcome
//! - `api_client_request_duration_seconds` (histogram): round-trip latency
//!
//! Metrics go through the `metrics` facade; without an installed recorder
//! they cost nothing.

use std::time::Duration;

/// How a single request ended, as seen by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    HttpError,
    NetworkError,
    DecodeError,
    /// Rejected before anything was sent (bad URL, unserializable body).
    InvalidRequest,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::HttpError => "http_error",
            Outcome::NetworkError => "network_error",
            Outcome::DecodeError => "decode_error",
            Outcome::InvalidRequest => "invalid_request",
        }
    }
}

/// Record one finished request.
pub fn record_request(method: &str, outcome: Outcome, elapsed: Duration) {
    metrics::counter!(
        "api_client_requests_total",
        "method" => method.to_string(),
        "outcome" => outcome.as_str()
    )
    .increment(1);
    metrics::histogram!(
        "api_client_request_duration_seconds",
        "method" => method.to_string()
    )
    .record(elapsed.as_secs_f64());
}
