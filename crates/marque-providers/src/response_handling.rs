//! Helpers for non-success Gemini replies

use reqwest::header::{HeaderMap, RETRY_AFTER};
use serde_json::Value;

/// Retry delay in milliseconds from a numeric `Retry-After` header.
pub fn extract_retry_after(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
        .and_then(|secs| secs.checked_mul(1000))
}

/// Retry delay in milliseconds from a `google.rpc.RetryInfo` detail.
///
/// Gemini quota errors carry `"retryDelay": "37s"` (fractional seconds allowed)
/// inside `error.details` rather than a header.
pub fn retry_delay_from_body(body: &str) -> Option<u64> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .pointer("/error/details")?
        .as_array()?
        .iter()
        .filter_map(|detail| detail.get("retryDelay")?.as_str())
        .find_map(parse_duration_ms)
}

fn parse_duration_ms(delay: &str) -> Option<u64> {
    let secs: f64 = delay.trim().strip_suffix('s')?.parse().ok()?;
    if !secs.is_finite() || secs < 0.0 {
        return None;
    }
    Some((secs * 1000.0).round() as u64)
}

/// Reads an error body, substituting a placeholder when the read itself fails.
pub async fn read_error_body(response: reqwest::Response) -> String {
    match response.text().await {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!(error = %e, "failed to read Gemini error body");
            String::from("<unreadable error body>")
        }
    }
}
