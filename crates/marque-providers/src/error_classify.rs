//! Gemini error classification
//!
//! Gemini returns errors in the format:
//! `{"error": {"code": 400, "message": "...", "status": "INVALID_ARGUMENT"}}`.
//! Classification only shapes what gets logged; callers never retry on it.

use crate::error::ProviderError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

const DEFAULT_RATE_LIMIT_RETRY_MS: u64 = 60_000;
const PROVIDER_NAME: &str = "gemini";

lazy_static! {
    static ref AUTH_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)api[_\s]?key not valid").unwrap(),
        Regex::new(r"(?i)invalid[_\s]?api[_\s]?key").unwrap(),
        Regex::new(r"(?i)api[_\s]?key expired").unwrap(),
        Regex::new(r"(?i)permission denied").unwrap(),
        Regex::new(r"(?i)unauthenticated").unwrap(),
    ];

    static ref RATE_LIMIT_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)resource[_\s]?exhausted").unwrap(),
        Regex::new(r"(?i)quota").unwrap(),
        Regex::new(r"(?i)rate[_\s]?limit").unwrap(),
    ];
}

#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: Option<String>,
    status: Option<String>,
}

#[derive(Debug, Default)]
pub struct GeminiErrorInfo {
    pub message: String,
    pub status: Option<String>,
}

/// Parse a Gemini error body, falling back to the raw text
pub fn parse_error_body(body: &str) -> GeminiErrorInfo {
    if let Ok(parsed) = serde_json::from_str::<GeminiErrorResponse>(body) {
        return GeminiErrorInfo {
            message: parsed.error.message.unwrap_or_else(|| body.to_string()),
            status: parsed.error.status,
        };
    }

    GeminiErrorInfo {
        message: body.to_string(),
        status: None,
    }
}

fn is_auth(message: &str, status: Option<&str>) -> bool {
    if matches!(status, Some("UNAUTHENTICATED") | Some("PERMISSION_DENIED")) {
        return true;
    }
    AUTH_PATTERNS.iter().any(|pattern| pattern.is_match(message))
}

fn is_rate_limit(message: &str, status: Option<&str>) -> bool {
    if status == Some("RESOURCE_EXHAUSTED") {
        return true;
    }
    RATE_LIMIT_PATTERNS
        .iter()
        .any(|pattern| pattern.is_match(message))
}

/// Classify a non-success Gemini reply.
///
/// `retry_after_ms` comes from the `Retry-After` header when present.
pub fn classify_error(
    status: u16,
    body: &str,
    model: &str,
    retry_after_ms: Option<u64>,
) -> ProviderError {
    let info = parse_error_body(body);
    let message = &info.message;
    let api_status = info.status.as_deref();

    match status {
        401 | 403 => return ProviderError::AuthenticationFailed(message.clone()),
        404 => {
            return ProviderError::ModelNotFound {
                model: model.to_string(),
            }
        }
        429 => {
            return ProviderError::RateLimited {
                retry_after_ms: retry_after_ms.unwrap_or(DEFAULT_RATE_LIMIT_RETRY_MS),
            }
        }
        _ => {}
    }

    // Gemini answers a bad key with 400 INVALID_ARGUMENT
    if is_auth(message, api_status) {
        return ProviderError::AuthenticationFailed(message.clone());
    }

    if is_rate_limit(message, api_status) {
        return ProviderError::RateLimited {
            retry_after_ms: retry_after_ms.unwrap_or(DEFAULT_RATE_LIMIT_RETRY_MS),
        };
    }

    if status >= 500 {
        return ProviderError::Unavailable {
            provider: PROVIDER_NAME.to_string(),
        };
    }

    ProviderError::Api {
        status,
        message: message.clone(),
    }
}
