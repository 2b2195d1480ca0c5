//! Gemini error responses.
//!
//! A failed call carries a `google.rpc.Status` envelope:
//!
//! ```json
//! {"error": {"code": 403, "message": "API key not valid.", "status": "PERMISSION_DENIED"}}
//! ```
//!
//! Quota errors (429) name the wait in a `RetryInfo` detail, not in a header.

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use serde::Deserialize;

use crate::error::GeminiError;

/// Wait reported for a 429 that names none.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

const RETRY_INFO_TYPE: &str = "type.googleapis.com/google.rpc.RetryInfo";

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: RpcStatus,
}

#[derive(Debug, Deserialize)]
struct RpcStatus {
    #[serde(default)]
    message: String,
    status: Option<String>,
    #[serde(default)]
    details: Vec<StatusDetail>,
}

#[derive(Debug, Deserialize)]
struct StatusDetail {
    #[serde(rename = "@type", default)]
    type_url: String,
    #[serde(rename = "retryDelay")]
    retry_delay: Option<String>,
}

impl RpcStatus {
    /// `"PERMISSION_DENIED: API key not valid."`, or just the message.
    fn describe(&self) -> String {
        match self.status.as_deref() {
            Some(status) if !status.is_empty() => format!("{status}: {}", self.message),
            _ => self.message.clone(),
        }
    }

    fn retry_delay_secs(&self) -> Option<u64> {
        self.details
            .iter()
            .filter(|detail| detail.type_url == RETRY_INFO_TYPE)
            .find_map(|detail| detail.retry_delay.as_deref().and_then(duration_secs))
    }
}

/// Pass a successful response through, turn anything else into a [`GeminiError`].
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, GeminiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let retry_after = header_retry_after(resp.headers());
    let body = resp.text().await.unwrap_or_default();
    Err(classify_failure(status, retry_after, &body))
}

fn classify_failure(status: StatusCode, retry_after: Option<u64>, body: &str) -> GeminiError {
    let rpc = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error);

    if status == StatusCode::TOO_MANY_REQUESTS {
        return GeminiError::RateLimited {
            retry_after_secs: rpc
                .as_ref()
                .and_then(RpcStatus::retry_delay_secs)
                .or(retry_after)
                .unwrap_or(DEFAULT_RETRY_AFTER_SECS),
        };
    }

    let message = match rpc {
        Some(rpc) => rpc.describe(),
        None if body.trim().is_empty() => status.canonical_reason().unwrap_or_default().to_string(),
        None => body.trim().to_string(),
    };
    GeminiError::Api {
        status: status.as_u16(),
        message,
    }
}

fn header_retry_after(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

/// Protobuf JSON duration (`"37s"`, `"1.5s"`) rounded up to whole seconds.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn duration_secs(raw: &str) -> Option<u64> {
    let secs: f64 = raw.trim().strip_suffix('s')?.parse().ok()?;
    (secs.is_finite() && secs >= 0.0).then(|| secs.ceil() as u64)
}
