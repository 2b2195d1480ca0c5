//! Gemini client error types.

use thiserror::Error;

/// Errors that can occur when calling the Gemini API.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// HTTP transport error (connect, TLS, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// `STATUS: message` from the error envelope, or the raw body text.
        message: String,
    },

    /// The API returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds the server asked callers to wait.
        retry_after_secs: u64,
    },

    /// The response body was not a `generateContent` response.
    #[error("parse error: {0}")]
    Parse(String),

    /// No API key was configured.
    #[error("no Gemini API key configured (set GEMINI_API_KEY or ECONCAST_GEMINI__API_KEY)")]
    MissingApiKey,
}
