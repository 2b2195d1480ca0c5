//! Contract between the forecaster and an upstream text-generation service.

use std::future::Future;

/// MIME type requested for structured JSON output.
pub const JSON_MIME_TYPE: &str = "application/json";

/// A single structured-output completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Pinned model identifier (e.g. `gemini-2.5-pro`).
    pub model: String,
    /// Prompt text, sent with the `user` role.
    pub prompt: String,
    pub response_mime_type: String,
    /// Schema the response text must conform to, in the backend's dialect.
    pub response_schema: serde_json::Value,
    pub temperature: f32,
}

/// An upstream service that turns a [`CompletionRequest`] into response text.
///
/// Implementations make exactly one call per [`complete`](Self::complete)
/// and never retry. `Ok(None)` means the service answered without any text.
pub trait CompletionBackend {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Submit `request` and return the raw response text.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` for transport, authentication, or service-level
    /// failures.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send;
}
