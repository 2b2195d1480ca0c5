//! # econcast-gemini
//!
//! HTTP client for the Gemini `generateContent` endpoint.
//!
//! [`GeminiClient`] implements [`econcast_core::CompletionBackend`]: one
//! `POST /v1beta/models/{model}:generateContent` per call, structured JSON
//! output requested through `generationConfig`, no retries.

mod error;
mod status;
mod wire;

pub use error::GeminiError;

use econcast_config::GeminiConfig;
use econcast_core::{CompletionBackend, CompletionRequest};

use crate::status::check_response;
use crate::wire::{GenerateContentRequest, GenerateContentResponse};

/// Header carrying the Developer API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini REST client. Built once per process and reused.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Build a client from configuration.
    ///
    /// A missing API key is not an error here; calls fail with
    /// [`GeminiError::MissingApiKey`] instead.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError::Http`] if the underlying `reqwest::Client`
    /// cannot be built.
    pub fn new(config: &GeminiConfig) -> Result<Self, GeminiError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            api_key: config.api_key.trim().to_string(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `generateContent` URL for `model`.
    #[must_use]
    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{model}:generateContent", self.base_url)
    }

    /// Send one `generateContent` request and return the candidate text.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiError`] if no API key is configured, the request
    /// fails, the API returns a non-success status, or the body is not a
    /// `generateContent` response.
    pub async fn generate_content(
        &self,
        request: &CompletionRequest,
    ) -> Result<Option<String>, GeminiError> {
        if self.api_key.is_empty() {
            return Err(GeminiError::MissingApiKey);
        }

        let url = self.endpoint(&request.model);
        tracing::debug!(%url, model = %request.model, "sending generateContent request");

        let resp = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&GenerateContentRequest::from(request))
            .send()
            .await?;
        let body = check_response(resp).await?.text().await?;

        let response: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| GeminiError::Parse(e.to_string()))?;
        Ok(response.into_text())
    }
}

impl CompletionBackend for GeminiClient {
    type Error = GeminiError;

    async fn complete(&self, request: &CompletionRequest) -> Result<Option<String>, GeminiError> {
        self.generate_content(request).await
    }
}
