//! # econcast-forecast
//!
//! The forecast requester.
//!
//! [`Forecaster`] builds the analyst prompt for a [`ForecastRequest`], makes
//! exactly one call to its [`CompletionBackend`], and validates the returned
//! JSON against the `ForecastResult` schema.
//!
//! Two entry points:
//! - [`Forecaster::try_generate_forecast`] returns `Result<ForecastResult, ForecastError>`
//! - [`Forecaster::generate_forecast`] never fails: any error is logged and
//!   replaced by [`ForecastResult::fallback`]

mod decode;
mod error;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use decode::decode_forecast;
pub use error::ForecastError;

use econcast_config::ForecastConfig;
use econcast_core::{
    CompletionBackend, CompletionRequest, ForecastRequest, ForecastResult, JSON_MIME_TYPE,
    prompt::build_prompt,
};
use econcast_schema::{ForecastSchema, gemini_response_schema};

/// Model and sampling parameters sent with every request.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSettings {
    pub model: String,
    pub temperature: f32,
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self::from(&ForecastConfig::default())
    }
}

impl From<&ForecastConfig> for ForecastSettings {
    fn from(config: &ForecastConfig) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }
}

/// Generates forecasts through a completion backend.
#[derive(Debug)]
pub struct Forecaster<B> {
    backend: B,
    settings: ForecastSettings,
    schema: ForecastSchema,
    response_schema: serde_json::Value,
}

impl<B: CompletionBackend> Forecaster<B> {
    /// Wrap `backend`, compiling the forecast schema once.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::Schema`] if the forecast schema cannot be
    /// generated or compiled.
    pub fn new(backend: B, settings: ForecastSettings) -> Result<Self, ForecastError> {
        Ok(Self {
            backend,
            settings,
            schema: ForecastSchema::new()?,
            response_schema: gemini_response_schema(),
        })
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    pub const fn settings(&self) -> &ForecastSettings {
        &self.settings
    }

    /// The request sent upstream for `request`.
    #[must_use]
    pub fn completion_request(&self, request: &ForecastRequest) -> CompletionRequest {
        CompletionRequest {
            model: self.settings.model.clone(),
            prompt: build_prompt(request),
            response_mime_type: JSON_MIME_TYPE.to_string(),
            response_schema: self.response_schema.clone(),
            temperature: self.settings.temperature,
        }
    }

    /// Generate a forecast, reporting why it failed if it did.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError`] when the backend fails, answers without
    /// text, or answers with text that is not a valid forecast.
    pub async fn try_generate_forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<ForecastResult, ForecastError> {
        let completion = self.completion_request(request);
        tracing::debug!(
            country = %request.country,
            topic = %request.topic,
            year = %request.year,
            model = %completion.model,
            "requesting forecast"
        );

        let text = self
            .backend
            .complete(&completion)
            .await
            .map_err(ForecastError::upstream)?
            .ok_or(ForecastError::EmptyResponse)?;

        let result = decode_forecast(&text, &self.schema)?;
        if !result.confidence_in_range() {
            tracing::warn!(
                confidence = result.confidence,
                "forecast confidence outside 0-100, passing through unchanged"
            );
        }
        Ok(result)
    }

    /// Generate a forecast. Never fails: on any error the failure is logged
    /// and [`ForecastResult::fallback`] is returned.
    pub async fn generate_forecast(&self, request: &ForecastRequest) -> ForecastResult {
        match self.try_generate_forecast(request).await {
            Ok(result) => result,
            Err(error) => {
                tracing::error!(
                    country = %request.country,
                    topic = %request.topic,
                    "Forecast generation failed, using fallback: {error}"
                );
                ForecastResult::fallback(request)
            }
        }
    }
}
