//! Forecast generation error types.

use econcast_schema::SchemaError;
use thiserror::Error;

/// Why a forecast could not be generated. Every variant is recoverable:
/// [`crate::Forecaster::generate_forecast`] turns all of them into the
/// fallback record.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The service answered without any text.
    #[error("Empty response from completion service")]
    EmptyResponse,

    /// The response text is not JSON, or does not decode into a forecast.
    #[error("Malformed JSON in response: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// The response JSON does not match the forecast schema.
    #[error("Response failed schema validation: {0}")]
    Schema(#[from] SchemaError),

    /// Transport, authentication, or service-level failure.
    #[error("Completion service error: {0}")]
    Upstream(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ForecastError {
    /// Wrap a backend error.
    pub fn upstream<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Upstream(Box::new(error))
    }
}
