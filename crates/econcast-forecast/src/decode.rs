//! Response text → validated [`ForecastResult`].

use econcast_core::ForecastResult;
use econcast_schema::ForecastSchema;

use crate::error::ForecastError;

/// Parse, validate, and decode response text.
///
/// Empty or whitespace-only text is [`ForecastError::EmptyResponse`]. Values
/// pass through unchanged apart from type coercion
/// (`75.0` and `"75"` both become `75`).
///
/// # Errors
///
/// Returns [`ForecastError::EmptyResponse`], [`ForecastError::MalformedJson`],
/// or [`ForecastError::Schema`].
pub fn decode_forecast(text: &str, schema: &ForecastSchema) -> Result<ForecastResult, ForecastError> {
    if text.trim().is_empty() {
        return Err(ForecastError::EmptyResponse);
    }

    let value: serde_json::Value = serde_json::from_str(text)?;
    schema.validate(&value)?;
    Ok(serde_json::from_value(value)?)
}
