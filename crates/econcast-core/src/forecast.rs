//! The forecast record and the request that produces it.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Year used when the caller does not name one.
pub const DEFAULT_YEAR: &str = "2026";

/// Prediction text substituted when the upstream service fails.
pub const FALLBACK_VALUE: &str = "Data unavailable - AI service error";

/// Confidence substituted when the upstream service fails.
pub const FALLBACK_CONFIDENCE: i64 = 50;

/// Drivers substituted when the upstream service fails.
pub const FALLBACK_KEY_DRIVERS: [&str; 2] = ["AI service unavailable", "Manual intervention needed"];

/// A structured economic forecast.
///
/// Field order is part of the output contract: downstream consumers read the
/// pretty-printed JSON as `title, country, value, confidence, detail, key_drivers`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ForecastResult {
    /// `"{topic} {year}"` when synthesized, otherwise whatever the service returned.
    pub title: String,
    pub country: String,
    /// Free-text prediction with context (e.g. `"+3.1% real GDP growth"`).
    pub value: String,
    /// Expected to be 0-100. Not clamped.
    #[serde(deserialize_with = "deserialize_confidence")]
    #[schemars(schema_with = "confidence_schema")]
    pub confidence: i64,
    /// Methodology and reasoning behind the prediction.
    pub detail: String,
    /// Causal factors, in the order the service listed them.
    pub key_drivers: Vec<String>,
}

impl ForecastResult {
    /// The fixed record returned whenever a forecast cannot be generated.
    #[must_use]
    pub fn fallback(request: &ForecastRequest) -> Self {
        Self {
            title: request.title(),
            country: request.country.clone(),
            value: FALLBACK_VALUE.to_string(),
            confidence: FALLBACK_CONFIDENCE,
            detail: format!(
                "Unable to generate AI forecast for {} {}. Please try again later.",
                request.country, request.topic
            ),
            key_drivers: FALLBACK_KEY_DRIVERS.iter().map(ToString::to_string).collect(),
        }
    }

    /// Whether `confidence` lies in the documented 0-100 range.
    #[must_use]
    pub const fn confidence_in_range(&self) -> bool {
        self.confidence >= 0 && self.confidence <= 100
    }
}

/// An integer, or a string holding one. Models occasionally quote numbers.
fn confidence_schema(_: &mut schemars::SchemaGenerator) -> schemars::Schema {
    schemars::json_schema!({
        "anyOf": [
            { "type": "integer" },
            { "type": "string", "pattern": "^-?[0-9]+$" }
        ]
    })
}

/// Accept integers, integral floats (`75.0`) and numeric strings (`"75"`).
/// Fractional numbers and non-numeric strings are rejected.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn deserialize_confidence<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Str(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(value) => Ok(value),
        Raw::Float(value)
            if value.fract() == 0.0 && value >= i64::MIN as f64 && value <= i64::MAX as f64 =>
        {
            Ok(value as i64)
        }
        Raw::Float(value) => Err(serde::de::Error::custom(format!(
            "confidence must be an integer, got {value}"
        ))),
        Raw::Str(value) => value.parse::<i64>().map_err(|_| {
            serde::de::Error::custom(format!("confidence must be an integer, got {value:?}"))
        }),
    }
}

/// What a forecast is asked for. No validation: any string, including an
/// empty one, is interpolated into the prompt as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastRequest {
    pub country: String,
    pub topic: String,
    pub year: String,
}

impl ForecastRequest {
    /// Request a forecast for [`DEFAULT_YEAR`].
    #[must_use]
    pub fn new(country: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            topic: topic.into(),
            year: DEFAULT_YEAR.to_string(),
        }
    }

    #[must_use]
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    /// `"{topic} {year}"`, the title used in the prompt example and the fallback.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} {}", self.topic, self.year)
    }
}
