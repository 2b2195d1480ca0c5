//! Instructional prompt sent to the completion backend.

use crate::ForecastRequest;

/// Build the analyst prompt for `request`.
///
/// The example JSON shape at the end mirrors [`crate::ForecastResult`] and
/// pre-fills `title` and `country` so the model echoes them back.
#[must_use]
pub fn build_prompt(request: &ForecastRequest) -> String {
    let ForecastRequest {
        country,
        topic,
        year,
    } = request;

    format!(
        r#"As an expert economic analyst, provide a detailed economic forecast for {country} regarding {topic} for the year {year}.

Please provide:
1. A specific numerical prediction or percentage with proper economic context
2. A confidence level (0-100) based on available data and economic stability
3. A detailed analysis explaining the forecast methodology and reasoning
4. Key economic drivers that influence this forecast

Focus on realistic, data-driven predictions based on current economic trends, historical data, and geopolitical factors.
Consider factors like inflation rates, GDP growth, government policies, international trade, and global economic conditions.

Respond in JSON format with the following structure:
{{
    "title": "{topic} {year}",
    "country": "{country}",
    "value": "your numerical prediction with context",
    "confidence": confidence_score_0_to_100,
    "detail": "detailed analysis and methodology explanation",
    "key_drivers": ["driver1", "driver2", "driver3"]
}}
"#
    )
}
