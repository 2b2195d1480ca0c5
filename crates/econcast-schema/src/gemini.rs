//! `ForecastResult` in Gemini's `responseSchema` dialect.
//!
//! Gemini accepts an OpenAPI 3.0 subset: uppercase type names, no `$schema`,
//! no `format: int64`. `propertyOrdering` keeps the model emitting fields in
//! the same order the CLI prints them.

use serde_json::{Value, json};

/// Field names in output order.
const FIELD_ORDER: [&str; 6] = [
    "title",
    "country",
    "value",
    "confidence",
    "detail",
    "key_drivers",
];

/// Build the response schema sent with every generation request.
#[must_use]
pub fn gemini_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "country": { "type": "STRING" },
            "value": { "type": "STRING" },
            "confidence": { "type": "INTEGER" },
            "detail": { "type": "STRING" },
            "key_drivers": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        },
        "required": FIELD_ORDER,
        "propertyOrdering": FIELD_ORDER,
    })
}
