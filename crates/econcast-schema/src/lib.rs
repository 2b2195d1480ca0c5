//! # econcast-schema
//!
//! JSON Schema generation and validation for forecast payloads.
//!
//! [`econcast_core::ForecastResult`] derives `JsonSchema`; this crate compiles
//! that schema once and validates untyped model output against it before it
//! is decoded. It also renders the same shape in the OpenAPI-subset dialect
//! Gemini accepts as a `responseSchema`.

mod error;
mod forecast;
mod gemini;

pub use error::SchemaError;
pub use forecast::ForecastSchema;
pub use gemini::gemini_response_schema;
