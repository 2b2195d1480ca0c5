//! # econcast-core
//!
//! Core types shared across the econcast crates:
//! - [`ForecastResult`], the record printed by the CLI and consumed downstream
//! - [`ForecastRequest`], the country/topic/year triple a forecast is asked for
//! - The instructional prompt template sent upstream
//! - The [`CompletionBackend`] contract an upstream text-generation service implements

pub mod completion;
pub mod forecast;
pub mod prompt;

pub use completion::{CompletionBackend, CompletionRequest, JSON_MIME_TYPE};
pub use forecast::{DEFAULT_YEAR, ForecastRequest, ForecastResult};
