//! Schema validation error types.

use thiserror::Error;

/// Errors from schema generation or validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// JSON value did not pass schema validation.
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// Individual error messages from the validator.
        errors: Vec<String>,
    },

    /// Schema generation or compilation error.
    #[error("Schema generation error: {0}")]
    Generation(String),
}
