//! Compiled JSON Schema for [`ForecastResult`].

use econcast_core::ForecastResult;
use schemars::schema_for;

use crate::error::SchemaError;

/// The `ForecastResult` schema, generated with [`schemars::schema_for!`] and
/// compiled once for repeated validation.
pub struct ForecastSchema {
    schema: serde_json::Value,
    validator: jsonschema::Validator,
}

impl ForecastSchema {
    /// Generate and compile the schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Generation`] if the generated schema cannot be
    /// serialized or compiled.
    pub fn new() -> Result<Self, SchemaError> {
        let schema = serde_json::to_value(schema_for!(ForecastResult))
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;
        let validator = jsonschema::validator_for(&schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        Ok(Self { schema, validator })
    }

    /// The generated schema document.
    #[must_use]
    pub const fn schema(&self) -> &serde_json::Value {
        &self.schema
    }

    /// Validate an untyped JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::ValidationFailed`] listing every violation.
    pub fn validate(&self, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let errors: Vec<String> = self
            .validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }
}

impl std::fmt::Debug for ForecastSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastSchema")
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}
