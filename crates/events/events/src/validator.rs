//! Runtime shape validation for untyped event payloads.

use serde_json::{Map, Value};

use crate::error::{EventError, EventResult};

/// Result of shape validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            valid: true,
            errors: vec![],
        }
    }

    pub fn invalid(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: false,
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn to_event_result(&self) -> EventResult<()> {
        if self.valid {
            Ok(())
        } else {
            Err(EventError::ValidationError(
                self.errors
                    .iter()
                    .map(|e| format!("{}: {}", e.path, e.message))
                    .collect::<Vec<_>>()
                    .join("; "),
            ))
        }
    }
}

/// Validation error details
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    pub fn with_actual(mut self, actual: impl Into<String>) -> Self {
        self.actual = Some(actual.into());
        self
    }
}

/// Checks that a payload is an object with exactly the given string fields.
pub struct ShapeValidator;

impl ShapeValidator {
    pub fn new() -> Self {
        Self
    }

    fn json_type(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    fn validate_required(&self, obj: &Map<String, Value>, fields: &[&str]) -> Vec<ValidationError> {
        let mut errors = vec![];

        for field in fields {
            match obj.get(*field) {
                None => errors.push(ValidationError::new(
                    *field,
                    format!("Required field '{}' is missing", field),
                )),
                Some(value) if !value.is_string() => errors.push(
                    ValidationError::new(*field, "Type mismatch")
                        .with_expected("string")
                        .with_actual(Self::json_type(value)),
                ),
                Some(_) => {}
            }
        }

        errors
    }

    fn validate_no_extra(&self, obj: &Map<String, Value>, fields: &[&str]) -> Vec<ValidationError> {
        obj.keys()
            .filter(|key| !fields.contains(&key.as_str()))
            .map(|key| ValidationError::new(key.as_str(), format!("Unexpected field '{}'", key)))
            .collect()
    }

    /// Validates `payload` against the declared `fields`.
    pub fn validate(&self, payload: &Value, fields: &[&str]) -> ValidationResult {
        let Some(obj) = payload.as_object() else {
            return ValidationResult::invalid(vec![
                ValidationError::new("$", "Type mismatch")
                    .with_expected("object")
                    .with_actual(Self::json_type(payload)),
            ]);
        };

        let mut errors = self.validate_required(obj, fields);
        errors.extend(self.validate_no_extra(obj, fields));

        if errors.is_empty() {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(errors)
        }
    }
}

impl Default for ShapeValidator {
    fn default() -> Self {
        Self::new()
    }
}
