use std::fmt;

use serde::Serialize;

/// Single failed field-level rule, as reported to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Collects field violations across a whole request body.
///
/// Rules are evaluated in declaration order and every failing field is
/// reported, not just the first.
#[derive(Debug, Default)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a field rule, keeping the value on success.
    pub fn capture<T, E: fmt::Display>(&mut self, field: &str, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.0.push(FieldViolation {
                    field: field.to_string(),
                    message: e.to_string(),
                });
                None
            }
        }
    }

    /// Apply the non-empty rule to a required string field.
    pub fn require(&mut self, field: &str, value: Option<String>) -> Option<String> {
        match value {
            Some(v) if !v.is_empty() => Some(v),
            _ => {
                self.missing(field);
                None
            }
        }
    }

    /// Record a required field that was not provided.
    pub fn missing(&mut self, field: &str) {
        self.0.push(FieldViolation {
            field: field.to_string(),
            message: format!("{} is required", field),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<FieldViolation> {
        self.0
    }
}
