//! Validation error types

use std::collections::BTreeMap;

/// Error information for a specific field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// The field that failed validation.
    pub field: String,
    /// Human-readable validation error message.
    pub message: String,
}

impl FieldViolation {
    /// Creates a new field violation.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All violations for a submitted record, keyed by field name.
///
/// Every field is validated independently, so a caller can display the full
/// set of problems at once rather than one at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: BTreeMap<String, String>,
}

impl ValidationErrors {
    /// Creates an empty violation set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation for a field, replacing any earlier message.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.violations.insert(field.into(), message.into());
    }

    /// Returns the message for a field, if it has a violation.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.violations.get(field).map(String::as_str)
    }

    /// Returns `true` if the field has a violation.
    pub fn contains(&self, field: &str) -> bool {
        self.violations.contains_key(field)
    }

    /// Returns `true` if no field has a violation.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the number of fields with violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Iterates over violations in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = FieldViolation> + '_ {
        self.violations
            .iter()
            .map(|(field, message)| FieldViolation::new(field, message))
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.violations {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
