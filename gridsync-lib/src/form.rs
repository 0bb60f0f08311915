//! Client-side form validation against a field schema
//!
//! Validation here is advisory: it lets the page surface every problem at
//! once before a mutation is attempted, but the remote source is free to
//! reject a payload for its own reasons regardless.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::ValidationErrors;
use crate::model::Value;

/// The type a field's input must conform to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// An email address.
    Email,
    /// A calendar date in `YYYY-MM-DD` form.
    Date,
    /// One of a fixed set of codes.
    Choice(Vec<String>),
}

/// Validation rule for a single form field.
///
/// Fields are required by default; call [`optional`](FieldRule::optional)
/// to relax that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    name: String,
    required: bool,
    kind: FieldKind,
    min_len: Option<usize>,
    max_len: Option<usize>,
}

impl FieldRule {
    /// Creates a required text field rule.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
            kind: FieldKind::Text,
            min_len: None,
            max_len: None,
        }
    }

    /// Marks the field as optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Sets the field's kind.
    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    /// Requires at least `min` characters.
    pub fn min_len(mut self, min: usize) -> Self {
        self.min_len = Some(min);
        self
    }

    /// Allows at most `max` characters.
    pub fn max_len(mut self, max: usize) -> Self {
        self.max_len = Some(max);
        self
    }

    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validates one raw input value, returning the normalized typed value
    /// or a human-readable message. Input is trimmed before any check.
    fn check(&self, raw: Option<&str>) -> Result<Option<Value>, String> {
        let value = raw.map(str::trim).unwrap_or("");
        if value.is_empty() {
            return if self.required {
                Err("required".to_string())
            } else {
                Ok(None)
            };
        }

        let length = value.chars().count();
        if let Some(min) = self.min_len {
            if length < min {
                return Err(format!("must be at least {min} characters"));
            }
        }
        if let Some(max) = self.max_len {
            if length > max {
                return Err(format!("must be at most {max} characters"));
            }
        }

        match &self.kind {
            FieldKind::Text => Ok(Some(Value::from(value))),
            FieldKind::Email => {
                if is_email(value) {
                    Ok(Some(Value::from(value)))
                } else {
                    Err("must be a valid email address".to_string())
                }
            }
            FieldKind::Date => NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .map(|date| Some(Value::Date(date)))
                .map_err(|_| "must be a date in YYYY-MM-DD format".to_string()),
            FieldKind::Choice(options) => {
                if options.iter().any(|option| option == value) {
                    Ok(Some(Value::from(value)))
                } else {
                    Err(format!("must be one of: {}", options.join(", ")))
                }
            }
        }
    }
}

fn is_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// An ordered set of field rules describing one create form.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use gridsync_lib::form::FieldKind;
/// use gridsync_lib::form::FieldRule;
/// use gridsync_lib::form::FormSchema;
///
/// let form = FormSchema::new(vec![
///     FieldRule::new("name").min_len(2).max_len(100),
///     FieldRule::new("email").kind(FieldKind::Email),
/// ]);
///
/// let mut input = BTreeMap::new();
/// input.insert("name".to_string(), "Amara".to_string());
/// input.insert("email".to_string(), "amara@example.com".to_string());
/// assert!(form.validate(&input).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    fields: Vec<FieldRule>,
}

impl FormSchema {
    /// Creates a form schema from field rules.
    pub fn new(fields: Vec<FieldRule>) -> Self {
        Self { fields }
    }

    /// Returns the field rules in declaration order.
    pub fn fields(&self) -> &[FieldRule] {
        &self.fields
    }

    /// Validates a candidate input record.
    ///
    /// Every field is evaluated independently (no short-circuiting), so the
    /// error carries one message per invalid field and the caller can show
    /// them all at once. On success, returns the normalized record: values
    /// trimmed and typed, optional empty fields omitted.
    pub fn validate(
        &self,
        input: &BTreeMap<String, String>,
    ) -> Result<BTreeMap<String, Value>, ValidationErrors> {
        let mut normalized = BTreeMap::new();
        let mut errors = ValidationErrors::new();

        for rule in &self.fields {
            match rule.check(input.get(rule.name()).map(String::as_str)) {
                Ok(Some(value)) => {
                    normalized.insert(rule.name().to_string(), value);
                }
                Ok(None) => {}
                Err(message) => errors.insert(rule.name(), message),
            }
        }

        if errors.is_empty() {
            Ok(normalized)
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn form() -> FormSchema {
        FormSchema::new(vec![
            FieldRule::new("name").min_len(2).max_len(100),
            FieldRule::new("email").kind(FieldKind::Email),
            FieldRule::new("department").kind(FieldKind::Choice(vec![
                "HR".to_string(),
                "IT".to_string(),
                "Sales".to_string(),
            ])),
        ])
    }

    #[test]
    fn test_valid_input_is_normalized() {
        let record = form()
            .validate(&input(&[
                ("name", "  Amara "),
                ("email", "amara@example.com"),
                ("department", "IT"),
            ]))
            .unwrap();
        assert_eq!(record.get("name"), Some(&Value::from("Amara")));
    }

    #[test]
    fn test_all_violations_reported_at_once() {
        let errors = form()
            .validate(&input(&[
                ("name", "A"),
                ("email", "not-an-email"),
                ("department", "IT"),
            ]))
            .unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), Some("must be at least 2 characters"));
        assert_eq!(errors.get("email"), Some("must be a valid email address"));
    }

    #[test]
    fn test_missing_required_field() {
        let errors = form()
            .validate(&input(&[
                ("name", "Amara"),
                ("email", "amara@example.com"),
            ]))
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("department"), Some("required"));
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let errors = form()
            .validate(&input(&[
                ("name", "   "),
                ("email", "amara@example.com"),
                ("department", "IT"),
            ]))
            .unwrap_err();
        assert_eq!(errors.get("name"), Some("required"));
    }

    #[test]
    fn test_choice_outside_set_rejected() {
        let errors = form()
            .validate(&input(&[
                ("name", "Amara"),
                ("email", "amara@example.com"),
                ("department", "Legal"),
            ]))
            .unwrap_err();
        assert_eq!(
            errors.get("department"),
            Some("must be one of: HR, IT, Sales")
        );
    }

    #[test]
    fn test_date_field_parses_and_types() {
        let form = FormSchema::new(vec![FieldRule::new("date").kind(FieldKind::Date)]);
        let record = form.validate(&input(&[("date", "2024-03-07")])).unwrap();
        assert!(matches!(record.get("date"), Some(Value::Date(_))));

        let errors = form.validate(&input(&[("date", "03/07/2024")])).unwrap_err();
        assert_eq!(errors.get("date"), Some("must be a date in YYYY-MM-DD format"));
    }

    #[test]
    fn test_optional_field_may_be_absent() {
        let form = FormSchema::new(vec![FieldRule::new("note").optional()]);
        let record = form.validate(&BTreeMap::new()).unwrap();
        assert!(record.is_empty());
    }

    #[test]
    fn test_email_edge_cases() {
        assert!(is_email("a@b.co"));
        assert!(!is_email("@b.co"));
        assert!(!is_email("a@bco"));
        assert!(!is_email("a b@c.co"));
        assert!(!is_email("a@.co"));
    }
}
