//! Value enum for dynamic field values

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::SecondsFormat;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Placeholder rendered for null or missing fields.
///
/// Renderers are total over any row: a missing optional field renders as
/// this placeholder instead of panicking.
pub const NULL_PLACEHOLDER: &str = "-";

/// A dynamic value that can hold any grid field type.
///
/// This enum represents all field types the dashboard's records carry. It's
/// used in [`Row`](super::Row) to store field values dynamically.
///
/// Deserialization is untagged: JSON strings in `YYYY-MM-DD` or RFC 3339
/// form parse into `Date` / `DateTime`, everything else stays a `String`.
///
/// # Example
///
/// ```
/// use gridsync_lib::model::Value;
///
/// let name = Value::from("Amara");
/// let id = Value::from(42i64);
/// let empty = Value::Null;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Date and time with timezone.
    DateTime(DateTime<Utc>),
    /// Calendar date without a time component.
    Date(NaiveDate),
    /// String value.
    String(String),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::DateTime(_) => "datetime",
            Value::Date(_) => "date",
            Value::String(_) => "string",
        }
    }

    /// Renders this value as its display string.
    pub fn render(&self) -> String {
        match self {
            Value::Null => NULL_PLACEHOLDER.to_string(),
            Value::Bool(v) => v.to_string(),
            Value::Int(v) => v.to_string(),
            Value::Float(v) => v.to_string(),
            Value::DateTime(v) => v.to_rfc3339_opts(SecondsFormat::Secs, true),
            Value::Date(v) => v.format("%Y-%m-%d").to_string(),
            Value::String(v) => v.clone(),
        }
    }

    /// Returns the numeric value, if this value is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the chronological value, if this value is a date or datetime.
    ///
    /// Plain dates map to midnight UTC so the two variants order together.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::DateTime(v) => Some(*v),
            Value::Date(v) => v.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc()),
            _ => None,
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}
