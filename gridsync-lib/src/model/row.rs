//! Keyed record type for grid rows

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use super::Value;

/// Stable unique key identifying a row within a resource.
pub type RowKey = i64;

static NULL: Value = Value::Null;

/// A single record in a canonical row set.
///
/// Rows are immutable once fetched: the sync layer replaces the whole row
/// set on re-fetch rather than patching rows in place. The builder-style
/// `set` exists for constructing rows, not for editing fetched ones.
///
/// # Example
///
/// ```
/// use gridsync_lib::model::Row;
///
/// let row = Row::new(1)
///     .set("name", "Amara")
///     .set("department", "IT");
///
/// assert_eq!(row.get("name").render(), "Amara");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    key: RowKey,
    fields: BTreeMap<String, Value>,
}

impl Row {
    /// Creates an empty row with the given key.
    pub fn new(key: RowKey) -> Self {
        Self {
            key,
            fields: BTreeMap::new(),
        }
    }

    /// Sets a field value, consuming and returning the row.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Returns the row's stable key.
    pub fn key(&self) -> RowKey {
        self.key
    }

    /// Returns a field value, if present.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns a field value, treating missing fields as [`Value::Null`].
    pub fn get(&self, name: &str) -> &Value {
        self.fields.get(name).unwrap_or(&NULL)
    }

    /// Returns the number of fields in this row.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if this row has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the row's fields in name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}
