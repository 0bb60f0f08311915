//! Column schema for the data grid
//!
//! A schema is a static, side-effect-free list of column descriptors. It
//! declares how each field is accessed, labeled, rendered, sorted, and
//! filtered; the grid engines consult it but never mutate it.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::error::ConfigError;
use crate::model::Row;
use crate::model::Value;

/// A custom cell renderer: a pure function from a row to its display value.
pub type Renderer = Arc<dyn Fn(&Row) -> String + Send + Sync>;

/// How a column's values compare when sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnKind {
    /// Lexicographic comparison of the rendered value.
    #[default]
    Text,
    /// Numeric comparison of the raw field value.
    Number,
    /// Chronological comparison of the raw field value.
    Date,
}

/// One entry in a column's multi-select facet filter.
#[derive(Debug, Clone, PartialEq)]
pub struct FacetValue {
    /// Display label for the facet entry.
    pub label: String,
    /// Raw field value the entry matches against.
    pub value: Value,
}

impl FacetValue {
    /// Creates a new facet entry.
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Declarative description of a single grid column.
///
/// Columns default to sortable and filterable with `Text` comparison, which
/// matches most dashboard columns; opt out or change the kind per column.
///
/// # Example
///
/// ```
/// use gridsync_lib::schema::ColumnDescriptor;
/// use gridsync_lib::schema::ColumnKind;
/// use gridsync_lib::schema::FacetValue;
///
/// let column = ColumnDescriptor::new("department", "Department")
///     .with_facets([
///         FacetValue::new("Human Resources", "HR"),
///         FacetValue::new("Information Technology", "IT"),
///     ]);
///
/// let created = ColumnDescriptor::new("created_at", "Date Added")
///     .with_kind(ColumnKind::Date)
///     .with_filterable(false);
/// ```
#[derive(Clone)]
pub struct ColumnDescriptor {
    /// Field accessor key; unique across the schema.
    pub key: String,
    /// Display label for the column header.
    pub label: String,
    /// Comparison behavior when this column is the sort column.
    pub kind: ColumnKind,
    /// Whether the column accepts a sort.
    pub sortable: bool,
    /// Whether the column accepts a filter.
    pub filterable: bool,
    /// Facet entries for multi-select filtering on categorical columns.
    pub facet_values: Option<Vec<FacetValue>>,
    renderer: Option<Renderer>,
}

impl ColumnDescriptor {
    /// Creates a sortable, filterable text column.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind: ColumnKind::Text,
            sortable: true,
            filterable: true,
            facet_values: None,
            renderer: None,
        }
    }

    /// Sets the column's comparison kind.
    pub fn with_kind(mut self, kind: ColumnKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets whether the column accepts a sort.
    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Sets whether the column accepts a filter.
    pub fn with_filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    /// Declares facet entries for multi-select filtering.
    pub fn with_facets(mut self, facets: impl IntoIterator<Item = FacetValue>) -> Self {
        self.facet_values = Some(facets.into_iter().collect());
        self
    }

    /// Installs a custom renderer for this column.
    ///
    /// The function must be total over any conforming row: render a defined
    /// placeholder for missing fields rather than panicking.
    pub fn with_renderer(mut self, f: impl Fn(&Row) -> String + Send + Sync + 'static) -> Self {
        self.renderer = Some(Arc::new(f));
        self
    }

    /// Renders this column's display value for a row.
    ///
    /// Falls back to the raw field value's rendering (placeholder for
    /// missing/null fields) when no custom renderer is installed.
    pub fn render(&self, row: &Row) -> String {
        match &self.renderer {
            Some(f) => f(row),
            None => row.get(&self.key).render(),
        }
    }
}

impl fmt::Debug for ColumnDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("facet_values", &self.facet_values)
            .field("renderer", &self.renderer.is_some())
            .finish()
    }
}

/// A validated column schema.
///
/// Construction rejects malformed schemas (duplicate column keys, duplicate
/// facet values, facets on non-filterable columns) so every downstream
/// consumer can assume the invariants hold.
#[derive(Debug, Clone)]
pub struct Schema {
    columns: Vec<ColumnDescriptor>,
}

impl Schema {
    /// Validates and wraps a list of column descriptors.
    pub fn new(columns: Vec<ColumnDescriptor>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.key.as_str()) {
                return Err(ConfigError::DuplicateColumn(column.key.clone()));
            }
            if let Some(facets) = &column.facet_values {
                if !column.filterable {
                    return Err(ConfigError::FacetOnUnfilterable(column.key.clone()));
                }
                for (i, facet) in facets.iter().enumerate() {
                    if facets[..i].iter().any(|other| other.value == facet.value) {
                        return Err(ConfigError::DuplicateFacetValue {
                            column: column.key.clone(),
                            value: facet.value.render(),
                        });
                    }
                }
            }
        }
        Ok(Self { columns })
    }

    /// Looks up a column by key.
    pub fn column(&self, key: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|column| column.key == key)
    }

    /// Returns the columns in declaration order.
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_column_key_rejected() {
        let result = Schema::new(vec![
            ColumnDescriptor::new("name", "Name"),
            ColumnDescriptor::new("name", "Also Name"),
        ]);
        assert_eq!(result.unwrap_err(), ConfigError::DuplicateColumn("name".to_string()));
    }

    #[test]
    fn test_duplicate_facet_value_rejected() {
        let result = Schema::new(vec![ColumnDescriptor::new("status", "Status").with_facets([
            FacetValue::new("Present", "PRESENT"),
            FacetValue::new("Also Present", "PRESENT"),
        ])]);
        assert_eq!(
            result.unwrap_err(),
            ConfigError::DuplicateFacetValue {
                column: "status".to_string(),
                value: "PRESENT".to_string(),
            }
        );
    }

    #[test]
    fn test_facets_on_unfilterable_column_rejected() {
        let result = Schema::new(vec![
            ColumnDescriptor::new("status", "Status")
                .with_filterable(false)
                .with_facets([FacetValue::new("Present", "PRESENT")]),
        ]);
        assert_eq!(
            result.unwrap_err(),
            ConfigError::FacetOnUnfilterable("status".to_string())
        );
    }

    #[test]
    fn test_default_render_handles_missing_field() {
        let column = ColumnDescriptor::new("email", "Email");
        let row = Row::new(1).set("name", "Amara");
        assert_eq!(column.render(&row), crate::model::NULL_PLACEHOLDER);
    }

    #[test]
    fn test_custom_renderer() {
        let column = ColumnDescriptor::new("name", "Name")
            .with_renderer(|row| row.get("name").render().to_uppercase());
        let row = Row::new(1).set("name", "Amara");
        assert_eq!(column.render(&row), "AMARA");
    }
}
