//! Filter engine: per-column predicates evaluated with AND semantics

use std::collections::BTreeMap;

use log::warn;

use crate::model::Row;
use crate::model::Value;
use crate::schema::ColumnDescriptor;
use crate::schema::Schema;

/// An active filter on a single column.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterPredicate {
    /// Case-insensitive substring match against the rendered display value.
    Text(String),
    /// Membership of the raw field value in an accepted set.
    ///
    /// An empty accepted set matches nothing, which is distinct from having
    /// no predicate on the column at all.
    Facet(Vec<Value>),
}

impl FilterPredicate {
    fn matches(&self, row: &Row, column: &ColumnDescriptor) -> bool {
        match self {
            FilterPredicate::Text(query) => {
                let needle = query.to_lowercase();
                column.render(row).to_lowercase().contains(&needle)
            }
            FilterPredicate::Facet(accepted) => accepted.contains(row.get(&column.key)),
        }
    }
}

/// The set of active filters, keyed by column.
///
/// Absence of an entry means "no constraint on this column". Entries for
/// keys the schema doesn't know are tolerated and ignored during
/// evaluation, so stale state across a schema change degrades safely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    entries: BTreeMap<String, FilterPredicate>,
}

impl FilterState {
    /// Creates an empty filter state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a free-text filter on a column.
    pub fn set_text(&mut self, column: impl Into<String>, query: impl Into<String>) {
        self.entries
            .insert(column.into(), FilterPredicate::Text(query.into()));
    }

    /// Sets a facet filter on a column to the given accepted values.
    pub fn set_facet(&mut self, column: impl Into<String>, accepted: Vec<Value>) {
        self.entries
            .insert(column.into(), FilterPredicate::Facet(accepted));
    }

    /// Removes the filter on a column, if any.
    pub fn clear_column(&mut self, column: &str) {
        self.entries.remove(column);
    }

    /// Removes all filters.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the predicate on a column, if one is active.
    pub fn predicate(&self, column: &str) -> Option<&FilterPredicate> {
        self.entries.get(column)
    }

    /// Returns `true` if no filter is active.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of active filters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over active filters in column-key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterPredicate)> {
        self.entries
            .iter()
            .map(|(column, predicate)| (column.as_str(), predicate))
    }
}

/// Returns the rows surviving every active filter, in their input order.
///
/// A row survives iff it matches all predicates (logical AND across
/// columns). Predicates on unknown or non-filterable columns are skipped.
/// Runs in O(rows × active filters); callers depend only on the
/// input/output relation, so an indexed implementation could be swapped in
/// transparently.
pub fn apply(rows: &[Row], state: &FilterState, schema: &Schema) -> Vec<Row> {
    if state.is_empty() {
        return rows.to_vec();
    }
    let active: Vec<(&ColumnDescriptor, &FilterPredicate)> = state
        .iter()
        .filter_map(|(key, predicate)| match schema.column(key) {
            Some(column) if column.filterable => Some((column, predicate)),
            Some(_) => {
                warn!("filter requested on non-filterable column `{key}`");
                None
            }
            None => None,
        })
        .collect();
    rows.iter()
        .filter(|row| {
            active
                .iter()
                .all(|(column, predicate)| predicate.matches(row, column))
        })
        .cloned()
        .collect()
}
