//! Column visibility and row selection state
//!
//! Pure session-local containers. They are consulted by the projection but
//! never drive data fetches, and the page presenting the grid owns them so
//! grids with different schemas never share state.

use std::collections::BTreeSet;

use crate::model::RowKey;
use crate::schema::Schema;

/// Which columns are currently hidden.
///
/// Stored as a hidden-key set so unknown keys default to visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityState {
    hidden: BTreeSet<String>,
}

impl VisibilityState {
    /// Creates a state with every column visible.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles a single column's visibility.
    pub fn toggle_column(&mut self, key: &str) {
        if !self.hidden.remove(key) {
            self.hidden.insert(key.to_string());
        }
    }

    /// Makes exactly the given schema columns visible, hiding the rest.
    pub fn set_visible<'a>(&mut self, schema: &Schema, keys: impl IntoIterator<Item = &'a str>) {
        let visible: BTreeSet<&str> = keys.into_iter().collect();
        self.hidden = schema
            .columns()
            .iter()
            .filter(|column| !visible.contains(column.key.as_str()))
            .map(|column| column.key.clone())
            .collect();
    }

    /// Returns `true` if the column is visible. Unknown keys are visible.
    pub fn is_visible(&self, key: &str) -> bool {
        !self.hidden.contains(key)
    }

    /// Returns the number of hidden columns.
    pub fn hidden_count(&self) -> usize {
        self.hidden.len()
    }
}

/// Which rows are currently selected.
///
/// Cleared whenever the canonical row set is replaced by a fresh fetch,
/// since row identities may have changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: BTreeSet<RowKey>,
}

impl SelectionState {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles a single row's selection.
    pub fn toggle_row(&mut self, key: RowKey) {
        if !self.selected.remove(&key) {
            self.selected.insert(key);
        }
    }

    /// Selects every given row key.
    pub fn select_all(&mut self, keys: impl IntoIterator<Item = RowKey>) {
        self.selected.extend(keys);
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Returns `true` if the row is selected.
    pub fn is_selected(&self, key: RowKey) -> bool {
        self.selected.contains(&key)
    }

    /// Returns the number of selected rows.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns `true` if no row is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Iterates over selected row keys in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = RowKey> + '_ {
        self.selected.iter().copied()
    }
}
