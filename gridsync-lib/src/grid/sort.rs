//! Sort engine: stable single-column ordering

use std::cmp::Ordering;

use log::warn;

use crate::model::Row;
use crate::schema::ColumnDescriptor;
use crate::schema::ColumnKind;
use crate::schema::Schema;

/// Sort direction for the active sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending order (A-Z, 0-9, oldest first).
    #[default]
    Ascending,
    /// Descending order (Z-A, 9-0, newest first).
    Descending,
}

/// The active sort: at most one column at a time.
///
/// `column = None` means insertion order, i.e. the order rows were fetched.
///
/// # Example
///
/// ```
/// use gridsync_lib::grid::SortState;
///
/// let mut sort = SortState::none();
/// sort.toggle("name"); // ascending
/// sort.toggle("name"); // descending
/// sort.toggle("name"); // back to insertion order
/// assert_eq!(sort.column(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortState {
    column: Option<String>,
    direction: SortDirection,
}

impl SortState {
    /// Creates a sort state preserving insertion order.
    pub fn none() -> Self {
        Self::default()
    }

    /// Creates an ascending sort on a column.
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: Some(column.into()),
            direction: SortDirection::Ascending,
        }
    }

    /// Creates a descending sort on a column.
    pub fn descending(column: impl Into<String>) -> Self {
        Self {
            column: Some(column.into()),
            direction: SortDirection::Descending,
        }
    }

    /// Cycles the sort on a column the way a header click does:
    /// ascending, then descending, then back to insertion order. Clicking a
    /// different column starts over at ascending.
    pub fn toggle(&mut self, column: &str) {
        match (&self.column, self.direction) {
            (Some(current), SortDirection::Ascending) if current == column => {
                self.direction = SortDirection::Descending;
            }
            (Some(current), SortDirection::Descending) if current == column => {
                self.column = None;
                self.direction = SortDirection::Ascending;
            }
            _ => {
                self.column = Some(column.to_string());
                self.direction = SortDirection::Ascending;
            }
        }
    }

    /// Returns the active sort column, if any.
    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    /// Returns the sort direction.
    pub fn direction(&self) -> SortDirection {
        self.direction
    }
}

/// Returns the rows ordered by the active sort column.
///
/// With no active column the input order is preserved. The sort is stable:
/// rows with equal keys keep their relative input order, and descending
/// reverses the comparator rather than the output so ties behave
/// identically in both directions. Sorting on an unknown or unsortable
/// column is a caller contract violation that degrades to the no-sort
/// behavior instead of failing.
pub fn apply(rows: &[Row], state: &SortState, schema: &Schema) -> Vec<Row> {
    let Some(key) = state.column() else {
        return rows.to_vec();
    };
    let Some(column) = schema.column(key) else {
        warn!("sort requested on unknown column `{key}`");
        return rows.to_vec();
    };
    if !column.sortable {
        warn!("sort requested on unsortable column `{key}`");
        return rows.to_vec();
    }

    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare(a, b, column);
        match state.direction() {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

/// Total order over two rows for one column. Values that don't fit the
/// column's declared kind (and nulls) sort before those that do.
fn compare(a: &Row, b: &Row, column: &ColumnDescriptor) -> Ordering {
    match column.kind {
        ColumnKind::Number => {
            match (a.get(&column.key).as_f64(), b.get(&column.key).as_f64()) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                (Some(_), None) => Ordering::Greater,
                (None, Some(_)) => Ordering::Less,
                (None, None) => Ordering::Equal,
            }
        }
        ColumnKind::Date => {
            match (
                a.get(&column.key).as_datetime(),
                b.get(&column.key).as_datetime(),
            ) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Greater,
                (None, Some(_)) => Ordering::Less,
                (None, None) => column.render(a).cmp(&column.render(b)),
            }
        }
        ColumnKind::Text => column.render(a).cmp(&column.render(b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn schema() -> Schema {
        Schema::new(vec![
            ColumnDescriptor::new("name", "Name"),
            ColumnDescriptor::new("headcount", "Headcount").with_kind(ColumnKind::Number),
            ColumnDescriptor::new("date", "Date").with_kind(ColumnKind::Date),
            ColumnDescriptor::new("id", "ID").with_sortable(false),
        ])
        .unwrap()
    }

    fn names(rows: &[Row]) -> Vec<String> {
        rows.iter().map(|row| row.get("name").render()).collect()
    }

    #[test]
    fn test_sort_by_name_ascending_and_descending() {
        let rows = vec![
            Row::new(1).set("name", "Bea"),
            Row::new(2).set("name", "Amy"),
        ];

        let ascending = apply(&rows, &SortState::ascending("name"), &schema());
        assert_eq!(names(&ascending), vec!["Amy", "Bea"]);

        let descending = apply(&rows, &SortState::descending("name"), &schema());
        assert_eq!(names(&descending), vec!["Bea", "Amy"]);
    }

    #[test]
    fn test_no_column_preserves_input_order() {
        let rows = vec![
            Row::new(1).set("name", "Bea"),
            Row::new(2).set("name", "Amy"),
        ];
        assert_eq!(apply(&rows, &SortState::none(), &schema()), rows);
    }

    #[test]
    fn test_numeric_column_compares_numerically() {
        let rows = vec![
            Row::new(1).set("name", "a").set("headcount", 10i64),
            Row::new(2).set("name", "b").set("headcount", 9i64),
        ];
        let sorted = apply(&rows, &SortState::ascending("headcount"), &schema());
        assert_eq!(names(&sorted), vec!["b", "a"]);
    }

    #[test]
    fn test_date_column_compares_chronologically() {
        let rows = vec![
            Row::new(1)
                .set("name", "a")
                .set("date", NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()),
            Row::new(2)
                .set("name", "b")
                .set("date", NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()),
        ];
        let sorted = apply(&rows, &SortState::ascending("date"), &schema());
        assert_eq!(names(&sorted), vec!["b", "a"]);
    }

    #[test]
    fn test_stability_preserved_in_both_directions() {
        // Keys 1 and 2 tie on name; their relative order must survive
        // ascending and descending alike.
        let rows = vec![
            Row::new(1).set("name", "Amy"),
            Row::new(2).set("name", "Amy"),
            Row::new(3).set("name", "Bea"),
        ];

        let ascending = apply(&rows, &SortState::ascending("name"), &schema());
        let keys: Vec<i64> = ascending.iter().map(Row::key).collect();
        assert_eq!(keys, vec![1, 2, 3]);

        let descending = apply(&rows, &SortState::descending("name"), &schema());
        let keys: Vec<i64> = descending.iter().map(Row::key).collect();
        assert_eq!(keys, vec![3, 1, 2]);
    }

    #[test]
    fn test_sorting_twice_is_idempotent() {
        let rows = vec![
            Row::new(1).set("name", "Bea"),
            Row::new(2).set("name", "Amy"),
            Row::new(3).set("name", "Amy"),
        ];
        let state = SortState::ascending("name");
        let once = apply(&rows, &state, &schema());
        let twice = apply(&once, &state, &schema());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_is_permutation_of_input() {
        let rows = vec![
            Row::new(1).set("name", "Bea"),
            Row::new(2).set("name", "Amy"),
            Row::new(3).set("name", "Cal"),
        ];
        let sorted = apply(&rows, &SortState::ascending("name"), &schema());
        assert_eq!(sorted.len(), rows.len());
        assert!(rows.iter().all(|row| sorted.contains(row)));
    }

    #[test]
    fn test_unsortable_column_degrades_to_input_order() {
        let rows = vec![
            Row::new(2).set("name", "Bea"),
            Row::new(1).set("name", "Amy"),
        ];
        assert_eq!(apply(&rows, &SortState::ascending("id"), &schema()), rows);
    }

    #[test]
    fn test_toggle_cycles_through_directions() {
        let mut state = SortState::none();
        state.toggle("name");
        assert_eq!(state, SortState::ascending("name"));
        state.toggle("name");
        assert_eq!(state, SortState::descending("name"));
        state.toggle("name");
        assert_eq!(state, SortState::none());
        state.toggle("name");
        state.toggle("date");
        assert_eq!(state, SortState::ascending("date"));
    }
}
