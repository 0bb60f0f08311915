//! Grid controller: the projection pipeline and its tie to the sync layer

use std::sync::Arc;

use crate::error::SyncError;
use crate::grid::FilterState;
use crate::grid::PageState;
use crate::grid::SelectionState;
use crate::grid::SortState;
use crate::grid::VisibilityState;
use crate::grid::filter;
use crate::grid::sort;
use crate::model::Row;
use crate::model::RowKey;
use crate::schema::ColumnDescriptor;
use crate::schema::Schema;
use crate::sync::QueryCache;

/// Header of one visible column in a projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    /// The column's field accessor key.
    pub key: String,
    /// The column's display label.
    pub label: String,
}

/// One render-ready row: its stable key plus a cell per visible column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    /// Stable key of the underlying row.
    pub key: RowKey,
    /// Rendered cell values, one per visible column, in column order.
    pub cells: Vec<String>,
}

/// The derived, render-ready view of a grid.
///
/// Structural equality holds between projections computed from identical
/// inputs, so callers can memoize freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    /// Visible column headers, in schema order.
    pub columns: Vec<ColumnHeader>,
    /// Rows on the current page, filtered, sorted, and column-masked.
    pub rows: Vec<RenderedRow>,
    /// Number of rows surviving the filters, before pagination.
    pub row_count: usize,
    /// Number of pages the filtered rows span.
    pub page_count: usize,
}

/// Single entry point composing the grid engines.
///
/// The controller owns the schema and the cache handle; the page layer owns
/// the filter/sort/visibility/selection state and passes it in, since
/// multiple grids with different schemas coexist.
///
/// # Example
///
/// ```ignore
/// let controller = GridController::new(employee_columns(&config)?, EMPLOYEE_RESOURCE, cache);
/// let rows = controller.rows().await?;
/// let projection = controller.project(&rows, &filters, &sort, &visibility, &page);
/// ```
#[derive(Clone)]
pub struct GridController {
    schema: Schema,
    resource: String,
    cache: QueryCache,
}

impl GridController {
    /// Creates a controller for one resource.
    pub fn new(schema: Schema, resource: impl Into<String>, cache: QueryCache) -> Self {
        Self {
            schema,
            resource: resource.into(),
            cache,
        }
    }

    /// Returns the column schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the resource identifier this grid renders.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Reads the canonical row set through the cache.
    pub async fn rows(&self) -> Result<Arc<Vec<Row>>, SyncError> {
        self.cache.fetch(&self.resource).await
    }

    /// Derives the render projection from the canonical rows and UI state.
    ///
    /// The pipeline order is fixed: filter, then sort, then pagination, then
    /// column-visibility masking. Visibility affects only which columns are
    /// rendered per row, never which rows survive. The computation is pure;
    /// identical inputs yield structurally identical projections.
    pub fn project(
        &self,
        rows: &[Row],
        filters: &FilterState,
        sort_state: &SortState,
        visibility: &VisibilityState,
        page: &PageState,
    ) -> Projection {
        let filtered = filter::apply(rows, filters, &self.schema);
        let sorted = sort::apply(&filtered, sort_state, &self.schema);
        let row_count = sorted.len();
        let page_count = page.page_count(row_count);

        let visible: Vec<&ColumnDescriptor> = self
            .schema
            .columns()
            .iter()
            .filter(|column| visibility.is_visible(&column.key))
            .collect();

        let columns = visible
            .iter()
            .map(|column| ColumnHeader {
                key: column.key.clone(),
                label: column.label.clone(),
            })
            .collect();

        let rendered = page
            .slice(&sorted)
            .iter()
            .map(|row| RenderedRow {
                key: row.key(),
                cells: visible.iter().map(|column| column.render(row)).collect(),
            })
            .collect();

        Projection {
            columns,
            rows: rendered,
            row_count,
            page_count,
        }
    }

    /// Sends a create payload for this grid's resource.
    ///
    /// On success the cache entry is already invalidated when this returns;
    /// the caller typically follows up with [`refresh`](Self::refresh).
    pub async fn mutate(&self, payload: serde_json::Value) -> Result<Row, SyncError> {
        self.cache.mutate(&self.resource, payload).await
    }

    /// Marks the backing cache entry stale and clears the selection.
    ///
    /// Row identities are not guaranteed stable across an invalidated
    /// fetch, so keeping the selection would reference rows that may no
    /// longer exist.
    pub fn invalidate(&self, selection: &mut SelectionState) {
        self.cache.invalidate(&self.resource);
        selection.clear();
    }

    /// Invalidates and immediately re-reads the canonical row set.
    pub async fn refresh(
        &self,
        selection: &mut SelectionState,
    ) -> Result<Arc<Vec<Row>>, SyncError> {
        self.invalidate(selection);
        self.rows().await
    }
}
