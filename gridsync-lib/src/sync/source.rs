//! Data source seam for remote resources

use async_trait::async_trait;

use crate::error::SourceError;
use crate::model::Row;

/// The remote collection behind a grid.
///
/// The transport (HTTP client, test double, whatever) lives outside this
/// crate and implements this trait; the query cache is its only consumer.
/// Resource identifiers are logical collection names such as `"employee"`
/// or `"attendance"` and double as cache keys.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetches the full ordered row set for a resource.
    async fn list(&self, resource: &str) -> Result<Vec<Row>, SourceError>;

    /// Creates a record and returns the created row, including its
    /// server-assigned identifier and creation timestamp.
    async fn create(&self, resource: &str, payload: serde_json::Value)
    -> Result<Row, SourceError>;
}
