//! Error types

mod config;
mod source;
mod sync;
mod validation;

pub use config::*;
pub use source::*;
pub use sync::*;
pub use validation::*;

/// Top-level error for grid operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed column schema, fatal at load time.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Form input rejected by the field schema.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Remote fetch or mutation failed.
    #[error(transparent)]
    Sync(#[from] SyncError),

    /// Transport-level failure from the data source.
    #[error(transparent)]
    Source(#[from] SourceError),
}
