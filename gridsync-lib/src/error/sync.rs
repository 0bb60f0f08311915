//! Sync layer error types

/// Errors surfaced by the query cache.
///
/// `Clone` because fetch results are shared between de-duplicated concurrent
/// callers, each of which receives its own copy of a failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    /// A remote list operation failed; the cache entry is in its error state.
    #[error("fetch failed for `{resource}`: {message}")]
    Fetch {
        /// Resource identifier the fetch targeted.
        resource: String,
        /// Underlying failure reason.
        message: String,
    },

    /// A remote create failed; the cache entry was left untouched.
    #[error("create failed for `{resource}`: {message}")]
    Mutation {
        /// Resource identifier the mutation targeted.
        resource: String,
        /// Underlying failure reason.
        message: String,
    },
}

impl SyncError {
    /// Creates a fetch error.
    pub fn fetch(resource: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            resource: resource.into(),
            message: message.into(),
        }
    }

    /// Creates a mutation error.
    pub fn mutation(resource: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Mutation {
            resource: resource.into(),
            message: message.into(),
        }
    }

    /// Returns the resource identifier this error concerns.
    pub fn resource(&self) -> &str {
        match self {
            Self::Fetch { resource, .. } | Self::Mutation { resource, .. } => resource,
        }
    }
}
