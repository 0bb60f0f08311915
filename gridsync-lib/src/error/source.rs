//! Data source error types

/// Errors that can occur while talking to the remote data source.
///
/// The transport itself lives outside this crate; implementations of
/// [`DataSource`](crate::sync::DataSource) map their failures into this
/// type at the seam.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SourceError {
    /// HTTP error response from the remote service.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Error message from the response body.
        message: String,
    },

    /// The remote service could not be reached.
    #[error("remote source unavailable: {0}")]
    Unavailable(String),

    /// Failed to parse a response from the remote service.
    #[error("response parse error: {0}")]
    Parse(String),
}

impl SourceError {
    /// Creates a new HTTP error.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if this error is potentially retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http { status, .. } => matches!(status, 429 | 500 | 502 | 503 | 504),
            Self::Unavailable(_) => true,
            Self::Parse(_) => false,
        }
    }
}
