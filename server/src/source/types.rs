//! Source trait and errors.

use catalog::product::Catalog;

/// Errors produced while loading a catalog snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("snapshot decode failed: {0}")]
    Decode(String),

    #[error("catalog request failed: {0}")]
    Request(String),

    #[error("catalog response error: status {status}")]
    Status { status: u16 },

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl SourceError {
    /// Whether a later attempt may succeed without operator action.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Status { status: 429 | 500..=599 })
    }
}

/// Anything that can produce a full catalog snapshot.
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] if the snapshot cannot be fetched or decoded.
    async fn load(&self) -> Result<Catalog, SourceError>;

    /// Short description for logs.
    fn describe(&self) -> String;
}
