//! Catalog sources: where the storefront's product snapshot comes from.
//!
//! DESIGN
//! ======
//! The upstream catalog is an external collaborator. The server only needs
//! a whole snapshot at a time, so a source is a single async `load` call
//! behind the [`CatalogSource`] trait. The file source serves local
//! development and tests; the HTTP source reads a JSON export published by
//! the CMS.

pub mod file;
pub mod http;
pub mod types;

use std::sync::Arc;
use std::time::Duration;

pub use types::{CatalogSource, SourceError};

use crate::config::SourceConfig;

/// Build the configured source.
///
/// # Errors
///
/// Returns [`SourceError::HttpClientBuild`] if the HTTP client cannot be built.
pub fn from_config(config: &SourceConfig) -> Result<Arc<dyn CatalogSource>, SourceError> {
    match config {
        SourceConfig::File { path } => Ok(Arc::new(file::FileSource::new(path.clone()))),
        SourceConfig::Http { url, timeouts } => Ok(Arc::new(http::HttpSource::new(
            url.clone(),
            Duration::from_secs(timeouts.request_secs),
            Duration::from_secs(timeouts.connect_secs),
        )?)),
    }
}
