//! Snapshot file on disk. `.yaml` / `.yml` are read as YAML, anything else
//! as JSON.

use std::path::{Path, PathBuf};

use catalog::product::Catalog;

use super::types::{CatalogSource, SourceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    #[must_use]
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Decode snapshot text in the given format.
///
/// # Errors
///
/// Returns [`SourceError::Decode`] if the text is not a valid snapshot.
pub fn decode_snapshot(text: &str, format: SnapshotFormat) -> Result<Catalog, SourceError> {
    match format {
        SnapshotFormat::Json => Catalog::from_json(text).map_err(|e| SourceError::Decode(e.to_string())),
        SnapshotFormat::Yaml => serde_yaml::from_str(text).map_err(|e| SourceError::Decode(e.to_string())),
    }
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait::async_trait]
impl CatalogSource for FileSource {
    async fn load(&self) -> Result<Catalog, SourceError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| SourceError::Read { path: self.path.display().to_string(), message: e.to_string() })?;
        decode_snapshot(&text, SnapshotFormat::for_path(&self.path))
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

#[cfg(test)]
#[path = "file_test.rs"]
mod tests;
