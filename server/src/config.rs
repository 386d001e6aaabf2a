//! Server configuration parsed from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use catalog::listing::DEFAULT_PAGE_SIZE;

pub const DEFAULT_PORT: u16 = 3000;
/// Sample snapshot shipped with the server crate. Anchored to the crate
/// directory so the default works from any working directory.
pub const DEFAULT_CATALOG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/catalog.json");
pub const DEFAULT_CATALOG_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CATALOG_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(String),

    #[error("missing required env var {var}")]
    Missing { var: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Where the catalog snapshot comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    /// JSON or YAML file on disk, chosen by extension.
    File { path: PathBuf },
    /// JSON snapshot fetched over HTTP.
    Http { url: String, timeouts: SourceTimeouts },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub source: SourceConfig,
    /// Snapshot reload interval. `None` disables background refresh.
    pub refresh_interval: Option<Duration>,
    pub page_size: usize,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CATALOG_SOURCE`: `file` (default) or `http`
    /// - `CATALOG_PATH`: snapshot file for `file`, default `server/data/catalog.json`
    /// - `CATALOG_URL`: snapshot URL, required for `http`
    /// - `CATALOG_REQUEST_TIMEOUT_SECS`: default 30
    /// - `CATALOG_CONNECT_TIMEOUT_SECS`: default 10
    /// - `CATALOG_REFRESH_SECS`: default 0 (no refresh)
    /// - `PAGE_SIZE`: default 18
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an unknown source kind, a missing
    /// `CATALOG_URL`, or an unparsable `PORT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Parse(format!("invalid PORT: {raw}")))?,
            Err(_) => DEFAULT_PORT,
        };

        let source = parse_source(std::env::var("CATALOG_SOURCE").ok().as_deref())?;
        let refresh_secs = env_parse("CATALOG_REFRESH_SECS", 0u64);
        let page_size = env_parse("PAGE_SIZE", DEFAULT_PAGE_SIZE).max(1);

        Ok(Self {
            port,
            source,
            refresh_interval: (refresh_secs > 0).then(|| Duration::from_secs(refresh_secs)),
            page_size,
        })
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_source(raw: Option<&str>) -> Result<SourceConfig, ConfigError> {
    match raw.unwrap_or("file") {
        "file" => {
            let path = std::env::var("CATALOG_PATH").unwrap_or_else(|_| DEFAULT_CATALOG_PATH.to_string());
            Ok(SourceConfig::File { path: PathBuf::from(path) })
        }
        "http" => {
            let url = std::env::var("CATALOG_URL").map_err(|_| ConfigError::Missing { var: "CATALOG_URL".into() })?;
            let timeouts = SourceTimeouts {
                request_secs: env_parse("CATALOG_REQUEST_TIMEOUT_SECS", DEFAULT_CATALOG_REQUEST_TIMEOUT_SECS),
                connect_secs: env_parse("CATALOG_CONNECT_TIMEOUT_SECS", DEFAULT_CATALOG_CONNECT_TIMEOUT_SECS),
            };
            Ok(SourceConfig::Http { url, timeouts })
        }
        other => Err(ConfigError::Parse(format!("unknown CATALOG_SOURCE: {other}"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
