//! JSON snapshot published by the CMS over HTTP.

use std::time::Duration;

use catalog::product::Catalog;

use super::types::{CatalogSource, SourceError};

pub struct HttpSource {
    http: reqwest::Client,
    url: String,
}

impl HttpSource {
    /// # Errors
    ///
    /// Returns [`SourceError::HttpClientBuild`] if the client cannot be built.
    pub fn new(url: String, request_timeout: Duration, connect_timeout: Duration) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| SourceError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url })
    }
}

#[async_trait::async_trait]
impl CatalogSource for HttpSource {
    async fn load(&self) -> Result<Catalog, SourceError> {
        let response = self
            .http
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| SourceError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| SourceError::Request(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(SourceError::Status { status });
        }

        Catalog::from_json(&text).map_err(|e| SourceError::Decode(e.to_string()))
    }

    fn describe(&self) -> String {
        format!("http:{}", self.url)
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
