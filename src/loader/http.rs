//! HTTP loader backed by reqwest

use crate::error::{RankError, Result};
use crate::loader::CsvSource;

/// Fetches published sheet exports over HTTP(S)
#[derive(Debug, Clone, Default)]
pub struct HttpLoader {
    client: reqwest::Client,
}

impl HttpLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn fetch_error(url: &str, reason: impl ToString) -> RankError {
        RankError::Fetch {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl CsvSource for HttpLoader {
    async fn fetch(&self, url: &str) -> Result<String> {
        tracing::info!("Fetching CSV from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Self::fetch_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::fetch_error(url, format!("HTTP status {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Self::fetch_error(url, e))?;

        tracing::info!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
