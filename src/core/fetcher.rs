use crate::core::{FetchOutcome, SourceSpec};
use crate::utils::error::{EtlError, Result};
use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::time::Duration;

/// Issues one GET per source and hands back the raw body.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Option<Duration>,
}

impl HttpFetcher {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            client: Client::new(),
            timeout,
        }
    }

    pub async fn fetch(&self, url: &str) -> Result<String> {
        let mut request = self.client.get(url);

        // 設定超時
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!("📡 Making API request to: {}", url);
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("📡 API response status: {}", status);

        if !status.is_success() {
            return Err(EtlError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    /// Fetches every source. Outcomes come back in source order even when
    /// more than one request is in flight.
    pub async fn fetch_all(&self, sources: &[SourceSpec], concurrency: usize) -> Vec<FetchOutcome> {
        stream::iter(sources.iter().cloned())
            .map(|source| async move {
                let body = self.fetch(&source.url).await;
                if let Err(e) = &body {
                    tracing::debug!("❌ {}: {}", source.name, e);
                }
                FetchOutcome { source, body }
            })
            .buffered(concurrency.max(1))
            .collect()
            .await
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(None)
    }
}
