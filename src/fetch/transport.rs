//! Transport seam for the fetch pipeline

use crate::error::FetchError;
use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;

/// Retrieves the raw payload behind a source locator.
///
/// The pipeline treats the transport as a black box: what a URL means, and
/// which failures it can produce, are the implementation's concern. A
/// transport failure is terminal for the attempt — retry policy belongs to
/// the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// HTTP transport over a shared `reqwest` client.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Use a preconfigured client (proxies, custom TLS, timeouts).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await?.error_for_status()?;

        let capacity = response.content_length().unwrap_or(0) as usize;
        let mut payload = Vec::with_capacity(capacity);

        // Chunked read: dropping the future mid-stream stops network I/O
        // and releases the partial buffer.
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            payload.extend_from_slice(&chunk?);
        }

        Ok(payload)
    }
}
