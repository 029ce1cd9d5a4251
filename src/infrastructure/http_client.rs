//! # HTTP Client Utilities
//!
//! Shared HTTP client for the upstream sources.
//!
//! Wraps `reqwest` with a per-request timeout, a base URL and mapping of
//! transport failures into [`SourceError`]. The underlying connection pool
//! is shared by clones.
//!
//! # Examples
//!
//! ```ignore
//! use proposal_discovery::infrastructure::http_client::HttpClient;
//!
//! let client = HttpClient::new("http://127.0.0.1:8001/v1", 5000)?;
//! let response: MyResponse = client.get("proposals").await?;
//! ```

use crate::infrastructure::error::{SourceError, SourceResult};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// HTTP client bound to one upstream base URL.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Inner reqwest client.
    client: Client,
    /// Base URL, always ending in `/`.
    base_url: Url,
    /// Request timeout in milliseconds.
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a client for `base_url` with the given timeout.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Internal` if the base URL is invalid or the
    /// client cannot be created.
    pub fn new(base_url: &str, timeout_ms: u64) -> SourceResult<Self> {
        let base_url = parse_base_url(base_url)?;
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| SourceError::internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            timeout_ms,
        })
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Returns the base URL.
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Makes a GET request to `path` (relative to the base URL).
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Connection`/`Timeout` if the request fails,
    /// `SourceError::Status` on a non-success status and
    /// `SourceError::Protocol` if the body cannot be parsed.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> SourceResult<T> {
        let url = self.endpoint(path)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        handle_response(response).await
    }

    /// Makes a GET request with query parameters.
    ///
    /// # Errors
    ///
    /// Same as [`HttpClient::get`].
    pub async fn get_with_params<T: DeserializeOwned, P: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        params: &P,
    ) -> SourceResult<T> {
        let url = self.endpoint(path)?;
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        handle_response(response).await
    }

    /// Resolves `path` against the base URL.
    fn endpoint(&self, path: &str) -> SourceResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| SourceError::internal(format!("Invalid endpoint {}: {}", path, e)))
    }
}

/// Parses a base URL and makes sure relative joins keep its path.
fn parse_base_url(raw: &str) -> SourceResult<Url> {
    let mut normalized = raw.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Url::parse(&normalized)
        .map_err(|e| SourceError::internal(format!("Invalid base URL {}: {}", raw, e)))
}

/// Handles the HTTP response, checking status and deserializing JSON.
async fn handle_response<T: DeserializeOwned>(response: Response) -> SourceResult<T> {
    let status = response.status();

    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| SourceError::protocol(format!("Failed to parse response: {}", e)))
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(map_status_error(status, body))
    }
}

/// Maps a reqwest error to a SourceError.
fn map_reqwest_error(error: reqwest::Error) -> SourceError {
    if error.is_timeout() {
        SourceError::timeout("Request timed out")
    } else if error.is_connect() {
        SourceError::connection(format!("Connection failed: {}", error))
    } else {
        SourceError::connection(format!("HTTP request failed: {}", error))
    }
}

fn map_status_error(status: StatusCode, body: String) -> SourceError {
    SourceError::status(status.as_u16(), body)
}
