//! # Quality Oracle Client
//!
//! HTTP implementation of [`QualitySource`].
//!
//! `GET {base_url}/proposals/quality` answers with `{"connects": [...]}`,
//! one record per provider and service type.

use crate::domain::entities::QualityRecord;
use crate::infrastructure::error::SourceResult;
use crate::infrastructure::http_client::HttpClient;
use crate::infrastructure::quality::traits::QualitySource;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

const QUALITY_PATH: &str = "proposals/quality";

#[derive(Debug, Deserialize)]
struct QualityResponse {
    #[serde(default)]
    connects: Option<Vec<QualityRecord>>,
}

/// Quality oracle client over HTTP.
#[derive(Debug, Clone)]
pub struct QualityOracleClient {
    http: HttpClient,
}

impl QualityOracleClient {
    /// Creates an oracle client.
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Creates an oracle client for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Internal` if the HTTP client cannot be built.
    pub fn from_url(base_url: &str, timeout_ms: u64) -> SourceResult<Self> {
        Ok(Self::new(HttpClient::new(base_url, timeout_ms)?))
    }
}

#[async_trait]
impl QualitySource for QualityOracleClient {
    async fn fetch_all(&self) -> SourceResult<Vec<QualityRecord>> {
        let response: QualityResponse = self.http.get(QUALITY_PATH).await?;
        let records = response.connects.unwrap_or_default();
        debug!(count = records.len(), "fetched quality records");
        Ok(records)
    }
}
