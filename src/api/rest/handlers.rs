//! # REST Handlers
//!
//! Request and response types and the axum handler functions.

use crate::application::dto::EnrichedProposal;
use crate::application::error::ApplicationError;
use crate::application::services::ProposalListingService;
use crate::config::AppConfig;
use crate::domain::value_objects::ProviderId;
use crate::infrastructure::discovery::RegistryClient;
use crate::infrastructure::error::SourceResult;
use crate::infrastructure::quality::QualityOracleClient;
use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Query value that turns enrichment on.
const ENRICH_FLAG: &str = "true";

/// Shared state for all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Listing pipeline.
    pub listing: ProposalListingService,
}

impl AppState {
    /// Creates state around an existing listing service.
    #[must_use]
    pub fn new(listing: ProposalListingService) -> Self {
        Self { listing }
    }

    /// Builds HTTP clients for both upstreams from configuration.
    ///
    /// # Errors
    ///
    /// Returns a `SourceError` if either client cannot be built.
    pub fn from_config(config: &AppConfig) -> SourceResult<Self> {
        let registry = RegistryClient::from_url(
            &config.discovery.base_url,
            config.discovery.timeout_ms,
        )?;
        let oracle = QualityOracleClient::from_url(
            &config.quality_oracle.base_url,
            config.quality_oracle.timeout_ms,
        )?;

        Ok(Self::new(ProposalListingService::new(
            Arc::new(registry),
            Arc::new(oracle),
        )))
    }
}

/// Query parameters of `GET /proposals`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalsParams {
    /// Provider filter; empty means none.
    pub provider_id: Option<String>,
    /// Enrichment flag; only the literal `true` enables it.
    pub fetch_connect_counts: Option<String>,
}

impl ProposalsParams {
    /// Returns the provider filter, treating an empty value as absent.
    #[must_use]
    pub fn provider(&self) -> Option<ProviderId> {
        self.provider_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(ProviderId::from)
    }

    /// Returns true if enrichment was requested.
    #[must_use]
    pub fn with_metrics(&self) -> bool {
        self.fetch_connect_counts.as_deref() == Some(ENRICH_FLAG)
    }
}

/// Body of a successful `GET /proposals`.
#[derive(Debug, Clone, Serialize)]
pub struct ProposalsResponse {
    /// Listed proposals in registry order.
    pub proposals: Vec<EnrichedProposal>,
}

/// Error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message.
    pub message: String,
}

/// Body of `GET /healthcheck`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` when the process is serving.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Error returned by handlers.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Returns the HTTP status.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: error.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

/// `GET /proposals`
///
/// # Errors
///
/// Responds 500 with an [`ErrorResponse`] if the registry fails.
pub async fn list_proposals(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ProposalsParams>,
) -> Result<Json<ProposalsResponse>, ApiError> {
    let provider = params.provider();
    let with_metrics = params.with_metrics();
    debug!(
        provider = provider.as_ref().map(ProviderId::as_str),
        with_metrics, "listing proposals"
    );

    let proposals = state.listing.list(provider.as_ref(), with_metrics).await?;
    Ok(Json(ProposalsResponse { proposals }))
}

/// `GET /healthcheck`
#[allow(clippy::unused_async)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
