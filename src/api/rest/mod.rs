//! # REST API
//!
//! HTTP endpoints using axum.
//!
//! # Endpoints
//!
//! - `GET /proposals` - List proposals
//!   - `providerId` - restrict to one provider
//!   - `fetchConnectCounts=true` - attach quality metrics
//! - `GET /healthcheck` - Liveness and version
//!
//! # Usage
//!
//! ```ignore
//! use proposal_discovery::api::rest::{AppState, create_router};
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState::from_config(&config)?);
//! let router = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:4050").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    ApiError, AppState, ErrorResponse, HealthResponse, ProposalsParams, ProposalsResponse,
};
pub use routes::create_router;
