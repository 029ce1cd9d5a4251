//! # Proposal Discovery
//!
//! Discovery API for a peer-to-peer service marketplace.
//!
//! The service lists the proposals held by the discovery registry and, on
//! request, attaches quality metrics from the quality oracle to each one.
//!
//! # Architecture
//!
//! - [`domain`] - proposal model, identity keys and quality record decoding
//! - [`application`] - listing pipeline, quality index and enrichment
//! - [`infrastructure`] - registry and oracle HTTP clients plus in-memory sources
//! - [`api`] - axum REST surface
//! - [`config`] - layered configuration
//! - [`telemetry`] - `tracing` subscriber setup
//!
//! # Example
//!
//! ```ignore
//! use proposal_discovery::application::services::ProposalListingService;
//! use proposal_discovery::infrastructure::discovery::InMemoryProposalSource;
//! use proposal_discovery::infrastructure::quality::InMemoryQualitySource;
//! use std::sync::Arc;
//!
//! let listing = ProposalListingService::new(
//!     Arc::new(InMemoryProposalSource::new()),
//!     Arc::new(InMemoryQualitySource::new()),
//! );
//! let proposals = listing.list(None, true).await?;
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
