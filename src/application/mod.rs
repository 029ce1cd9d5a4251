//! # Application Layer
//!
//! Listing pipeline, its output DTOs and the errors it can surface.

pub mod dto;
pub mod error;
pub mod services;

pub use dto::{EnrichedProposal, Metrics, ProposalView};
pub use error::{ApplicationError, ApplicationResult};
pub use services::ProposalListingService;
