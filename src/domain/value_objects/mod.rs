//! # Value Objects
//!
//! Immutable identity types.
//!
//! - [`ProviderId`], [`ServiceType`]: string-based identifiers
//! - [`ProposalKey`]: join key over the two, with the [`Keyed`] trait

pub mod ids;
pub mod proposal_key;

pub use ids::{ProviderId, ServiceType};
pub use proposal_key::{Keyed, ProposalKey};
