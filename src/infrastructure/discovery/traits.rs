//! # Proposal Source Port
//!
//! Interface to the registry that publishes service proposals.

use crate::domain::entities::ServiceProposal;
use crate::domain::value_objects::ProviderId;
use crate::infrastructure::error::SourceResult;
use async_trait::async_trait;
use std::fmt;

/// Source of service proposals.
///
/// Implementations return the current set of proposals in registry order.
/// A failed call is terminal for the request that issued it.
#[async_trait]
pub trait ProposalSource: Send + Sync + fmt::Debug {
    /// Finds proposals, optionally restricted to one provider.
    ///
    /// # Errors
    ///
    /// Returns a `SourceError` if the registry cannot be reached or its
    /// answer cannot be parsed.
    async fn find(&self, provider: Option<&ProviderId>) -> SourceResult<Vec<ServiceProposal>>;
}
