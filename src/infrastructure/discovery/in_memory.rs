//! # In-Memory Proposal Source
//!
//! In-memory implementation of [`ProposalSource`] for tests and local runs.
//!
//! Proposals are returned in insertion order. A failure can be armed to
//! make every subsequent `find` fail until it is cleared.

use crate::domain::entities::ServiceProposal;
use crate::domain::value_objects::ProviderId;
use crate::infrastructure::discovery::traits::ProposalSource;
use crate::infrastructure::error::{SourceError, SourceResult};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct State {
    proposals: Vec<ServiceProposal>,
    failure: Option<SourceError>,
}

/// In-memory implementation of [`ProposalSource`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryProposalSource {
    state: Arc<RwLock<State>>,
}

impl InMemoryProposalSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source holding the given proposals.
    #[must_use]
    pub fn with_proposals(proposals: Vec<ServiceProposal>) -> Self {
        Self {
            state: Arc::new(RwLock::new(State {
                proposals,
                failure: None,
            })),
        }
    }

    /// Creates a source whose every call fails with `error`.
    #[must_use]
    pub fn failing(error: SourceError) -> Self {
        Self {
            state: Arc::new(RwLock::new(State {
                proposals: Vec::new(),
                failure: Some(error),
            })),
        }
    }

    /// Arms or clears the injected failure.
    pub async fn set_failure(&self, failure: Option<SourceError>) {
        self.state.write().await.failure = failure;
    }
}

#[async_trait]
impl ProposalSource for InMemoryProposalSource {
    async fn find(&self, provider: Option<&ProviderId>) -> SourceResult<Vec<ServiceProposal>> {
        let state = self.state.read().await;
        if let Some(error) = &state.failure {
            return Err(error.clone());
        }

        Ok(state
            .proposals
            .iter()
            .filter(|p| provider.is_none_or(|id| p.provider_id() == id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> Vec<ServiceProposal> {
        vec![
            ServiceProposal::new(1, "0xP1", "openvpn"),
            ServiceProposal::new(1, "0xP2", "openvpn"),
            ServiceProposal::new(2, "0xP1", "wireguard"),
        ]
    }

    #[tokio::test]
    async fn new_source_is_empty() {
        let source = InMemoryProposalSource::new();
        assert!(source.find(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_all_preserves_order() {
        let source = InMemoryProposalSource::with_proposals(sample());
        let found = source.find(None).await.unwrap();
        assert_eq!(found, sample());
    }

    #[tokio::test]
    async fn find_filters_by_provider() {
        let source = InMemoryProposalSource::with_proposals(sample());
        let provider = ProviderId::new("0xP1");

        let found = source.find(Some(&provider)).await.unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|p| p.provider_id() == &provider));
        assert_eq!(found[0].service_type().as_str(), "openvpn");
        assert_eq!(found[1].service_type().as_str(), "wireguard");
    }

    #[tokio::test]
    async fn armed_failure_is_returned() {
        let source = InMemoryProposalSource::with_proposals(sample());
        source
            .set_failure(Some(SourceError::connection("registry down")))
            .await;
        assert!(source.find(None).await.is_err());

        source.set_failure(None).await;
        assert_eq!(source.find(None).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn failing_constructor() {
        let source = InMemoryProposalSource::failing(SourceError::timeout("slow"));
        assert!(matches!(
            source.find(None).await,
            Err(SourceError::Timeout { .. })
        ));
    }
}
