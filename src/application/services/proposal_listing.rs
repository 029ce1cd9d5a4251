//! # Proposal Listing Service
//!
//! Orchestrates proposal retrieval and best-effort metrics enrichment.
//!
//! This module provides the [`ProposalListingService`] which fetches
//! proposals from a [`ProposalSource`], optionally builds a
//! [`QualityIndex`] from a [`QualitySource`], and joins the two.
//!
//! Only a proposal source failure fails the call. When enrichment is
//! requested but the quality source fails or returns a malformed record,
//! the listing is returned without metrics and the cause is logged.

use crate::application::dto::EnrichedProposal;
use crate::application::error::ApplicationResult;
use crate::application::services::enrichment::enrich;
use crate::application::services::quality_index::QualityIndex;
use crate::application::services::representation::to_views;
use crate::domain::value_objects::ProviderId;
use crate::infrastructure::discovery::ProposalSource;
use crate::infrastructure::quality::QualitySource;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Lists proposals, optionally enriched with quality metrics.
#[derive(Debug, Clone)]
pub struct ProposalListingService {
    proposal_source: Arc<dyn ProposalSource>,
    quality_source: Arc<dyn QualitySource>,
}

impl ProposalListingService {
    /// Creates a new listing service.
    #[must_use]
    pub fn new(
        proposal_source: Arc<dyn ProposalSource>,
        quality_source: Arc<dyn QualitySource>,
    ) -> Self {
        Self {
            proposal_source,
            quality_source,
        }
    }

    /// Lists proposals in registry order.
    ///
    /// # Arguments
    ///
    /// * `provider` - Restrict to one provider, or `None` for all
    /// * `with_metrics` - Attempt enrichment from the quality source
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::SourceUnavailable` if the proposal source
    /// fails. No partial result is produced.
    pub async fn list(
        &self,
        provider: Option<&ProviderId>,
        with_metrics: bool,
    ) -> ApplicationResult<Vec<EnrichedProposal>> {
        let proposals = self.proposal_source.find(provider).await.inspect_err(|e| {
            error!(
                error = %e,
                status = e.status_code(),
                provider = provider.map(ProviderId::as_str),
                "failed to fetch proposals"
            );
        })?;

        let index = if with_metrics {
            self.quality_index().await
        } else {
            None
        };

        let listed = enrich(to_views(&proposals), index.as_ref());
        debug!(
            count = listed.len(),
            enriched = index.is_some(),
            "listed proposals"
        );
        Ok(listed)
    }

    /// Fetches quality records and indexes them, or `None` on any failure.
    async fn quality_index(&self) -> Option<QualityIndex> {
        let records = match self.quality_source.fetch_all().await {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    error = %e,
                    status = e.status_code(),
                    retryable = e.is_retryable(),
                    "quality source unavailable, listing without metrics"
                );
                return None;
            }
        };

        match QualityIndex::build(&records) {
            Ok(index) => {
                debug!(records = records.len(), keys = index.len(), "built quality index");
                Some(index)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    records = records.len(),
                    "malformed quality record, listing without metrics"
                );
                None
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::dto::Metrics;
    use crate::application::error::ApplicationError;
    use crate::domain::entities::{QualityRecord, ServiceLocation, ServiceProposal};
    use crate::infrastructure::discovery::InMemoryProposalSource;
    use crate::infrastructure::error::SourceError;
    use crate::infrastructure::quality::InMemoryQualitySource;
    use proptest::prelude::*;
    use serde_json::{Value, json};

    fn amsterdam_proposal() -> ServiceProposal {
        ServiceProposal::new(5, "0xP1", "openvpn")
            .with_location(ServiceLocation::new("AS1", "NL", "Amsterdam"))
    }

    fn quality(provider: &str, service: &str, metrics: Value) -> QualityRecord {
        let mut raw = metrics;
        if let Some(map) = raw.as_object_mut() {
            map.insert(
                "proposalId".to_string(),
                json!({"providerId": provider, "serviceType": service}),
            );
        }
        QualityRecord::new(raw)
    }

    fn service(
        proposals: InMemoryProposalSource,
        quality: InMemoryQualitySource,
    ) -> ProposalListingService {
        ProposalListingService::new(Arc::new(proposals), Arc::new(quality))
    }

    fn plain_listing_json() -> Value {
        json!([{
            "id": 5,
            "providerId": "0xP1",
            "serviceType": "openvpn",
            "serviceDefinition": {
                "locationOriginate": {"asn": "AS1", "country": "NL", "city": "Amsterdam"}
            }
        }])
    }

    #[tokio::test]
    async fn lists_without_metrics_when_not_requested() {
        let quality = InMemoryQualitySource::new();
        let svc = service(
            InMemoryProposalSource::with_proposals(vec![amsterdam_proposal()]),
            quality.clone(),
        );

        let listed = svc.list(None, false).await.unwrap();
        assert_eq!(serde_json::to_value(&listed).unwrap(), plain_listing_json());
        assert_eq!(quality.calls(), 0);
    }

    #[tokio::test]
    async fn attaches_matching_metrics() {
        let svc = service(
            InMemoryProposalSource::with_proposals(vec![amsterdam_proposal()]),
            InMemoryQualitySource::with_records(vec![quality(
                "0xP1",
                "openvpn",
                json!({"latency": 42}),
            )]),
        );

        let listed = svc.list(None, true).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].metrics, Metrics::Matched(json!({"latency": 42})));

        let value = serde_json::to_value(&listed).unwrap();
        assert_eq!(value[0]["metrics"], json!({"latency": 42}));
    }

    #[tokio::test]
    async fn unmatched_proposal_gets_empty_metrics() {
        let svc = service(
            InMemoryProposalSource::with_proposals(vec![amsterdam_proposal()]),
            InMemoryQualitySource::with_records(vec![quality(
                "0xP9",
                "openvpn",
                json!({"latency": 42}),
            )]),
        );

        let listed = svc.list(None, true).await.unwrap();
        let value = serde_json::to_value(&listed).unwrap();
        assert_eq!(value[0]["metrics"], json!({}));
    }

    #[tokio::test]
    async fn malformed_record_degrades_to_unenriched() {
        let svc = service(
            InMemoryProposalSource::with_proposals(vec![amsterdam_proposal()]),
            InMemoryQualitySource::with_records(vec![QualityRecord::new(json!(42))]),
        );

        let listed = svc.list(None, true).await.unwrap();
        assert_eq!(serde_json::to_value(&listed).unwrap(), plain_listing_json());
    }

    #[tokio::test]
    async fn unreferenced_record_does_not_degrade() {
        let svc = service(
            InMemoryProposalSource::with_proposals(vec![amsterdam_proposal()]),
            InMemoryQualitySource::with_records(vec![
                QualityRecord::new(json!({"connectCount": {"success": 1}})),
                latency_record(),
            ]),
        );

        let listed = svc.list(None, true).await.unwrap();
        assert_eq!(listed[0].metrics, Metrics::Matched(json!({"latency": 42})));
    }

    #[tokio::test]
    async fn proposal_source_failure_propagates() {
        let svc = service(
            InMemoryProposalSource::failing(SourceError::connection("registry down")),
            InMemoryQualitySource::new(),
        );

        let result = svc.list(None, true).await;
        assert!(matches!(result, Err(ApplicationError::SourceUnavailable(_))));
    }

    #[tokio::test]
    async fn quality_source_failure_degrades_to_unenriched() {
        let svc = service(
            InMemoryProposalSource::with_proposals(vec![amsterdam_proposal()]),
            InMemoryQualitySource::failing(SourceError::timeout("oracle slow")),
        );

        let listed = svc.list(None, true).await.unwrap();
        assert!(listed.iter().all(|p| p.metrics.is_not_requested()));
    }

    #[tokio::test]
    async fn empty_quality_batch_yields_empty_metrics() {
        let svc = service(
            InMemoryProposalSource::with_proposals(vec![amsterdam_proposal()]),
            InMemoryQualitySource::new(),
        );

        let listed = svc.list(None, true).await.unwrap();
        assert_eq!(listed[0].metrics, Metrics::NoMatch);
    }

    #[tokio::test]
    async fn provider_filter_is_forwarded() {
        let svc = service(
            InMemoryProposalSource::with_proposals(vec![
                amsterdam_proposal(),
                ServiceProposal::new(1, "0xP2", "openvpn"),
            ]),
            InMemoryQualitySource::new(),
        );

        let provider = ProviderId::new("0xP2");
        let listed = svc.list(Some(&provider), false).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].proposal.provider_id, provider);
    }

    #[tokio::test]
    async fn each_call_fetches_fresh_quality() {
        let quality = InMemoryQualitySource::new();
        let svc = service(
            InMemoryProposalSource::with_proposals(vec![amsterdam_proposal()]),
            quality.clone(),
        );

        let first = svc.list(None, true).await.unwrap();
        assert_eq!(first[0].metrics, Metrics::NoMatch);

        quality.replace(vec![latency_record()]).await;
        let second = svc.list(None, true).await.unwrap();
        assert_eq!(second[0].metrics, Metrics::Matched(json!({"latency": 42})));
        assert_eq!(quality.calls(), 2);
    }

    fn latency_record() -> QualityRecord {
        quality("0xP1", "openvpn", json!({"latency": 42}))
    }

    proptest! {
        #[test]
        fn malformed_batch_matches_unenriched_listing(
            ids in proptest::collection::vec(0i64..1000, 0..16),
            bad_at in 0usize..4,
        ) {
            let proposals: Vec<ServiceProposal> = ids
                .iter()
                .map(|id| ServiceProposal::new(*id, "0xP1", "openvpn"))
                .collect();

            let mut records = vec![
                latency_record(),
                quality("0xP2", "openvpn", json!({"latency": 1})),
                quality("0xP3", "wireguard", json!({"latency": 2})),
            ];
            records.insert(bad_at.min(records.len()), QualityRecord::new(json!(null)));

            let degraded = service(
                InMemoryProposalSource::with_proposals(proposals.clone()),
                InMemoryQualitySource::with_records(records),
            );
            let plain = service(
                InMemoryProposalSource::with_proposals(proposals),
                InMemoryQualitySource::new(),
            );

            let with_bad = tokio_test::block_on(degraded.list(None, true)).unwrap();
            let without = tokio_test::block_on(plain.list(None, false)).unwrap();
            prop_assert_eq!(with_bad, without);
        }
    }
}
