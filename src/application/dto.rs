//! # Proposal DTOs
//!
//! Public representation of proposals returned by the listing.
//!
//! Wire shape of one element:
//!
//! ```text
//! { "id": 5, "providerId": "0xP1", "serviceType": "openvpn",
//!   "serviceDefinition": { "locationOriginate": { "asn": "AS1", "country": "NL", "city": "Amsterdam" } },
//!   "metrics": { ... } }
//! ```
//!
//! `country` and `city` are omitted when empty. `metrics` follows
//! [`Metrics`]: omitted, `{}` or the oracle's payload.

use crate::domain::value_objects::{Keyed, ProviderId, ServiceType};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Origin location as exposed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LocationView {
    /// Autonomous system number.
    pub asn: String,
    /// Country code.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub country: String,
    /// City name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub city: String,
}

/// Service definition as exposed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDefinitionView {
    /// Where the service originates.
    pub location_originate: LocationView,
}

/// Public representation of a proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalView {
    /// Per-provider sequence number.
    pub id: i64,
    /// Provider offering the service.
    pub provider_id: ProviderId,
    /// Kind of service.
    pub service_type: ServiceType,
    /// Service definition.
    pub service_definition: ServiceDefinitionView,
}

impl Keyed for ProposalView {
    fn provider_id(&self) -> &ProviderId {
        &self.provider_id
    }

    fn service_type(&self) -> &ServiceType {
        &self.service_type
    }
}

/// Outcome of enrichment for one proposal.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Metrics {
    /// Enrichment was not requested, or degraded to not requested.
    #[default]
    NotRequested,
    /// Enrichment ran but the oracle has nothing for this proposal.
    NoMatch,
    /// The oracle's payload for this proposal.
    Matched(Value),
}

impl Metrics {
    /// Returns true if enrichment was not requested.
    #[must_use]
    pub fn is_not_requested(&self) -> bool {
        matches!(self, Self::NotRequested)
    }
}

/// `NoMatch` is an empty object. `NotRequested` is skipped by the
/// containing struct and only reaches here when serialized on its own.
impl Serialize for Metrics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::NotRequested => serializer.serialize_unit(),
            Self::NoMatch => serializer.serialize_map(Some(0))?.end(),
            Self::Matched(payload) => payload.serialize(serializer),
        }
    }
}

/// A proposal with its enrichment outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedProposal {
    /// Public representation.
    #[serde(flatten)]
    pub proposal: ProposalView,
    /// Enrichment outcome.
    #[serde(skip_serializing_if = "Metrics::is_not_requested")]
    pub metrics: Metrics,
}

impl EnrichedProposal {
    /// Wraps a view without metrics.
    #[must_use]
    pub fn unenriched(proposal: ProposalView) -> Self {
        Self {
            proposal,
            metrics: Metrics::NotRequested,
        }
    }
}
