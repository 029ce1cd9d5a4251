//! # Service Proposal Entity
//!
//! An offer published by a provider in the discovery registry.
//!
//! Proposals are owned by the registry; this service only reads them.
//! The serde shape matches the registry's wire format (snake_case keys).
//! Unknown fields are ignored and missing location fields decode as empty.
//!
//! # Examples
//!
//! ```
//! use proposal_discovery::domain::entities::{ServiceLocation, ServiceProposal};
//!
//! let proposal = ServiceProposal::new(5, "0xP1", "openvpn")
//!     .with_location(ServiceLocation::new("AS1", "NL", "Amsterdam"));
//!
//! assert_eq!(proposal.id(), 5);
//! assert_eq!(proposal.location().city(), "Amsterdam");
//! ```

use crate::domain::value_objects::{Keyed, ProviderId, ServiceType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Origin location of a service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServiceLocation {
    /// Autonomous system number, e.g. `AS00001`.
    #[serde(default)]
    asn: String,
    /// Country code.
    #[serde(default)]
    country: String,
    /// City name.
    #[serde(default)]
    city: String,
}

impl ServiceLocation {
    /// Creates a location.
    #[must_use]
    pub fn new(asn: impl Into<String>, country: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            asn: asn.into(),
            country: country.into(),
            city: city.into(),
        }
    }

    /// Returns the autonomous system number.
    #[inline]
    #[must_use]
    pub fn asn(&self) -> &str {
        &self.asn
    }

    /// Returns the country.
    #[inline]
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Returns the city.
    #[inline]
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }
}

/// Qualitative definition of a service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServiceDefinition {
    /// Where the service originates.
    #[serde(default)]
    location: ServiceLocation,
}

impl ServiceDefinition {
    /// Creates a definition with the given origin.
    #[must_use]
    pub fn new(location: ServiceLocation) -> Self {
        Self { location }
    }

    /// Returns the origin location.
    #[inline]
    #[must_use]
    pub fn location(&self) -> &ServiceLocation {
        &self.location
    }
}

/// A service proposal as returned by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceProposal {
    /// Per-provider unique sequence number.
    id: i64,
    /// Provider offering the service.
    provider_id: ProviderId,
    /// Kind of service offered.
    service_type: ServiceType,
    /// Service definition.
    #[serde(default)]
    service_definition: ServiceDefinition,
}

impl ServiceProposal {
    /// Creates a proposal with an empty service definition.
    #[must_use]
    pub fn new(
        id: i64,
        provider_id: impl Into<ProviderId>,
        service_type: impl Into<ServiceType>,
    ) -> Self {
        Self {
            id,
            provider_id: provider_id.into(),
            service_type: service_type.into(),
            service_definition: ServiceDefinition::default(),
        }
    }

    /// Sets the origin location.
    #[must_use]
    pub fn with_location(mut self, location: ServiceLocation) -> Self {
        self.service_definition = ServiceDefinition::new(location);
        self
    }

    /// Returns the sequence number.
    #[inline]
    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the provider identity.
    #[inline]
    #[must_use]
    pub fn provider_id(&self) -> &ProviderId {
        &self.provider_id
    }

    /// Returns the service type.
    #[inline]
    #[must_use]
    pub fn service_type(&self) -> &ServiceType {
        &self.service_type
    }

    /// Returns the service definition.
    #[inline]
    #[must_use]
    pub fn service_definition(&self) -> &ServiceDefinition {
        &self.service_definition
    }

    /// Returns the origin location.
    #[inline]
    #[must_use]
    pub fn location(&self) -> &ServiceLocation {
        self.service_definition.location()
    }
}

impl Keyed for ServiceProposal {
    fn provider_id(&self) -> &ProviderId {
        &self.provider_id
    }

    fn service_type(&self) -> &ServiceType {
        &self.service_type
    }
}

impl fmt::Display for ServiceProposal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ServiceProposal(#{} {} {})",
            self.id, self.provider_id, self.service_type
        )
    }
}
