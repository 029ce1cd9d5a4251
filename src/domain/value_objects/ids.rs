//! # Identifier Types
//!
//! String-based identifiers for providers and service types.
//!
//! Both identifiers are opaque to this service: they are compared
//! byte-for-byte and never normalized.
//!
//! # Examples
//!
//! ```
//! use proposal_discovery::domain::value_objects::{ProviderId, ServiceType};
//!
//! let provider = ProviderId::new("0x0000000000000000000000000000000000000001");
//! let service = ServiceType::new("openvpn");
//!
//! assert_eq!(service.as_str(), "openvpn");
//! assert!(!provider.is_empty());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of the peer publishing a proposal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(String);

impl ProviderId {
    /// Creates a new provider identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identifier is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProviderId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ProviderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Tag naming the kind of service a provider offers (e.g. `openvpn`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceType(String);

impl ServiceType {
    /// Creates a new service type tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Returns the tag as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ServiceType {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for ServiceType {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}
