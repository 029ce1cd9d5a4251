//! # Proposal Key
//!
//! Join key correlating proposals with quality records.
//!
//! A [`ProposalKey`] is the pair of provider identity and service type.
//! It is stored as a structural pair rather than a formatted string, so
//! two keys are equal exactly when both fields are equal. Values that
//! carry both fields implement [`Keyed`].
//!
//! # Examples
//!
//! ```
//! use proposal_discovery::domain::value_objects::ProposalKey;
//!
//! let a = ProposalKey::new("0xP1", "openvpn");
//! let b = ProposalKey::new("0xP1", "openvpn");
//! let c = ProposalKey::new("0xP1-open", "vpn");
//!
//! assert_eq!(a, b);
//! assert_ne!(a, c);
//! assert_eq!(a.to_string(), "0xP1-openvpn");
//! ```

use crate::domain::value_objects::{ProviderId, ServiceType};
use std::fmt;

/// Composite key of provider identity and service type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProposalKey {
    provider_id: ProviderId,
    service_type: ServiceType,
}

impl ProposalKey {
    /// Creates a key from its two components.
    #[must_use]
    pub fn new(provider_id: impl Into<ProviderId>, service_type: impl Into<ServiceType>) -> Self {
        Self {
            provider_id: provider_id.into(),
            service_type: service_type.into(),
        }
    }

    /// Returns the provider component.
    #[inline]
    #[must_use]
    pub fn provider_id(&self) -> &ProviderId {
        &self.provider_id
    }

    /// Returns the service type component.
    #[inline]
    #[must_use]
    pub fn service_type(&self) -> &ServiceType {
        &self.service_type
    }
}

/// Dashed form, for logs only. Not injective: never parse it back.
impl fmt::Display for ProposalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.provider_id, self.service_type)
    }
}

/// A value that can be joined on provider identity and service type.
pub trait Keyed {
    /// Returns the provider identity.
    fn provider_id(&self) -> &ProviderId;

    /// Returns the service type.
    fn service_type(&self) -> &ServiceType;

    /// Derives the join key.
    fn proposal_key(&self) -> ProposalKey {
        ProposalKey::new(self.provider_id().clone(), self.service_type().clone())
    }
}

impl Keyed for ProposalKey {
    fn provider_id(&self) -> &ProviderId {
        &self.provider_id
    }

    fn service_type(&self) -> &ServiceType {
        &self.service_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn equal_fields_equal_keys() {
        assert_eq!(
            ProposalKey::new("0xP1", "openvpn"),
            ProposalKey::new("0xP1", "openvpn")
        );
    }

    #[test]
    fn dash_in_fields_does_not_collide() {
        let a = ProposalKey::new("a-b", "c");
        let b = ProposalKey::new("a", "b-c");
        assert_eq!(a.to_string(), b.to_string());
        assert_ne!(a, b);

        let set: HashSet<ProposalKey> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn keyed_default_derives_same_key() {
        let key = ProposalKey::new("0xP2", "wireguard");
        assert_eq!(key.proposal_key(), key);
    }

    proptest! {
        #[test]
        fn key_equality_matches_field_equality(
            p1 in "[a-z0-9-]{0,6}",
            s1 in "[a-z0-9-]{0,6}",
            p2 in "[a-z0-9-]{0,6}",
            s2 in "[a-z0-9-]{0,6}",
        ) {
            let a = ProposalKey::new(p1.as_str(), s1.as_str());
            let b = ProposalKey::new(p2.as_str(), s2.as_str());
            prop_assert_eq!(a == b, p1 == p2 && s1 == s2);
        }

        #[test]
        fn key_derivation_is_deterministic(p in ".{0,12}", s in ".{0,12}") {
            let a = ProposalKey::new(p.as_str(), s.as_str());
            let b = ProposalKey::new(p.as_str(), s.as_str());
            prop_assert_eq!(a, b);
        }
    }
}
