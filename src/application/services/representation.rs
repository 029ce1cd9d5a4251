//! # Representation Mapper
//!
//! Converts registry proposals into their public representation.

use crate::application::dto::{LocationView, ProposalView, ServiceDefinitionView};
use crate::domain::entities::ServiceProposal;

/// Maps one proposal to its public view.
#[must_use]
pub fn to_view(proposal: &ServiceProposal) -> ProposalView {
    let location = proposal.location();
    ProposalView {
        id: proposal.id(),
        provider_id: proposal.provider_id().clone(),
        service_type: proposal.service_type().clone(),
        service_definition: ServiceDefinitionView {
            location_originate: LocationView {
                asn: location.asn().to_string(),
                country: location.country().to_string(),
                city: location.city().to_string(),
            },
        },
    }
}

/// Maps proposals in order.
#[must_use]
pub fn to_views(proposals: &[ServiceProposal]) -> Vec<ProposalView> {
    proposals.iter().map(to_view).collect()
}
