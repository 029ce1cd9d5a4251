//! # Enrichment Join
//!
//! Left join of proposal views onto a [`QualityIndex`].
//!
//! Every view produces exactly one output, in input order:
//!
//! | index          | key found | metrics                 |
//! |----------------|-----------|-------------------------|
//! | `None`         | -         | `NotRequested` (omitted)|
//! | `Some`         | no        | `NoMatch` (`{}`)        |
//! | `Some`         | yes       | `Matched(payload)`      |

use crate::application::dto::{EnrichedProposal, Metrics, ProposalView};
use crate::application::services::quality_index::QualityIndex;
use crate::domain::value_objects::Keyed;

/// Attaches metrics to each view.
#[must_use]
pub fn enrich(views: Vec<ProposalView>, index: Option<&QualityIndex>) -> Vec<EnrichedProposal> {
    views
        .into_iter()
        .map(|proposal| {
            let metrics = match index {
                None => Metrics::NotRequested,
                Some(index) => index
                    .get(&proposal.proposal_key())
                    .cloned()
                    .map_or(Metrics::NoMatch, Metrics::Matched),
            };
            EnrichedProposal { proposal, metrics }
        })
        .collect()
}
