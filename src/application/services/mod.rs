//! # Application Services
//!
//! The listing pipeline, leaf-first:
//! - [`representation`]: proposal to public view
//! - [`QualityIndex`]: quality records keyed by proposal
//! - [`enrichment`]: left join of views onto the index
//! - [`ProposalListingService`]: orchestration and degradation policy

pub mod enrichment;
pub mod proposal_listing;
pub mod quality_index;
pub mod representation;

pub use enrichment::enrich;
pub use proposal_listing::ProposalListingService;
pub use quality_index::QualityIndex;
pub use representation::{to_view, to_views};
