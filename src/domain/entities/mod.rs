//! # Domain Entities
//!
//! Data consumed from the two upstream sources.
//!
//! - [`ServiceProposal`]: an offer published by a provider
//! - [`QualityRecord`]: an opaque metrics record from the quality oracle

pub mod proposal;
pub mod quality_record;

pub use proposal::{ServiceDefinition, ServiceLocation, ServiceProposal};
pub use quality_record::{DecodedQuality, QualityRecord, PROPOSAL_REFERENCE_FIELD};
