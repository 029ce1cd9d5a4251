//! # Proposal Discovery
//!
//! The [`ProposalSource`] port and its implementations.
//!
//! - [`RegistryClient`]: HTTP client for the discovery registry
//! - [`InMemoryProposalSource`]: in-memory source for tests

pub mod in_memory;
pub mod registry_client;
pub mod traits;

pub use in_memory::InMemoryProposalSource;
pub use registry_client::RegistryClient;
pub use traits::ProposalSource;
