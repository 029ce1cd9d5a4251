//! # Quality Oracle
//!
//! The [`QualitySource`] port and its implementations.
//!
//! - [`QualityOracleClient`]: HTTP client for the quality oracle
//! - [`InMemoryQualitySource`]: in-memory source for tests

pub mod in_memory;
pub mod oracle_client;
pub mod traits;

pub use in_memory::InMemoryQualitySource;
pub use oracle_client::QualityOracleClient;
pub use traits::QualitySource;
