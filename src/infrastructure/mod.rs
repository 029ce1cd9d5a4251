//! # Infrastructure Layer
//!
//! Adapters for the two upstream sources and their shared HTTP plumbing.
//!
//! - [`discovery`]: proposal registry
//! - [`quality`]: quality oracle
//! - [`http_client`]: `reqwest` wrapper with error mapping
//! - [`error`]: [`SourceError`](error::SourceError)

pub mod discovery;
pub mod error;
pub mod http_client;
pub mod quality;

pub use error::{SourceError, SourceResult};
