//! # Domain Layer
//!
//! Proposals, quality records and the key that joins them.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use errors::{DecodeResult, QualityDecodeError};
