//! # Quality Source Port
//!
//! Interface to the quality oracle.

use crate::domain::entities::QualityRecord;
use crate::infrastructure::error::SourceResult;
use async_trait::async_trait;
use std::fmt;

/// Source of proposal quality records.
///
/// Records are undecoded; callers decide how to treat malformed ones.
/// An empty batch is a valid answer.
#[async_trait]
pub trait QualitySource: Send + Sync + fmt::Debug {
    /// Fetches the current batch of quality records.
    ///
    /// # Errors
    ///
    /// Returns a `SourceError` if the oracle cannot be reached or its
    /// answer is not a record batch.
    async fn fetch_all(&self) -> SourceResult<Vec<QualityRecord>>;
}
