//! # Quality Index
//!
//! Per-request lookup table from [`ProposalKey`] to metrics payload.
//!
//! The index is all-or-nothing: a single record that fails to decode
//! aborts the build, and the caller treats the request as unenriched.
//! Records sharing a key overwrite each other, last one wins.

use crate::domain::QualityDecodeError;
use crate::domain::entities::QualityRecord;
use crate::domain::value_objects::ProposalKey;
use serde_json::Value;
use std::collections::HashMap;

/// Metrics payloads indexed by proposal key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QualityIndex {
    entries: HashMap<ProposalKey, Value>,
}

impl QualityIndex {
    /// Builds an index from a batch of records.
    ///
    /// # Errors
    ///
    /// Returns the first [`QualityDecodeError`] encountered; no partial
    /// index is produced.
    pub fn build(records: &[QualityRecord]) -> Result<Self, QualityDecodeError> {
        let mut entries = HashMap::with_capacity(records.len());
        for record in records {
            let (key, payload) = record.decode()?.into_parts();
            entries.insert(key, payload);
        }
        Ok(Self { entries })
    }

    /// Returns the payload for `key`.
    #[must_use]
    pub fn get(&self, key: &ProposalKey) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns the number of indexed keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
