//! # In-Memory Quality Source
//!
//! In-memory implementation of [`QualitySource`] for tests and local runs.

use crate::domain::entities::QualityRecord;
use crate::infrastructure::error::{SourceError, SourceResult};
use crate::infrastructure::quality::traits::QualitySource;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct State {
    records: Vec<QualityRecord>,
    failure: Option<SourceError>,
}

/// In-memory implementation of [`QualitySource`].
///
/// Counts calls so tests can assert the oracle is not consulted when
/// enrichment is off.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQualitySource {
    state: Arc<RwLock<State>>,
    calls: Arc<AtomicUsize>,
}

impl InMemoryQualitySource {
    /// Creates a source with no records.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source holding the given records.
    #[must_use]
    pub fn with_records(records: Vec<QualityRecord>) -> Self {
        Self {
            state: Arc::new(RwLock::new(State {
                records,
                failure: None,
            })),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Creates a source whose every call fails with `error`.
    #[must_use]
    pub fn failing(error: SourceError) -> Self {
        Self {
            state: Arc::new(RwLock::new(State {
                records: Vec::new(),
                failure: Some(error),
            })),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Replaces the stored records.
    pub async fn replace(&self, records: Vec<QualityRecord>) {
        self.state.write().await.records = records;
    }

    /// Arms or clears the injected failure.
    pub async fn set_failure(&self, failure: Option<SourceError>) {
        self.state.write().await.failure = failure;
    }

    /// Returns how many times `fetch_all` was called.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl QualitySource for InMemoryQualitySource {
    async fn fetch_all(&self) -> SourceResult<Vec<QualityRecord>> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        let state = self.state.read().await;
        match &state.failure {
            Some(error) => Err(error.clone()),
            None => Ok(state.records.clone()),
        }
    }
}
