//! Mock candidate source for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::lookup::{CandidateSource, CandidateSourceError, TitleKey};
use crate::matcher::SubtitleCandidate;

/// Mock implementation of the CandidateSource trait.
///
/// Provides controllable behavior for testing:
/// - Return configured candidates per title key
/// - Track requested keys for assertions
/// - Simulate storage failures
///
/// # Example
///
/// ```rust,ignore
/// use subtis_core::testing::{MockCandidateSource, fixtures};
///
/// let source = MockCandidateSource::new();
/// source.insert(
///     fixtures::movie_key("Road House", 2024),
///     vec![fixtures::candidate("1080p", "YTS-MX", 3)],
/// ).await;
///
/// let candidates = source.fetch_candidates_for_title(&fixtures::movie_key("Road House", 2024)).await?;
/// assert_eq!(candidates.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockCandidateSource {
    /// Configured candidates by title key.
    candidates: Arc<RwLock<HashMap<TitleKey, Vec<SubtitleCandidate>>>>,
    /// Recorded requests.
    keys: Arc<RwLock<Vec<TitleKey>>>,
    /// If set, the next fetch will fail with this error.
    next_error: Arc<RwLock<Option<CandidateSourceError>>>,
}

impl MockCandidateSource {
    /// Create a new mock source with no candidates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the candidates returned for a title key.
    pub async fn insert(&self, key: TitleKey, candidates: Vec<SubtitleCandidate>) {
        self.candidates.write().await.insert(key, candidates);
    }

    /// Make the next fetch fail.
    pub async fn set_next_error(&self, error: CandidateSourceError) {
        *self.next_error.write().await = Some(error);
    }

    /// Keys requested so far, in order.
    pub async fn recorded_keys(&self) -> Vec<TitleKey> {
        self.keys.read().await.clone()
    }
}

#[async_trait]
impl CandidateSource for MockCandidateSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_candidates_for_title(
        &self,
        key: &TitleKey,
    ) -> Result<Vec<SubtitleCandidate>, CandidateSourceError> {
        self.keys.write().await.push(key.clone());

        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }

        Ok(self
            .candidates
            .read()
            .await
            .get(key)
            .cloned()
            .unwrap_or_default())
    }
}
