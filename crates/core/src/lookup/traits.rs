use async_trait::async_trait;
use thiserror::Error;

use super::types::TitleKey;
use crate::matcher::SubtitleCandidate;

/// Errors that can occur when fetching candidates from storage.
#[derive(Debug, Error)]
pub enum CandidateSourceError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Storage capability supplying the subtitle records recorded for a title.
///
/// Implementations must return candidates already scoped to the title, and to
/// the season/episode when the key carries them. The order returned is the
/// order the matcher falls back on.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Name of this source for logging.
    fn name(&self) -> &str;

    async fn fetch_candidates_for_title(
        &self,
        key: &TitleKey,
    ) -> Result<Vec<SubtitleCandidate>, CandidateSourceError>;
}
