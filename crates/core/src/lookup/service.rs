use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use super::traits::{CandidateSource, CandidateSourceError};
use super::types::{LookupOutcome, TitleKey};
use crate::filename::{FilenameParser, ParseError};
use crate::matcher::{NoCandidateError, SubtitleCandidateMatcher};

/// Errors that can occur during a filename lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Invalid filename: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    NoCandidate(#[from] NoCandidateError),

    #[error("Candidate source failed: {0}")]
    Source(#[from] CandidateSourceError),
}

/// Parses a filename, fetches the stored candidates for its title and
/// selects the best one.
pub struct SubtitleLookup {
    parser: FilenameParser,
    matcher: SubtitleCandidateMatcher,
    source: Arc<dyn CandidateSource>,
}

impl SubtitleLookup {
    pub fn new(parser: FilenameParser, source: Arc<dyn CandidateSource>) -> Self {
        Self {
            parser,
            matcher: SubtitleCandidateMatcher::new(),
            source,
        }
    }

    pub fn parser(&self) -> &FilenameParser {
        &self.parser
    }

    pub async fn find_best(&self, raw_file_name: &str) -> Result<LookupOutcome, LookupError> {
        let metadata = self.parser.parse(raw_file_name)?;
        let key = TitleKey::from(&metadata);

        let candidates = self.source.fetch_candidates_for_title(&key).await?;
        debug!(
            source = self.source.name(),
            title = %metadata.searchable_name(),
            count = candidates.len(),
            "Fetched subtitle candidates"
        );

        let selected = self.matcher.select(&metadata, &candidates)?;
        info!(
            "Subtitle for {} selected via {} tier: {}",
            raw_file_name, selected.tier, selected.candidate.title_file_name
        );

        Ok(LookupOutcome {
            metadata,
            candidate: selected.candidate,
            tier: selected.tier,
        })
    }
}

impl std::fmt::Debug for SubtitleLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubtitleLookup")
            .field("parser", &self.parser)
            .field("source", &self.source.name())
            .finish()
    }
}
