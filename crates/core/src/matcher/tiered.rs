//! Cascading-tier subtitle matcher.

use tracing::debug;

use super::error::NoCandidateError;
use super::types::{MatchTier, SubtitleCandidate, SubtitleMatch};
use crate::filename::TitleFileNameMetadata;
use crate::metrics;

/// Order candidates best first.
///
/// Sorted by release group name (descending), then stably re-sorted by
/// `queried_times` (descending). The net order is most requested first,
/// with the lexicographically larger group name breaking ties. Candidates
/// equal on both keys keep their input order.
pub fn rank_candidates(mut pool: Vec<&SubtitleCandidate>) -> Vec<&SubtitleCandidate> {
    pool.sort_by(|a, b| b.release_group_name.cmp(&a.release_group_name));
    pool.sort_by(|a, b| b.queried_times.cmp(&a.queried_times));
    pool
}

/// Selects the best subtitle among the candidates stored for a title.
///
/// Tiers, first non-empty wins:
/// 1. candidates with the file's resolution;
/// 2. when the file has a release group: candidates from that group *or*
///    with the file's resolution;
/// 3. the first candidate as supplied by storage, unsorted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubtitleCandidateMatcher;

impl SubtitleCandidateMatcher {
    pub fn new() -> Self {
        Self
    }

    pub fn select(
        &self,
        metadata: &TitleFileNameMetadata,
        candidates: &[SubtitleCandidate],
    ) -> Result<SubtitleMatch, NoCandidateError> {
        let Some(first) = candidates.first() else {
            metrics::SUBTITLE_SELECTIONS.with_label_values(&["none"]).inc();
            return Err(NoCandidateError);
        };

        let resolution = metadata.resolution.map(|r| r.as_str());
        let same_resolution =
            |c: &SubtitleCandidate| resolution.is_some_and(|r| c.resolution == r);

        let by_resolution: Vec<_> = candidates.iter().filter(|c| same_resolution(c)).collect();
        if let Some(best) = rank_candidates(by_resolution).first() {
            return Ok(self.selected(best, MatchTier::Resolution));
        }

        if let Some(group) = &metadata.release_group {
            let by_group_or_resolution: Vec<_> = candidates
                .iter()
                .filter(|c| c.release_group_name == group.canonical_name || same_resolution(c))
                .collect();
            if let Some(best) = rank_candidates(by_group_or_resolution).first() {
                return Ok(self.selected(best, MatchTier::ReleaseGroupOrResolution));
            }
        }

        Ok(self.selected(first, MatchTier::Fallback))
    }

    fn selected(&self, candidate: &SubtitleCandidate, tier: MatchTier) -> SubtitleMatch {
        debug!(
            title_file_name = %candidate.title_file_name,
            release_group = %candidate.release_group_name,
            queried_times = candidate.queried_times,
            "Selected subtitle via {} tier",
            tier
        );
        metrics::SUBTITLE_SELECTIONS
            .with_label_values(&[tier.as_str()])
            .inc();

        SubtitleMatch {
            candidate: candidate.clone(),
            tier,
        }
    }
}
