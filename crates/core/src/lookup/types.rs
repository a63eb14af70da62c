use serde::{Deserialize, Serialize};

use crate::filename::TitleFileNameMetadata;
use crate::matcher::{MatchTier, SubtitleCandidate};

/// Identifies the title (and episode) whose subtitles are requested.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TitleKey {
    pub name: String,
    pub year: u16,
    pub season: Option<u32>,
    pub episode: Option<u32>,
}

impl From<&TitleFileNameMetadata> for TitleKey {
    fn from(metadata: &TitleFileNameMetadata) -> Self {
        Self {
            name: metadata.name.clone(),
            year: metadata.year,
            season: metadata.current_season,
            episode: metadata.current_episode,
        }
    }
}

/// Result of a full filename lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupOutcome {
    pub metadata: TitleFileNameMetadata,
    pub candidate: SubtitleCandidate,
    pub tier: MatchTier,
}
