use serde::{Deserialize, Serialize};
use std::fmt;

/// A stored subtitle record competing to be the match for a file.
///
/// Supplied by storage, already scoped to the title (and season/episode for
/// TV shows) being looked up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleCandidate {
    pub resolution: String,
    pub release_group_name: String,
    /// How many times this subtitle has been requested.
    pub queried_times: u64,
    pub title_file_name: String,
}

/// Which stage of the cascade produced the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// Same resolution as the file.
    Resolution,
    /// Same release group, or same resolution.
    ReleaseGroupOrResolution,
    /// Nothing matched; first candidate in storage order.
    Fallback,
}

impl MatchTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchTier::Resolution => "resolution",
            MatchTier::ReleaseGroupOrResolution => "release_group_or_resolution",
            MatchTier::Fallback => "fallback",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The selected candidate and the tier that selected it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleMatch {
    pub candidate: SubtitleCandidate,
    pub tier: MatchTier,
}
