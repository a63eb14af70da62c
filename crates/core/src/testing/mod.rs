//! Testing utilities and mock implementations.
//!
//! Provides a mock of the storage collaborator so lookups can be exercised
//! end to end without a database.
//!
//! # Example
//!
//! ```rust,ignore
//! use subtis_core::testing::{MockCandidateSource, fixtures};
//!
//! let source = Arc::new(MockCandidateSource::new());
//! source.insert(fixtures::movie_key("Road House", 2024), vec![/* candidates */]).await;
//!
//! let lookup = SubtitleLookup::new(parser, source);
//! ```

mod mock_candidate_source;

pub use mock_candidate_source::MockCandidateSource;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::lookup::TitleKey;
    use crate::matcher::SubtitleCandidate;

    /// Create a stored subtitle record with a filename derived from its fields.
    pub fn candidate(resolution: &str, release_group: &str, queried_times: u64) -> SubtitleCandidate {
        SubtitleCandidate {
            resolution: resolution.to_string(),
            release_group_name: release_group.to_string(),
            queried_times,
            title_file_name: format!("{}.{}.mkv", resolution, release_group),
        }
    }

    /// Key for a movie.
    pub fn movie_key(name: &str, year: u16) -> TitleKey {
        TitleKey {
            name: name.to_string(),
            year,
            season: None,
            episode: None,
        }
    }

    /// Key for a TV episode.
    pub fn episode_key(name: &str, year: u16, season: u32, episode: u32) -> TitleKey {
        TitleKey {
            name: name.to_string(),
            year,
            season: Some(season),
            episode: Some(episode),
        }
    }
}
