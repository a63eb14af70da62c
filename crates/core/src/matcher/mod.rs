//! Subtitle candidate selection.
//!
//! Picks one subtitle among the records stored for a title using a cascade
//! of filters: the first tier that leaves any candidate decides, and within
//! a tier the most requested subtitle wins.

mod error;
mod tiered;
mod types;

pub use error::NoCandidateError;
pub use tiered::{rank_candidates, SubtitleCandidateMatcher};
pub use types::{MatchTier, SubtitleCandidate, SubtitleMatch};
