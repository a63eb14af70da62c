//! End-to-end subtitle lookup: filename in, best stored subtitle out.
//!
//! Storage is reached through the [`CandidateSource`] trait so the parse and
//! match steps stay pure.

mod service;
mod traits;
mod types;

pub use service::{LookupError, SubtitleLookup};
pub use traits::{CandidateSource, CandidateSourceError};
pub use types::{LookupOutcome, TitleKey};
