use thiserror::Error;

/// The matcher was handed an empty candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("No subtitle candidate available")]
pub struct NoCandidateError;
