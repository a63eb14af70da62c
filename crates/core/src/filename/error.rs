use thiserror::Error;

/// Errors that can occur when parsing a release filename.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("No release year found in filename")]
    NoYearFound,

    #[error("Filename has no supported video extension")]
    UnsupportedExtension,

    #[error("Unknown rip type: {token}")]
    UnknownRipType { token: String },
}

impl ParseError {
    /// Stable label for metrics and API error bodies.
    pub fn reason(&self) -> &'static str {
        match self {
            ParseError::NoYearFound => "no_year_found",
            ParseError::UnsupportedExtension => "unsupported_extension",
            ParseError::UnknownRipType { .. } => "unknown_rip_type",
        }
    }
}
