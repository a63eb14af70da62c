//! Subtitle lookup core: scene release filename parsing and subtitle
//! candidate selection.

pub mod config;
pub mod filename;
pub mod lookup;
pub mod matcher;
pub mod metrics;
pub mod release_group;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, ParserConfig,
    RegistryConfig, ServerConfig,
};
pub use filename::{
    FilenameParser, FilenameTokenizer, ParseError, Resolution, RipType, TitleFileNameMetadata,
    VideoFileExtension, YearWindow,
};
pub use lookup::{
    CandidateSource, CandidateSourceError, LookupError, LookupOutcome, SubtitleLookup, TitleKey,
};
pub use matcher::{
    MatchTier, NoCandidateError, SubtitleCandidate, SubtitleCandidateMatcher, SubtitleMatch,
};
pub use release_group::{RegistryError, ReleaseGroup, ReleaseGroupRegistry, SearchableAliases};

use std::sync::Arc;

/// Parse a scene release filename with the built-in registry and the default
/// year window.
pub fn parse_filename(raw_file_name: &str) -> Result<TitleFileNameMetadata, ParseError> {
    FilenameParser::new(Arc::new(ReleaseGroupRegistry::builtin())).parse(raw_file_name)
}

/// Select the best subtitle among the candidates stored for a title.
pub fn select_best_subtitle(
    metadata: &TitleFileNameMetadata,
    candidates: &[SubtitleCandidate],
) -> Result<SubtitleMatch, NoCandidateError> {
    SubtitleCandidateMatcher::new().select(metadata, candidates)
}

/// Build the registry named by the configuration, or the built-in one.
pub fn load_registry(config: &RegistryConfig) -> Result<ReleaseGroupRegistry, RegistryError> {
    match &config.path {
        Some(path) => ReleaseGroupRegistry::from_file(path),
        None => Ok(ReleaseGroupRegistry::builtin()),
    }
}
