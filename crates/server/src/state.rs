use std::sync::Arc;
use subtis_core::{Config, FilenameParser, ReleaseGroupRegistry, SubtitleCandidateMatcher};

/// Shared application state
pub struct AppState {
    config: Config,
    parser: FilenameParser,
    matcher: SubtitleCandidateMatcher,
}

impl AppState {
    pub fn new(config: Config, registry: Arc<ReleaseGroupRegistry>) -> Self {
        let parser = FilenameParser::with_window(registry, config.parser.year_window());
        Self {
            config,
            parser,
            matcher: SubtitleCandidateMatcher::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn parser(&self) -> &FilenameParser {
        &self.parser
    }

    pub fn matcher(&self) -> &SubtitleCandidateMatcher {
        &self.matcher
    }

    pub fn registry(&self) -> &ReleaseGroupRegistry {
        self.parser.registry()
    }
}
