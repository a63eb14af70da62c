//! Filename parser: composes the year window, tokenizer and release group
//! registry into a [`TitleFileNameMetadata`].

use once_cell::sync::Lazy;
use regex_lite::Regex;
use std::sync::Arc;
use tracing::{debug, warn};

use super::error::ParseError;
use super::tokenizer::{ExtensionToken, FilenameTokenizer, TokenizedFilename};
use super::types::{Resolution, RipType, TitleFileNameMetadata};
use super::year::YearWindow;
use crate::metrics;
use crate::release_group::{ReleaseGroup, ReleaseGroupRegistry};

/// Known rip types and the spellings they are recognised by.
const RIP_TYPE_SPELLINGS: [(RipType, &str); 8] = [
    (RipType::BluRay, "blu-?ray"),
    (RipType::HdRip, "hd-?rip"),
    (RipType::Theater, "theat(?:er|re)"),
    (RipType::BrRip, "br-?rip"),
    (RipType::WebRip, "web-?rip"),
    (RipType::WebDl, "web-?dl"),
    (RipType::Web, "web"),
    (RipType::Dv, "dv"),
];

/// Wrap a pattern so it only matches as a whole token.
fn token_pattern(inner: &str) -> String {
    format!(r"(?i)(?:^|[^a-zA-Z0-9])({})(?:[^a-zA-Z0-9]|$)", inner)
}

static RIP_TYPE_PATTERNS: Lazy<Vec<(RipType, Regex)>> = Lazy::new(|| {
    RIP_TYPE_SPELLINGS
        .iter()
        .map(|(rip_type, spelling)| {
            let re = Regex::new(&token_pattern(spelling)).expect("valid rip type pattern");
            (*rip_type, re)
        })
        .collect()
});

/// Capture sources scene tags spell as `<source>Rip`, e.g. `DVDRip` or `CAMRip`.
/// Ordinary words ending in "rip" (`Trip`, `Strip`) are not sources.
const RIP_SOURCE_PREFIXES: &str = "dvd|bd|cam|ts|tc|hdtv|pdtv|tv|vhs|sat|dsr|hd|web|br";

/// A `<source>Rip` token that is not one of the known rip types.
static RIP_LIKE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    let pattern = token_pattern(&format!("(?:{})-?rip", RIP_SOURCE_PREFIXES));
    Regex::new(&pattern).expect("valid rip token pattern")
});

/// `S01E02` style markers. Digit runs are bounded so they always fit a `u32`;
/// longer runs are not treated as a marker at all.
static EPISODE_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)s(\d{1,4})e(\d{1,4})(?:[^0-9]|$)").expect("valid episode pattern")
});

/// Parses scene release filenames.
///
/// Holds the injected registry; parsing itself is pure and the parser can be
/// shared freely between threads.
#[derive(Debug, Clone)]
pub struct FilenameParser {
    tokenizer: FilenameTokenizer,
    registry: Arc<ReleaseGroupRegistry>,
}

impl FilenameParser {
    /// Parser over the default year window (1888 through next year).
    pub fn new(registry: Arc<ReleaseGroupRegistry>) -> Self {
        Self::with_window(registry, YearWindow::default())
    }

    pub fn with_window(registry: Arc<ReleaseGroupRegistry>, window: YearWindow) -> Self {
        Self {
            tokenizer: FilenameTokenizer::new(window),
            registry,
        }
    }

    pub fn registry(&self) -> &ReleaseGroupRegistry {
        &self.registry
    }

    pub fn window(&self) -> &YearWindow {
        self.tokenizer.window()
    }

    /// Parse a raw filename.
    ///
    /// Fails with [`ParseError::NoYearFound`] when no year of the window
    /// occurs, [`ParseError::UnsupportedExtension`] when the attributes carry
    /// no known video extension, and [`ParseError::UnknownRipType`] when a
    /// `...Rip` token is present that is not a known rip type.
    pub fn parse(&self, raw_file_name: &str) -> Result<TitleFileNameMetadata, ParseError> {
        let result = self.parse_tokens(raw_file_name);

        let label = match &result {
            Ok(_) => "ok",
            Err(e) => e.reason(),
        };
        metrics::FILENAME_PARSES.with_label_values(&[label]).inc();

        result
    }

    fn parse_tokens(&self, raw_file_name: &str) -> Result<TitleFileNameMetadata, ParseError> {
        let tokens = self.tokenizer.tokenize(raw_file_name)?;
        let attributes = tokens.raw_attributes;

        let resolution = detect_resolution(attributes);
        let extension = tokens.extension().ok_or(ParseError::UnsupportedExtension)?;
        // Rejected filenames must not count as registry misses.
        let rip_type = detect_rip_type(attributes)?;
        let release_group = self.resolve_release_group(&tokens, &extension);
        let (current_season, current_episode) = match detect_episode(attributes) {
            Some((season, episode)) => (Some(season), Some(episode)),
            None => (None, None),
        };

        let metadata = TitleFileNameMetadata {
            name: tokens.name(),
            year: tokens.year.year,
            resolution,
            rip_type,
            release_group,
            current_season,
            current_episode,
            file_name_without_extension: tokens.file_name_without_extension(&extension).to_string(),
            video_file_extension: extension.extension,
        };

        debug!(
            file_name = raw_file_name,
            name = %metadata.name,
            year = metadata.year,
            resolution = ?metadata.resolution,
            rip_type = ?metadata.rip_type,
            "Parsed release filename"
        );

        Ok(metadata)
    }

    fn resolve_release_group(
        &self,
        tokens: &TokenizedFilename<'_>,
        extension: &ExtensionToken,
    ) -> Option<ReleaseGroup> {
        if let Some(group) = self.registry.resolve_in(tokens.raw_attributes) {
            return Some(group.clone());
        }

        let tag = tokens.trailing_group_tag(extension)?;
        warn!(
            file_name = tokens.raw_file_name,
            "Release group not in registry, using '{}' from filename", tag
        );
        metrics::UNKNOWN_RELEASE_GROUPS.inc();

        Some(ReleaseGroup::synthesized(tag))
    }
}

fn detect_resolution(attributes: &str) -> Option<Resolution> {
    Resolution::FILENAME_MARKERS
        .iter()
        .find(|(marker, _)| attributes.contains(*marker))
        .map(|(_, resolution)| *resolution)
}

fn detect_rip_type(attributes: &str) -> Result<Option<RipType>, ParseError> {
    if let Some((rip_type, _)) = RIP_TYPE_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(attributes))
    {
        return Ok(Some(*rip_type));
    }

    match RIP_LIKE_TOKEN.captures(attributes) {
        Some(caps) => Err(ParseError::UnknownRipType {
            token: caps[1].to_string(),
        }),
        None => Ok(None),
    }
}

fn detect_episode(attributes: &str) -> Option<(u32, u32)> {
    let caps = EPISODE_MARKER.captures(attributes)?;
    let season = caps[1].parse::<u32>().ok()?;
    let episode = caps[2].parse::<u32>().ok()?;

    Some((season, episode))
}
