//! Splits a raw filename into name, attribute and extension segments.

use super::error::ParseError;
use super::types::VideoFileExtension;
use super::year::{YearMatch, YearWindow};

/// Prefix commonly glued to the group tag, e.g. `x264-GROUP`.
const CODEC_GROUP_PREFIX: &str = "x264-";

/// A filename split around its release year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedFilename<'a> {
    pub raw_file_name: &'a str,
    pub year: YearMatch,
    /// Everything before the year token.
    pub raw_name: &'a str,
    /// Everything after the year token, extension included.
    pub raw_attributes: &'a str,
}

impl<'a> TokenizedFilename<'a> {
    /// Title with dots and underscores turned into spaces.
    pub fn name(&self) -> String {
        normalize_whitespace(&self.raw_name.replace(['.', '_'], " "))
    }

    /// Locate the trailing video extension inside the attribute segment.
    ///
    /// Extensions are tried in [`VideoFileExtension::ALL`] order and the first
    /// one present decides; the match is ASCII case-insensitive.
    pub fn extension(&self) -> Option<ExtensionToken> {
        let lowered = self.raw_attributes.to_ascii_lowercase();

        VideoFileExtension::ALL.iter().find_map(|ext| {
            lowered.rfind(ext.as_str()).map(|position| ExtensionToken {
                extension: *ext,
                position,
            })
        })
    }

    /// The raw filename up to the extension token.
    pub fn file_name_without_extension(&self, ext: &ExtensionToken) -> &'a str {
        &self.raw_file_name[..self.year.span.end + ext.position]
    }

    /// Best-effort release group tag: the last `.`/whitespace separated token
    /// before the extension, with a leading `x264-` removed.
    pub fn trailing_group_tag(&self, ext: &ExtensionToken) -> Option<&'a str> {
        let before_extension = &self.raw_attributes[..ext.position];
        let token = before_extension
            .rsplit(|c: char| c == '.' || c.is_whitespace())
            .next()
            .unwrap_or_default();
        let token = token.strip_prefix(CODEC_GROUP_PREFIX).unwrap_or(token);

        if token.is_empty() {
            None
        } else {
            Some(token)
        }
    }
}

/// Position of the video extension inside the attribute segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionToken {
    pub extension: VideoFileExtension,
    /// Byte offset into `raw_attributes`.
    pub position: usize,
}

/// Splits filenames around the first plausible release year.
#[derive(Debug, Clone, Default)]
pub struct FilenameTokenizer {
    window: YearWindow,
}

impl FilenameTokenizer {
    pub fn new(window: YearWindow) -> Self {
        Self { window }
    }

    pub fn window(&self) -> &YearWindow {
        &self.window
    }

    pub fn tokenize<'a>(&self, raw_file_name: &'a str) -> Result<TokenizedFilename<'a>, ParseError> {
        let year = self
            .window
            .find_in(raw_file_name)
            .ok_or(ParseError::NoYearFound)?;

        Ok(TokenizedFilename {
            raw_file_name,
            raw_name: &raw_file_name[..year.span.start],
            raw_attributes: &raw_file_name[year.span.end..],
            year,
        })
    }
}

/// Collapse whitespace runs into single spaces and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
