//! Scene release filename parsing.
//!
//! Turns a filename such as `Road.House.2024.1080p.WEBRip.x264.AAC5.1-[YTS.MX].mp4`
//! into a [`TitleFileNameMetadata`]:
//!
//! ```text
//! raw filename ──► YearWindow ──► FilenameTokenizer ──► FilenameParser
//!                  (lowest year     (name | attributes    (resolution, rip type,
//!                   in the text)     | extension)          release group, S/E)
//! ```

mod error;
mod parser;
mod tokenizer;
mod types;
mod year;

pub use error::ParseError;
pub use parser::FilenameParser;
pub use tokenizer::{normalize_whitespace, ExtensionToken, FilenameTokenizer, TokenizedFilename};
pub use types::{Resolution, RipType, TitleFileNameMetadata, VideoFileExtension};
pub use year::{YearMatch, YearWindow, FIRST_FILM_YEAR};
