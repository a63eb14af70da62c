//! Value types produced by filename parsing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::release_group::ReleaseGroup;

/// Video resolution tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "480p")]
    P480,
    #[serde(rename = "720p")]
    P720,
    #[serde(rename = "1080p")]
    P1080,
    #[serde(rename = "2160p")]
    P2160,
    #[serde(rename = "3D")]
    ThreeD,
}

impl Resolution {
    /// Markers probed in filename attributes, in probe order.
    ///
    /// 480p is never inferred from a filename, it only arrives through
    /// stored subtitle records.
    pub(crate) const FILENAME_MARKERS: [(&'static str, Resolution); 4] = [
        ("1080", Resolution::P1080),
        ("720", Resolution::P720),
        ("2160", Resolution::P2160),
        ("3D", Resolution::ThreeD),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::P480 => "480p",
            Resolution::P720 => "720p",
            Resolution::P1080 => "1080p",
            Resolution::P2160 => "2160p",
            Resolution::ThreeD => "3D",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "480p" => Ok(Resolution::P480),
            "720p" => Ok(Resolution::P720),
            "1080p" => Ok(Resolution::P1080),
            "2160p" => Ok(Resolution::P2160),
            "3D" => Ok(Resolution::ThreeD),
            other => Err(format!("unknown resolution: {}", other)),
        }
    }
}

/// Encoding source classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RipType {
    #[serde(rename = "BluRay")]
    BluRay,
    #[serde(rename = "HDRip")]
    HdRip,
    #[serde(rename = "Theater")]
    Theater,
    #[serde(rename = "BrRip")]
    BrRip,
    #[serde(rename = "WEBRip")]
    WebRip,
    #[serde(rename = "Web-DL")]
    WebDl,
    #[serde(rename = "WEB")]
    Web,
    #[serde(rename = "DV")]
    Dv,
}

impl RipType {
    /// Canonical casing, as stored alongside subtitle records.
    pub fn as_str(&self) -> &'static str {
        match self {
            RipType::BluRay => "BluRay",
            RipType::HdRip => "HDRip",
            RipType::Theater => "Theater",
            RipType::BrRip => "BrRip",
            RipType::WebRip => "WEBRip",
            RipType::WebDl => "Web-DL",
            RipType::Web => "WEB",
            RipType::Dv => "DV",
        }
    }
}

impl fmt::Display for RipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported video container extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VideoFileExtension {
    #[serde(rename = ".mkv")]
    Mkv,
    #[serde(rename = ".mp4")]
    Mp4,
    #[serde(rename = ".avi")]
    Avi,
    #[serde(rename = ".mov")]
    Mov,
    #[serde(rename = ".wmv")]
    Wmv,
    #[serde(rename = ".flv")]
    Flv,
    #[serde(rename = ".webm")]
    Webm,
    #[serde(rename = ".vob")]
    Vob,
    #[serde(rename = ".m4v")]
    M4v,
    #[serde(rename = ".mpg")]
    Mpg,
    #[serde(rename = ".mpeg")]
    Mpeg,
    #[serde(rename = ".3gp")]
    ThreeGp,
    #[serde(rename = ".3g2")]
    ThreeG2,
}

impl VideoFileExtension {
    /// Every supported extension, in scan order.
    pub const ALL: [VideoFileExtension; 13] = [
        VideoFileExtension::Mkv,
        VideoFileExtension::Mp4,
        VideoFileExtension::Avi,
        VideoFileExtension::Mov,
        VideoFileExtension::Wmv,
        VideoFileExtension::Flv,
        VideoFileExtension::Webm,
        VideoFileExtension::Vob,
        VideoFileExtension::M4v,
        VideoFileExtension::Mpg,
        VideoFileExtension::Mpeg,
        VideoFileExtension::ThreeGp,
        VideoFileExtension::ThreeG2,
    ];

    /// The literal including the leading dot.
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoFileExtension::Mkv => ".mkv",
            VideoFileExtension::Mp4 => ".mp4",
            VideoFileExtension::Avi => ".avi",
            VideoFileExtension::Mov => ".mov",
            VideoFileExtension::Wmv => ".wmv",
            VideoFileExtension::Flv => ".flv",
            VideoFileExtension::Webm => ".webm",
            VideoFileExtension::Vob => ".vob",
            VideoFileExtension::M4v => ".m4v",
            VideoFileExtension::Mpg => ".mpg",
            VideoFileExtension::Mpeg => ".mpeg",
            VideoFileExtension::ThreeGp => ".3gp",
            VideoFileExtension::ThreeG2 => ".3g2",
        }
    }
}

impl fmt::Display for VideoFileExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything inferred from a scene release filename.
///
/// Produced by [`FilenameParser::parse`](super::FilenameParser::parse).
/// `resolution`, `rip_type` and `release_group` are `None` when the filename
/// carries no such information; they are never defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleFileNameMetadata {
    /// Human title, separators turned into single spaces.
    pub name: String,
    /// Release year. Parsing fails when no year is present.
    pub year: u16,
    pub resolution: Option<Resolution>,
    pub rip_type: Option<RipType>,
    pub release_group: Option<ReleaseGroup>,
    pub current_season: Option<u32>,
    pub current_episode: Option<u32>,
    pub file_name_without_extension: String,
    pub video_file_extension: VideoFileExtension,
}

impl TitleFileNameMetadata {
    /// Name and year in the form providers are searched with, e.g. `Road House (2024)`.
    pub fn searchable_name(&self) -> String {
        super::tokenizer::normalize_whitespace(&format!("{} ({})", self.name, self.year))
    }

    pub fn is_tv_show(&self) -> bool {
        self.current_season.is_some() && self.current_episode.is_some()
    }
}
