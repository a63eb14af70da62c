use serde::{Deserialize, Serialize};

/// Per-provider spellings used when searching subtitle providers for a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchableAliases {
    pub subdivx: Vec<String>,
    pub argenteam: String,
    pub opensubtitles: String,
}

impl SearchableAliases {
    /// The same spelling for every provider.
    pub fn uniform(name: &str) -> Self {
        Self {
            subdivx: vec![name.to_string()],
            argenteam: name.to_string(),
            opensubtitles: name.to_string(),
        }
    }
}

/// A release group known by the registry, or synthesized from a filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseGroup {
    pub canonical_name: String,
    /// Literal substring identifying the group inside filename attributes.
    pub file_attribute_token: String,
    /// Further substrings treated as the same group.
    #[serde(default)]
    pub matches: Vec<String>,
    pub searchable_aliases: SearchableAliases,
    /// Set when the group was guessed from the filename instead of found in
    /// the registry.
    #[serde(default)]
    pub synthesized: bool,
}

impl ReleaseGroup {
    /// Group guessed from a trailing filename tag.
    pub fn synthesized(tag: &str) -> Self {
        Self {
            canonical_name: tag.to_string(),
            file_attribute_token: tag.to_string(),
            matches: vec![tag.to_string()],
            searchable_aliases: SearchableAliases::uniform(tag),
            synthesized: true,
        }
    }
}
