//! Read-only release group registry.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use super::builtin::builtin_groups;
use super::types::ReleaseGroup;

/// Errors that can occur when building a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Release group table not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse release group table: {0}")]
    ParseError(String),

    #[error("Invalid release group entry: {0}")]
    InvalidEntry(String),

    #[error("Duplicate release group {field}: {value}")]
    Duplicate { field: &'static str, value: String },
}

/// On-disk shape of a persisted table.
#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    release_groups: Vec<ReleaseGroup>,
}

/// Declaration-ordered table of known release groups.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it
/// afterwards.
#[derive(Debug, Clone)]
pub struct ReleaseGroupRegistry {
    groups: Vec<ReleaseGroup>,
}

impl ReleaseGroupRegistry {
    /// Build a registry, keeping the given declaration order.
    pub fn new(groups: Vec<ReleaseGroup>) -> Result<Self, RegistryError> {
        let mut tokens = HashSet::new();
        let mut names = HashSet::new();

        for group in &groups {
            if group.canonical_name.trim().is_empty() {
                return Err(RegistryError::InvalidEntry(
                    "canonical_name cannot be empty".to_string(),
                ));
            }
            if group.file_attribute_token.is_empty() {
                return Err(RegistryError::InvalidEntry(format!(
                    "{}: file_attribute_token cannot be empty",
                    group.canonical_name
                )));
            }
            if !names.insert(group.canonical_name.as_str()) {
                return Err(RegistryError::Duplicate {
                    field: "canonical_name",
                    value: group.canonical_name.clone(),
                });
            }
            if !tokens.insert(group.file_attribute_token.as_str()) {
                return Err(RegistryError::Duplicate {
                    field: "file_attribute_token",
                    value: group.file_attribute_token.clone(),
                });
            }
        }

        Ok(Self { groups })
    }

    /// The default table shipped with the crate.
    pub fn builtin() -> Self {
        Self {
            groups: builtin_groups(),
        }
    }

    /// Load a persisted table from TOML (`[[release_groups]]` entries).
    pub fn from_toml_str(toml_str: &str) -> Result<Self, RegistryError> {
        let file: RegistryFile =
            toml::from_str(toml_str).map_err(|e| RegistryError::ParseError(e.to_string()))?;
        Self::new(file.release_groups)
    }

    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        if !path.exists() {
            return Err(RegistryError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| RegistryError::ParseError(e.to_string()))?;
        let registry = Self::from_toml_str(&content)?;

        info!(
            "Loaded {} release groups from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    /// First group, in declaration order, whose token occurs in `attributes`.
    pub fn resolve_in(&self, attributes: &str) -> Option<&ReleaseGroup> {
        self.groups
            .iter()
            .find(|group| attributes.contains(group.file_attribute_token.as_str()))
    }

    pub fn get(&self, canonical_name: &str) -> Option<&ReleaseGroup> {
        self.groups
            .iter()
            .find(|group| group.canonical_name == canonical_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReleaseGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Default for ReleaseGroupRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release_group::SearchableAliases;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn entry(name: &str, token: &str) -> ReleaseGroup {
        ReleaseGroup {
            canonical_name: name.to_string(),
            file_attribute_token: token.to_string(),
            matches: Vec::new(),
            searchable_aliases: SearchableAliases::uniform(name),
            synthesized: false,
        }
    }

    #[test]
    fn test_builtin_table_is_valid() {
        let builtin = ReleaseGroupRegistry::builtin();
        let rebuilt = ReleaseGroupRegistry::new(builtin.iter().cloned().collect());
        assert!(rebuilt.is_ok());
        assert!(!builtin.is_empty());
    }

    #[test]
    fn test_specific_token_declared_before_loose_one() {
        let registry = ReleaseGroupRegistry::builtin();

        let group = registry.resolve_in(".1080p.WEBRip.x264.AAC5.1-[YTS.MX].mp4").unwrap();
        assert_eq!(group.canonical_name, "YTS-MX");

        let group = registry.resolve_in(".720p.BluRay.x264-[YTS].mp4").unwrap();
        assert_eq!(group.canonical_name, "YTS");
    }

    #[test]
    fn test_declaration_order_wins() {
        let registry =
            ReleaseGroupRegistry::new(vec![entry("Loose", "RG"), entry("Specific", "GalaxyRG")])
                .unwrap();

        let group = registry.resolve_in(".1080p.x265-GalaxyRG.mkv").unwrap();
        assert_eq!(group.canonical_name, "Loose");
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let registry = ReleaseGroupRegistry::builtin();
        assert!(registry.resolve_in(".1080p.x265-megusta.mkv").is_none());
    }

    #[test]
    fn test_get_by_canonical_name() {
        let registry = ReleaseGroupRegistry::builtin();
        assert_eq!(registry.get("MeGusta").unwrap().file_attribute_token, "MeGusta");
        assert!(registry.get("NotAGroup").is_none());
    }

    #[test]
    fn test_rejects_duplicate_token() {
        let result = ReleaseGroupRegistry::new(vec![entry("A", "TOK"), entry("B", "TOK")]);
        assert!(matches!(
            result,
            Err(RegistryError::Duplicate {
                field: "file_attribute_token",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_duplicate_name() {
        let result = ReleaseGroupRegistry::new(vec![entry("A", "TOK1"), entry("A", "TOK2")]);
        assert!(matches!(
            result,
            Err(RegistryError::Duplicate {
                field: "canonical_name",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_empty_token() {
        let result = ReleaseGroupRegistry::new(vec![entry("A", "")]);
        assert!(matches!(result, Err(RegistryError::InvalidEntry(_))));
    }

    #[test]
    fn test_from_toml_str() {
        let toml = r#"
[[release_groups]]
canonical_name = "YTS-MX"
file_attribute_token = "YTS.MX"
matches = ["YTS MX"]

[release_groups.searchable_aliases]
subdivx = ["YTS MX", "YTS.MX"]
argenteam = "YTS MX"
opensubtitles = "YTS.MX"

[[release_groups]]
canonical_name = "FLUX"
file_attribute_token = "FLUX"

[release_groups.searchable_aliases]
subdivx = ["FLUX"]
argenteam = "FLUX"
opensubtitles = "FLUX"
"#;
        let registry = ReleaseGroupRegistry::from_toml_str(toml).unwrap();

        assert_eq!(registry.len(), 2);
        let names: Vec<_> = registry.iter().map(|g| g.canonical_name.as_str()).collect();
        assert_eq!(names, vec!["YTS-MX", "FLUX"]);
        assert!(registry.get("FLUX").unwrap().matches.is_empty());
        assert!(!registry.get("FLUX").unwrap().synthesized);
    }

    #[test]
    fn test_from_toml_str_invalid() {
        let result = ReleaseGroupRegistry::from_toml_str("release_groups = 3");
        assert!(matches!(result, Err(RegistryError::ParseError(_))));
    }

    #[test]
    fn test_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[[release_groups]]
canonical_name = "CMRG"
file_attribute_token = "CMRG"

[release_groups.searchable_aliases]
subdivx = ["CMRG"]
argenteam = "CMRG"
opensubtitles = "CMRG"
"#
        )
        .unwrap();

        let registry = ReleaseGroupRegistry::from_file(temp_file.path()).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_from_file_not_found() {
        let result = ReleaseGroupRegistry::from_file(Path::new("/nonexistent/groups.toml"));
        assert!(matches!(result, Err(RegistryError::FileNotFound(_))));
    }
}
