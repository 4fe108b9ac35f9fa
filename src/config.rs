//! Optional TOML configuration for catalog ranges and search settings.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PickerError, PickerResult};

/// Highest Unicode code point.
const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Emoji-heavy blocks scanned for generated entries.
pub const DEFAULT_RANGES: &[[u32; 2]] = &[
    [0x1F300, 0x1F5FF], // Misc Symbols and Pictographs
    [0x1F600, 0x1F64F], // Emoticons
    [0x1F680, 0x1F6FF], // Transport & Map
    [0x2600, 0x26FF],   // Misc symbols
    [0x2700, 0x27BF],   // Dingbats
    [0x1F900, 0x1F9FF], // Supplemental Symbols and Pictographs
    [0x1FA70, 0x1FAFF], // Symbols & Pictographs Extended-A
];

/// Unicode properties tried in order when filtering generated entries.
pub const DEFAULT_CLASSIFIERS: &[&str] = &["Extended_Pictographic", "Emoji_Presentation"];

pub const DEFAULT_SEARCH_LIMIT: usize = 250;

pub const DEFAULT_SCAN_FACTOR: usize = 3;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub catalog: CatalogConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Inclusive `[start, end]` code point ranges
    pub ranges: Vec<[u32; 2]>,
    /// Unicode property names, highest priority first
    pub classifiers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub default_limit: usize,
    /// Scanning stops once `scan_factor * limit` entries were accepted
    pub scan_factor: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            ranges: DEFAULT_RANGES.to_vec(),
            classifiers: DEFAULT_CLASSIFIERS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_SEARCH_LIMIT,
            scan_factor: DEFAULT_SCAN_FACTOR,
        }
    }
}

impl SearchConfig {
    /// Clamp values to acceptable ranges
    pub fn validate(&mut self) {
        self.default_limit = self.default_limit.clamp(1, 10_000);
        self.scan_factor = self.scan_factor.clamp(1, 100);
    }

    /// Copy of these settings with [`SearchConfig::validate`] applied
    pub fn validated(&self) -> Self {
        let mut search = self.clone();
        search.validate();
        search
    }
}

impl PickerConfig {
    /// Get the config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".config"))
                    .unwrap_or_else(|| PathBuf::from("/tmp"))
            })
            .join("emoji-picker")
            .join("config.toml")
    }

    /// Load config from the default path, or return defaults if it is missing or broken
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: impl AsRef<Path>) -> PickerResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> PickerResult<Self> {
        let mut config: Self = toml::from_str(content)?;

        if let Some([start, end]) = config
            .catalog
            .ranges
            .iter()
            .find(|[start, end]| *start > MAX_CODE_POINT || *end > MAX_CODE_POINT)
        {
            return Err(PickerError::Config(format!(
                "range {:#X}-{:#X} lies outside Unicode",
                start, end
            )));
        }

        config.validate();
        Ok(config)
    }

    /// Validate and clamp config values to acceptable ranges
    fn validate(&mut self) {
        self.search.validate();

        self.catalog.ranges.retain(|[start, end]| {
            if start > end {
                tracing::warn!("dropping inverted range {:#X}-{:#X}", start, end);
                false
            } else {
                true
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PickerConfig::default();
        assert_eq!(config.search.default_limit, 250);
        assert_eq!(config.search.scan_factor, 3);
        assert_eq!(config.catalog.ranges.len(), 7);
        assert_eq!(
            config.catalog.classifiers,
            vec!["Extended_Pictographic", "Emoji_Presentation"]
        );
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = PickerConfig::from_toml_str("").unwrap();
        assert_eq!(config.search.default_limit, DEFAULT_SEARCH_LIMIT);
        assert_eq!(config.catalog.ranges, DEFAULT_RANGES.to_vec());
    }

    #[test]
    fn test_partial_document() {
        let config = PickerConfig::from_toml_str(
            r#"
            [catalog]
            ranges = [[0x2600, 0x26FF]]

            [search]
            default_limit = 40
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.ranges, vec![[0x2600, 0x26FF]]);
        assert_eq!(config.catalog.classifiers.len(), 2);
        assert_eq!(config.search.default_limit, 40);
        assert_eq!(config.search.scan_factor, DEFAULT_SCAN_FACTOR);
    }

    #[test]
    fn test_values_are_clamped() {
        let config = PickerConfig::from_toml_str(
            r#"
            [search]
            default_limit = 0
            scan_factor = 1000
            "#,
        )
        .unwrap();

        assert_eq!(config.search.default_limit, 1);
        assert_eq!(config.search.scan_factor, 100);
    }

    #[test]
    fn test_search_config_validated() {
        let search = SearchConfig {
            default_limit: 0,
            scan_factor: 0,
        }
        .validated();

        assert_eq!(search.default_limit, 1);
        assert_eq!(search.scan_factor, 1);
    }

    #[test]
    fn test_inverted_ranges_dropped() {
        let config = PickerConfig::from_toml_str(
            r#"
            [catalog]
            ranges = [[0x27BF, 0x2700], [0x1F600, 0x1F64F]]
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.ranges, vec![[0x1F600, 0x1F64F]]);
    }

    #[test]
    fn test_range_outside_unicode_rejected() {
        let err = PickerConfig::from_toml_str(
            r#"
            [catalog]
            ranges = [[0x10FFF0, 0x110000]]
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, PickerError::Config(_)));
    }

    #[test]
    fn test_invalid_toml() {
        let err = PickerConfig::from_toml_str("[search\ndefault_limit = 3").unwrap_err();
        assert!(matches!(err, PickerError::TomlParse(_)));
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = PickerConfig::load_from("/nonexistent/emoji-picker/config.toml").unwrap_err();
        assert!(matches!(err, PickerError::Io(_)));
    }
}
