//! The picker owns one catalog and answers `list` and `search` for a UI layer.

use serde::Serialize;

use crate::catalog::{Catalog, CatalogEntry};
use crate::config::{PickerConfig, SearchConfig};
use crate::error::PickerResult;
use crate::search::{self, ScoredEntry};

/// JSON payload handed to native frontends
#[derive(Debug, Serialize)]
struct SearchResponse<'a> {
    results: Vec<&'a CatalogEntry>,
}

/// Catalog plus search settings, built once at startup and shared by reference
#[derive(Debug, Clone)]
pub struct Picker {
    catalog: Catalog,
    search: SearchConfig,
}

impl Picker {
    /// Picker with the built-in catalog and default settings
    pub fn new() -> Self {
        Self::from_config(&PickerConfig::default())
    }

    pub fn from_config(config: &PickerConfig) -> Self {
        Self {
            catalog: Catalog::build_with(&config.catalog),
            search: config.search.validated(),
        }
    }

    /// Use an existing catalog
    pub fn with_catalog(catalog: Catalog, search: SearchConfig) -> Self {
        Self {
            catalog,
            search: search.validated(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Every entry in catalog order
    pub fn list(&self) -> &[CatalogEntry] {
        self.catalog.entries()
    }

    /// Ranked search. A missing query behaves like an empty one and a missing
    /// limit falls back to the configured default.
    pub fn search(&self, query: Option<&str>, limit: Option<usize>) -> Vec<&CatalogEntry> {
        self.search_scored(query, limit)
            .into_iter()
            .map(|scored| scored.entry)
            .collect()
    }

    pub fn search_scored(&self, query: Option<&str>, limit: Option<usize>) -> Vec<ScoredEntry<'_>> {
        search::search_scored_with(
            &self.catalog,
            query.unwrap_or_default(),
            limit.unwrap_or(self.search.default_limit),
            self.search.scan_factor,
        )
    }

    /// Search and serialize the results as `{"results": [{"symbol", "tags"}, ...]}`
    pub fn search_json(&self, query: Option<&str>, limit: Option<usize>) -> PickerResult<String> {
        let response = SearchResponse {
            results: self.search(query, limit),
        };
        Ok(serde_json::to_string(&response)?)
    }
}

impl Default for Picker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::CODEPOINT_MATCH_SCORE;

    #[test]
    fn test_list_matches_catalog() {
        let picker = Picker::new();
        assert_eq!(picker.list(), picker.catalog().entries());
        assert!(!picker.list().is_empty());
    }

    #[test]
    fn test_empty_query_returns_first_entries() {
        let picker = Picker::new();
        let results = picker.search(Some(""), Some(5));
        let expected: Vec<&CatalogEntry> = picker.list().iter().take(5).collect();
        assert_eq!(results, expected);
    }

    #[test]
    fn test_missing_arguments_use_defaults() {
        let picker = Picker::new();
        let results = picker.search(None, None);
        assert_eq!(results.len(), 250usize.min(picker.list().len()));
        assert_eq!(results[0], &picker.list()[0]);
    }

    #[test]
    fn test_configured_default_limit() {
        let mut config = PickerConfig::default();
        config.search.default_limit = 7;
        let picker = Picker::from_config(&config);
        assert_eq!(picker.search(Some("circle"), None).len(), 7);
    }

    #[test]
    fn test_exact_symbol_ranks_first() {
        let picker = Picker::new();
        let results = picker.search(Some("\u{2705}"), Some(10));
        assert_eq!(results[0].symbol, "\u{2705}");
        assert_eq!(results[0].tags, "check success done pass ok green checkmark white_check_mark");
    }

    #[test]
    fn test_shortcode_and_word_agree() {
        let picker = Picker::new();
        let word = picker.search(Some("bug"), None);
        assert_eq!(picker.search(Some(":bug:"), None), word);
        assert_eq!(word[0].symbol, "\u{1f41b}");
    }

    #[test]
    fn test_hex_query_finds_bug() {
        let picker = Picker::new();
        let results = picker.search_scored(Some("1f41b"), Some(10));
        assert_eq!(results[0].entry.symbol, "\u{1f41b}");
        assert_eq!(results[0].score, CODEPOINT_MATCH_SCORE);
    }

    #[test]
    fn test_results_bounded() {
        let picker = Picker::new();
        for query in ["", "a", "circle", "heart", "1f600", "\u{1f680}"] {
            for limit in [0, 1, 3, 50] {
                assert!(picker.search(Some(query), Some(limit)).len() <= limit);
            }
        }
    }

    #[test]
    fn test_ties_follow_list_order() {
        let picker = Picker::new();
        let results = picker.search_scored(Some("circle"), Some(50));
        let position = |entry: &CatalogEntry| {
            picker
                .list()
                .iter()
                .position(|e| e.symbol == entry.symbol)
                .unwrap()
        };

        for pair in results.windows(2) {
            if pair[0].score == pair[1].score {
                assert!(position(pair[0].entry) < position(pair[1].entry));
            } else {
                assert!(pair[0].score > pair[1].score);
            }
        }
    }

    #[test]
    fn test_search_json() {
        let picker = Picker::new();
        let json = picker.search_json(Some(":bug:"), Some(1)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["results"][0]["symbol"], "\u{1f41b}");
        assert_eq!(value["results"][0]["tags"], "bug issue defect");
        assert_eq!(value["results"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_zero_scan_factor_is_clamped() {
        let search = SearchConfig {
            default_limit: 250,
            scan_factor: 0,
        };
        let picker = Picker::with_catalog(Catalog::build(), search);

        let results = picker.search(Some("bug"), Some(10));
        assert_eq!(results[0].symbol, "\u{1f41b}");

        let results = picker.search(Some("\u{2705}"), Some(10));
        assert_eq!(results[0].symbol, "\u{2705}");
    }

    #[test]
    fn test_zero_default_limit_is_clamped() {
        let mut config = PickerConfig::default();
        config.search.default_limit = 0;
        let picker = Picker::from_config(&config);

        let results = picker.search(Some("bug"), None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].symbol, "\u{1f41b}");
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = Catalog::from_entries([CatalogEntry::new("\u{1f9ea}", "test experiment lab")]);
        let picker = Picker::with_catalog(catalog, SearchConfig::default());
        assert_eq!(picker.search(Some("lab"), None).len(), 1);
    }
}
