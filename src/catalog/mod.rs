//! Emoji catalog: curated entries merged with symbols generated from Unicode
//! code point ranges.
//!
//! The catalog is built once and never mutated afterwards, so it can be shared
//! by reference between any number of searches.

pub mod classify;
pub mod curated;

use std::borrow::Cow;
use std::collections::HashSet;

use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::CatalogConfig;
use crate::search::{self, ScoredEntry};
use classify::Classifier;
use curated::CURATED;

/// A single pickable symbol with its search tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub symbol: Cow<'static, str>,
    /// Lowercase, space-separated keywords; empty for generated entries
    pub tags: Cow<'static, str>,
}

impl CatalogEntry {
    pub fn new(symbol: impl Into<Cow<'static, str>>, tags: impl Into<Cow<'static, str>>) -> Self {
        let tags = tags.into();
        let tags = if tags.chars().any(char::is_uppercase) {
            Cow::Owned(tags.to_lowercase())
        } else {
            tags
        };
        Self {
            symbol: symbol.into(),
            tags,
        }
    }

    /// Entry without tags, as produced by range scanning
    pub fn untagged(symbol: impl Into<Cow<'static, str>>) -> Self {
        Self {
            symbol: symbol.into(),
            tags: Cow::Borrowed(""),
        }
    }

    /// Whether this entry carries descriptive tags
    pub fn is_curated(&self) -> bool {
        !self.tags.trim().is_empty()
    }

    pub fn tag_words(&self) -> impl Iterator<Item = &str> {
        self.tags.split_whitespace()
    }

    /// Code points making up the symbol, e.g. base glyph and variation selector
    pub fn code_points(&self) -> impl Iterator<Item = u32> + '_ {
        self.symbol.chars().map(u32::from)
    }
}

/// Ordered, deduplicated, immutable list of entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build the catalog from the curated table and the default ranges
    pub fn build() -> Self {
        Self::build_with(&CatalogConfig::default())
    }

    /// Build the catalog from the curated table and the configured ranges
    pub fn build_with(config: &CatalogConfig) -> Self {
        let classifier = classify::resolve(&config.classifiers);
        let curated = curated_entries();
        let generated = generate_from_ranges(&config.ranges, classifier.as_ref());

        let curated_count = curated.len();
        let generated_count = generated.len();
        let catalog = Self::from_entries(curated.into_iter().chain(generated));

        tracing::debug!(
            classifier = classifier.name(),
            curated = curated_count,
            generated = generated_count,
            duplicates = curated_count + generated_count - catalog.len(),
            "built emoji catalog"
        );

        catalog
    }

    /// Build a catalog from arbitrary entries, keeping the first entry for
    /// each symbol and preserving order otherwise
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let mut seen = HashSet::new();
        let entries = entries
            .into_iter()
            .filter(|entry| seen.insert(entry.symbol.clone()))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    /// Look up the entry for an exact symbol
    pub fn get(&self, symbol: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.symbol == symbol)
    }

    /// Ranked search with the default scan factor
    pub fn search(&self, query: &str, limit: usize) -> Vec<&CatalogEntry> {
        search::search(self, query, limit)
    }

    /// Ranked search that keeps the scores
    pub fn search_scored(&self, query: &str, limit: usize) -> Vec<ScoredEntry<'_>> {
        search::search_scored(self, query, limit)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn curated_entries() -> Vec<CatalogEntry> {
    CURATED
        .iter()
        .map(|c| {
            if c.symbol.graphemes(true).count() != 1 {
                tracing::warn!(symbol = c.symbol, "curated symbol is not a single grapheme");
            }
            CatalogEntry::new(c.symbol, c.tags)
        })
        .collect()
}

/// Scan every code point of the inclusive ranges and keep what the classifier accepts
fn generate_from_ranges(ranges: &[[u32; 2]], classifier: &dyn Classifier) -> Vec<CatalogEntry> {
    let mut entries = Vec::new();
    for &[start, end] in ranges {
        for ch in (start..=end).filter_map(char::from_u32) {
            let symbol = ch.to_string();
            if classifier.accepts(&symbol) {
                entries.push(CatalogEntry::untagged(symbol));
            }
        }
    }
    entries
}
