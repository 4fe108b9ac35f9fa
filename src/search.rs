//! Ranked emoji search over a [`Catalog`].
//!
//! Scoring, highest first:
//!
//! ```text
//! 100  symbol equals the query (pasted emoji)
//!  90  query is a code point (`1f41b`, `U+1F41B`) contained in the symbol
//!  n   every query token is found in some tag word:
//!      n = matched_tokens × 10 + word_starts × 5
//! ```
//!
//! Entries with equal scores keep their catalog order.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::{Catalog, CatalogEntry};
use crate::config::DEFAULT_SCAN_FACTOR;

/// Score for an entry whose symbol is exactly the query
pub const EXACT_MATCH_SCORE: u32 = 100;

/// Score for an entry containing the queried code point
pub const CODEPOINT_MATCH_SCORE: u32 = 90;

const TOKEN_SCORE: u32 = 10;
const WORD_START_SCORE: u32 = 5;

/// `:bug:` or `:bug`
static SHORTCODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^:([a-z0-9_+-]+):?$").expect("shortcode pattern is valid"));

static HEX_CODEPOINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-f]{3,6}$").expect("hex pattern is valid"));

/// A catalog entry with the score it earned for one query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredEntry<'a> {
    pub entry: &'a CatalogEntry,
    pub score: u32,
}

/// A query after trimming, lowercasing and shortcode normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery<'q> {
    /// Trimmed query in its original case
    pub raw: &'q str,
    pub normalized: String,
    pub tokens: Vec<String>,
    /// Lowercase hex digits when the query looks like a code point
    pub hex: Option<String>,
}

impl<'q> ParsedQuery<'q> {
    pub fn parse(query: &'q str) -> Self {
        let raw = query.trim();
        let lowered = raw.to_lowercase();

        let normalized = SHORTCODE
            .captures(&lowered)
            .map(|caps| caps[1].to_string())
            .unwrap_or(lowered);

        let tokens = tokenize(&normalized);

        let candidate = normalized.strip_prefix("u+").unwrap_or(&normalized);
        let hex = HEX_CODEPOINT
            .is_match(candidate)
            .then(|| candidate.to_string());

        Self {
            raw,
            normalized,
            tokens,
            hex,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Score `entry` against this query, or `None` if it does not match
    pub fn score(&self, entry: &CatalogEntry) -> Option<u32> {
        if entry.symbol == self.raw {
            return Some(EXACT_MATCH_SCORE);
        }

        if let Some(hex) = &self.hex {
            if entry.code_points().any(|cp| format!("{:x}", cp) == *hex) {
                return Some(CODEPOINT_MATCH_SCORE);
            }
        }

        // Generated entries are only reachable by symbol or code point
        if !entry.is_curated() || self.tokens.is_empty() {
            return None;
        }

        score_tags(&self.tokens, entry)
    }
}

/// Split on whitespace into lowercase tokens
fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// All tokens must appear in some tag word. Only the first tag word containing
/// a token counts towards the word-start bonus.
fn score_tags(tokens: &[String], entry: &CatalogEntry) -> Option<u32> {
    let mut matched = 0;
    let mut word_starts = 0;

    for token in tokens {
        let idx = entry.tag_words().find_map(|word| word.find(token.as_str()))?;
        matched += 1;
        if idx == 0 {
            word_starts += 1;
        }
    }

    Some(matched * TOKEN_SCORE + word_starts * WORD_START_SCORE)
}

/// Search `catalog`, returning at most `limit` entries best match first
pub fn search<'a>(catalog: &'a Catalog, query: &str, limit: usize) -> Vec<&'a CatalogEntry> {
    search_scored(catalog, query, limit)
        .into_iter()
        .map(|scored| scored.entry)
        .collect()
}

/// Like [`search`] but keeps the scores
pub fn search_scored<'a>(catalog: &'a Catalog, query: &str, limit: usize) -> Vec<ScoredEntry<'a>> {
    search_scored_with(catalog, query, limit, DEFAULT_SCAN_FACTOR)
}

/// Search with an explicit cutoff: scanning stops after `scan_factor * limit`
/// entries were accepted. A `scan_factor` of zero is treated as one.
pub fn search_scored_with<'a>(
    catalog: &'a Catalog,
    query: &str,
    limit: usize,
    scan_factor: usize,
) -> Vec<ScoredEntry<'a>> {
    let query = ParsedQuery::parse(query);

    if query.is_empty() {
        return catalog
            .iter()
            .take(limit)
            .map(|entry| ScoredEntry { entry, score: 0 })
            .collect();
    }

    let budget = limit.saturating_mul(scan_factor.max(1));
    let mut scored = Vec::new();

    for entry in catalog {
        if scored.len() >= budget {
            break;
        }
        if let Some(score) = query.score(entry) {
            scored.push(ScoredEntry { entry, score });
        }
    }

    let hits = scored.len();

    // Stable: equal scores stay in catalog order
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);

    tracing::trace!(
        query = %query.normalized,
        tokens = query.tokens.len(),
        codepoint = query.hex.is_some(),
        hits,
        returned = scored.len(),
        "emoji search"
    );

    scored
}
