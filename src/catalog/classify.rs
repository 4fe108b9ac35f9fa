//! Unicode classifiers used to filter generated catalog entries.
//!
//! Classifiers are tried in priority order. A property whose matcher cannot be
//! built is skipped, and when nothing else is available every candidate is
//! accepted.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{PickerError, PickerResult};

/// Plain property names like `Emoji_Presentation`
static PROPERTY_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_]+$").expect("property name pattern is valid"));

/// Decides whether a generated candidate belongs in the catalog.
pub trait Classifier: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Whether `symbol` should become a catalog entry
    fn accepts(&self, symbol: &str) -> bool;
}

/// Tests a single Unicode binary property such as `Extended_Pictographic`.
#[derive(Debug, Clone)]
pub struct PropertyClassifier {
    property: String,
    matcher: Regex,
}

impl PropertyClassifier {
    /// Build a matcher for `property`; fails when the name is malformed or
    /// the property is unknown.
    pub fn new(property: &str) -> PickerResult<Self> {
        if !PROPERTY_NAME.is_match(property) {
            return Err(PickerError::Config(format!(
                "invalid Unicode property name {:?}",
                property
            )));
        }
        let matcher = Regex::new(&format!(r"\p{{{}}}", property))?;
        Ok(Self {
            property: property.to_string(),
            matcher,
        })
    }
}

impl Classifier for PropertyClassifier {
    fn name(&self) -> &str {
        &self.property
    }

    fn accepts(&self, symbol: &str) -> bool {
        self.matcher.is_match(symbol)
    }
}

/// Last resort: every candidate in range is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl Classifier for AcceptAll {
    fn name(&self) -> &str {
        "unfiltered"
    }

    fn accepts(&self, _symbol: &str) -> bool {
        true
    }
}

/// Pick the first property classifier that can be built, else [`AcceptAll`].
pub fn resolve<S: AsRef<str>>(properties: &[S]) -> Box<dyn Classifier> {
    for property in properties {
        match PropertyClassifier::new(property.as_ref()) {
            Ok(classifier) => return Box::new(classifier),
            Err(e) => {
                tracing::debug!(
                    property = property.as_ref(),
                    error = %e,
                    "classifier unavailable, trying next"
                );
            }
        }
    }
    Box::new(AcceptAll)
}
