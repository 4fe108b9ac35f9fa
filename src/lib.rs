//! Emoji picker backend - catalog and ranked search.
//!
//! Provides the data side of an emoji picker widget: a catalog of emoji with
//! descriptive tags and a search that ranks entries for a typed query.
//!
//! # Architecture
//!
//! - [`catalog`] - Curated entries merged with symbols generated from Unicode ranges
//! - [`search`] - Query normalization, scoring and ordering
//! - [`picker`] - Owns a catalog and exposes `list` / `search` to a UI layer
//! - [`config`] - Optional TOML configuration
//!
//! # Example
//!
//! ```
//! use emoji_picker::Picker;
//!
//! let picker = Picker::new();
//!
//! // Pasted emoji, shortcodes, words and code points all work
//! let results = picker.search(Some(":bug:"), Some(5));
//! assert_eq!(results[0].symbol, "\u{1f41b}");
//! ```

pub mod catalog;
pub mod config;
pub mod picker;
pub mod search;

mod error;

pub use catalog::{Catalog, CatalogEntry};
pub use config::PickerConfig;
pub use error::{PickerError, PickerResult};
pub use picker::Picker;
pub use search::{ParsedQuery, ScoredEntry};
