//! Unicodex incremental lookup library.
//!
//! Answers a partial, possibly quoted query on every keystroke with a capped,
//! deduplicated list of characters or tags.
//!
//! # Design
//!
//! - A [`Filter`] owns an ordered list of [`Strategy`] indexes ("caches") over
//!   one collection. Each strategy maps derived keys to entities and decides
//!   whether a bucket hit really matches.
//! - Strategy order is result order: the first strategy to surface an entity
//!   claims its position.
//! - Results are pulled lazily and stop at the cap, so the large first-letter
//!   buckets are never scanned in full for a common query.
//! - Preferences are passed in explicitly. Changing favorites or tags rebuilds
//!   the affected filters.
//!
//! # API
//!
//! - [`Query::parse`]: tokenizes raw input into upper-cased fragments
//! - [`Filter::search`]: merged, deduplicated results for one collection
//! - [`SearchEngine`]: the three application filters plus tag and favorite
//!   management

mod config;
mod engine;
mod filter;
mod index;
mod matcher;
mod query;
mod results;
mod strategy;

pub use config::{DEFAULT_MAX_RESULTS, FilterConfig};
pub use engine::SearchEngine;
pub use filter::Filter;
pub use index::Cache;
pub use matcher::matches;
pub use query::Query;
pub use results::SearchResults;
pub use strategy::{Strategy, StrategyKind};
