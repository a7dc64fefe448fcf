//! Unicodex core: the entity model, Unicode data loaders, tag groups and
//! user configuration consumed by `unicodex_search`.

pub mod catalog;
pub mod error;
pub mod favorites;
pub mod tags;
pub mod types;

pub use catalog::{Characters, TagSources};
pub use error::{CatalogError, Error, Result, TagError};
pub use favorites::Favorites;
pub use tags::{EnabledGroups, TagGroup, TagGroupKind, TagGroups};
pub use types::{AppConfig, Character, CodepointHex, CodepointHexError, SplitName, Tag};
