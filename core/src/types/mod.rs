pub(crate) mod character;
pub use character::Character;

pub(crate) mod codepoint;
pub use codepoint::{CodepointHex, CodepointHexError, MAX_CODEPOINT};

pub mod config;
pub use config::AppConfig;

pub(crate) mod name;
pub use name::SplitName;

pub(crate) mod tag;
pub use tag::Tag;
