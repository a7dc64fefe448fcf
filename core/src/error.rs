use crate::types::CodepointHexError;
use crate::types::config::AppConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("config error: {0}")]
    Config(#[from] AppConfigError),

    #[error("tag error: {0}")]
    Tag(#[from] TagError),

    #[error("invalid codepoint: {0}")]
    Codepoint(#[from] CodepointHexError),
}

/// Errors raised while parsing the static Unicode data tables.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("line {line}: invalid hex value {value:?}")]
    InvalidHex { line: usize, value: String },

    #[error("line {line}: {source}")]
    Codepoint {
        line: usize,
        #[source]
        source: CodepointHexError,
    },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TagError {
    #[error("tag name is empty")]
    Empty,
}
