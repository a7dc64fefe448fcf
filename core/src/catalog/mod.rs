//! The character catalog and the static tables tag groups are built from.
//!
//! All loaders take the table text rather than a path; where the text comes
//! from (bundled resource, file, test fixture) is the caller's business.

mod sources;

pub use sources::{
    BlockRange, EmojiRange, NameAlias, TagSources, parse_blocks, parse_emoji_data,
    parse_name_aliases,
};

use crate::error::CatalogError;
use crate::types::{Character, CodepointHex};
use log::{info, warn};
use std::collections::HashMap;
use std::sync::Arc;

/// Name used by UnicodeData for control characters; the Unicode 1.0 name
/// replaces it when present.
const CONTROL_NAME: &str = "<control>";

const FIELD_CODEPOINT: usize = 0;
const FIELD_NAME: usize = 1;
const FIELD_CATEGORY: usize = 2;
const FIELD_UNICODE_1_NAME: usize = 10;

/// The full parsed character set, in catalog order, plus direct lookup.
#[derive(Debug, Clone, Default)]
pub struct Characters {
    all: Vec<Arc<Character>>,
    by_codepoint: HashMap<u32, Arc<Character>>,
}

impl Characters {
    /// Parses the semicolon-delimited UnicodeData table.
    pub fn parse(unicode_data: &str) -> Result<Self, CatalogError> {
        let mut characters = Vec::new();
        for (index, line) in unicode_data.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            characters.push(parse_unicode_data_line(line, index + 1)?);
        }

        let characters = Self::from_characters(characters);
        info!("loaded {} characters", characters.len());
        Ok(characters)
    }

    /// Builds a catalog from already-constructed characters. Later duplicates
    /// of a codepoint are skipped.
    pub fn from_characters(characters: impl IntoIterator<Item = Character>) -> Self {
        let mut catalog = Self::default();
        for c in characters {
            if catalog.by_codepoint.contains_key(&c.codepoint()) {
                warn!("skipping duplicate catalog entry {}", c.label());
                continue;
            }
            let c = Arc::new(c);
            catalog.by_codepoint.insert(c.codepoint(), Arc::clone(&c));
            catalog.all.push(c);
        }
        catalog
    }

    pub fn all(&self) -> &[Arc<Character>] {
        &self.all
    }

    pub fn get(&self, hex: &CodepointHex) -> Option<&Arc<Character>> {
        self.get_codepoint(hex.codepoint())
    }

    pub fn get_codepoint(&self, codepoint: u32) -> Option<&Arc<Character>> {
        self.by_codepoint.get(&codepoint)
    }

    pub fn contains(&self, hex: &CodepointHex) -> bool {
        self.get(hex).is_some()
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

fn parse_unicode_data_line(line: &str, line_no: usize) -> Result<Character, CatalogError> {
    let fields: Vec<&str> = line.split(';').collect();
    if fields.len() <= FIELD_CATEGORY {
        return Err(CatalogError::MalformedLine {
            line: line_no,
            reason: format!("expected at least 3 fields, found {}", fields.len()),
        });
    }

    let codepoint = sources::parse_hex(fields[FIELD_CODEPOINT], line_no)?;

    let mut name = fields[FIELD_NAME];
    if name == CONTROL_NAME {
        if let Some(legacy) = fields
            .get(FIELD_UNICODE_1_NAME)
            .copied()
            .filter(|n| !n.is_empty())
        {
            name = legacy;
        }
    }

    Character::new(codepoint, name, fields[FIELD_CATEGORY]).map_err(|source| {
        CatalogError::Codepoint {
            line: line_no,
            source,
        }
    })
}
