//! Favorited codepoints.

use crate::types::CodepointHex;
use indexmap::IndexSet;

/// Ordered set of favorited codepoints.
///
/// Membership is keyed by [`CodepointHex`], so case and padding differences in
/// stored settings cannot cause spurious misses. Iteration follows the order
/// favorites were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    codepoints: IndexSet<CodepointHex>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, codepoint: &CodepointHex) -> bool {
        self.codepoints.contains(codepoint)
    }

    /// Returns true if the codepoint was not already a favorite.
    pub fn add(&mut self, codepoint: CodepointHex) -> bool {
        self.codepoints.insert(codepoint)
    }

    /// Returns true if the codepoint was a favorite.
    pub fn remove(&mut self, codepoint: &CodepointHex) -> bool {
        self.codepoints.shift_remove(codepoint)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CodepointHex> {
        self.codepoints.iter()
    }

    pub fn len(&self) -> usize {
        self.codepoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codepoints.is_empty()
    }
}

impl FromIterator<CodepointHex> for Favorites {
    fn from_iter<I: IntoIterator<Item = CodepointHex>>(iter: I) -> Self {
        Self {
            codepoints: iter.into_iter().collect(),
        }
    }
}
