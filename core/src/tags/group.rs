use crate::types::{CodepointHex, Tag};
use indexmap::IndexMap;
use std::fmt;

/// The independent sources of tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagGroupKind {
    User,
    Block,
    Category,
    Emoji,
    Alias,
}

impl TagGroupKind {
    /// Group priority order used when listing the tags of a codepoint.
    pub const PRIORITY: [TagGroupKind; 5] = [
        TagGroupKind::Block,
        TagGroupKind::Category,
        TagGroupKind::Emoji,
        TagGroupKind::Alias,
        TagGroupKind::User,
    ];

    /// Human-readable origin of tags in this group.
    pub fn source(self) -> &'static str {
        match self {
            TagGroupKind::User => "User",
            TagGroupKind::Block => "Block",
            TagGroupKind::Category => "Category",
            TagGroupKind::Emoji => "Emoji",
            TagGroupKind::Alias => "Built-in alias",
        }
    }
}

impl fmt::Display for TagGroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source())
    }
}

/// Bidirectional tag ↔ codepoint mapping for one tag source.
///
/// Both directions are ordered lists rather than sets: users care about the
/// order they added tags in. The two maps are kept as exact inverses, and a
/// tag is stored at most once per codepoint, compared case-insensitively.
#[derive(Debug, Clone)]
pub struct TagGroup {
    kind: TagGroupKind,
    tag_to_codepoints: IndexMap<String, Vec<CodepointHex>>,
    codepoint_to_tags: IndexMap<CodepointHex, Vec<String>>,
}

impl TagGroup {
    pub fn new(kind: TagGroupKind) -> Self {
        Self {
            kind,
            tag_to_codepoints: IndexMap::new(),
            codepoint_to_tags: IndexMap::new(),
        }
    }

    pub fn kind(&self) -> TagGroupKind {
        self.kind
    }

    /// Tag names attached to a codepoint, in stored order.
    pub fn tag_names(&self, codepoint: &CodepointHex) -> &[String] {
        self.codepoint_to_tags
            .get(codepoint)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn get_tags(&self, codepoint: &CodepointHex) -> Vec<Tag> {
        self.tag_names(codepoint)
            .iter()
            .map(|name| Tag::new(name.as_str(), self.kind))
            .collect()
    }

    /// Codepoints carrying exactly this tag name, in the order they were tagged.
    pub fn get_codepoints(&self, tag: &str) -> &[CodepointHex] {
        self.tag_to_codepoints
            .get(tag)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Distinct tag names, in first-added order.
    pub fn tag_names_all(&self) -> impl Iterator<Item = &str> {
        self.tag_to_codepoints.keys().map(String::as_str)
    }

    /// Every (codepoint, tag) association, grouped by codepoint.
    pub fn pairs(&self) -> impl Iterator<Item = (&CodepointHex, &str)> {
        self.codepoint_to_tags
            .iter()
            .flat_map(|(codepoint, tags)| tags.iter().map(move |tag| (codepoint, tag.as_str())))
    }

    /// Attaches a tag. Returns false if the codepoint already carries it in
    /// any letter case.
    pub fn add_tag(&mut self, codepoint: CodepointHex, tag: &str) -> bool {
        let existing = self.tag_names(&codepoint);
        if existing.iter().any(|t| eq_ignore_case(t, tag)) {
            return false;
        }

        self.tag_to_codepoints
            .entry(tag.to_string())
            .or_default()
            .push(codepoint.clone());
        self.codepoint_to_tags
            .entry(codepoint)
            .or_default()
            .push(tag.to_string());
        true
    }

    /// Detaches a tag, matching the stored name case-insensitively. Entries
    /// left empty are dropped from both maps.
    pub fn remove_tag(&mut self, codepoint: &CodepointHex, tag: &str) -> bool {
        let Some(tags) = self.codepoint_to_tags.get_mut(codepoint) else {
            return false;
        };
        let Some(position) = tags.iter().position(|t| eq_ignore_case(t, tag)) else {
            return false;
        };
        let stored = tags.remove(position);
        if tags.is_empty() {
            self.codepoint_to_tags.shift_remove(codepoint);
        }

        if let Some(codepoints) = self.tag_to_codepoints.get_mut(&stored) {
            codepoints.retain(|c| c != codepoint);
            if codepoints.is_empty() {
                self.tag_to_codepoints.shift_remove(&stored);
            }
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        self.codepoint_to_tags.is_empty()
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_uppercase)
        .eq(b.chars().flat_map(char::to_uppercase))
}
