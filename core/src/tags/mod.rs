//! Tag groups: the five independent sources of searchable tags.
//!
//! Lookup is deliberately asymmetric:
//! - codepoint → tags only consults enabled groups, because enablement controls
//!   whether a group contributes to search results;
//! - tag → codepoints consults every group, so a direct reverse lookup always works.
//!
//! Only the user group is mutable after construction. The built-in groups are
//! derived once from the catalog and the static tag sources.

mod group;

pub use group::{TagGroup, TagGroupKind};

use crate::catalog::{Characters, TagSources};
use crate::error::TagError;
use crate::types::{CodepointHex, Tag};
use log::info;

/// Enabled flags for the built-in groups. User tags are always enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnabledGroups {
    pub block: bool,
    pub category: bool,
    pub emoji: bool,
    pub alias: bool,
}

impl Default for EnabledGroups {
    fn default() -> Self {
        Self {
            block: true,
            category: true,
            emoji: true,
            alias: true,
        }
    }
}

impl EnabledGroups {
    pub fn is_enabled(&self, kind: TagGroupKind) -> bool {
        match kind {
            TagGroupKind::User => true,
            TagGroupKind::Block => self.block,
            TagGroupKind::Category => self.category,
            TagGroupKind::Emoji => self.emoji,
            TagGroupKind::Alias => self.alias,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TagGroups {
    user: TagGroup,
    block: TagGroup,
    category: TagGroup,
    emoji: TagGroup,
    alias: TagGroup,
    enabled: EnabledGroups,
}

/// Create operations.
impl TagGroups {
    /// Creates empty groups.
    pub fn new(enabled: EnabledGroups) -> Self {
        Self {
            user: TagGroup::new(TagGroupKind::User),
            block: TagGroup::new(TagGroupKind::Block),
            category: TagGroup::new(TagGroupKind::Category),
            emoji: TagGroup::new(TagGroupKind::Emoji),
            alias: TagGroup::new(TagGroupKind::Alias),
            enabled,
        }
    }

    /// Builds the built-in groups from the catalog and the static tag sources.
    /// Only codepoints present in the catalog are tagged.
    pub fn from_catalog(
        characters: &Characters,
        sources: &TagSources,
        enabled: EnabledGroups,
    ) -> Self {
        let mut groups = Self::new(enabled);

        for block in &sources.blocks {
            for codepoint in block.start..=block.end {
                if let Some(c) = characters.get_codepoint(codepoint) {
                    groups.block.add_tag(c.codepoint_hex().clone(), &block.name);
                }
            }
        }

        for c in characters.all() {
            if !c.category().is_empty() {
                groups.category.add_tag(c.codepoint_hex().clone(), c.category());
            }
        }

        for range in &sources.emoji {
            for codepoint in range.start..=range.end {
                if let Some(c) = characters.get_codepoint(codepoint) {
                    groups.emoji.add_tag(c.codepoint_hex().clone(), &range.property);
                }
            }
        }

        for alias in &sources.aliases {
            if let Some(c) = characters.get_codepoint(alias.codepoint) {
                groups.alias.add_tag(c.codepoint_hex().clone(), &alias.alias);
            }
        }

        info!(
            "built tag groups: {} blocks, {} categories, {} emoji properties, {} aliases",
            groups.block.tag_names_all().count(),
            groups.category.tag_names_all().count(),
            groups.emoji.tag_names_all().count(),
            groups.alias.tag_names_all().count(),
        );

        groups
    }
}

/// Read operations.
impl TagGroups {
    pub fn group(&self, kind: TagGroupKind) -> &TagGroup {
        match kind {
            TagGroupKind::User => &self.user,
            TagGroupKind::Block => &self.block,
            TagGroupKind::Category => &self.category,
            TagGroupKind::Emoji => &self.emoji,
            TagGroupKind::Alias => &self.alias,
        }
    }

    pub fn enabled(&self) -> EnabledGroups {
        self.enabled
    }

    pub fn is_enabled(&self, kind: TagGroupKind) -> bool {
        self.enabled.is_enabled(kind)
    }

    fn enabled_groups(&self) -> impl Iterator<Item = &TagGroup> {
        TagGroupKind::PRIORITY
            .into_iter()
            .filter(|kind| self.is_enabled(*kind))
            .map(|kind| self.group(kind))
    }

    /// Names of all tags on a codepoint across enabled groups, in group
    /// priority order.
    pub fn tag_names<'a, 'b>(
        &'a self,
        codepoint: &'b CodepointHex,
    ) -> impl Iterator<Item = &'a str> + 'b
    where
        'a: 'b,
    {
        self.enabled_groups()
            .flat_map(move |group| group.tag_names(codepoint).iter().map(String::as_str))
    }

    /// All tags on a codepoint across enabled groups, in group priority order.
    pub fn get_tags(&self, codepoint: &CodepointHex) -> Vec<Tag> {
        self.enabled_groups()
            .flat_map(|group| group.get_tags(codepoint))
            .collect()
    }

    /// All codepoints carrying a tag name, across every group regardless of
    /// enablement.
    pub fn get_codepoints(&self, tag: &str) -> Vec<CodepointHex> {
        TagGroupKind::PRIORITY
            .into_iter()
            .flat_map(|kind| self.group(kind).get_codepoints(tag).iter().cloned())
            .collect()
    }

    /// One tag per distinct name in each enabled group. Groups are visited in
    /// reverse priority order so user tags come first.
    pub fn get_all_tags(&self) -> Vec<Tag> {
        TagGroupKind::PRIORITY
            .into_iter()
            .rev()
            .filter(|kind| self.is_enabled(*kind))
            .flat_map(|kind| {
                self.group(kind)
                    .tag_names_all()
                    .map(move |name| Tag::new(name, kind))
            })
            .collect()
    }
}

/// Mutation operations.
impl TagGroups {
    pub fn set_enabled(&mut self, enabled: EnabledGroups) {
        self.enabled = enabled;
    }

    /// Adds a user tag. Surrounding whitespace is trimmed. Returns false if the
    /// codepoint already carries the tag in any letter case.
    pub fn add_user_tag(&mut self, codepoint: CodepointHex, tag: &str) -> Result<bool, TagError> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(TagError::Empty);
        }
        Ok(self.user.add_tag(codepoint, tag))
    }

    pub fn remove_user_tag(&mut self, codepoint: &CodepointHex, tag: &str) -> bool {
        self.user.remove_tag(codepoint, tag.trim())
    }
}
