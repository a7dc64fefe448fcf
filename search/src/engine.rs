//! Search engine owning the three application filters.

use crate::config::FilterConfig;
use crate::filter::Filter;
use crate::query::Query;
use crate::strategy::Strategy;
use log::{debug, info, warn};
use std::collections::HashSet;
use std::sync::Arc;
use unicodex_core::types::config::{FavoritesConfig, SearchPreferences, UserTagPair};
use unicodex_core::{
    AppConfig, Character, Characters, CodepointHex, EnabledGroups, Favorites, Tag, TagError,
    TagGroupKind, TagGroups, TagSources,
};

/// Search engine over the character catalog:
/// - all characters, blank on an empty query
/// - favorited characters, listed in full on an empty query
/// - tags, listed in full on an empty query
///
/// Preferences are an explicit snapshot. Changing favorites, user tags or the
/// enabled groups rebuilds the affected filters from scratch; a search never
/// sees a partially built filter because `&mut self` excludes concurrent
/// searches for the duration of the rebuild.
pub struct SearchEngine {
    characters: Arc<Characters>,
    tag_groups: Arc<TagGroups>,
    favorites: Arc<Favorites>,
    max_results: usize,
    search: Filter<Character>,
    favorites_filter: Filter<Character>,
    tags: Filter<Tag>,
}

/// Create operations.
impl SearchEngine {
    pub fn new(
        characters: Characters,
        tag_groups: TagGroups,
        favorites: Favorites,
        max_results: usize,
    ) -> Self {
        let characters = Arc::new(characters);
        let tag_groups = Arc::new(tag_groups);
        let favorites = Arc::new(favorites);

        let search = build_search_filter(&characters, &tag_groups, &favorites, max_results);
        let favorites_filter =
            build_favorites_filter(&characters, &tag_groups, &favorites, max_results);
        let tags = build_tags_filter(&tag_groups, max_results);

        info!(
            "search engine ready: {} characters, {} favorites, {} tags",
            characters.len(),
            favorites_filter.len(),
            tags.len()
        );

        Self {
            characters,
            tag_groups,
            favorites,
            max_results,
            search,
            favorites_filter,
            tags,
        }
    }

    /// Builds the engine from a loaded catalog, the static tag sources and the
    /// user's configuration. Invalid configuration entries are dropped.
    pub fn from_config(characters: Characters, sources: &TagSources, config: &AppConfig) -> Self {
        let config = config.with_defaults_for_invalid();
        let mut tag_groups = TagGroups::from_catalog(&characters, sources, config.enabled_groups());
        for pair in &config.user_tags {
            if let Ok(codepoint) = CodepointHex::try_new(pair.codepoint.clone()) {
                if let Err(err) = tag_groups.add_user_tag(codepoint, &pair.tag) {
                    warn!("skipping user tag {pair:?}: {err}");
                }
            }
        }
        Self::new(
            characters,
            tag_groups,
            config.favorites(),
            config.search.max_results,
        )
    }
}

/// Search operations.
impl SearchEngine {
    pub fn search_characters(&self, text: &str) -> Vec<Arc<Character>> {
        let query = Query::parse(text);
        let hits = self.search.search(&query).to_vec();
        debug!("characters: {:?} -> {} hits", query.fragments(), hits.len());
        hits
    }

    pub fn search_favorites(&self, text: &str) -> Vec<Arc<Character>> {
        let query = Query::parse(text);
        let hits = self.favorites_filter.search(&query).to_vec();
        debug!("favorites: {:?} -> {} hits", query.fragments(), hits.len());
        hits
    }

    pub fn search_tags(&self, text: &str) -> Vec<Arc<Tag>> {
        let query = Query::parse(text);
        let hits = self.tags.search(&query).to_vec();
        debug!("tags: {:?} -> {} hits", query.fragments(), hits.len());
        hits
    }
}

/// Read operations.
impl SearchEngine {
    pub fn characters(&self) -> &Characters {
        &self.characters
    }

    pub fn tag_groups(&self) -> &TagGroups {
        &self.tag_groups
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    pub fn get_by_codepoint(&self, codepoint: &CodepointHex) -> Option<&Arc<Character>> {
        self.search.get_by_codepoint(codepoint)
    }

    pub fn is_favorite(&self, codepoint: &CodepointHex) -> bool {
        self.favorites.contains(codepoint)
    }

    /// Tags on a character across enabled groups, in group priority order.
    pub fn tags_for(&self, codepoint: &CodepointHex) -> Vec<Tag> {
        self.tag_groups.get_tags(codepoint)
    }

    /// Live characters carrying a tag name, in any group. Each character is
    /// listed once even when several groups share the name.
    pub fn characters_for_tag(&self, tag: &str) -> Vec<Arc<Character>> {
        let mut seen = HashSet::new();
        self.tag_groups
            .get_codepoints(tag)
            .iter()
            .filter_map(|codepoint| self.search.get_by_codepoint(codepoint))
            .filter(|character| seen.insert(Arc::as_ptr(*character)))
            .cloned()
            .collect()
    }

    /// Snapshot of the current preferences and user data, ready to save.
    pub fn to_config(&self) -> AppConfig {
        let user_tags = self
            .tag_groups
            .group(TagGroupKind::User)
            .pairs()
            .map(|(codepoint, tag)| UserTagPair {
                codepoint: codepoint.to_string(),
                tag: tag.to_string(),
            })
            .collect();

        AppConfig {
            search: SearchPreferences {
                max_results: self.max_results,
            },
            tags: self.tag_groups.enabled().into(),
            favorites: FavoritesConfig {
                codepoints: self.favorites.iter().map(ToString::to_string).collect(),
            },
            user_tags,
        }
    }
}

/// Mutation operations.
impl SearchEngine {
    /// Returns false if the codepoint was already a favorite.
    pub fn add_favorite(&mut self, codepoint: CodepointHex) -> bool {
        let added = Arc::make_mut(&mut self.favorites).add(codepoint);
        if added {
            self.rebuild_character_filters("favorite added");
        }
        added
    }

    pub fn remove_favorite(&mut self, codepoint: &CodepointHex) -> bool {
        let removed = Arc::make_mut(&mut self.favorites).remove(codepoint);
        if removed {
            self.rebuild_character_filters("favorite removed");
        }
        removed
    }

    pub fn add_user_tag(&mut self, codepoint: CodepointHex, tag: &str) -> Result<bool, TagError> {
        let added = Arc::make_mut(&mut self.tag_groups).add_user_tag(codepoint, tag)?;
        if added {
            self.rebuild_all("user tag added");
        }
        Ok(added)
    }

    pub fn remove_user_tag(&mut self, codepoint: &CodepointHex, tag: &str) -> bool {
        let removed = Arc::make_mut(&mut self.tag_groups).remove_user_tag(codepoint, tag);
        if removed {
            self.rebuild_all("user tag removed");
        }
        removed
    }

    pub fn set_enabled_groups(&mut self, enabled: EnabledGroups) {
        if self.tag_groups.enabled() == enabled {
            return;
        }
        Arc::make_mut(&mut self.tag_groups).set_enabled(enabled);
        self.rebuild_all("tag groups toggled");
    }

    /// Applies to the next search; indexes are unaffected.
    pub fn set_max_results(&mut self, max_results: usize) {
        self.max_results = max_results;
        self.search.set_max_results(max_results);
        self.favorites_filter.set_max_results(max_results);
        self.tags.set_max_results(max_results);
    }

    fn rebuild_character_filters(&mut self, reason: &str) {
        info!("rebuilding character filters: {reason}");
        self.search = build_search_filter(
            &self.characters,
            &self.tag_groups,
            &self.favorites,
            self.max_results,
        );
        self.favorites_filter = build_favorites_filter(
            &self.characters,
            &self.tag_groups,
            &self.favorites,
            self.max_results,
        );
    }

    fn rebuild_all(&mut self, reason: &str) {
        self.rebuild_character_filters(reason);
        info!("rebuilding tag filter: {reason}");
        self.tags = build_tags_filter(&self.tag_groups, self.max_results);
    }
}

/// Main search. Favorites claim their positions first, then tag matches,
/// exact name matches, the broad first-letter index and finally codepoints.
fn build_search_filter(
    characters: &Characters,
    tag_groups: &Arc<TagGroups>,
    favorites: &Arc<Favorites>,
    max_results: usize,
) -> Filter<Character> {
    Filter::build(
        [
            Strategy::Favorites(Arc::clone(favorites)),
            Strategy::Tags(Arc::clone(tag_groups)),
            Strategy::NameExact,
            Strategy::FirstWordExact,
            Strategy::AllWordsExact,
            Strategy::FirstLetterOfAllWords,
            Strategy::Codepoint,
        ],
        FilterConfig::characters(max_results),
        Some(Arc::clone(tag_groups)),
        characters.all().iter().cloned(),
    )
}

/// Favorited characters only, in the order they were favorited.
fn build_favorites_filter(
    characters: &Characters,
    tag_groups: &Arc<TagGroups>,
    favorites: &Favorites,
    max_results: usize,
) -> Filter<Character> {
    Filter::build(
        [
            Strategy::Tags(Arc::clone(tag_groups)),
            Strategy::NameExact,
            Strategy::AllWordsExact,
            Strategy::FirstLetterOfAllWords,
            Strategy::Codepoint,
        ],
        FilterConfig::favorites(max_results),
        Some(Arc::clone(tag_groups)),
        favorites
            .iter()
            .filter_map(|codepoint| characters.get(codepoint))
            .cloned(),
    )
}

/// Tags have no tags of their own, so this filter carries no tag groups.
fn build_tags_filter(tag_groups: &TagGroups, max_results: usize) -> Filter<Tag> {
    Filter::build(
        [
            Strategy::NameExact,
            Strategy::FirstLetterOfFirstWord,
            Strategy::AllWordsExact,
            Strategy::FirstLetterOfAllWords,
        ],
        FilterConfig::tags(max_results),
        None,
        tag_groups.get_all_tags().into_iter().map(Arc::new),
    )
}
