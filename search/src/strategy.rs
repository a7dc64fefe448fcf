//! Index strategies.
//!
//! Each strategy is one key-extraction rule plus its matching rule. Most
//! strategies probe with the same rule they index with and re-validate hits
//! with the generic predicate; the exceptions are spelled out per variant.

use crate::matcher::{self, any_word_starts_with, starts_with_ignore_case, strip_hash};
use crate::query::Query;
use std::fmt;
use std::sync::Arc;
use unicodex_core::{CodepointHex, Favorites, SplitName, TagGroups};

/// Discriminant of a [`Strategy`], for ordering and dependency checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    NameExact,
    FirstWordExact,
    AllWordsExact,
    FirstLetterOfFirstWord,
    FirstLetterOfAllWords,
    Codepoint,
    Favorites,
    Tags,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone)]
pub enum Strategy {
    /// Keyed on the whole name.
    NameExact,
    /// Keyed on the first name word.
    FirstWordExact,
    /// Keyed on every name word.
    AllWordsExact,
    /// Keyed on the first letter of the name. Hits must also have a first word
    /// starting with the first query fragment.
    FirstLetterOfFirstWord,
    /// Keyed on the first letter of every word.
    ///
    /// Buckets here are huge, so hits are only checked against the name: every
    /// fragment must prefix some word, with no tag fallback. Tag-only matches
    /// are left to [`Strategy::Tags`] (see [`Strategy::relies_on`]).
    FirstLetterOfAllWords,
    /// Keyed on the codepoint. A bucket hit is already an exact match.
    Codepoint,
    /// Like `FirstLetterOfAllWords` keys, but only favorited entities are indexed.
    Favorites(Arc<Favorites>),
    /// Keyed on every tag attached to the entity; probed with each fragment
    /// minus a leading `#`.
    Tags(Arc<TagGroups>),
}

impl Strategy {
    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::NameExact => StrategyKind::NameExact,
            Strategy::FirstWordExact => StrategyKind::FirstWordExact,
            Strategy::AllWordsExact => StrategyKind::AllWordsExact,
            Strategy::FirstLetterOfFirstWord => StrategyKind::FirstLetterOfFirstWord,
            Strategy::FirstLetterOfAllWords => StrategyKind::FirstLetterOfAllWords,
            Strategy::Codepoint => StrategyKind::Codepoint,
            Strategy::Favorites(_) => StrategyKind::Favorites,
            Strategy::Tags(_) => StrategyKind::Tags,
        }
    }

    /// The strategy this one defers true positives to, if any.
    ///
    /// `FirstLetterOfAllWords` rejects candidates that only match a fragment
    /// through a tag; those must be surfaced by `Tags` in the same filter.
    pub fn relies_on(&self) -> Option<StrategyKind> {
        match self {
            Strategy::FirstLetterOfAllWords => Some(StrategyKind::Tags),
            _ => None,
        }
    }

    /// Whether the entity belongs in this strategy's index at all.
    pub fn indexes<T: SplitName + ?Sized>(&self, entity: &T) -> bool {
        match self {
            Strategy::Favorites(favorites) => entity
                .codepoint_key()
                .is_some_and(|codepoint| favorites.contains(codepoint)),
            _ => true,
        }
    }

    /// Upper-cased index keys for an entity, without duplicates.
    pub fn keys_for<T: SplitName + ?Sized>(&self, entity: &T) -> Vec<String> {
        let raw: Vec<String> = match self {
            Strategy::NameExact => non_empty(entity.unsplit()).into_iter().map(str::to_string).collect(),
            Strategy::FirstWordExact => entity
                .split()
                .first()
                .filter(|word| !word.is_empty())
                .cloned()
                .into_iter()
                .collect(),
            Strategy::AllWordsExact => entity
                .split()
                .iter()
                .filter(|word| !word.is_empty())
                .cloned()
                .collect(),
            Strategy::FirstLetterOfFirstWord => first_letter(entity.unsplit()).into_iter().collect(),
            Strategy::FirstLetterOfAllWords | Strategy::Favorites(_) => entity
                .split()
                .iter()
                .filter_map(|word| first_letter(word))
                .collect(),
            Strategy::Codepoint => entity
                .codepoint_key()
                .map(|codepoint| codepoint.to_string())
                .into_iter()
                .collect(),
            Strategy::Tags(tag_groups) => match entity.codepoint_key() {
                Some(codepoint) => tag_groups.tag_names(codepoint).map(str::to_string).collect(),
                None => Vec::new(),
            },
        };
        normalize_keys(raw)
    }

    /// Keys to probe for a query. Defaults to [`keys_for`](Self::keys_for).
    pub fn query_keys_for(&self, query: &Query) -> Vec<String> {
        match self {
            Strategy::Codepoint => CodepointHex::try_new(query.text().to_string())
                .map(|codepoint| vec![codepoint.to_string()])
                .unwrap_or_default(),
            Strategy::Tags(_) => normalize_keys(
                query
                    .fragments()
                    .iter()
                    .map(|fragment| strip_hash(fragment))
                    .filter(|fragment| !fragment.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            _ => self.keys_for(query),
        }
    }

    /// Whether a bucket hit really matches the query.
    pub fn matches<T: SplitName + ?Sized>(
        &self,
        query: &Query,
        candidate: &T,
        tags: Option<&TagGroups>,
    ) -> bool {
        match self {
            Strategy::Codepoint => true,
            Strategy::FirstLetterOfAllWords => query
                .fragments()
                .iter()
                .all(|fragment| any_word_starts_with(candidate.split(), fragment)),
            Strategy::FirstLetterOfFirstWord => {
                let first_word_matches = candidate
                    .split()
                    .first()
                    .zip(query.fragments().first())
                    .is_some_and(|(word, fragment)| starts_with_ignore_case(word, fragment));
                first_word_matches && matcher::matches(query, candidate, tags)
            }
            _ => matcher::matches(query, candidate, tags),
        }
    }
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

/// First letter, upper-cased the same way query fragments are.
fn first_letter(s: &str) -> Option<String> {
    s.chars().flat_map(char::to_uppercase).next().map(String::from)
}

/// Upper-cases keys and drops repeats, keeping first-seen order.
fn normalize_keys(raw: Vec<String>) -> Vec<String> {
    let mut keys: Vec<String> = Vec::with_capacity(raw.len());
    for key in raw {
        let key = key.to_uppercase();
        if !keys.contains(&key) {
            keys.push(key);
        }
    }
    keys
}
