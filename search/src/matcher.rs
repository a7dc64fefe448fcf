//! The generic match predicate shared by every strategy.

use crate::query::Query;
use unicodex_core::{SplitName, TagGroups};

/// True if every query fragment is satisfied by the candidate.
///
/// A fragment is satisfied when some word of the candidate's name starts with
/// it (case-insensitive), or failing that, when the candidate carries a tag
/// equal to it with any leading `#` removed. Only entities with a codepoint
/// key have tags, and only when `tags` is supplied.
pub fn matches<T: SplitName + ?Sized>(query: &Query, candidate: &T, tags: Option<&TagGroups>) -> bool {
    query.fragments().iter().all(|fragment| {
        any_word_starts_with(candidate.split(), fragment) || has_tag(candidate, fragment, tags)
    })
}

pub(crate) fn any_word_starts_with(words: &[String], fragment: &str) -> bool {
    words.iter().any(|word| starts_with_ignore_case(word, fragment))
}

fn has_tag<T: SplitName + ?Sized>(candidate: &T, fragment: &str, tags: Option<&TagGroups>) -> bool {
    let (Some(tags), Some(codepoint)) = (tags, candidate.codepoint_key()) else {
        return false;
    };
    let wanted = strip_hash(fragment);
    tags.tag_names(codepoint).any(|tag| eq_ignore_case(tag, wanted))
}

pub(crate) fn strip_hash(fragment: &str) -> &str {
    fragment.trim_start_matches('#')
}

pub(crate) fn starts_with_ignore_case(word: &str, prefix: &str) -> bool {
    let mut word = word.chars().flat_map(char::to_uppercase);
    prefix
        .chars()
        .flat_map(char::to_uppercase)
        .all(|p| word.next() == Some(p))
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_uppercase)
        .eq(b.chars().flat_map(char::to_uppercase))
}
