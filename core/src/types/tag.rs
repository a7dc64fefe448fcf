use super::SplitName;
use crate::tags::TagGroupKind;

/// A tag name viewed through the group that defines it.
///
/// Tags are lightweight views built on demand from a [`TagGroup`](crate::TagGroup);
/// two tags are equal when both the name and the group match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    name: String,
    words: Vec<String>,
    group: TagGroupKind,
}

impl Tag {
    pub fn new(name: impl Into<String>, group: TagGroupKind) -> Self {
        let name = name.into();
        let words = name.split_whitespace().map(str::to_string).collect();
        Self { name, words, group }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> TagGroupKind {
        self.group
    }
}

impl SplitName for Tag {
    fn unsplit(&self) -> &str {
        &self.name
    }

    fn split(&self) -> &[String] {
        &self.words
    }
}
