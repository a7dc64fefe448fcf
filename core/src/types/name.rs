use super::CodepointHex;

/// A record with a full display name and that name split into words.
///
/// Characters, tags and queries all implement this, so the same matching
/// machinery answers "does this query match this character" and "does this
/// query match this tag".
pub trait SplitName {
    /// Full unsplit name, case as stored.
    fn unsplit(&self) -> &str;

    /// The name split into words, in order.
    fn split(&self) -> &[String];

    /// Codepoint under which this entity is found in tag groups and codepoint
    /// indexes. Only characters have one.
    fn codepoint_key(&self) -> Option<&CodepointHex> {
        None
    }
}
