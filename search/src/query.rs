//! Query parsing.

use unicodex_core::SplitName;

const QUOTE: char = '"';

/// A parsed query: upper-cased fragments in input order.
///
/// Fragments are whitespace-separated words, except that a word starting with
/// `"` opens a quoted fragment that runs until a word ending with `"`, or to
/// the end of input. An unterminated quote still produces its fragment, so a
/// user typing `"fire tr` already searches for `FIRE TR`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    text: String,
    fragments: Vec<String>,
}

impl Query {
    pub fn parse(raw: &str) -> Self {
        let upper = raw.to_uppercase();
        let mut fragments = Vec::new();
        let mut quoted: Option<Vec<&str>> = None;

        for word in upper.split_whitespace() {
            if quoted.is_none() && word.starts_with(QUOTE) {
                quoted = Some(Vec::new());
            }

            match quoted.as_mut() {
                Some(words) => {
                    words.push(word);
                    if word.ends_with(QUOTE) {
                        push_quoted(&mut fragments, words);
                        quoted = None;
                    }
                }
                None => fragments.push(word.to_string()),
            }
        }

        if let Some(words) = quoted {
            push_quoted(&mut fragments, &words);
        }

        let text = fragments.join(" ");
        Self { text, fragments }
    }

    /// Fragments rejoined with single spaces; a normalized form, not the raw input.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

fn push_quoted(fragments: &mut Vec<String>, words: &[&str]) {
    let joined = words.join(" ");
    let fragment = joined.trim_matches(|c| c == QUOTE || c == ' ');
    if !fragment.is_empty() {
        fragments.push(fragment.to_string());
    }
}

impl SplitName for Query {
    fn unsplit(&self) -> &str {
        &self.text
    }

    fn split(&self) -> &[String] {
        &self.fragments
    }
}
