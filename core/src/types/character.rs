use super::{CodepointHex, CodepointHexError, SplitName};

const SURROGATES: std::ops::RangeInclusive<u32> = 0xD800..=0xDFFF;
const CONTROL_PICTURES: u32 = 0x2400;
const SYMBOL_FOR_DELETE: char = '\u{2421}';

/// A single Unicode codepoint and its name. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    codepoint: u32,
    hex: CodepointHex,
    name: String,
    name_words: Vec<String>,
    category: String,
}

impl Character {
    /// Creates a character. The name is split on single spaces, so the word
    /// list mirrors the name exactly.
    pub fn new(
        codepoint: u32,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, CodepointHexError> {
        let hex = CodepointHex::from_codepoint(codepoint)?;
        let name = name.into();
        let name_words = name.split(' ').map(str::to_string).collect();

        Ok(Self {
            codepoint,
            hex,
            name,
            name_words,
            category: category.into(),
        })
    }

    pub fn codepoint(&self) -> u32 {
        self.codepoint
    }

    pub fn codepoint_hex(&self) -> &CodepointHex {
        &self.hex
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_words(&self) -> &[String] {
        &self.name_words
    }

    /// General category code, e.g. `Lu`.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The literal text of this character. Empty for surrogate codepoints,
    /// which never render on their own.
    pub fn display_value(&self) -> String {
        if SURROGATES.contains(&self.codepoint) {
            return String::new();
        }
        char::from_u32(self.codepoint)
            .map(String::from)
            .unwrap_or_default()
    }

    /// Like [`display_value`](Self::display_value), but control codepoints
    /// (<= 32) and DEL are replaced by their visible Control Pictures glyph.
    pub fn visible_value(&self) -> String {
        match self.codepoint {
            cp @ 0..=32 => char::from_u32(CONTROL_PICTURES + cp)
                .map(String::from)
                .unwrap_or_default(),
            127 => SYMBOL_FOR_DELETE.to_string(),
            _ => self.display_value(),
        }
    }

    /// `U+XXXX` form used in listings.
    pub fn label(&self) -> String {
        format!("U+{}", self.hex)
    }
}

impl SplitName for Character {
    fn unsplit(&self) -> &str {
        &self.name
    }

    fn split(&self) -> &[String] {
        &self.name_words
    }

    fn codepoint_key(&self) -> Option<&CodepointHex> {
        Some(&self.hex)
    }
}
