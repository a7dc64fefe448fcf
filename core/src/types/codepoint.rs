use nutype::nutype;

/// Highest codepoint defined by Unicode.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// Canonical textual codepoint identifier: upper-case hex, zero-padded to at
/// least 4 digits.
///
/// Raw input is normalized before validation, so `"41"`, `"0041"`, `"u+0041"`
/// and `" 00041 "` all produce `"0041"`. Every map in the tag groups and every
/// codepoint bucket is keyed by this form.
#[nutype(
    sanitize(with = |s: String| normalize(&s)),
    validate(predicate = |s: &str| is_valid(s)),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct CodepointHex(String);

impl CodepointHex {
    pub fn from_codepoint(codepoint: u32) -> Result<Self, CodepointHexError> {
        Self::try_new(format!("{codepoint:04X}"))
    }

    /// Numeric value; validation guarantees the text parses.
    pub fn codepoint(&self) -> u32 {
        u32::from_str_radix(self.as_str(), 16).unwrap_or_default()
    }
}

fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix("U+")
        .or_else(|| trimmed.strip_prefix("u+"))
        .unwrap_or(trimmed);
    if digits.is_empty() {
        return String::new();
    }
    let significant = digits.trim_start_matches('0');
    format!("{:0>4}", significant.to_ascii_uppercase())
}

fn is_valid(s: &str) -> bool {
    !s.is_empty()
        && s.len() <= 6
        && s.chars().all(|c| c.is_ascii_hexdigit())
        && u32::from_str_radix(s, 16).is_ok_and(|cp| cp <= MAX_CODEPOINT)
}

#[cfg(test)]
mod tests;
