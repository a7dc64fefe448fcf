use crate::error::CatalogError;
use crate::types::MAX_CODEPOINT;

/// The static tables the built-in tag groups are derived from.
#[derive(Debug, Clone, Default)]
pub struct TagSources {
    pub blocks: Vec<BlockRange>,
    pub aliases: Vec<NameAlias>,
    pub emoji: Vec<EmojiRange>,
}

impl TagSources {
    /// Parses all three tables. Pass an empty string for any table that is
    /// not available; its group stays empty.
    pub fn parse(blocks: &str, aliases: &str, emoji: &str) -> Result<Self, CatalogError> {
        Ok(Self {
            blocks: parse_blocks(blocks)?,
            aliases: parse_name_aliases(aliases)?,
            emoji: parse_emoji_data(emoji)?,
        })
    }
}

/// A named, inclusive codepoint range from Blocks.txt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRange {
    pub start: u32,
    pub end: u32,
    pub name: String,
}

/// One entry of NameAliases.txt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameAlias {
    pub codepoint: u32,
    pub alias: String,
    /// Alias type, e.g. `correction`, `control`, `abbreviation`.
    pub kind: String,
}

/// A codepoint range carrying an emoji property from emoji-data.txt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiRange {
    pub start: u32,
    pub end: u32,
    pub property: String,
}

/// Parses `0000..007F; Basic Latin` lines.
pub fn parse_blocks(text: &str) -> Result<Vec<BlockRange>, CatalogError> {
    data_lines(text)
        .map(|(line_no, line)| {
            let (range, name) = split_field(line, line_no)?;
            let (start, end) = parse_range(range, line_no)?;
            Ok(BlockRange {
                start,
                end,
                name: name.to_string(),
            })
        })
        .collect()
}

/// Parses `0000;NULL;control` lines.
pub fn parse_name_aliases(text: &str) -> Result<Vec<NameAlias>, CatalogError> {
    data_lines(text)
        .map(|(line_no, line)| {
            let mut fields = line.split(';').map(str::trim);
            let codepoint = fields.next().unwrap_or_default();
            let alias = fields.next().filter(|a| !a.is_empty()).ok_or_else(|| {
                CatalogError::MalformedLine {
                    line: line_no,
                    reason: "missing alias".to_string(),
                }
            })?;
            Ok(NameAlias {
                codepoint: parse_hex(codepoint, line_no)?,
                alias: alias.to_string(),
                kind: fields.next().unwrap_or_default().to_string(),
            })
        })
        .collect()
}

/// Parses `1F600..1F64F ; Emoji` and `231A ; Emoji_Presentation` lines.
pub fn parse_emoji_data(text: &str) -> Result<Vec<EmojiRange>, CatalogError> {
    data_lines(text)
        .map(|(line_no, line)| {
            let (range, property) = split_field(line, line_no)?;
            let (start, end) = parse_range(range, line_no)?;
            Ok(EmojiRange {
                start,
                end,
                property: property.to_string(),
            })
        })
        .collect()
}

/// Non-empty lines with `#` comments stripped, paired with 1-based line numbers.
fn data_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines().enumerate().filter_map(|(index, line)| {
        let data = line.split('#').next().unwrap_or_default().trim();
        (!data.is_empty()).then_some((index + 1, data))
    })
}

fn split_field(line: &str, line_no: usize) -> Result<(&str, &str), CatalogError> {
    let (left, right) = line
        .split_once(';')
        .ok_or_else(|| CatalogError::MalformedLine {
            line: line_no,
            reason: "missing ';'".to_string(),
        })?;
    let right = right.trim();
    if right.is_empty() {
        return Err(CatalogError::MalformedLine {
            line: line_no,
            reason: "missing value after ';'".to_string(),
        });
    }
    Ok((left.trim(), right))
}

fn parse_range(range: &str, line_no: usize) -> Result<(u32, u32), CatalogError> {
    let (start, end) = match range.split_once("..") {
        Some((start, end)) => (parse_hex(start, line_no)?, parse_hex(end, line_no)?),
        None => {
            let single = parse_hex(range, line_no)?;
            (single, single)
        }
    };
    if end < start {
        return Err(CatalogError::MalformedLine {
            line: line_no,
            reason: format!("range end {end:04X} precedes start {start:04X}"),
        });
    }
    if end > MAX_CODEPOINT {
        return Err(CatalogError::MalformedLine {
            line: line_no,
            reason: format!("range end {end:04X} is past U+{MAX_CODEPOINT:X}"),
        });
    }
    Ok((start, end))
}

pub(super) fn parse_hex(value: &str, line_no: usize) -> Result<u32, CatalogError> {
    let value = value.trim();
    u32::from_str_radix(value, 16).map_err(|_| CatalogError::InvalidHex {
        line: line_no,
        value: value.to_string(),
    })
}
