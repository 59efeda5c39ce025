//! Extracted game data dump formats
//!
//! All dumps are line-oriented and tab-separated:
//!
//! - **String tables** - `id<TAB>text` (names, descriptions, results)
//! - **Ability table** - one row of numeric columns per ability
//! - **Component table** - one row per ability component, grouped by ability id
//!
//! Blank lines and `#` comments are ignored. Rows that fail to parse are skipped
//! and counted in a [`DecodeReport`] rather than aborting the decode.

pub mod abilities;
pub mod components;
pub mod strings;
pub mod text;

pub use abilities::{AbilityRow, AbilityTable, decode_ability_table};
pub use components::{ComponentTable, decode_component_table};
pub use strings::{StringTable, decode_string_table};
pub use text::{TextEncoding, decode_text_bytes, read_text_file};

/// Row counts from decoding one table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeReport {
    /// Rows decoded into records
    pub parsed: usize,
    /// Non-blank, non-comment rows that were skipped as malformed
    pub skipped: usize,
}

impl DecodeReport {
    fn record(&mut self, ok: bool) {
        if ok {
            self.parsed += 1;
        } else {
            self.skipped += 1;
        }
    }
}

/// Iterate data lines with their 1-based line numbers, dropping blanks and comments
fn data_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
}

/// Split a row into exactly `N` tab-separated numeric fields
fn numeric_fields<const N: usize>(line: &str) -> Option<[i64; N]> {
    let mut out = [0i64; N];
    let mut parts = line.split('\t');
    for slot in &mut out {
        *slot = parse_number(parts.next()?.trim())?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(out)
}

/// Parse a decimal or `0x`-prefixed hexadecimal integer
fn parse_number(field: &str) -> Option<i64> {
    if let Some(hex) = field
        .strip_prefix("0x")
        .or_else(|| field.strip_prefix("0X"))
    {
        i64::from_str_radix(hex, 16).ok()
    } else {
        field.parse().ok()
    }
}
