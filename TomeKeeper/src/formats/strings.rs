//! String table decoding (`abilitynames.txt`, `abilitydesc.txt`, `abilityresults.txt`)

use std::collections::HashMap;

use super::{DecodeReport, data_lines};

/// Decoded `id -> text` rows
///
/// Name and description tables carry one string per id; result tables may
/// carry several, all kept in file order.
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    entries: HashMap<u32, Vec<String>>,
    pub report: DecodeReport,
}

impl StringTable {
    /// First string recorded for `id`
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&str> {
        self.entries
            .get(&id)
            .and_then(|texts| texts.first())
            .map(String::as_str)
    }

    /// Every string recorded for `id`, in file order
    #[must_use]
    pub fn get_all(&self, id: u32) -> &[String] {
        self.entries
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Decode a string table dump
#[must_use]
pub fn decode_string_table(content: &str) -> StringTable {
    let mut table = StringTable::default();

    for (line_no, line) in data_lines(content) {
        let parsed = line.split_once('\t').and_then(|(id, text)| {
            let id = id.trim().parse::<u32>().ok()?;
            Some((id, strip_grammar_marker(text.trim())))
        });

        match parsed {
            Some((id, text)) => {
                table.entries.entry(id).or_default().push(text.to_string());
                table.report.record(true);
            }
            None => {
                tracing::debug!("Skipping malformed string row {line_no}: {line:?}");
                table.report.record(false);
            }
        }
    }

    table
}

/// Drop a trailing `^n`/`^f`-style grammar marker
fn strip_grammar_marker(text: &str) -> &str {
    match text.rfind('^') {
        Some(pos)
            if pos + 1 < text.len()
                && text[pos + 1..].chars().all(|c| c.is_ascii_alphabetic()) =>
        {
            text[..pos].trim_end()
        }
        _ => text,
    }
}
