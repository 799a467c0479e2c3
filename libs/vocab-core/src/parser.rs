//! CSV parser for word list files.
//!
//! # Format
//! ```text
//! word,meaning,synonyms,antonyms,example
//! cat,feline,kitty;tomcat,dog,A cat sat.
//! brave,"showing courage, unafraid",bold|valiant,cowardly,She was brave.
//! ```
//!
//! The first line is always treated as a header and skipped. Lines with fewer
//! than five fields are dropped without error so hand-edited lists still load.

use crate::types::WordEntry;

/// Header row written by [`to_csv`] and used by the bundled list.
pub const DEFAULT_HEADER: &str = "word,meaning,synonyms,antonyms,example";

const FIELD_COUNT: usize = 5;

/// Parse CSV content into word entries.
pub fn parse(content: &str) -> Vec<WordEntry> {
    let mut entries = Vec::new();
    let mut dropped = 0usize;

    for line in content.lines().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(entry) => entries.push(entry),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        tracing::debug!(dropped, kept = entries.len(), "dropped malformed word list lines");
    }
    entries
}

fn parse_line(line: &str) -> Option<WordEntry> {
    let fields = split_fields(line);
    if fields.len() < FIELD_COUNT {
        return None;
    }

    Some(WordEntry {
        word: fields[0].trim().to_string(),
        meaning: fields[1].trim().to_string(),
        synonyms: split_list(&fields[2]),
        antonyms: split_list(&fields[3]),
        example: fields[4].trim().to_string(),
    })
}

/// Split a line on commas outside double quotes.
///
/// Quotes only toggle the protected state; escaped quotes are not supported.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

/// Split a synonym/antonym field on `;` or `|`.
fn split_list(field: &str) -> Vec<String> {
    field
        .split(|c| c == ';' || c == '|')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Write entries back out in the format accepted by [`parse`].
///
/// The format has no escape for `"`, so double quotes inside a field are
/// written as single quotes.
pub fn to_csv(entries: &[WordEntry]) -> String {
    let mut out = String::from(DEFAULT_HEADER);
    out.push('\n');

    for entry in entries {
        let row = [
            quote(&entry.word),
            quote(&entry.meaning),
            quote(&entry.synonyms.join(";")),
            quote(&entry.antonyms.join(";")),
            quote(&entry.example),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

fn quote(field: &str) -> String {
    let field = field.replace('"', "'");
    if field.contains(',') {
        format!("\"{field}\"")
    } else {
        field
    }
}
