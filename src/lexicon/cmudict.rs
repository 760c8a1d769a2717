//! CMUdict-format parser.
//!
//! Line format: `word PH1 PH2 ...`, with `;;;` comment lines, optional
//! trailing `#`-comments, and `word(2)`-style alternate pronunciations.
//! Malformed lines are skipped and counted, never fatal.

use std::collections::HashMap;

use crate::phoneme::{Phoneme, Pronunciation};

pub(super) fn parse(text: &str) -> HashMap<String, Vec<Pronunciation>> {
    let mut entries: HashMap<String, Vec<Pronunciation>> = HashMap::new();
    let mut total_lines = 0u64;
    let mut skipped = 0u64;

    for raw_line in text.lines() {
        total_lines += 1;
        let line = strip_comment(raw_line).trim();
        if line.is_empty() || line.starts_with(";;;") {
            skipped += 1;
            continue;
        }

        let mut fields = line.split_whitespace();
        let Some(head) = fields.next() else {
            skipped += 1;
            continue;
        };

        let word = strip_variant(head).to_lowercase();
        let codes: Pronunciation = fields
            .map(|c| Phoneme::new(c.to_ascii_uppercase()))
            .collect();
        if word.is_empty() || codes.is_empty() {
            skipped += 1;
            continue;
        }

        // Variants arrive in file order; the first stays authoritative.
        entries.entry(word).or_default().push(codes);
    }

    tracing::debug!(
        words = entries.len(),
        lines = total_lines,
        skipped,
        "parsed pronunciation lexicon"
    );
    entries
}

/// Drop a trailing `# ...` comment (cmusphinx dialect).
fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// `aluminium(2)` → `aluminium`.
fn strip_variant(head: &str) -> &str {
    match head.find('(') {
        Some(idx) => &head[..idx],
        None => head,
    }
}
