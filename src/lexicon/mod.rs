//! Pronunciation lexicon: word → ARPAbet phoneme sequences.
//!
//! Backed by a CMUdict-format text asset loaded once at startup, plus an
//! override layer for domain-specific words. Read-only after construction.

mod cmudict;
mod overrides;

pub use overrides::DOMAIN_OVERRIDES;

use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::phoneme::{seq, Pronunciation};

/// Lexicon load failure. Loading is the one fail-fast step in the engine:
/// serving with an empty lexicon would silently route every word to the
/// letter-name fallback.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("lexicon contains no entries")]
    Empty,
}

pub struct Lexicon {
    entries: HashMap<String, Vec<Pronunciation>>,
}

impl Lexicon {
    /// Load a CMUdict-format lexicon from a file.
    pub fn open(path: &Path) -> Result<Self, LexiconError> {
        let text = fs::read_to_string(path)?;
        Self::from_text(&text)
    }

    /// Load a CMUdict-format lexicon from a reader.
    pub fn from_reader(mut reader: impl Read) -> Result<Self, LexiconError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_text(&text)
    }

    /// Parse CMUdict-format text. Malformed lines are skipped; a lexicon
    /// with zero surviving entries is an error.
    pub fn from_text(text: &str) -> Result<Self, LexiconError> {
        let entries = cmudict::parse(text);
        if entries.is_empty() {
            return Err(LexiconError::Empty);
        }
        Ok(Self { entries })
    }

    /// Build a lexicon directly from entries. Test and embedding
    /// convenience; keys are lowercased.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Pronunciation)>,
        S: AsRef<str>,
    {
        let mut map: HashMap<String, Vec<Pronunciation>> = HashMap::new();
        for (word, pron) in entries {
            map.entry(word.as_ref().to_lowercase()).or_default().push(pron);
        }
        Self { entries: map }
    }

    /// All recorded pronunciations for a word, case-insensitively. `None`
    /// for absence: an expected outcome that routes to the fallback path,
    /// not an error.
    pub fn lookup(&self, word: &str) -> Option<&[Pronunciation]> {
        self.entries.get(&word.to_lowercase()).map(|v| v.as_slice())
    }

    /// The authoritative (first) pronunciation for a word.
    pub fn first(&self, word: &str) -> Option<&Pronunciation> {
        self.lookup(word).and_then(|variants| variants.first())
    }

    /// Insert or replace the entry for a word. Replaces all recorded
    /// variants, so inserting the same override twice is idempotent.
    pub fn insert_override(&mut self, word: &str, pron: Pronunciation) {
        self.entries.insert(word.to_lowercase(), vec![pron]);
    }

    /// Apply the built-in domain override table.
    pub fn apply_domain_overrides(&mut self) {
        for (word, codes) in DOMAIN_OVERRIDES {
            self.insert_override(word, seq(codes));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (word count, pronunciation count) over the whole lexicon.
    pub fn stats(&self) -> (usize, usize) {
        let words = self.entries.len();
        let prons = self.entries.values().map(|v| v.len()).sum();
        (words, prons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Lexicon {
        Lexicon::from_text(
            ";;; test lexicon\n\
             hello HH AH0 L OW1\n\
             hello(2) HH EH0 L OW1\n\
             net N EH1 T\n\
             film F IH1 L M\n",
        )
        .unwrap()
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let lex = sample();
        assert!(lex.lookup("Hello").is_some());
        assert!(lex.lookup("HELLO").is_some());
    }

    #[test]
    fn test_lookup_absent_is_none() {
        let lex = sample();
        assert!(lex.lookup("xyzzy").is_none());
    }

    #[test]
    fn test_first_is_first_variant() {
        let lex = sample();
        let first = lex.first("hello").unwrap();
        assert_eq!(first[1].code(), "AH0");
    }

    #[test]
    fn test_empty_lexicon_fails_fast() {
        let result = Lexicon::from_text(";;; nothing but comments\n");
        assert!(matches!(result, Err(LexiconError::Empty)));
    }

    #[test]
    fn test_override_replaces_all_variants() {
        let mut lex = sample();
        lex.insert_override("hello", crate::phoneme::seq(&["HH", "AA1", "L", "OW1"]));
        let variants = lex.lookup("hello").unwrap();
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0][1].code(), "AA1");
    }

    #[test]
    fn test_override_idempotent() {
        let mut lex = sample();
        let pron = crate::phoneme::seq(&["N", "EH1", "T", "S"]);
        lex.insert_override("net", pron.clone());
        lex.insert_override("net", pron.clone());
        assert_eq!(lex.lookup("net").unwrap(), &[pron]);
    }

    #[test]
    fn test_domain_overrides_applied() {
        let mut lex = sample();
        lex.apply_domain_overrides();
        let pron = lex.first("avengers").unwrap();
        assert_eq!(pron[0].code(), "AH0");
        // Base entries survive alongside overrides.
        assert!(lex.lookup("film").is_some());
    }

    #[test]
    fn test_stats() {
        let lex = sample();
        assert_eq!(lex.stats(), (3, 4));
    }

    // --- Integration tests (require the fetched CMU lexicon asset) ---

    #[test]
    #[ignore]
    fn test_cmudict_known_entries() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("data")
            .join("cmudict.dict");
        let lex = Lexicon::open(&path)
            .expect("failed to open cmudict.dict, run `parstool fetch` first");

        let pron = lex.first("hello").expect("hello should exist");
        assert!(!pron.is_empty());
        assert!(lex.lookup("internet").is_some());
        let (words, prons) = lex.stats();
        assert!(words > 100_000, "suspiciously small lexicon: {words}");
        assert!(prons >= words);
    }
}
