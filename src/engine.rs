//! Transliteration orchestrator.
//!
//! Owns the lexicon and every substitution table as explicit dependencies
//! and exposes the two pipeline entry points: `transliterate_word` for an
//! already-isolated English span and `transliterate_text` for mixed text.
//! Both are infallible; every miss degrades to a softer path.

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::fallback::Speller;
use crate::lexicon::Lexicon;
use crate::phoneme::Pronunciation;
use crate::render::Renderer;
use crate::tokenize::{tokens, TokenKind};
use crate::webtokens::WebTokens;

/// Which path produced a word's rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WordPath {
    WebToken,
    Lexicon,
    Fallback,
}

/// Diagnostic record of one word-level decision, for the CLI and tests.
#[derive(Debug, Serialize)]
pub struct Explanation {
    pub word: String,
    pub path: WordPath,
    pub phonemes: Option<Pronunciation>,
    pub output: String,
}

impl Explanation {
    pub fn format_text(&self) -> String {
        let mut out = format!("word:     {}\npath:     {:?}\n", self.word, self.path);
        if let Some(pron) = &self.phonemes {
            let codes: Vec<&str> = pron.iter().map(|p| p.code()).collect();
            out.push_str(&format!("phonemes: {}\n", codes.join(" ")));
        }
        out.push_str(&format!("output:   {}\n", self.output));
        out
    }
}

pub struct Engine {
    lexicon: Lexicon,
    renderer: Renderer,
    web: WebTokens,
    speller: Speller,
}

impl Engine {
    /// Build an engine over a loaded lexicon. The built-in domain overrides
    /// are layered on top of the base entries; add caller-specific overrides
    /// to the lexicon before handing it over.
    pub fn new(mut lexicon: Lexicon) -> Self {
        lexicon.apply_domain_overrides();
        Self {
            lexicon,
            renderer: Renderer::new(),
            web: WebTokens::new(),
            speller: Speller::new(),
        }
    }

    /// Transliterate one English word to Persian script. Never fails: web
    /// tokens take the fixed rendering, lexicon hits render phonetically,
    /// everything else is spelled out letter by letter.
    pub fn transliterate_word(&self, word: &str) -> String {
        let word = word.to_lowercase();

        if let Some(fixed) = self.web.get(&word) {
            return fixed.to_string();
        }

        match self.lexicon.first(&word) {
            Some(pron) => self.renderer.render(pron),
            None => {
                debug!(%word, "not in lexicon, spelling out");
                self.speller.spell_out(&word)
            }
        }
    }

    /// Word-level decision with the path taken, for diagnostics.
    pub fn explain(&self, word: &str) -> Explanation {
        let word = word.to_lowercase();

        if let Some(fixed) = self.web.get(&word) {
            return Explanation {
                word,
                path: WordPath::WebToken,
                phonemes: None,
                output: fixed.to_string(),
            };
        }

        match self.lexicon.first(&word) {
            Some(pron) => Explanation {
                output: self.renderer.render(pron),
                path: WordPath::Lexicon,
                phonemes: Some(pron.clone()),
                word,
            },
            None => Explanation {
                output: self.speller.spell_out(&word),
                path: WordPath::Fallback,
                phonemes: None,
                word,
            },
        }
    }

    /// Transliterate every Latin run in mixed text, leaving the surrounding
    /// text untouched.
    ///
    /// Order invariant: web tokens win over phonetic rendering. The word
    /// pass checks the web table per token, and the whole-text web pass runs
    /// once more at the end as a no-op safety net (its outputs contain no
    /// matchable keys, so the pipeline is idempotent past this point).
    pub fn transliterate_text(&self, text: &str) -> String {
        let _span = debug_span!("transliterate_text", len = text.len()).entered();
        let mut out = String::with_capacity(text.len());
        for token in tokens(text) {
            match token.kind {
                TokenKind::Word => out.push_str(&self.transliterate_word(token.text)),
                TokenKind::Other => out.push_str(token.text),
            }
        }
        self.web.substitute(&out)
    }

    /// Batch form of `transliterate_text`. The engine is `Send + Sync` and
    /// all methods take `&self`, so callers needing parallelism can equally
    /// fan texts out across threads over one shared engine.
    pub fn transliterate_batch<I, S>(&self, texts: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        texts
            .into_iter()
            .map(|t| self.transliterate_text(t.as_ref()))
            .collect()
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}
