//! Phoneme-to-Persian-script renderer.
//!
//! Converts an ordered phoneme sequence into Persian orthography in a single
//! left-to-right pass, one output fragment per phoneme. Fragment choice is
//! position-classified (word-initial, interior, word-final) because Persian
//! writes vowels differently at word boundaries.

mod rules;

pub use rules::{DEFAULT_RULES, POSITIONAL_RULES};

use std::collections::HashMap;

use crate::phoneme::Phoneme;

/// Position of a phoneme within its word.
///
/// A single-element sequence classifies as `Start`: the start check runs
/// before the end check, so first wins on the tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Start,
    Interior,
    End,
}

impl Position {
    pub fn classify(index: usize, len: usize) -> Self {
        if index == 0 {
            Self::Start
        } else if index + 1 == len {
            Self::End
        } else {
            Self::Interior
        }
    }

    fn rule_index(self) -> usize {
        match self {
            Self::Start => 0,
            Self::Interior => 1,
            Self::End => 2,
        }
    }
}

pub struct Renderer {
    positional: HashMap<&'static str, [&'static str; 3]>,
    default: HashMap<&'static str, &'static str>,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            positional: POSITIONAL_RULES.iter().copied().collect(),
            default: DEFAULT_RULES.iter().copied().collect(),
        }
    }

    /// Render a phoneme sequence to Persian script.
    ///
    /// Fragments are concatenated with no separators. Rule precedence per
    /// phoneme: positional rule, then the sibilant special case, then the
    /// position-independent default, then raw-code passthrough. Passthrough
    /// is the designed degradation path for codes outside the alphabet; it
    /// never fails.
    pub fn render(&self, seq: &[Phoneme]) -> String {
        let mut out = String::new();
        for (i, phoneme) in seq.iter().enumerate() {
            let pos = Position::classify(i, seq.len());
            out.push_str(self.fragment(phoneme, pos, seq.get(i + 1)));
        }
        out
    }

    fn fragment<'a>(
        &'a self,
        phoneme: &'a Phoneme,
        pos: Position,
        next: Option<&Phoneme>,
    ) -> &'a str {
        let base = phoneme.base();

        if let Some(frags) = self.positional.get(base) {
            return frags[pos.rule_index()];
        }

        if base == rules::SIBILANT {
            return self.sibilant_fragment(pos, next);
        }

        if let Some(frag) = self.default.get(base) {
            return *frag;
        }

        phoneme.code()
    }

    /// Word-initial /s/ directly before a consonant takes the epenthetic
    /// form; before a vowel (any phoneme with a start-position rule) and at
    /// every non-initial position the plain consonant is used.
    fn sibilant_fragment(&self, pos: Position, next: Option<&Phoneme>) -> &'static str {
        let before_vowel = next.is_some_and(|n| self.positional.contains_key(n.base()));
        if pos == Position::Start && !before_vowel {
            rules::SIBILANT_INITIAL
        } else {
            rules::SIBILANT_PLAIN
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phoneme::seq;

    #[test]
    fn test_classify_single_is_start() {
        assert_eq!(Position::classify(0, 1), Position::Start);
    }

    #[test]
    fn test_classify_positions() {
        assert_eq!(Position::classify(0, 3), Position::Start);
        assert_eq!(Position::classify(1, 3), Position::Interior);
        assert_eq!(Position::classify(2, 3), Position::End);
    }

    #[test]
    fn test_render_film() {
        let r = Renderer::new();
        assert_eq!(r.render(&seq(&["F", "IH1", "L", "M"])), "فیلم");
    }

    #[test]
    fn test_render_hello() {
        let r = Renderer::new();
        assert_eq!(r.render(&seq(&["HH", "AH0", "L", "OW1"])), "هالو");
    }

    #[test]
    fn test_render_deterministic() {
        let r = Renderer::new();
        let pron = seq(&["IH1", "N", "T", "ER0", "N", "EH2", "T"]);
        let first = r.render(&pron);
        assert_eq!(first, "اینتِرنِت");
        assert_eq!(r.render(&pron), first);
    }

    #[test]
    fn test_single_vowel_renders_start_form() {
        let r = Renderer::new();
        // One-phoneme sequence is Start, never End: alef madda, not bare alef.
        assert_eq!(r.render(&seq(&["AY1"])), "آی");
    }

    #[test]
    fn test_vowel_end_forms() {
        let r = Renderer::new();
        // AE word-finally becomes heh.
        assert_eq!(r.render(&seq(&["D", "AE1"])), "ده");
        // AE word-medially is a bare fatha diacritic.
        assert_eq!(r.render(&seq(&["K", "AE1", "T"])), "کَت");
    }

    #[test]
    fn test_sibilant_initial_before_consonant() {
        let r = Renderer::new();
        // "start" gains the epenthetic alef: اِستارت
        assert_eq!(
            r.render(&seq(&["S", "T", "AA1", "R", "T"])),
            "اِستارت"
        );
    }

    #[test]
    fn test_sibilant_initial_before_vowel_stays_plain() {
        let r = Renderer::new();
        // /s/ before a vowel needs no epenthesis: "cinema" keeps plain seen.
        assert_eq!(
            r.render(&seq(&["S", "IH1", "N", "AH0", "M", "AH0"])),
            "سیناما"
        );
    }

    #[test]
    fn test_sibilant_interior_and_final() {
        let r = Renderer::new();
        // "bus": final /s/ is plain.
        assert_eq!(r.render(&seq(&["B", "AH1", "S"])), "باس");
    }

    #[test]
    fn test_stress_does_not_affect_rendering() {
        let r = Renderer::new();
        let stressed = r.render(&seq(&["AH1", "P"]));
        let unstressed = r.render(&seq(&["AH0", "P"]));
        let bare = r.render(&seq(&["AH", "P"]));
        assert_eq!(stressed, unstressed);
        assert_eq!(stressed, bare);
    }

    #[test]
    fn test_unknown_code_passes_through() {
        let r = Renderer::new();
        assert_eq!(r.render(&seq(&["Q9", "T"])), "Q9ت");
    }

    #[test]
    fn test_empty_sequence() {
        let r = Renderer::new();
        assert_eq!(r.render(&[]), "");
    }
}
