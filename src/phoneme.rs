use serde::Serialize;

/// A single ARPAbet-style phoneme code, e.g. `AY1`, `S`, `NG`.
///
/// Vowel codes carry a trailing stress digit (`0` unstressed, `1` primary,
/// `2` secondary). Stress never affects rendering, but the code is stored as
/// given so sequences survive a round trip through the lexicon unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Phoneme {
    code: String,
}

/// An ordered phoneme sequence for one word. Never empty for a resolved
/// lexicon entry.
pub type Pronunciation = Vec<Phoneme>;

impl Phoneme {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// The code as stored, stress digit included.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The code with any trailing stress digits stripped; this is the key
    /// used for render-rule lookup.
    pub fn base(&self) -> &str {
        self.code.trim_end_matches(|c: char| c.is_ascii_digit())
    }

    /// Stress marker, if the code carries one.
    pub fn stress(&self) -> Option<u8> {
        let digits = &self.code[self.base().len()..];
        digits.parse().ok()
    }
}

/// Build a `Pronunciation` from string codes. Mostly a test and
/// override-table convenience.
pub fn seq(codes: &[&str]) -> Pronunciation {
    codes.iter().copied().map(Phoneme::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_strips_stress() {
        assert_eq!(Phoneme::new("AY1").base(), "AY");
        assert_eq!(Phoneme::new("ER0").base(), "ER");
        assert_eq!(Phoneme::new("AH2").base(), "AH");
    }

    #[test]
    fn test_base_consonant_unchanged() {
        assert_eq!(Phoneme::new("S").base(), "S");
        assert_eq!(Phoneme::new("NG").base(), "NG");
    }

    #[test]
    fn test_stress() {
        assert_eq!(Phoneme::new("AY1").stress(), Some(1));
        assert_eq!(Phoneme::new("AH0").stress(), Some(0));
        assert_eq!(Phoneme::new("K").stress(), None);
    }

    #[test]
    fn test_code_preserved() {
        assert_eq!(Phoneme::new("IY0").code(), "IY0");
    }

    #[test]
    fn test_seq() {
        let pron = seq(&["F", "IH1", "L", "M"]);
        assert_eq!(pron.len(), 4);
        assert_eq!(pron[1].base(), "IH");
    }
}
