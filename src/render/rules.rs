//! Static ARPAbet-to-Persian rule tables.
//!
//! Position-sensitive entries carry three fragments: `[start, interior, end]`.
//! Everything else renders the same fragment at any position. Codes are
//! stress-stripped before lookup.

/// Phonemes whose rendering depends on position in the word. These are the
/// vowels: Persian orthography writes short vowels as diacritics word-medially
/// but needs a carrier alef word-initially, and several vowels take a final
/// heh or vav instead.
pub const POSITIONAL_RULES: &[(&str, [&str; 3])] = &[
    ("AA", ["آ", "ا", "ا"]),
    ("AH", ["آ", "ا", "ا"]),
    ("AE", ["اَ", "َ", "ه"]),
    ("AO", ["اُ", "و", "و"]),
    ("OW", ["اُ", "و", "و"]),
    ("EH", ["اِ", "ِ", "ه"]),
    ("AX", ["اِ", "ِ", "ه"]),
    ("IH", ["ای", "ی", "ی"]),
    ("IY", ["ای", "ی", "ی"]),
    ("EY", ["اِی", "ِی", "ِی"]),
    ("AY", ["آی", "ای", "ای"]),
    ("AW", ["او", "و", "و"]),
    ("OY", ["اُی", "وی", "وی"]),
    ("ER", ["اِر", "ِر", "ِر"]),
    ("AXR", ["اِر", "ِر", "ِر"]),
];

/// Position-independent consonant and long-vowel mappings.
pub const DEFAULT_RULES: &[(&str, &str)] = &[
    ("UW", "و"),
    ("UH", "و"),
    ("B", "ب"),
    ("CH", "چ"),
    ("D", "د"),
    ("DH", "د"),
    ("F", "ف"),
    ("G", "گ"),
    ("HH", "ه"),
    ("JH", "ج"),
    ("K", "ک"),
    ("L", "ل"),
    ("M", "م"),
    ("N", "ن"),
    ("NG", "نگ"),
    ("P", "پ"),
    ("R", "ر"),
    ("SH", "ش"),
    ("T", "ت"),
    ("TH", "ت"),
    ("V", "و"),
    ("W", "و"),
    ("Y", "ی"),
    ("Z", "ز"),
    ("ZH", "ژ"),
];

/// The sibilant handled specially by the renderer: a bare word-initial /s/
/// before a consonant is unpronounceable in Persian, so it takes an
/// epenthetic kasra-alef.
pub const SIBILANT: &str = "S";
pub const SIBILANT_INITIAL: &str = "اِس";
pub const SIBILANT_PLAIN: &str = "س";
