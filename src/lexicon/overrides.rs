//! Built-in pronunciation overrides.
//!
//! Proper nouns and franchise names the general lexicon either lacks or
//! mis-renders for this domain. Applied on top of the base lexicon at engine
//! construction; callers can layer their own entries the same way.

/// Word → phoneme codes. Keys lowercase, matching lexicon lookup.
pub const DOMAIN_OVERRIDES: &[(&str, &[&str])] = &[
    ("frightner", &["F", "R", "AY1", "T", "N", "ER0"]),
    ("frightners", &["F", "R", "AY1", "T", "N", "ER0", "Z"]),
    ("hollyman", &["HH", "AA1", "L", "IY0", "M", "AE1", "N"]),
    ("avenger", &["AH0", "V", "EH1", "N", "JH", "ER0"]),
    ("avengers", &["AH0", "V", "EH1", "N", "JH", "ER0", "Z"]),
    ("snowpiercer", &["S", "N", "OW1", "P", "IH1", "R", "S", "ER0"]),
    ("snowpiercers", &["S", "N", "OW1", "P", "IH1", "R", "S", "ER0", "Z"]),
    ("revenant", &["R", "EH1", "V", "AH0", "N", "AH0", "N", "T"]),
    ("revenants", &["R", "EH1", "V", "AH0", "N", "AH0", "N", "T", "S"]),
];
