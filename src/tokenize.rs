//! Latin-run tokenizer over mixed Persian/Latin text.
//!
//! Yields a lazy sequence of spans classified as `Word` (a maximal run of
//! Latin letters, optionally containing one internal apostrophe, so
//! contractions like "don't" stay whole) or `Other` (everything between).
//! Substitution passes rewrite the stream once instead of rescanning the
//! full text per table key.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

pub fn tokens(text: &str) -> Tokens<'_> {
    Tokens { text, pos: 0 }
}

pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let bytes = self.text.as_bytes();
        if self.pos >= bytes.len() {
            return None;
        }
        let start = self.pos;

        if bytes[start].is_ascii_alphabetic() {
            let mut end = scan_letters(bytes, start);
            // One internal apostrophe joins a contraction suffix; letters
            // must follow or the apostrophe stays outside the token.
            if end < bytes.len()
                && bytes[end] == b'\''
                && end + 1 < bytes.len()
                && bytes[end + 1].is_ascii_alphabetic()
            {
                end = scan_letters(bytes, end + 1);
            }
            self.pos = end;
            return Some(Token {
                text: &self.text[start..end],
                kind: TokenKind::Word,
            });
        }

        // Everything up to the next ASCII letter is a single Other span.
        // ASCII letters are one byte, so the slice boundary is always a
        // valid char boundary.
        let mut end = start;
        while end < bytes.len() && !bytes[end].is_ascii_alphabetic() {
            end += 1;
        }
        self.pos = end;
        Some(Token {
            text: &self.text[start..end],
            kind: TokenKind::Other,
        })
    }
}

fn scan_letters(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
        i += 1;
    }
    i
}
