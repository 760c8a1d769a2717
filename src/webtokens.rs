//! Fixed internet-vocabulary substitutions.
//!
//! A closed set of web/tech tokens with canonical Persian renderings. These
//! take priority over phonetic rendering: "net" as a domain suffix should
//! read نت, not whatever the lexicon pronunciation renders to.

use std::collections::HashMap;

use crate::tokenize::{tokens, TokenKind};

pub const WEB_TOKENS: &[(&str, &str)] = &[
    ("http", "اچ تی تی پی"),
    ("https", "اچ تی تی پی اس"),
    ("www", "دبلیو دبلیو دبلیو"),
    ("com", "کام"),
    ("org", "ارگ"),
    ("net", "نت"),
    ("edu", "ادو"),
    ("gov", "گا\u{200c}و"),
    ("mil", "میل"),
    ("io", "آی او"),
    ("ai", "آی"),
    ("biz", "بیز"),
    ("info", "اینفو"),
    ("name", "نیم"),
    ("email", "ایمیل"),
    ("user", "یوزر"),
    ("mail", "میل"),
    ("admin", "ادمین"),
    ("support", "ساپورت"),
    ("login", "لاگین"),
    ("signup", "ساین آپ"),
    ("logout", "لاگ آوت"),
    ("home", "هوم"),
    ("index", "ایندکس"),
    ("search", "سرچ"),
    ("about", "اباوت"),
    ("contact", "کانتکت"),
    ("profile", "پروفایل"),
    ("dashboard", "دشبورد"),
    ("download", "دانلود"),
    ("upload", "آپلود"),
    ("settings", "ستینگز"),
    ("help", "هلپ"),
    ("file", "فایل"),
    ("folder", "فولدر"),
    ("api", "ای پی آی"),
    ("blog", "بلاگ"),
    ("shop", "شاپ"),
    ("cart", "کارت"),
    ("checkout", "چک آوت"),
    ("product", "پروداکت"),
    ("service", "سرویس"),
    ("news", "نیوز"),
    ("forum", "فوروم"),
    ("faq", "اف ای کیو"),
    ("error", "ارور"),
];

pub struct WebTokens {
    map: HashMap<&'static str, &'static str>,
}

impl WebTokens {
    pub fn new() -> Self {
        Self {
            map: WEB_TOKENS.iter().copied().collect(),
        }
    }

    /// Exact-token lookup against the lowercase keys.
    pub fn get(&self, token: &str) -> Option<&'static str> {
        self.map.get(token).copied()
    }

    /// Replace every whole-word occurrence of a table key in `text`.
    ///
    /// Matching is literal (keys are lowercase) and token-bounded, so "info"
    /// never matches inside "information". One pass over the token stream;
    /// the replacements contain no Latin letters, so applying this twice is
    /// the same as applying it once.
    pub fn substitute(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for token in tokens(text) {
            match token.kind {
                TokenKind::Word => match self.map.get(token.text) {
                    Some(replacement) => out.push_str(replacement),
                    None => out.push_str(token.text),
                },
                TokenKind::Other => out.push_str(token.text),
            }
        }
        out
    }
}

impl Default for WebTokens {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_substitution() {
        let w = WebTokens::new();
        assert_eq!(w.substitute("http"), "اچ تی تی پی");
    }

    #[test]
    fn test_whole_word_only() {
        let w = WebTokens::new();
        // "info" must not match inside "information".
        assert_eq!(w.substitute("information"), "information");
        assert_eq!(w.substitute("info"), "اینفو");
    }

    #[test]
    fn test_literal_match_is_case_sensitive() {
        let w = WebTokens::new();
        assert_eq!(w.substitute("HTTP"), "HTTP");
    }

    #[test]
    fn test_multiple_tokens_single_pass() {
        let w = WebTokens::new();
        assert_eq!(
            w.substitute("www.example.com"),
            "دبلیو دبلیو دبلیو.example.کام"
        );
    }

    #[test]
    fn test_idempotent() {
        let w = WebTokens::new();
        let once = w.substitute("email support via http");
        let twice = w.substitute(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_surrounding_persian_untouched() {
        let w = WebTokens::new();
        assert_eq!(w.substitute("به net بروید"), "به نت بروید");
    }
}
