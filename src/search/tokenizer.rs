//! Query and document tokenizer.
//!
//! Lowercases text, blanks out every character that is neither a word
//! character nor whitespace, splits on whitespace and drops short tokens.
//! No stemming and no stop words: catalog tables are small and curated, so
//! every surviving word is a candidate match.

use std::sync::LazyLock;

use regex::Regex;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("static pattern compiles"));

/// Minimum length used for general prose tables (ai-artist).
pub const PROSE_MIN_LEN: usize = 2;

/// Minimum length used for the example catalog (threejs), where terms such
/// as "3d", "ar" and "vr" carry meaning.
pub const CATALOG_MIN_LEN: usize = 1;

/// Splits text into index terms.
///
/// A token survives only when its character count is strictly greater than
/// `min_len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer {
    min_len: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(PROSE_MIN_LEN)
    }
}

impl Tokenizer {
    #[must_use]
    pub const fn new(min_len: usize) -> Self {
        Self { min_len }
    }

    #[must_use]
    pub const fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let cleaned = NON_WORD.replace_all(&lowered, " ");
        cleaned
            .split_whitespace()
            .filter(|word| word.chars().count() > self.min_len)
            .map(str::to_string)
            .collect()
    }
}
