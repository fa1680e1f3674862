//! Noise symbols
//!
//! Punctuation, typographic marks and private-use bullets that carry no
//! meaning for stemming. They are deleted outright, nothing is put in their
//! place.

use std::collections::HashSet;

/// Default noise characters.
pub static DEFAULT_SYMBOLS: &[char] = &[
    // ASCII punctuation
    '!', '"', '%', '(', ')', '*', '+', ',', '-', '.', '/', ':', ';', '=', '?',
    '@', '[', ']', '^', '_', '|', '~',
    // Quotes and dashes
    '«', '»', '“', '”', '’', '‒', '–', '—', '…',
    // Marks and bullets
    '§', '©', '·', '•', '◦', '▪', '↑', '№', '€',
    // Invisible and no-break whitespace. The list this table came from had a
    // plain ASCII space in place of U+00A0.
    '\u{00a0}', '\u{200b}',
    // Private-use bullets left behind by word processors
    '\u{f02d}', '\u{f0a7}', '\u{f0b7}', '\u{f0d8}', '\u{f0f1}',
];

/// Set of characters removed by [`SymbolSet::strip`].
#[derive(Debug, Clone)]
pub struct SymbolSet {
    chars: HashSet<char>,
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolSet {
    /// Create with the default noise characters.
    pub fn new() -> Self {
        Self::from_chars(DEFAULT_SYMBOLS)
    }

    /// Create an empty set; `strip` is then the identity.
    pub fn empty() -> Self {
        Self {
            chars: HashSet::new(),
        }
    }

    pub fn from_chars(chars: &[char]) -> Self {
        Self {
            chars: chars.iter().copied().collect(),
        }
    }

    pub fn insert(&mut self, c: char) {
        self.chars.insert(c);
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Delete every member character from `text`.
    ///
    /// One pass with a membership test per char, so the result never
    /// depends on the order the set is walked in.
    pub fn strip(&self, text: &str) -> String {
        text.chars().filter(|c| !self.chars.contains(c)).collect()
    }
}
