//! Text Normalizer
//!
//! Lower-case, delete noise symbols, drop padded stop words. Always in that
//! order: stop words are matched against symbol-free, lower-cased text.

use crate::error::Result;
use crate::stop_words::{StopWordFilter, StopWordMode, StopWords};
use crate::symbols::SymbolSet;

#[derive(Debug, Clone)]
pub struct Normalizer {
    symbols: SymbolSet,
    stop_words: StopWordFilter,
}

impl Normalizer {
    pub fn new(symbols: SymbolSet, stop_words: &StopWords, mode: StopWordMode) -> Result<Self> {
        Ok(Self {
            symbols,
            stop_words: StopWordFilter::new(stop_words, mode)?,
        })
    }

    /// Default symbols and stop words, alternation mode.
    pub fn with_defaults() -> Result<Self> {
        Self::new(SymbolSet::new(), &StopWords::new(), StopWordMode::default())
    }

    pub fn lowercase(&self, text: &str) -> String {
        text.to_lowercase()
    }

    pub fn strip_symbols(&self, text: &str) -> String {
        self.symbols.strip(text)
    }

    pub fn remove_stop_words(&self, text: &str) -> String {
        self.stop_words.remove(text)
    }

    pub fn stop_word_mode(&self) -> StopWordMode {
        self.stop_words.mode()
    }

    pub fn clean(&self, text: &str) -> String {
        let text = self.lowercase(text);
        let text = self.strip_symbols(&text);
        self.remove_stop_words(&text)
    }
}
