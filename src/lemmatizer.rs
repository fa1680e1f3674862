//! Lemmatizer boundary
//!
//! The cleaning pass hands its output to a morphological analyzer through
//! [`Lemmatizer`]. The analyzer returns a lazy sequence of fragments: word
//! lemmas interleaved with the untouched whitespace and punctuation between
//! them, so that plain concatenation gives back readable text.

use std::borrow::Cow;

use rust_stemmers::{Algorithm, Stemmer};

/// Morphological analysis capability.
///
/// Instances may be expensive to build. Construct one up front and pass it
/// by reference; concurrent callers each need their own.
pub trait Lemmatizer {
    fn lemmatize<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = Cow<'a, str>> + 'a>;
}

/// Concatenate lemmatizer output with no separator.
pub fn stem_text<L: Lemmatizer + ?Sized>(lemmatizer: &L, text: &str) -> String {
    lemmatizer.lemmatize(text).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// Run of alphabetic chars.
    Word(&'a str),
    /// Everything between words.
    Gap(&'a str),
}

impl<'a> Fragment<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Fragment::Word(s) | Fragment::Gap(s) => *s,
        }
    }
}

/// Splits text into maximal alternating runs of words and gaps.
#[derive(Debug, Clone)]
pub struct Fragments<'a> {
    rest: &'a str,
}

impl<'a> Fragments<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl<'a> Iterator for Fragments<'a> {
    type Item = Fragment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let is_word = self.rest.chars().next()?.is_alphabetic();
        let end = self
            .rest
            .char_indices()
            .find(|&(_, c)| c.is_alphabetic() != is_word)
            .map_or(self.rest.len(), |(i, _)| i);
        let (head, tail) = self.rest.split_at(end);
        self.rest = tail;
        Some(if is_word {
            Fragment::Word(head)
        } else {
            Fragment::Gap(head)
        })
    }
}

/// Snowball-backed lemmatizer: Russian for Cyrillic words, English for
/// Latin ones, anything else unchanged. Expects lower-cased input.
pub struct SnowballLemmatizer {
    russian: Stemmer,
    english: Stemmer,
}

impl Default for SnowballLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SnowballLemmatizer {
    pub fn new() -> Self {
        Self {
            russian: Stemmer::create(Algorithm::Russian),
            english: Stemmer::create(Algorithm::English),
        }
    }

    /// Stem a single word.
    pub fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if word.chars().any(is_cyrillic) {
            self.russian.stem(word)
        } else if word.chars().all(|c| c.is_ascii_alphabetic()) {
            self.english.stem(word)
        } else {
            Cow::Borrowed(word)
        }
    }
}

fn is_cyrillic(c: char) -> bool {
    matches!(c, '\u{0400}'..='\u{04ff}')
}

impl Lemmatizer for SnowballLemmatizer {
    fn lemmatize<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = Cow<'a, str>> + 'a> {
        Box::new(Fragments::new(text).map(move |fragment| match fragment {
            Fragment::Word(word) => self.stem(word),
            Fragment::Gap(gap) => Cow::Borrowed(gap),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragments_alternate() {
        let fragments: Vec<_> = Fragments::new("кот, пес!").collect();
        assert_eq!(
            fragments,
            [
                Fragment::Word("кот"),
                Fragment::Gap(", "),
                Fragment::Word("пес"),
                Fragment::Gap("!"),
            ]
        );
    }

    #[test]
    fn test_fragments_cover_input() {
        let text = "  2024год —  10 кошек\n";
        let joined: String = Fragments::new(text).map(|f| f.as_str()).collect();
        assert_eq!(joined, text);
        assert_eq!(Fragments::new(text).next(), Some(Fragment::Gap("  2024")));
        assert_eq!(Fragments::new("").next(), None);
    }

    #[test]
    fn test_stem_words() {
        let lemmatizer = SnowballLemmatizer::new();
        assert_eq!(lemmatizer.stem("программистом"), "программист");
        assert_eq!(lemmatizer.stem("running"), "run");
        assert_eq!(lemmatizer.stem("ſ"), "ſ");
    }

    #[test]
    fn test_stem_text_keeps_gaps() {
        let lemmatizer = SnowballLemmatizer::new();
        let russian = Stemmer::create(Algorithm::Russian);

        let out = stem_text(&lemmatizer, "кошки  бегут\nдомой");
        let expected = format!(
            "{}  {}\n{}",
            russian.stem("кошки"),
            russian.stem("бегут"),
            russian.stem("домой")
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_lemmatize_is_lazy_sequence() {
        let lemmatizer = SnowballLemmatizer::new();
        let mut fragments = lemmatizer.lemmatize("программистом работал");
        assert_eq!(fragments.next().as_deref(), Some("программист"));
        assert_eq!(fragments.next().as_deref(), Some(" "));
    }
}
