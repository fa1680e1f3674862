//! Stop words
//!
//! A stop word is removed only where it sits between two literal spaces
//! (`" word "`). The match is textual, not tokenized: a word touching
//! punctuation or the edge of the text is kept.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::{Error, Result};

/// Default Russian and English stop words, function words and abbreviations.
pub static DEFAULT_STOP_WORDS: &[&str] = &[
    "вы", "a", "из-под", "on", "n", "ая", "только", "ст", "ъ", "l", "из", "at",
    "до", "not", "и", "б", "из-за", "кто", "е", "сам", "хх", "об", "d", "вот",
    "c", "of", "v", "т", "над", "тогда", "по", "даже", "e", "бо", "м", "r",
    "этот", "шт", "еще", "чтобы", "тоже", "to", "вне", "она", "его", "stream",
    "или", "то", "ага", "ч", "на", "i", "да", "там", "куда", "o", "многий",
    "х", "я", "вб", "xxx", "мо", "э", "usd", "как", "их", "g", "в", "p", "что",
    "также", "ее", "данный", "это", "й", "н", "are", "m", "при", "and", "же",
    "за", "для", "др", "о", "а", "or", "b", "никакой", "оно", "от", "анк", "с",
    "эд", "предыдущий", "ас", "ти", "s", "ми", "ф", "какой", "второй", "тц",
    "in", "пвх", "юрий", "ю", "д", "к", "р", "ед", "вообще", "ср", "тот",
    "ххх", "by", "пр", "ж", "for", "либо", "п", "он", "прежде", "г", "который",
    "from", "гг", "ар", "но", "ли", "тыс", "со", "у", "л", "ц", "де", "de",
    "the",
];

/// Stop words collection. Keeps insertion order so that the sequential
/// strategy walks the words in a fixed order.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: Vec<String>,
    index: HashSet<String>,
}

impl StopWords {
    /// Create with the default stop words.
    pub fn new() -> Self {
        Self::from_slice(DEFAULT_STOP_WORDS)
    }

    /// Create an empty collection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create from a slice of words.
    pub fn from_slice(words: &[&str]) -> Self {
        let mut sw = Self::empty();
        sw.add_words(words);
        sw
    }

    /// Load stop words from a file (one word per line, `#` starts a comment).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::StopWords {
            path: path.to_path_buf(),
            source,
        })?;

        let mut sw = Self::empty();
        content
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .for_each(|word| sw.add(word.to_lowercase()));
        Ok(sw)
    }

    /// Add a word. Empty words and duplicates are ignored.
    pub fn add(&mut self, word: impl Into<String>) {
        let word = word.into();
        if word.is_empty() || self.index.contains(&word) {
            return;
        }
        self.index.insert(word.clone());
        self.words.push(word);
    }

    pub fn add_words(&mut self, words: &[&str]) {
        for word in words {
            self.add(*word);
        }
    }

    pub fn remove(&mut self, word: &str) {
        if self.index.remove(word) {
            self.words.retain(|w| w != word);
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.words.iter()
    }

    /// Merge with another collection; new words go to the end.
    pub fn merge(&mut self, other: &StopWords) {
        for word in &other.words {
            self.add(word.clone());
        }
    }
}

/// How padded stop words are replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopWordMode {
    /// One regex pass over runs of `" (?:w1|w2|...) "`. Independent of set
    /// order.
    #[default]
    Alternation,
    /// One `str::replace` per word, in insertion order. Order-sensitive
    /// when stop words overlap.
    Sequential,
}

/// Compiled stop-word remover.
#[derive(Debug, Clone)]
pub struct StopWordFilter {
    mode: StopWordMode,
    pattern: Option<Regex>,
    padded: Vec<String>,
}

impl StopWordFilter {
    pub fn new(stop_words: &StopWords, mode: StopWordMode) -> Result<Self> {
        let (pattern, padded) = match mode {
            StopWordMode::Alternation => (Self::compile(stop_words)?, Vec::new()),
            StopWordMode::Sequential => (
                None,
                stop_words.iter().map(|w| format!(" {w} ")).collect(),
            ),
        };
        Ok(Self {
            mode,
            pattern,
            padded,
        })
    }

    fn compile(stop_words: &StopWords) -> Result<Option<Regex>> {
        if stop_words.is_empty() {
            return Ok(None);
        }
        let mut words: Vec<&str> = stop_words.iter().map(String::as_str).collect();
        // Longest first keeps the alternation stable no matter how the set was built.
        words.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        let alternation = words
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<String>>()
            .join("|");
        // A run of stop words shares its separating spaces, so the whole run
        // is matched at once and collapses to a single space.
        Ok(Some(Regex::new(&format!(" (?:(?:{alternation}) )+"))?))
    }

    pub fn mode(&self) -> StopWordMode {
        self.mode
    }

    /// Replace every `" word "` occurrence with a single space.
    pub fn remove(&self, text: &str) -> String {
        match self.mode {
            StopWordMode::Alternation => match &self.pattern {
                Some(pattern) => pattern.replace_all(text, " ").into_owned(),
                None => text.to_string(),
            },
            StopWordMode::Sequential => {
                let mut text = text.to_string();
                for padded in &self.padded {
                    if text.contains(padded.as_str()) {
                        text = text.replace(padded.as_str(), " ");
                    }
                }
                text
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(mode: StopWordMode) -> StopWordFilter {
        StopWordFilter::new(&StopWords::new(), mode).unwrap()
    }

    #[test]
    fn test_default_stop_words() {
        let sw = StopWords::new();
        assert_eq!(sw.len(), DEFAULT_STOP_WORDS.len());
        assert!(sw.contains("и"));
        assert!(sw.contains("the"));
        assert!(sw.contains("из-за"));
        assert!(!sw.contains("кот"));
    }

    #[test]
    fn test_padded_stop_word_becomes_spaces() {
        for mode in [StopWordMode::Alternation, StopWordMode::Sequential] {
            let filter = filter(mode);
            for word in DEFAULT_STOP_WORDS {
                let out = filter.remove(&format!(" {word} "));
                assert!(
                    out.chars().all(|c| c == ' '),
                    "{word:?} left {out:?} in {mode:?} mode"
                );
            }
        }
    }

    #[test]
    fn test_unpadded_stop_word_is_kept() {
        for mode in [StopWordMode::Alternation, StopWordMode::Sequential] {
            let filter = filter(mode);
            assert_eq!(filter.remove("the,cat"), "the,cat");
            assert_eq!(filter.remove(" the,cat "), " the,cat ");
            assert_eq!(filter.remove("и кот"), "и кот");
            assert_eq!(filter.remove("кот и"), "кот и");
            assert_eq!(filter.remove("кот\tи\tпес"), "кот\tи\tпес");
        }
    }

    #[test]
    fn test_removal_in_running_text() {
        let filter = filter(StopWordMode::Alternation);
        assert_eq!(filter.remove("кот и пес на крыше"), "кот пес крыше");
        assert_eq!(filter.remove("cat and the dog"), "cat dog");
    }

    #[test]
    fn test_idempotent_on_separated_words() {
        for mode in [StopWordMode::Alternation, StopWordMode::Sequential] {
            let filter = filter(mode);
            let text = "мы видели кот и пес по дороге домой в среду";
            let once = filter.remove(text);
            assert_eq!(filter.remove(&once), once);
        }
    }

    #[test]
    fn test_adjacent_stop_words_go_in_one_pass() {
        for mode in [StopWordMode::Alternation, StopWordMode::Sequential] {
            let filter = filter(mode);
            let once = filter.remove("кот и в доме");
            assert_eq!(once, "кот доме", "{mode:?}");
            assert_eq!(filter.remove(&once), once, "{mode:?}");
        }

        let filter = filter(StopWordMode::Alternation);
        assert_eq!(filter.remove("кот и и пес"), "кот пес");
        assert_eq!(filter.remove("что и а в доме"), "что доме");
    }

    #[test]
    fn test_sequential_keeps_repeated_neighbour() {
        let filter = filter(StopWordMode::Sequential);
        assert_eq!(filter.remove("кот и и пес"), "кот и пес");
    }

    #[test]
    fn test_alternation_ignores_insertion_order() {
        let text = " и в и ";
        let forward = StopWords::from_slice(&["и", "и в"]);
        let backward = StopWords::from_slice(&["и в", "и"]);

        let a = StopWordFilter::new(&forward, StopWordMode::Alternation).unwrap();
        let b = StopWordFilter::new(&backward, StopWordMode::Alternation).unwrap();
        assert_eq!(a.remove(text), b.remove(text));

        let a = StopWordFilter::new(&forward, StopWordMode::Sequential).unwrap();
        let b = StopWordFilter::new(&backward, StopWordMode::Sequential).unwrap();
        assert_eq!(a.remove(text), " в ");
        assert_eq!(b.remove(text), " ");
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let filter = StopWordFilter::new(&StopWords::empty(), StopWordMode::Alternation).unwrap();
        assert_eq!(filter.remove(" и  в "), " и  в ");
    }

    #[test]
    fn test_add_remove_merge() {
        let mut sw = StopWords::empty();
        sw.add("кот");
        sw.add("кот");
        sw.add("");
        assert_eq!(sw.len(), 1);

        sw.merge(&StopWords::from_slice(&["пес", "кот"]));
        assert_eq!(sw.iter().collect::<Vec<_>>(), ["кот", "пес"]);

        sw.remove("кот");
        assert!(!sw.contains("кот"));
        assert_eq!(sw.len(), 1);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extra.txt");
        fs::write(&path, "# extra words\nКОТ\n\n  пес  \n").unwrap();

        let sw = StopWords::from_file(&path).unwrap();
        assert_eq!(sw.len(), 2);
        assert!(sw.contains("кот"));
        assert!(sw.contains("пес"));

        let err = StopWords::from_file(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, Error::StopWords { .. }));
    }
}
