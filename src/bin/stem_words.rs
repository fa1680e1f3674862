use std::env;

use textstem::{Fragment, Fragments, SnowballLemmatizer, StopWords};

fn main() {
    let words: Vec<String> = env::args().skip(1).collect();
    if words.is_empty() {
        println!("Usage: stem_words <word1> <word2> ...");
        return;
    }

    let lemmatizer = SnowballLemmatizer::new();
    let stop_words = StopWords::new();

    for arg in &words {
        let lower = arg.to_lowercase();
        for fragment in Fragments::new(&lower) {
            let Fragment::Word(word) = fragment else {
                continue;
            };
            if stop_words.contains(word) {
                println!("{:25} (stop word)", word);
            } else {
                let stem = lemmatizer.stem(word);
                println!("{:25} → {:15} ({} chars)", word, stem, stem.chars().count());
            }
        }
    }
}
