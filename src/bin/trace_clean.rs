use std::env;
use std::fs;

use anyhow::{Context, Error, anyhow};
use textstem::{Normalizer, SnowballLemmatizer, stem_text};

fn main() -> Result<(), Error> {
    let path = env::args()
        .nth(1)
        .ok_or_else(|| anyhow!("Usage: trace_clean <file>"))?;
    let text = fs::read_to_string(&path).with_context(|| format!("cannot read {path}"))?;

    let normalizer = Normalizer::with_defaults()?;
    let lemmatizer = SnowballLemmatizer::new();

    let lowered = normalizer.lowercase(&text);
    let stripped = normalizer.strip_symbols(&lowered);
    let cleaned = normalizer.remove_stop_words(&stripped);
    let stemmed = stem_text(&lemmatizer, &cleaned);

    for (stage, value) in [
        ("lowercase", &lowered),
        ("symbols stripped", &stripped),
        ("stop words removed", &cleaned),
        ("stemmed", &stemmed),
    ] {
        println!("=== {} ({} chars) ===", stage, value.chars().count());
        println!("{}\n", value);
    }

    Ok(())
}
