pub mod cleaning;
pub mod cli;
pub mod error;
pub mod lemmatizer;
pub mod pipeline;
pub mod stop_words;
pub mod symbols;

pub use cleaning::Normalizer;
pub use error::{Error, Result};
pub use lemmatizer::{Fragment, Fragments, Lemmatizer, SnowballLemmatizer, stem_text};
pub use pipeline::{OUTPUT_SUFFIX, Pipeline, default_output_path};
pub use stop_words::{DEFAULT_STOP_WORDS, StopWordFilter, StopWordMode, StopWords};
pub use symbols::{DEFAULT_SYMBOLS, SymbolSet};
