//! File pipeline: read, clean, stem, write.

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cleaning::Normalizer;
use crate::error::{Error, Result};
use crate::lemmatizer::{Lemmatizer, stem_text};

/// Suffix appended to the input path when no output path is given.
pub const OUTPUT_SUFFIX: &str = ".stemmed";

/// `IN_FILE` with `.stemmed` appended to the whole file name.
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(OUTPUT_SUFFIX);
    PathBuf::from(name)
}

pub struct Pipeline<L> {
    normalizer: Normalizer,
    lemmatizer: L,
}

impl<L: Lemmatizer> Pipeline<L> {
    pub fn new(normalizer: Normalizer, lemmatizer: L) -> Self {
        Self {
            normalizer,
            lemmatizer,
        }
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn lemmatizer(&self) -> &L {
        &self.lemmatizer
    }

    /// Clean then stem.
    pub fn process(&self, text: &str) -> String {
        let cleaned = self.normalizer.clean(text);
        debug!(input = text.len(), cleaned = cleaned.len(), "text cleaned");
        stem_text(&self.lemmatizer, &cleaned)
    }

    /// Process `input` into `output` (or `input.stemmed`) and return the
    /// path written.
    ///
    /// The output file is created before the input is read, so a failure
    /// part way through can leave it empty.
    pub fn run(&self, input: &Path, output: Option<&Path>) -> Result<PathBuf> {
        let output = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_output_path(input));

        let read_err = |source: io::Error| Error::Read {
            path: input.to_path_buf(),
            source,
        };
        let write_err = |source: io::Error| Error::Write {
            path: output.clone(),
            source,
        };

        let mut in_file = File::open(input).map_err(read_err)?;
        let mut out_file = File::create(&output).map_err(write_err)?;

        let mut text = String::new();
        in_file.read_to_string(&mut text).map_err(read_err)?;
        debug!(path = %input.display(), bytes = text.len(), "input read");

        let stemmed = self.process(&text);
        out_file
            .write_all(stemmed.as_bytes())
            .and_then(|_| out_file.flush())
            .map_err(write_err)?;
        debug!(path = %output.display(), bytes = stemmed.len(), "output written");

        Ok(output)
    }
}
