use std::io;
use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read input {}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write output {}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("cannot load stop words from {}", .path.display())]
    StopWords { path: PathBuf, source: io::Error },

    #[error("invalid stop-word pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl Error {
    /// True when the input file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
