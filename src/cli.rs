//! Command-line arguments.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use tracing::level_filters::LevelFilter;

use crate::pipeline::default_output_path;
use crate::stop_words::StopWordMode;

#[derive(Debug, Parser)]
#[command(
    name = "textstem",
    about = "Stemming for russian texts: strips noise symbols and stop words, then stems"
)]
pub struct Cli {
    /// Set logging level
    #[arg(
        short = 'L',
        value_enum,
        env = "TEXTSTEM_LOG_LEVEL",
        default_value = "INFO",
        num_args = 0..=1,
        default_missing_value = "INFO"
    )]
    pub log_level: LogLevel,

    /// Extra stop words, one per line
    #[arg(long, env = "TEXTSTEM_STOP_WORDS")]
    pub stop_words: Option<PathBuf>,

    /// Replace stop words one at a time instead of in a single pass
    #[arg(long)]
    pub legacy_stop_words: bool,

    /// Input file
    pub in_file: PathBuf,

    /// Output file [default: IN_FILE.stemmed]
    pub out_file: Option<PathBuf>,
}

impl Cli {
    pub fn output_path(&self) -> PathBuf {
        self.out_file
            .clone()
            .unwrap_or_else(|| default_output_path(&self.in_file))
    }

    pub fn stop_word_mode(&self) -> StopWordMode {
        if self.legacy_stop_words {
            StopWordMode::Sequential
        } else {
            StopWordMode::Alternation
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "UPPER")]
pub enum LogLevel {
    Fatal,
    Critical,
    Error,
    Warning,
    Info,
    Debug,
}

impl LogLevel {
    /// Nothing is ever logged above error, so FATAL and CRITICAL silence
    /// the log entirely.
    pub fn filter(self) -> LevelFilter {
        match self {
            LogLevel::Fatal | LogLevel::Critical => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warning => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
        }
    }
}

/// Render like `H:MM:SS[.ffffff]`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    let micros = elapsed.subsec_micros();
    let clock = format!("{}:{:02}:{:02}", secs / 3600, secs / 60 % 60, secs % 60);
    if micros == 0 {
        clock
    } else {
        format!("{clock}.{micros:06}")
    }
}
