use std::future::poll_fn;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::pin::pin;
use std::task::Poll;
use std::time::Instant;

use anyhow::{Context, Error};
use clap::Parser;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::ChronoLocal;

use textstem::cli::{Cli, LogLevel, format_elapsed};
use textstem::{Normalizer, Pipeline, SnowballLemmatizer, StopWords, SymbolSet};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

enum Outcome {
    Finished(Result<PathBuf, Error>),
    Interrupted,
}

fn init_logging(level: LogLevel) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.filter().into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::new("%H:%M:%S".to_string()))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn build_pipeline(cli: &Cli) -> Result<Pipeline<SnowballLemmatizer>, Error> {
    let mut stop_words = StopWords::new();
    if let Some(path) = &cli.stop_words {
        let extra = StopWords::from_file(path)?;
        info!("Loaded {} extra stop words from {}", extra.len(), path.display());
        stop_words.merge(&extra);
    }

    let normalizer = Normalizer::new(SymbolSet::new(), &stop_words, cli.stop_word_mode())
        .context("failed to build the text normalizer")?;

    // Building the stemmer is the expensive part; it is done once and
    // handed to the pipeline.
    Ok(Pipeline::new(normalizer, SnowballLemmatizer::new()))
}

fn flatten(joined: Result<Result<PathBuf, Error>, JoinError>) -> Result<PathBuf, Error> {
    joined.context("stemming task failed")?
}

async fn run(cli: Cli) -> Outcome {
    let mut interrupt = pin!(tokio::signal::ctrl_c());
    // The handler is installed on first poll, so poll once before any work starts.
    let listening = match poll_fn(|cx| Poll::Ready(interrupt.as_mut().poll(cx))).await {
        Poll::Pending => true,
        Poll::Ready(Ok(())) => return Outcome::Interrupted,
        Poll::Ready(Err(err)) => {
            warn!("Cannot listen for interrupt signal: {err}");
            false
        }
    };

    let mut task: JoinHandle<Result<PathBuf, Error>> = tokio::task::spawn_blocking(move || {
        let pipeline = build_pipeline(&cli)?;
        Ok(pipeline.run(&cli.in_file, cli.out_file.as_deref())?)
    });

    tokio::select! {
        joined = &mut task => Outcome::Finished(flatten(joined)),
        signal = &mut interrupt, if listening => match signal {
            Ok(()) => Outcome::Interrupted,
            Err(err) => {
                warn!("Cannot listen for interrupt signal: {err}");
                Outcome::Finished(flatten(task.await))
            }
        },
    }
}

fn main() -> Result<(), Error> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    init_logging(cli.log_level);
    debug!("{cli:?}");

    let outcome = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => {
            let outcome = runtime.block_on(run(cli));
            // An interrupted task is abandoned rather than waited for.
            runtime.shutdown_background();
            outcome
        }
        Err(err) => Outcome::Finished(Err(Error::from(err).context("failed to start the runtime"))),
    };

    match outcome {
        Outcome::Finished(Ok(output)) => info!("Stemmed text written to {}", output.display()),
        Outcome::Finished(Err(err)) => error!("Unhandled error happened: {err:?}"),
        Outcome::Interrupted => info!("Interrupt signal received"),
    }
    info!("Execution time: {}", format_elapsed(start_time.elapsed()));
    Ok(())
}
