//! Command-line front end for `generate-mocks`.
//!
//! The binary only parses arguments and wires the process streams; everything
//! else lives here so it can be driven from tests with in-memory readers and
//! writers.

mod error;
mod prompt;

use std::io::{self, BufRead, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub use error::CliError;
pub use prompt::{PROMPT, prompt_for_mocks};

use crate::faker::RandomFaker;
use crate::mock::{MockName, MockSelection};
use crate::orchestrator::{MockObserver, WrittenMock, generate_mocks};

/// Directory fixtures are written to when no destination is given.
pub const DEFAULT_DESTINATION: &str = "data";

/// Log filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// `generate-mocks` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "generate-mocks",
    about = "Generate randomised Discord API response fixtures",
    version
)]
pub struct Cli {
    /// Mock names to generate, comma-delimited or repeated. Prompts when
    /// omitted.
    #[arg(value_name = "MOCKS", value_delimiter = ',')]
    pub mocks: Vec<String>,
    /// Directory the fixtures are written to. Relative paths, including the
    /// default `data`, resolve against the current working directory.
    #[arg(
        short = 'd',
        long = "destination",
        value_name = "DIR",
        env = "MOCK_GENERATOR_DESTINATION"
    )]
    pub destination: Option<Utf8PathBuf>,
    /// Seed for reproducible output. Drawn at random when omitted.
    #[arg(long = "seed", value_name = "SEED", env = "MOCK_GENERATOR_SEED")]
    pub seed: Option<u64>,
    /// Generate every mock instead of prompting when no names are given.
    #[arg(short = 'n', long = "no-interaction")]
    pub no_interaction: bool,
}

/// Returns the directory fixtures should be written to.
///
/// Falls back to [`DEFAULT_DESTINATION`] and drops trailing separators, so
/// `data/` and `data` name the same directory.
///
/// # Example
///
/// ```
/// use camino::Utf8Path;
/// use mock_generator::cli::resolve_destination;
///
/// assert_eq!(resolve_destination(None), "data");
/// assert_eq!(resolve_destination(Some(Utf8Path::new("fixtures/"))), "fixtures");
/// ```
#[must_use]
pub fn resolve_destination(destination: Option<&Utf8Path>) -> Utf8PathBuf {
    let Some(raw) = destination else {
        return Utf8PathBuf::from(DEFAULT_DESTINATION);
    };
    let trimmed = raw.as_str().trim_end_matches(std::path::is_separator);
    if trimmed.is_empty() {
        raw.to_path_buf()
    } else {
        Utf8PathBuf::from(trimmed)
    }
}

/// Runs the command: resolves the selection, generates it, and reports
/// progress on `output`.
///
/// `input` is only read when no mock names were given and interaction is
/// allowed.
///
/// # Errors
///
/// Returns [`CliError`] when the prompt or console output fails, or when a
/// mock cannot be generated or written.
pub fn run<R, W>(cli: &Cli, input: R, mut output: W) -> Result<Vec<WrittenMock>, CliError>
where
    R: BufRead,
    W: Write,
{
    let selection = if cli.mocks.is_empty() {
        if cli.no_interaction {
            MockSelection::all()
        } else {
            prompt_for_mocks(input, &mut output)?
        }
    } else {
        MockSelection::parse(&cli.mocks)
    };

    let mut faker = cli
        .seed
        .map_or_else(RandomFaker::from_entropy, RandomFaker::from_seed);
    info!(seed = faker.seed(), "seeded random source");

    let destination = resolve_destination(cli.destination.as_deref());
    let mut observer = ConsoleObserver::new(&mut output);
    let written = generate_mocks(&selection, &mut faker, &destination, &mut observer)?;
    observer.finish()?;
    Ok(written)
}

/// Installs the global `tracing` subscriber.
///
/// Events go to standard error, filtered by `RUST_LOG` or
/// [`DEFAULT_LOG_FILTER`]. A subscriber that is already installed is kept.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    if let Err(err) = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
    {
        drop(err);
    }
}

/// Prints a heading per mock and a confirmation once it is written.
///
/// Write failures are held until [`ConsoleObserver::finish`], since observer
/// callbacks cannot fail.
#[derive(Debug)]
pub struct ConsoleObserver<W> {
    out: W,
    failure: Option<io::Error>,
}

impl<W: Write> ConsoleObserver<W> {
    /// Wraps `out`.
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self { out, failure: None }
    }

    /// Returns the first write failure, if any.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Io`] when any progress line could not be written.
    pub fn finish(self) -> Result<(), CliError> {
        self.failure
            .map_or(Ok(()), |err| Err(CliError::io("write progress", &err)))
    }

    fn emit(&mut self, text: &str) {
        if self.failure.is_some() {
            return;
        }
        if let Err(err) = self.out.write_all(text.as_bytes()) {
            self.failure = Some(err);
        }
    }
}

impl<W: Write> MockObserver for ConsoleObserver<W> {
    fn mock_started(&mut self, mock: MockName) {
        let title = mock.title();
        let underline = "=".repeat(title.chars().count());
        self.emit(&format!("\n{title}\n{underline}\n\n"));
    }

    fn mock_finished(&mut self, _written: &WrittenMock) {
        self.emit(" [OK] Finished\n");
    }
}

#[cfg(test)]
mod tests;
