#![deny(unsafe_code)]

//! Command-line frontend for the stylefit configuration search.
//!
//! Wires the search engine to the host environment: walks a source tree
//! into a corpus, loads the option catalog from a JSON file, adapts an
//! external command into a [`catalog::ConfigurableFormatter`], runs the
//! search under a wall-clock budget, and emits the inferred
//! configuration as JSON.

mod command_formatter;
mod corpus;
mod error;
mod frontend;

pub use command_formatter::CommandFormatter;
pub use error::CliError;

use std::fs;
use std::io::Write;
use std::process::ExitCode;
use std::time::Instant;

use tracing::info;
use tracing_subscriber::EnvFilter;

use engine::{files_still_differing, optimize};

use crate::frontend::Invocation;

/// Environment variable controlling log verbosity.
const LOG_ENV: &str = "STYLEFIT_LOG";

/// Parses arguments, runs the search, and reports results.
///
/// The inferred configuration goes to `stdout` (or `--output`) as JSON;
/// human-readable progress and the `--report` listing go to `stderr`.
/// A deadline truncation still exits successfully: a timed-out search
/// returns its best-so-far configuration by design.
pub fn run_with<I, T>(args: I, stdout: &mut dyn Write, stderr: &mut dyn Write) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    init_tracing();
    let invocation = match frontend::parse(args) {
        Ok(invocation) => invocation,
        Err(clap_error) => {
            let _ = write!(stderr, "{clap_error}");
            return if clap_error.use_stderr() {
                ExitCode::from(error::USAGE_EXIT)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    match run(&invocation, stdout, stderr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ = writeln!(stderr, "stylefit: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

fn run(
    invocation: &Invocation,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> Result<(), CliError> {
    let catalog_data = load_catalog(invocation)?;
    let corpus = corpus::discover(&invocation.corpus_root, &invocation.extensions)?;
    info!(files = corpus.len(), "corpus loaded");

    let formatter = CommandFormatter::new(
        invocation.formatter.clone(),
        invocation.formatter_args.clone(),
    );
    let deadline = Instant::now() + invocation.timeout;
    let outcome = optimize(&corpus, &catalog_data, &formatter, deadline);

    let _ = writeln!(
        stderr,
        "baseline: {}",
        outcome.baseline().unwrap_or("<none>")
    );
    let _ = writeln!(stderr, "score: {}", outcome.best().score());
    if outcome.interrupted() {
        let _ = writeln!(stderr, "search interrupted by timeout; result is best-so-far");
    }

    if invocation.report && !outcome.best().is_perfect() {
        let differing = files_still_differing(outcome.best().config(), &corpus, &formatter);
        let _ = writeln!(stderr, "files still differing: {}", differing.len());
        for path in differing {
            let _ = writeln!(stderr, "  {}", path.display());
        }
    }

    let rendered = serde_json::to_string_pretty(outcome.best().config())?;
    match &invocation.output {
        Some(path) => fs::write(path, rendered + "\n")?,
        None => {
            let _ = writeln!(stdout, "{rendered}");
        }
    }
    Ok(())
}

fn load_catalog(invocation: &Invocation) -> Result<catalog::CatalogData, CliError> {
    let raw = fs::read_to_string(&invocation.catalog_path)?;
    let data: catalog::CatalogData = serde_json::from_str(&raw)?;
    data.validate()?;
    Ok(data)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second init in the same process (tests) is fine to ignore.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
