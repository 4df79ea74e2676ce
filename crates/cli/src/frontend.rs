//! crates/cli/src/frontend.rs
//!
//! Argument parsing for the `stylefit` binary.

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Arg, ArgAction, Command, value_parser};

/// Default search budget in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// A fully parsed invocation.
#[derive(Debug)]
pub(crate) struct Invocation {
    pub(crate) corpus_root: PathBuf,
    pub(crate) extensions: Vec<String>,
    pub(crate) catalog_path: PathBuf,
    pub(crate) formatter: PathBuf,
    pub(crate) formatter_args: Vec<String>,
    pub(crate) timeout: Duration,
    pub(crate) report: bool,
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn command() -> Command {
    Command::new("stylefit")
        .about("Infers the formatter configuration that best matches an existing codebase")
        .arg(
            Arg::new("corpus")
                .long("corpus")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .required(true)
                .help("Directory tree to learn the prevailing style from"),
        )
        .arg(
            Arg::new("ext")
                .long("ext")
                .value_name("EXT")
                .action(ArgAction::Append)
                .help("File extension to include (repeatable; default: every file)"),
        )
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .required(true)
                .help("JSON option catalog with candidate values and standard presets"),
        )
        .arg(
            Arg::new("formatter")
                .long("formatter")
                .value_name("PROGRAM")
                .value_parser(value_parser!(PathBuf))
                .required(true)
                .help("Formatter command: receives the config path as its last argument and the source on stdin"),
        )
        .arg(
            Arg::new("formatter-arg")
                .long("formatter-arg")
                .value_name("ARG")
                .action(ArgAction::Append)
                .allow_hyphen_values(true)
                .help("Extra argument passed to the formatter before the config path (repeatable)"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("SECONDS")
                .value_parser(value_parser!(u64))
                .default_value("300")
                .help("Wall-clock budget for the search"),
        )
        .arg(
            Arg::new("report")
                .long("report")
                .action(ArgAction::SetTrue)
                .help("List the files the inferred configuration still fails to reproduce"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Write the inferred configuration to FILE instead of stdout"),
        )
}

pub(crate) fn parse<I, T>(args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command().try_get_matches_from(args)?;
    Ok(Invocation {
        corpus_root: matches
            .get_one::<PathBuf>("corpus")
            .cloned()
            .unwrap_or_default(),
        extensions: matches
            .get_many::<String>("ext")
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
        catalog_path: matches
            .get_one::<PathBuf>("catalog")
            .cloned()
            .unwrap_or_default(),
        formatter: matches
            .get_one::<PathBuf>("formatter")
            .cloned()
            .unwrap_or_default(),
        formatter_args: matches
            .get_many::<String>("formatter-arg")
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
        timeout: Duration::from_secs(
            matches
                .get_one::<u64>("timeout")
                .copied()
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        ),
        report: matches.get_flag("report"),
        output: matches.get_one::<PathBuf>("output").cloned(),
    })
}
