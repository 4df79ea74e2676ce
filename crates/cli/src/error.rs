//! crates/cli/src/error.rs
//!
//! CLI error taxonomy and exit-code mapping.

use std::io;

/// Exit code for usage and configuration errors.
pub(crate) const USAGE_EXIT: u8 = 1;

/// Exit code for I/O failures.
pub(crate) const IO_EXIT: u8 = 2;

/// Errors surfaced to the user by the CLI.
///
/// Search-level conditions (formatter failures, deadline truncation) are
/// not errors; they are folded into the search result. Only host-side
/// problems reach this type.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The corpus directory yielded no usable files.
    #[error("no corpus files found under {root:?}")]
    EmptyCorpus {
        /// The directory that was walked.
        root: std::path::PathBuf,
    },

    /// The catalog file failed validation.
    #[error("invalid catalog: {0}")]
    Catalog(#[from] catalog::CatalogError),

    /// The catalog file or output could not be serialized/deserialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading the corpus or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Maps the error to its process exit code.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::EmptyCorpus { .. } | Self::Catalog(_) | Self::Json(_) => USAGE_EXIT,
            Self::Io(_) => IO_EXIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_errors_exit_one() {
        let empty = CliError::EmptyCorpus {
            root: "/nowhere".into(),
        };
        assert_eq!(empty.exit_code(), USAGE_EXIT);
    }

    #[test]
    fn io_errors_exit_two() {
        let error: CliError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert_eq!(error.exit_code(), IO_EXIT);
    }
}
