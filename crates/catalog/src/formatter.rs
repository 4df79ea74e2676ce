//! crates/catalog/src/formatter.rs
//!
//! The black-box formatter contract driven by the search engine.

use std::io;

use crate::Configuration;

/// Failure to format one source text under one configuration.
///
/// Expected and recoverable: the scorer converts it into the maximal
/// sentinel distance for that `(text, config)` pair, which disqualifies
/// the configuration for the corpus without aborting the search.
#[derive(Debug, thiserror::Error)]
pub enum FormatFailure {
    /// The formatter rejected the input (could not parse or format it).
    #[error("formatter rejected the input: {0}")]
    Rejected(String),

    /// I/O error while talking to an external formatter process.
    #[error("formatter I/O error: {0}")]
    Io(#[from] io::Error),

    /// The formatter produced output that is not valid UTF-8.
    #[error("formatter produced non-UTF-8 output")]
    InvalidOutput,
}

/// A formatter that renders source text under a given configuration.
///
/// Implementations must behave as a pure function of `(config, source)`:
/// the same inputs always produce the same output or the same failure.
/// The diff score cache and the parallel re-evaluation of candidates both
/// depend on this. Formatting is a plain, possibly slow, blocking call;
/// cancellation is the caller's concern (the search engine wraps every
/// loop with a deadline check, not the formatter).
pub trait ConfigurableFormatter: Send + Sync {
    /// Formats `source` under `config`.
    fn format(&self, config: &Configuration, source: &str) -> Result<String, FormatFailure>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_display() {
        let failure = FormatFailure::Rejected("unbalanced braces".to_string());
        assert_eq!(
            failure.to_string(),
            "formatter rejected the input: unbalanced braces"
        );
    }

    #[test]
    fn io_failure_converts() {
        let failure: FormatFailure =
            io::Error::new(io::ErrorKind::BrokenPipe, "gone").into();
        assert!(matches!(failure, FormatFailure::Io(_)));
    }
}
