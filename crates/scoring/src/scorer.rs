//! crates/scoring/src/scorer.rs
//!
//! Corpus scoring of one configuration under a black-box formatter.

use std::sync::Arc;

use rayon::prelude::*;
use tracing::debug;

use catalog::{Configuration, ConfigurableFormatter};

use crate::cache::DiffScoreCache;

/// Sentinel distance charged when the formatter cannot process a text.
///
/// Saturating summation keeps a corpus containing any unformattable file
/// at this ceiling, which disqualifies the configuration without making
/// the search total order ill-defined.
pub const FORMAT_FAILURE_DISTANCE: u64 = u64::MAX;

/// Scores configurations by formatting texts and summing diff distances.
///
/// Texts are independent and scored through a rayon fan-out; the only
/// shared state is the [`DiffScoreCache`], which is safe for concurrent
/// use. The scorer borrows both collaborators so one cache can serve an
/// entire search run.
pub struct StyleScorer<'a> {
    formatter: &'a dyn ConfigurableFormatter,
    cache: &'a DiffScoreCache,
}

impl<'a> StyleScorer<'a> {
    /// Creates a scorer over the given formatter and cache.
    #[must_use]
    pub fn new(formatter: &'a dyn ConfigurableFormatter, cache: &'a DiffScoreCache) -> Self {
        Self { formatter, cache }
    }

    /// Sums the per-text distances for `config` across `texts`.
    ///
    /// The sum saturates instead of wrapping, so a single format failure
    /// pins the result at [`FORMAT_FAILURE_DISTANCE`].
    #[must_use]
    pub fn score(&self, config: &Configuration, texts: &[Arc<str>]) -> u64 {
        texts
            .par_iter()
            .map(|text| self.score_text(config, text))
            .reduce(|| 0, u64::saturating_add)
    }

    /// Scores a single text under `config`.
    ///
    /// A formatter failure becomes [`FORMAT_FAILURE_DISTANCE`] rather
    /// than an error; an unformattable file disqualifies candidates, it
    /// does not abort the search.
    #[must_use]
    pub fn score_text(&self, config: &Configuration, text: &Arc<str>) -> u64 {
        match self.formatter.format(config, text) {
            Ok(formatted) => {
                let formatted: Arc<str> = Arc::from(formatted);
                self.cache.get_or_compute(text, &formatted)
            }
            Err(failure) => {
                debug!(%failure, "formatter failed, charging sentinel distance");
                FORMAT_FAILURE_DISTANCE
            }
        }
    }
}
