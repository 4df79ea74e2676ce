//! crates/engine/src/diagnostics.rs
//!
//! Post-search reporting of files a configuration fails to reproduce.

use std::path::PathBuf;

use rayon::prelude::*;

use catalog::{Configuration, ConfigurableFormatter, Corpus, CorpusFile};
use scoring::{DiffScoreCache, StyleScorer};

/// Lists the corpus files that still differ when formatted under
/// `config`, in corpus order.
///
/// A file the formatter cannot process counts as differing. This is a
/// diagnostic for the caller's report, not part of the search loop.
#[must_use]
pub fn files_still_differing(
    config: &Configuration,
    corpus: &Corpus,
    formatter: &dyn ConfigurableFormatter,
) -> Vec<PathBuf> {
    let cache = DiffScoreCache::new();
    let scorer = StyleScorer::new(formatter, &cache);
    let files: Vec<&CorpusFile> = corpus.files().collect();
    files
        .par_iter()
        .filter(|file| scorer.score_text(config, file.text()) != 0)
        .map(|file| file.path().to_path_buf())
        .collect()
}
