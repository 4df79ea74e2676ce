//! crates/engine/src/representative.rs
//!
//! Choosing the file the pre-optimization phase tunes against.

use std::path::{Component, Path};

use catalog::{Corpus, CorpusFile};

/// Path components that mark a file as non-production.
const NON_PRODUCTION_COMPONENTS: [&str; 4] = ["test", "tests", "spec", "specs"];

/// Returns `true` when no path component marks the file as test code.
///
/// A smaller application file is a better style witness than a bigger
/// test file: test code skews toward fixture literals and generated
/// boilerplate that over-weights a handful of options.
pub(crate) fn is_production_path(path: &Path) -> bool {
    !path.components().any(|component| match component {
        Component::Normal(part) => part
            .to_str()
            .is_some_and(|s| NON_PRODUCTION_COMPONENTS.contains(&s.to_ascii_lowercase().as_str())),
        _ => false,
    })
}

/// Picks the representative file: the largest production-path file, or
/// the largest file overall when nothing looks like production code.
/// Earlier corpus order wins length ties.
pub(crate) fn pick_representative(corpus: &Corpus) -> Option<&CorpusFile> {
    largest(corpus.files().filter(|f| is_production_path(f.path())))
        .or_else(|| largest(corpus.files()))
}

fn largest<'a>(files: impl Iterator<Item = &'a CorpusFile>) -> Option<&'a CorpusFile> {
    files.fold(None, |incumbent, candidate| match incumbent {
        Some(best) if best.char_len() >= candidate.char_len() => Some(best),
        _ => Some(candidate),
    })
}
