//! crates/catalog/src/corpus.rs
//!
//! The read-only set of original texts a search runs against.

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One corpus entry: a file identifier and its original text.
///
/// Texts are held behind `Arc<str>` so the diff score cache can key on the
/// same allocation instead of cloning file contents per cache entry.
#[derive(Clone, Debug)]
pub struct CorpusFile {
    path: PathBuf,
    text: Arc<str>,
}

impl CorpusFile {
    /// The file identifier.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The original text.
    #[must_use]
    pub fn text(&self) -> &Arc<str> {
        &self.text
    }

    /// Length of the original text in characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// An ordered collection of original source files.
///
/// Insertion order is preserved; it is the deterministic tie-break for
/// representative-file selection and the order of diagnostic reports.
/// Read-only for the duration of a search.
#[derive(Clone, Debug, Default)]
pub struct Corpus {
    files: Vec<CorpusFile>,
}

impl Corpus {
    /// Creates an empty corpus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a file to the corpus.
    pub fn insert(&mut self, path: impl Into<PathBuf>, text: impl Into<Arc<str>>) {
        self.files.push(CorpusFile {
            path: path.into(),
            text: text.into(),
        });
    }

    /// Number of files held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` when the corpus holds no files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterates over files in insertion order.
    pub fn files(&self) -> impl Iterator<Item = &CorpusFile> {
        self.files.iter()
    }

    /// Collects the texts in insertion order.
    #[must_use]
    pub fn texts(&self) -> Vec<Arc<str>> {
        self.files.iter().map(|f| f.text.clone()).collect()
    }
}

impl FromIterator<(PathBuf, Arc<str>)> for Corpus {
    fn from_iter<I: IntoIterator<Item = (PathBuf, Arc<str>)>>(iter: I) -> Self {
        Self {
            files: iter
                .into_iter()
                .map(|(path, text)| CorpusFile { path, text })
                .collect(),
        }
    }
}
