//! crates/cli/src/corpus.rs
//!
//! Walking a source tree into a search corpus.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use catalog::Corpus;

use crate::error::CliError;

/// Walks `root` and loads matching files into a [`Corpus`].
///
/// Hidden entries are skipped, directories are visited in filename order
/// so corpus order (and with it every search tie-break) is stable across
/// runs, and files that are not valid UTF-8 are skipped with a warning.
/// Corpus paths are relative to `root`, which keeps the production-path
/// heuristic from tripping over, say, a checkout living under
/// `/home/ci/tests/`.
pub(crate) fn discover(root: &Path, extensions: &[String]) -> Result<Corpus, CliError> {
    let mut corpus = Corpus::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry));
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                warn!(%error, "skipping unreadable directory entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !matches_extension(path, extensions) {
            continue;
        }
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(error) => {
                warn!(path = %path.display(), %error, "skipping unreadable file");
                continue;
            }
        };
        let id = path.strip_prefix(root).unwrap_or(path).to_path_buf();
        debug!(path = %id.display(), chars = text.len(), "corpus file");
        corpus.insert(id, text);
    }
    if corpus.is_empty() {
        return Err(CliError::EmptyCorpus {
            root: root.to_path_buf(),
        });
    }
    Ok(corpus)
}

/// Dotfiles and dot-directories are never part of the corpus. The root
/// itself is exempt so walking `.` works.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}
