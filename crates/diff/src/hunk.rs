//! crates/diff/src/hunk.rs
//!
//! Hunk representation of a line diff and patch application.

use std::ops::Range;

/// Classification of one contiguous region of a line diff.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HunkKind {
    /// Source and target lines are identical in this region.
    Equal,
    /// Lines present only in the target.
    Insert,
    /// Lines present only in the source.
    Delete,
    /// A source region replaced by a different target region.
    Change,
}

/// One contiguous region of a line diff.
///
/// `source` and `target` are line-index ranges into the split source and
/// target texts. Non-equal hunks carry the replacement lines so a
/// [`LineDiff`] is a self-contained patch.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Hunk {
    kind: HunkKind,
    source: Range<usize>,
    target: Range<usize>,
    replacement: Vec<String>,
}

impl Hunk {
    pub(crate) fn new(
        kind: HunkKind,
        source: Range<usize>,
        target: Range<usize>,
        replacement: Vec<String>,
    ) -> Self {
        debug_assert_eq!(
            replacement.len(),
            match kind {
                HunkKind::Equal | HunkKind::Delete => 0,
                HunkKind::Insert | HunkKind::Change => target.len(),
            }
        );
        Self {
            kind,
            source,
            target,
            replacement,
        }
    }

    /// The hunk's classification.
    #[must_use]
    pub const fn kind(&self) -> HunkKind {
        self.kind
    }

    /// Line-index range into the source text.
    #[must_use]
    pub fn source_range(&self) -> Range<usize> {
        self.source.clone()
    }

    /// Line-index range into the target text.
    #[must_use]
    pub fn target_range(&self) -> Range<usize> {
        self.target.clone()
    }

    /// Replacement lines written to the target for this hunk.
    ///
    /// Empty for [`HunkKind::Equal`] and [`HunkKind::Delete`].
    #[must_use]
    pub fn replacement(&self) -> &[String] {
        &self.replacement
    }

    /// Returns `true` for a one-line-to-one-line change.
    #[must_use]
    pub fn is_single_line_change(&self) -> bool {
        self.kind == HunkKind::Change && self.source.len() == 1 && self.target.len() == 1
    }
}

/// An ordered list of [`Hunk`]s describing how to turn one line sequence
/// into another.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LineDiff {
    hunks: Vec<Hunk>,
}

impl LineDiff {
    pub(crate) fn new(hunks: Vec<Hunk>) -> Self {
        Self { hunks }
    }

    /// The hunks, in source order.
    #[must_use]
    pub fn hunks(&self) -> &[Hunk] {
        &self.hunks
    }

    /// Returns `true` when the diff contains no non-equal hunks.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.hunks.iter().all(|h| h.kind() == HunkKind::Equal)
    }

    /// Applies the diff to the source lines, reconstructing the target.
    ///
    /// Reconstruction must reproduce the target lines exactly for every
    /// diff this crate computes; the round-trip tests assert that law.
    #[must_use]
    pub fn apply(&self, source_lines: &[&str]) -> Vec<String> {
        let mut out = Vec::new();
        for hunk in &self.hunks {
            match hunk.kind() {
                HunkKind::Equal => {
                    out.extend(
                        source_lines[hunk.source_range()]
                            .iter()
                            .map(ToString::to_string),
                    );
                }
                HunkKind::Insert | HunkKind::Change => {
                    out.extend(hunk.replacement().iter().cloned());
                }
                HunkKind::Delete => {}
            }
        }
        out
    }
}
