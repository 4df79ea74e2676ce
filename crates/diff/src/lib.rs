#![deny(unsafe_code)]

//! Line-level diff and edit-distance scoring primitives.
//!
//! This crate provides the minimal diff machinery the style search needs:
//! - [`split_lines`] splits text into lines on terminator runs
//! - [`diff_lines`] computes a Myers shortest-edit-script line diff
//! - [`LineDiff`] and [`Hunk`] represent the diff as ordered hunks
//! - [`edit_distance`] is a character-level Levenshtein distance
//! - [`distance`] reduces a diff to the scalar cost the search minimizes
//!
//! # Design
//!
//! This is deliberately not a general diff library. The scalar metric is
//! asymmetric and approximate for multi-line hunks (`max` of summed line
//! lengths) because only the relative ordering of candidate configurations
//! matters to the search, not absolute distances. The one hard invariant
//! is reconstruction: applying a computed diff to its source must
//! reproduce the target exactly. That law is enforced by tests, not by
//! production error handling, since a violation is a diff-engine bug.

mod distance;
mod hunk;
mod levenshtein;
mod myers;

pub use distance::{distance, split_lines};
pub use hunk::{Hunk, HunkKind, LineDiff};
pub use levenshtein::edit_distance;
pub use myers::diff_lines;
