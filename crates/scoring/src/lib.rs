#![deny(unsafe_code)]

//! Cached corpus scoring of formatter configurations.
//!
//! - [`DiffScoreCache`] memoizes `(original, formatted)` → diff distance
//! - [`StyleScorer`] formats texts under a configuration and sums the
//!   cached distances, treating formatter failure as a maximal penalty
//!
//! # Design
//!
//! The cache is content-addressed, not configuration-addressed: many
//! distinct configurations render a given file to byte-identical output,
//! and keying on the output text is what lets those evaluations collapse
//! into one diff computation. The cache is the only state shared between
//! scoring workers and lives behind a concurrent map.

mod cache;
mod scorer;

pub use cache::DiffScoreCache;
pub use scorer::{FORMAT_FAILURE_DISTANCE, StyleScorer};
