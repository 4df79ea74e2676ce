#![deny(unsafe_code)]

//! Staged greedy configuration search.
//!
//! Given a corpus of original texts, an option catalog, and a black-box
//! formatter, [`optimize`] infers the configuration under which the
//! formatter best reproduces the corpus:
//!
//! 1. **Baseline selection** scores every standard configuration and
//!    seeds the search with the best one (first-listed wins ties).
//! 2. **Representative-file pre-optimization** tunes options against one
//!    well-chosen file, converging most options before the full corpus is
//!    scored repeatedly.
//! 3. **Staged tuning** runs greedy coordinate descent over progressively
//!    larger key subsets: comment-related keys, the high-impact
//!    shortlist, keys on which the standards disagree, then the full
//!    catalog.
//!
//! Every phase is monotone: the best full-corpus score never increases.
//! A single absolute deadline threads through all loops; exceeding it
//! truncates the search and returns the best configuration found so far,
//! never an error. With no timeout the search is deterministic.
//!
//! [`files_still_differing`] reports which corpus files a configuration
//! still fails to reproduce, as a post-search diagnostic.

mod descent;
mod diagnostics;
mod representative;
mod search;

pub use diagnostics::files_still_differing;
pub use search::{SearchOutcome, optimize};
