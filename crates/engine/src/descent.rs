//! crates/engine/src/descent.rs
//!
//! Greedy coordinate descent over one option-key subset.

use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, warn};

use catalog::{OptionCatalog, ScoredConfiguration};
use scoring::StyleScorer;

/// Collaborators and the deadline, threaded through every search loop.
pub(crate) struct SearchContext<'a> {
    pub(crate) catalog: &'a dyn OptionCatalog,
    pub(crate) scorer: StyleScorer<'a>,
    pub(crate) deadline: Instant,
}

impl SearchContext<'_> {
    pub(crate) fn deadline_passed(&self) -> bool {
        Instant::now() > self.deadline
    }
}

/// Result of one descent run: the best configuration reached and whether
/// the deadline cut the run short.
pub(crate) struct DescentOutcome {
    pub(crate) best: ScoredConfiguration,
    pub(crate) interrupted: bool,
}

/// Runs coordinate-descent passes over `keys` until a full pass improves
/// nothing, the score reaches zero, or the deadline passes.
///
/// The deadline is checked once per key, so a pass over a large subset
/// cannot overshoot by more than one `pick_best_value` evaluation.
pub(crate) fn tune_keys(
    ctx: &SearchContext<'_>,
    keys: &[String],
    texts: &[Arc<str>],
    mut best: ScoredConfiguration,
) -> DescentOutcome {
    if keys.is_empty() || best.is_perfect() {
        return DescentOutcome {
            best,
            interrupted: false,
        };
    }
    loop {
        let mut improved_this_pass = false;
        for key in keys {
            if ctx.deadline_passed() {
                return DescentOutcome {
                    best,
                    interrupted: true,
                };
            }
            let candidate = pick_best_value(ctx, key, &best, texts);
            if candidate.config() != best.config() {
                debug!(%key, score = candidate.score(), "option value improved");
                best = candidate;
                improved_this_pass = true;
            }
        }
        if !improved_this_pass || best.is_perfect() {
            return DescentOutcome {
                best,
                interrupted: false,
            };
        }
    }
}

/// Finds the best value for one key, holding every other option fixed.
///
/// Returns `best` unchanged when no candidate strictly improves on it,
/// which also means the result never scores worse than the input. When
/// the unconstrained winner is a discouraged value, the single-key search
/// re-runs without the discouraged set: a discouraged value only looks
/// attractive when the corpus itself is inconsistently formatted, and it
/// must not become the inferred target style.
pub(crate) fn pick_best_value(
    ctx: &SearchContext<'_>,
    key: &str,
    best: &ScoredConfiguration,
    texts: &[Arc<str>],
) -> ScoredConfiguration {
    let candidates = ctx.catalog.candidate_values(key);
    let Some((value, scored)) = best_candidate(ctx, key, best, texts, &candidates, &[]) else {
        return best.clone();
    };
    let discouraged = ctx.catalog.discouraged_values(key);
    if discouraged.contains(&value) {
        warn!(
            key,
            %value,
            "discouraged value won; corpus formatting is inconsistent, re-running without it"
        );
        return match best_candidate(ctx, key, best, texts, &candidates, &discouraged) {
            Some((_, rescored)) => rescored,
            None => best.clone(),
        };
    }
    scored
}

/// Scores every admissible candidate in parallel and keeps the strict
/// winner, ties going to the lowest catalog index.
fn best_candidate(
    ctx: &SearchContext<'_>,
    key: &str,
    best: &ScoredConfiguration,
    texts: &[Arc<str>],
    candidates: &[String],
    excluded: &[String],
) -> Option<(String, ScoredConfiguration)> {
    let current = best.config().value(key);
    let admissible: Vec<&String> = candidates
        .iter()
        .filter(|value| Some(value.as_str()) != current)
        .filter(|value| !excluded.contains(*value))
        .collect();
    if admissible.is_empty() {
        return None;
    }

    let scores: Vec<u64> = admissible
        .par_iter()
        .map(|value| {
            let config = best.config().with_value(key, value);
            ctx.scorer.score(&config, texts)
        })
        .collect();

    let mut winner: Option<(usize, u64)> = None;
    for (index, score) in scores.iter().enumerate() {
        let threshold = winner.map_or(best.score(), |(_, s)| s);
        if *score < threshold {
            winner = Some((index, *score));
        }
    }
    winner.map(|(index, score)| {
        let value = admissible[index].clone();
        let config = best.config().with_value(key, &value);
        (value, ScoredConfiguration::new(config, score))
    })
}
