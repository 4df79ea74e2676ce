//! crates/engine/src/search.rs
//!
//! Phase sequencing: baseline selection, representative-file
//! pre-optimization, and staged coordinate descent.

use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::{debug, info, warn};

use catalog::{
    Configuration, ConfigurableFormatter, Corpus, OptionCatalog, ScoredConfiguration,
};
use scoring::{DiffScoreCache, StyleScorer};

use crate::descent::{SearchContext, tune_keys};
use crate::representative::pick_representative;

/// The result of a search: the best configuration found, which baseline
/// seeded it, and whether the deadline truncated tuning.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    best: ScoredConfiguration,
    baseline: Option<String>,
    interrupted: bool,
}

impl SearchOutcome {
    /// The best configuration found, with its full-corpus score.
    #[must_use]
    pub fn best(&self) -> &ScoredConfiguration {
        &self.best
    }

    /// Name of the standard configuration that seeded the search, if the
    /// catalog supplied any standards.
    #[must_use]
    pub fn baseline(&self) -> Option<&str> {
        self.baseline.as_deref()
    }

    /// Returns `true` when the deadline cut the search short. An
    /// interrupted search is a truncation of quality, not a failure.
    #[must_use]
    pub const fn interrupted(&self) -> bool {
        self.interrupted
    }

    /// Consumes the outcome, returning the best scored configuration.
    #[must_use]
    pub fn into_best(self) -> ScoredConfiguration {
        self.best
    }
}

/// Infers the configuration under which `formatter` best reproduces the
/// corpus.
///
/// Phases run in order, each seeded from its predecessor, each monotone
/// in the full-corpus score. `deadline` is absolute; once it passes, the
/// search returns the best configuration found so far. An empty corpus
/// returns the first standard configuration untouched. With the deadline
/// in the future and no formatter nondeterminism, the result is a pure
/// function of `(corpus, catalog, baselines)`.
#[must_use]
pub fn optimize(
    corpus: &Corpus,
    catalog: &dyn OptionCatalog,
    formatter: &dyn ConfigurableFormatter,
    deadline: Instant,
) -> SearchOutcome {
    let standards = catalog.standard_configurations();

    if corpus.is_empty() {
        info!("empty corpus, returning the first standard configuration");
        let (baseline, config) = standards
            .into_iter()
            .next()
            .map_or((None, Configuration::new()), |(name, config)| {
                (Some(name), config)
            });
        return SearchOutcome {
            best: ScoredConfiguration::new(config, 0),
            baseline,
            interrupted: false,
        };
    }

    let cache = DiffScoreCache::new();
    let ctx = SearchContext {
        catalog,
        scorer: StyleScorer::new(formatter, &cache),
        deadline,
    };
    let texts = corpus.texts();

    // Phase 0: pick the best standard as the seed.
    let (baseline, mut best) = select_baseline(&ctx.scorer, &standards, &texts);
    info!(
        baseline = baseline.as_deref().unwrap_or("<none>"),
        score = best.score(),
        "baseline selected"
    );

    let mut interrupted = false;

    // Phase 1: converge options cheaply against one representative file.
    if !best.is_perfect() && corpus.len() >= 2 && !ctx.deadline_passed() {
        if let Some(representative) = pick_representative(corpus) {
            debug!(file = %representative.path().display(), "pre-optimizing representative file");
            let rep_texts = vec![representative.text().clone()];
            let seed_score = ctx.scorer.score(best.config(), &rep_texts);
            let seeded = ScoredConfiguration::new(best.config().clone(), seed_score);
            let mut tuned = seeded;
            for (stage, keys) in stage_keys(catalog) {
                debug!(stage, keys = keys.len(), "representative stage");
                let outcome = tune_keys(&ctx, &keys, &rep_texts, tuned);
                tuned = outcome.best;
                interrupted |= outcome.interrupted;
                if outcome.interrupted || tuned.is_perfect() {
                    break;
                }
            }
            // Adopt the pre-optimized configuration only if it holds up
            // against the whole corpus; the phase must never regress.
            let config = tuned.into_config();
            let full_score = ctx.scorer.score(&config, &texts);
            let rescored = ScoredConfiguration::new(config, full_score);
            if rescored.improves_on(&best) {
                debug!(score = rescored.score(), "representative tuning adopted");
                best = rescored;
            }
        }
    }

    // Phase 2: staged descent over the full corpus.
    for (stage, keys) in stage_keys(catalog) {
        if best.is_perfect() {
            break;
        }
        if ctx.deadline_passed() {
            interrupted = true;
            break;
        }
        debug!(stage, keys = keys.len(), score = best.score(), "tuning stage");
        let outcome = tune_keys(&ctx, &keys, &texts, best);
        best = outcome.best;
        if outcome.interrupted {
            interrupted = true;
            break;
        }
    }

    if interrupted {
        warn!(
            score = best.score(),
            "deadline passed, returning best configuration found so far"
        );
    }
    info!(
        score = best.score(),
        cached_pairs = cache.len(),
        "search finished"
    );
    SearchOutcome {
        best,
        baseline,
        interrupted,
    }
}

/// Scores every standard configuration in parallel and keeps the
/// minimum, ties going to the first-listed standard.
fn select_baseline(
    scorer: &StyleScorer<'_>,
    standards: &[(String, Configuration)],
    texts: &[Arc<str>],
) -> (Option<String>, ScoredConfiguration) {
    if standards.is_empty() {
        let config = Configuration::new();
        let score = scorer.score(&config, texts);
        return (None, ScoredConfiguration::new(config, score));
    }
    let scores: Vec<u64> = standards
        .par_iter()
        .map(|(_, config)| scorer.score(config, texts))
        .collect();

    let mut best_index = 0;
    for (index, score) in scores.iter().enumerate().skip(1) {
        if *score < scores[best_index] {
            best_index = index;
        }
    }
    let (name, config) = &standards[best_index];
    (
        Some(name.clone()),
        ScoredConfiguration::new(config.clone(), scores[best_index]),
    )
}

/// The four tuning stages, in order: comment-related keys, the
/// high-impact shortlist, keys the standards disagree on, then the full
/// catalog.
fn stage_keys(catalog: &dyn OptionCatalog) -> [(&'static str, Vec<String>); 4] {
    [
        ("comments", catalog.comment_related_keys()),
        ("high-impact", catalog.high_impact_keys()),
        ("divergent", divergent_keys(catalog)),
        ("full", catalog.all_keys()),
    ]
}

/// Keys whose values differ across the standard configurations. A key a
/// preset leaves unset counts as a distinct value: presets disagreeing on
/// whether to pin an option is itself a customization signal.
fn divergent_keys(catalog: &dyn OptionCatalog) -> Vec<String> {
    let standards = catalog.standard_configurations();
    if standards.len() < 2 {
        return Vec::new();
    }
    catalog
        .all_keys()
        .into_iter()
        .filter(|key| {
            let values: FxHashSet<Option<&str>> = standards
                .iter()
                .map(|(_, config)| config.value(key))
                .collect();
            values.len() > 1
        })
        .collect()
}
