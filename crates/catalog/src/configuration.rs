//! crates/catalog/src/configuration.rs
//!
//! Immutable formatter configurations and their corpus scores.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An ordered mapping from formatting option keys to string-encoded values.
///
/// Values are kept as strings regardless of their semantic type (boolean,
/// enumerated token, bounded integer, bit-flag composite); the formatter
/// behind [`ConfigurableFormatter`](crate::ConfigurableFormatter) owns the
/// decoding. Equality and hashing are structural, which the search engine
/// relies on to detect "candidate equals current value" no-ops and to
/// deduplicate baseline configurations.
///
/// A configuration is immutable once built. [`with_value`](Self::with_value)
/// derives a new configuration with one key changed, leaving the original
/// untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    options: BTreeMap<String, String>,
}

impl Configuration {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value held for `key`, if any.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Derives a new configuration equal to `self` except `key` = `value`.
    #[must_use]
    pub fn with_value(&self, key: &str, value: &str) -> Self {
        let mut options = self.options.clone();
        options.insert(key.to_string(), value.to_string());
        Self { options }
    }

    /// Sets `key` = `value` in place. Intended for building baselines;
    /// search code derives candidates via [`with_value`](Self::with_value).
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.options.insert(key.into(), value.into());
    }

    /// Returns the number of options held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns `true` when no options are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterates over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.options
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for Configuration {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            options: iter.into_iter().collect(),
        }
    }
}

/// A [`Configuration`] paired with its score over an evaluated corpus.
///
/// Lower is better; a score of `0` means the formatter reproduced every
/// corpus file byte-for-byte (after line splitting). Comparisons in the
/// search engine keep the incumbent on ties so the search never flip-flops
/// between equally-scoring configurations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoredConfiguration {
    config: Configuration,
    score: u64,
}

impl ScoredConfiguration {
    /// Pairs a configuration with its score.
    #[must_use]
    pub fn new(config: Configuration, score: u64) -> Self {
        Self { config, score }
    }

    /// The scored configuration.
    #[must_use]
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// The aggregate diff distance across the evaluated corpus.
    #[must_use]
    pub const fn score(&self) -> u64 {
        self.score
    }

    /// Returns `true` when the formatter is a no-op over the corpus.
    #[must_use]
    pub const fn is_perfect(&self) -> bool {
        self.score == 0
    }

    /// Returns `true` when `self` strictly beats `other`.
    ///
    /// Strict: equal scores favour the incumbent, never the challenger.
    #[must_use]
    pub const fn improves_on(&self, other: &Self) -> bool {
        self.score < other.score
    }

    /// Consumes the pair, returning the configuration.
    #[must_use]
    pub fn into_config(self) -> Configuration {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod configuration_tests {
        use super::*;

        #[test]
        fn with_value_leaves_original_untouched() {
            let base = Configuration::new().with_value("indent", "tabs");
            let derived = base.with_value("indent", "spaces");
            assert_eq!(base.value("indent"), Some("tabs"));
            assert_eq!(derived.value("indent"), Some("spaces"));
        }

        #[test]
        fn structural_equality() {
            let a: Configuration = [("x".to_string(), "1".to_string())]
                .into_iter()
                .collect();
            let b = Configuration::new().with_value("x", "1");
            assert_eq!(a, b);
        }

        #[test]
        fn iteration_is_key_ordered() {
            let mut config = Configuration::new();
            config.set("zeta", "1");
            config.set("alpha", "2");
            let keys: Vec<&str> = config.iter().map(|(k, _)| k).collect();
            assert_eq!(keys, ["alpha", "zeta"]);
        }

        #[test]
        fn same_key_same_value_is_identity() {
            let base = Configuration::new().with_value("k", "v");
            assert_eq!(base, base.with_value("k", "v"));
        }

        #[test]
        fn serde_round_trip_is_a_plain_map() {
            let config = Configuration::new().with_value("indent", "spaces");
            let json = serde_json::to_string(&config).unwrap();
            assert_eq!(json, r#"{"indent":"spaces"}"#);
            let back: Configuration = serde_json::from_str(&json).unwrap();
            assert_eq!(back, config);
        }
    }

    mod scored_tests {
        use super::*;

        #[test]
        fn improvement_is_strict() {
            let config = Configuration::new();
            let incumbent = ScoredConfiguration::new(config.clone(), 10);
            let equal = ScoredConfiguration::new(config.clone(), 10);
            let better = ScoredConfiguration::new(config, 9);
            assert!(!equal.improves_on(&incumbent));
            assert!(better.improves_on(&incumbent));
        }

        #[test]
        fn perfect_score() {
            assert!(ScoredConfiguration::new(Configuration::new(), 0).is_perfect());
            assert!(!ScoredConfiguration::new(Configuration::new(), 1).is_perfect());
        }
    }
}
