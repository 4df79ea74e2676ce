//! crates/catalog/src/catalog.rs
//!
//! Candidate-value enumeration for the configuration search.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Configuration;

/// Enumerates, for each option key, the finite set of values worth probing.
///
/// Supplied once per search and never mutated by the engine. All returned
/// collections are ordered, and the order is load-bearing: baseline ties
/// go to the first-listed standard and candidate-value ties go to the
/// lowest-index value, which is what makes the search deterministic.
pub trait OptionCatalog: Send + Sync {
    /// Every option key the search may tune, in catalog order.
    fn all_keys(&self) -> Vec<String>;

    /// Candidate values to probe for `key`, in catalog order.
    ///
    /// Unknown keys yield an empty list.
    fn candidate_values(&self, key: &str) -> Vec<String>;

    /// Values for `key` that are only ever attractive as an artifact of
    /// badly-mixed existing formatting. May be empty.
    fn discouraged_values(&self, key: &str) -> Vec<String>;

    /// Keys governing comment formatting, tuned first.
    fn comment_related_keys(&self) -> Vec<String>;

    /// A short hand-picked list of historically high-impact keys.
    fn high_impact_keys(&self) -> Vec<String>;

    /// Named, human-curated baseline configurations, in preference order.
    fn standard_configurations(&self) -> Vec<(String, Configuration)>;
}

/// Errors raised while validating a catalog definition.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// An option declares no candidate values at all.
    #[error("option {key:?} declares no candidate values")]
    NoCandidates {
        /// The offending option key.
        key: String,
    },

    /// A discouraged value is not among the option's candidates.
    #[error("option {key:?} discourages {value:?}, which is not a candidate")]
    UnknownDiscouraged {
        /// The offending option key.
        key: String,
        /// The discouraged value missing from the candidate list.
        value: String,
    },

    /// A standard configuration sets a key the catalog does not declare.
    #[error("standard {name:?} sets unknown option {key:?}")]
    UnknownStandardKey {
        /// The standard configuration's name.
        name: String,
        /// The undeclared option key.
        key: String,
    },

    /// Two standard configurations share a name.
    #[error("duplicate standard configuration name {name:?}")]
    DuplicateStandard {
        /// The repeated name.
        name: String,
    },
}

/// Declaration of one option: its candidate values and search hints.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OptionSpec {
    /// Candidate values in probe order.
    pub values: Vec<String>,
    /// Candidates excluded unless nothing else remains viable.
    #[serde(default)]
    pub discouraged: Vec<String>,
    /// Whether the option governs comment formatting.
    #[serde(default)]
    pub comment_related: bool,
    /// Whether the option is on the historically high-impact shortlist.
    #[serde(default)]
    pub high_impact: bool,
}

/// A named baseline configuration inside a catalog definition.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StandardSpec {
    /// Human-readable preset name.
    pub name: String,
    /// Option values the preset pins.
    pub options: Configuration,
}

/// A complete, serde-friendly catalog definition.
///
/// This is the shape the CLI loads from a JSON file; tests build it in
/// code. Key order comes from the underlying `BTreeMap`, standard order
/// from the declaration list.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CatalogData {
    /// Option declarations keyed by option name.
    pub options: BTreeMap<String, OptionSpec>,
    /// Baseline presets in preference order.
    #[serde(default)]
    pub standards: Vec<StandardSpec>,
}

impl CatalogData {
    /// Checks internal consistency.
    ///
    /// Every option must declare at least one candidate, discouraged
    /// values must be candidates, standard configurations may only set
    /// declared keys, and standard names must be unique.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (key, spec) in &self.options {
            if spec.values.is_empty() {
                return Err(CatalogError::NoCandidates { key: key.clone() });
            }
            for value in &spec.discouraged {
                if !spec.values.contains(value) {
                    return Err(CatalogError::UnknownDiscouraged {
                        key: key.clone(),
                        value: value.clone(),
                    });
                }
            }
        }
        let mut seen = Vec::with_capacity(self.standards.len());
        for standard in &self.standards {
            if seen.contains(&&standard.name) {
                return Err(CatalogError::DuplicateStandard {
                    name: standard.name.clone(),
                });
            }
            seen.push(&standard.name);
            for (key, _) in standard.options.iter() {
                if !self.options.contains_key(key) {
                    return Err(CatalogError::UnknownStandardKey {
                        name: standard.name.clone(),
                        key: key.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl OptionCatalog for CatalogData {
    fn all_keys(&self) -> Vec<String> {
        self.options.keys().cloned().collect()
    }

    fn candidate_values(&self, key: &str) -> Vec<String> {
        self.options
            .get(key)
            .map(|spec| spec.values.clone())
            .unwrap_or_default()
    }

    fn discouraged_values(&self, key: &str) -> Vec<String> {
        self.options
            .get(key)
            .map(|spec| spec.discouraged.clone())
            .unwrap_or_default()
    }

    fn comment_related_keys(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|(_, spec)| spec.comment_related)
            .map(|(key, _)| key.clone())
            .collect()
    }

    fn high_impact_keys(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|(_, spec)| spec.high_impact)
            .map(|(key, _)| key.clone())
            .collect()
    }

    fn standard_configurations(&self) -> Vec<(String, Configuration)> {
        self.standards
            .iter()
            .map(|standard| (standard.name.clone(), standard.options.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(values: &[&str]) -> OptionSpec {
        OptionSpec {
            values: values.iter().map(ToString::to_string).collect(),
            ..OptionSpec::default()
        }
    }

    fn sample() -> CatalogData {
        let mut data = CatalogData::default();
        data.options.insert("indent.style".to_string(), spec(&["tabs", "spaces"]));
        data.options.insert(
            "comment.wrap".to_string(),
            OptionSpec {
                comment_related: true,
                ..spec(&["true", "false"])
            },
        );
        data.standards.push(StandardSpec {
            name: "classic".to_string(),
            options: Configuration::new().with_value("indent.style", "tabs"),
        });
        data
    }

    #[test]
    fn valid_catalog_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn empty_candidates_rejected() {
        let mut data = sample();
        data.options.insert("broken".to_string(), spec(&[]));
        assert!(matches!(
            data.validate(),
            Err(CatalogError::NoCandidates { key }) if key == "broken"
        ));
    }

    #[test]
    fn discouraged_must_be_candidate() {
        let mut data = sample();
        data.options.insert(
            "indent.style".to_string(),
            OptionSpec {
                discouraged: vec!["mixed".to_string()],
                ..spec(&["tabs", "spaces"])
            },
        );
        assert!(matches!(
            data.validate(),
            Err(CatalogError::UnknownDiscouraged { value, .. }) if value == "mixed"
        ));
    }

    #[test]
    fn standard_with_unknown_key_rejected() {
        let mut data = sample();
        data.standards.push(StandardSpec {
            name: "typo".to_string(),
            options: Configuration::new().with_value("indnet.style", "tabs"),
        });
        assert!(matches!(
            data.validate(),
            Err(CatalogError::UnknownStandardKey { key, .. }) if key == "indnet.style"
        ));
    }

    #[test]
    fn duplicate_standard_names_rejected() {
        let mut data = sample();
        data.standards.push(StandardSpec {
            name: "classic".to_string(),
            options: Configuration::new(),
        });
        assert!(matches!(
            data.validate(),
            Err(CatalogError::DuplicateStandard { name }) if name == "classic"
        ));
    }

    #[test]
    fn keys_come_back_in_catalog_order() {
        let data = sample();
        assert_eq!(data.all_keys(), ["comment.wrap", "indent.style"]);
        assert_eq!(data.comment_related_keys(), ["comment.wrap"]);
    }

    #[test]
    fn unknown_key_yields_no_candidates() {
        assert!(sample().candidate_values("nope").is_empty());
        assert!(sample().discouraged_values("nope").is_empty());
    }

    #[test]
    fn json_round_trip() {
        let json = r#"{
            "options": {
                "indent.style": {
                    "values": ["tabs", "spaces"],
                    "discouraged": ["tabs"],
                    "high_impact": true
                }
            },
            "standards": [
                { "name": "classic", "options": { "indent.style": "tabs" } }
            ]
        }"#;
        let data: CatalogData = serde_json::from_str(json).unwrap();
        assert!(data.validate().is_ok());
        assert_eq!(data.high_impact_keys(), ["indent.style"]);
        assert_eq!(data.standard_configurations()[0].0, "classic");
    }
}
