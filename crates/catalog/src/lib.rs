#![deny(unsafe_code)]

//! Option catalog, configuration model, and formatter contract.
//!
//! This crate owns the data types shared across the stylefit workspace:
//! - [`Configuration`] maps option keys to string-encoded values
//! - [`ScoredConfiguration`] pairs a configuration with its corpus score
//! - [`Corpus`] holds the original texts a search runs against
//! - [`ConfigurableFormatter`] is the black-box formatter contract
//! - [`OptionCatalog`] enumerates candidate values per option key
//! - [`CatalogData`] is a serde-friendly catalog usable from config files
//!
//! # Design
//!
//! The search engine never knows which formatter it is driving or where
//! candidate values come from. Both are capability traits implemented by
//! the host: the CLI plugs in an external command, tests plug in a toy
//! formatter. Everything the engine tries is expressed as a
//! [`Configuration`], and configurations are immutable; each candidate is
//! a copy-on-write derivation of the current best.

mod catalog;
mod configuration;
mod corpus;
mod formatter;

pub use catalog::{CatalogData, CatalogError, OptionCatalog, OptionSpec, StandardSpec};
pub use configuration::{Configuration, ScoredConfiguration};
pub use corpus::{Corpus, CorpusFile};
pub use formatter::{ConfigurableFormatter, FormatFailure};
