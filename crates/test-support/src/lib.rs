#![deny(unsafe_code)]

//! Deterministic fixtures for exercising the search engine.
//!
//! [`ToyFormatter`] is a tiny brace-aware reformatter with just enough
//! option surface to make every search phase observable: an indentation
//! style (including a discouraged "mixed" value that preserves whatever
//! indentation a line already has), an indentation width, trailing
//! whitespace trimming, and comment spacing. [`toy_catalog`] describes
//! those options together with two standard configurations.

use catalog::{
    CatalogData, Configuration, ConfigurableFormatter, Corpus, FormatFailure, OptionSpec,
    StandardSpec,
};

/// Marker that makes [`ToyFormatter`] reject a source text.
pub const REJECT_MARKER: &str = "@@reject@@";

/// A brace-nesting reformatter driven by four options.
///
/// Lines are re-indented by brace depth: a line starting with `}` closes
/// a level before it is emitted, a line ending with `{` opens one after.
/// Options:
///
/// - `indent.style`: `tabs`, `spaces`, or `mixed` (keep each line's
///   existing leading whitespace untouched)
/// - `indent.width`: spaces per level when the style is `spaces`
/// - `trim.trailing`: `true` strips trailing whitespace per line
/// - `comment.space`: `true` normalizes `//`-comment bodies to a single
///   leading space
///
/// Pure by construction; the only failure is the [`REJECT_MARKER`].
#[derive(Debug, Default)]
pub struct ToyFormatter;

impl ConfigurableFormatter for ToyFormatter {
    fn format(&self, config: &Configuration, source: &str) -> Result<String, FormatFailure> {
        if source.contains(REJECT_MARKER) {
            return Err(FormatFailure::Rejected("reject marker present".to_string()));
        }
        let style = config.value("indent.style").unwrap_or("spaces");
        let width: usize = config
            .value("indent.width")
            .unwrap_or("4")
            .parse()
            .map_err(|_| FormatFailure::Rejected("indent.width is not a number".to_string()))?;
        let trim = config.value("trim.trailing") == Some("true");
        let comment_space = config.value("comment.space") == Some("true");

        let mut depth: usize = 0;
        let mut out = Vec::new();
        for line in source.lines() {
            let body_raw = line.trim_start();
            if body_raw.starts_with('}') {
                depth = depth.saturating_sub(1);
            }

            let mut body = body_raw.to_string();
            if comment_space && body.starts_with("//") {
                let rest = body[2..].trim_start();
                if !rest.is_empty() {
                    body = format!("// {rest}");
                }
            }
            if trim {
                body.truncate(body.trim_end().len());
            }

            if body.is_empty() {
                out.push(String::new());
            } else {
                let indent = match style {
                    "tabs" => "\t".repeat(depth),
                    "mixed" => line[..line.len() - body_raw.len()].to_string(),
                    _ => " ".repeat(width * depth),
                };
                out.push(format!("{indent}{body}"));
            }

            if body_raw.ends_with('{') {
                depth += 1;
            }
        }
        Ok(out.join("\n"))
    }
}

/// Formatter that returns every source unchanged under every
/// configuration.
#[derive(Debug, Default)]
pub struct IdentityFormatter;

impl ConfigurableFormatter for IdentityFormatter {
    fn format(&self, _config: &Configuration, source: &str) -> Result<String, FormatFailure> {
        Ok(source.to_string())
    }
}

/// Formatter that rejects every input.
#[derive(Debug, Default)]
pub struct FailingFormatter;

impl ConfigurableFormatter for FailingFormatter {
    fn format(&self, _config: &Configuration, _source: &str) -> Result<String, FormatFailure> {
        Err(FormatFailure::Rejected("this formatter always fails".to_string()))
    }
}

/// The catalog describing [`ToyFormatter`]'s options.
///
/// `indent.style` discourages `mixed`: preserving found indentation can
/// only win on an inconsistently-indented corpus and is never a sane
/// target style. Two standards are supplied: `kernel` (tabs, width 8)
/// and `modern` (spaces, width 4).
#[must_use]
pub fn toy_catalog() -> CatalogData {
    let mut data = CatalogData::default();
    data.options.insert(
        "comment.space".to_string(),
        OptionSpec {
            values: vec!["false".to_string(), "true".to_string()],
            comment_related: true,
            ..OptionSpec::default()
        },
    );
    data.options.insert(
        "indent.style".to_string(),
        OptionSpec {
            values: vec!["tabs".to_string(), "spaces".to_string(), "mixed".to_string()],
            discouraged: vec!["mixed".to_string()],
            high_impact: true,
            ..OptionSpec::default()
        },
    );
    data.options.insert(
        "indent.width".to_string(),
        OptionSpec {
            values: vec!["2".to_string(), "4".to_string(), "8".to_string()],
            high_impact: true,
            ..OptionSpec::default()
        },
    );
    data.options.insert(
        "trim.trailing".to_string(),
        OptionSpec {
            values: vec!["false".to_string(), "true".to_string()],
            ..OptionSpec::default()
        },
    );

    let mut kernel = Configuration::new();
    kernel.set("indent.style", "tabs");
    kernel.set("indent.width", "8");
    kernel.set("trim.trailing", "true");
    kernel.set("comment.space", "false");
    data.standards.push(StandardSpec {
        name: "kernel".to_string(),
        options: kernel,
    });

    let mut modern = Configuration::new();
    modern.set("indent.style", "spaces");
    modern.set("indent.width", "4");
    modern.set("trim.trailing", "true");
    modern.set("comment.space", "true");
    data.standards.push(StandardSpec {
        name: "modern".to_string(),
        options: modern,
    });

    data
}

/// Builds a corpus from `(path, text)` pairs.
#[must_use]
pub fn corpus_from(entries: &[(&str, &str)]) -> Corpus {
    let mut corpus = Corpus::new();
    for (path, text) in entries {
        corpus.insert(*path, *text);
    }
    corpus
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(pairs: &[(&str, &str)]) -> Configuration {
        let mut config = Configuration::new();
        for (key, value) in pairs {
            config.set(*key, *value);
        }
        config
    }

    #[test]
    fn reindents_by_brace_depth() {
        let source = "fn main() {\nx();\n}";
        let formatted = ToyFormatter
            .format(
                &config(&[("indent.style", "spaces"), ("indent.width", "4")]),
                source,
            )
            .unwrap();
        assert_eq!(formatted, "fn main() {\n    x();\n}");
    }

    #[test]
    fn tabs_style() {
        let source = "fn main() {\n        x();\n}";
        let formatted = ToyFormatter
            .format(&config(&[("indent.style", "tabs")]), source)
            .unwrap();
        assert_eq!(formatted, "fn main() {\n\tx();\n}");
    }

    #[test]
    fn mixed_style_preserves_found_indentation() {
        let source = "fn main() {\n\tx();\n      y();\n}";
        let formatted = ToyFormatter
            .format(&config(&[("indent.style", "mixed")]), source)
            .unwrap();
        assert_eq!(formatted, source);
    }

    #[test]
    fn close_then_open_keeps_depth() {
        let source = "if a {\nx();\n} else {\ny();\n}";
        let formatted = ToyFormatter
            .format(
                &config(&[("indent.style", "spaces"), ("indent.width", "2")]),
                source,
            )
            .unwrap();
        assert_eq!(formatted, "if a {\n  x();\n} else {\n  y();\n}");
    }

    #[test]
    fn comment_space_normalizes() {
        let source = "//note\n//   spaced\n// ok";
        let formatted = ToyFormatter
            .format(&config(&[("comment.space", "true")]), source)
            .unwrap();
        assert_eq!(formatted, "// note\n// spaced\n// ok");
    }

    #[test]
    fn trim_trailing() {
        let source = "x();   ";
        let formatted = ToyFormatter
            .format(&config(&[("trim.trailing", "true")]), source)
            .unwrap();
        assert_eq!(formatted, "x();");
    }

    #[test]
    fn reject_marker_fails() {
        let result = ToyFormatter.format(&Configuration::new(), "ok @@reject@@");
        assert!(result.is_err());
    }

    #[test]
    fn is_pure() {
        let source = "fn f() {\nbody();\n}";
        let cfg = config(&[("indent.style", "tabs")]);
        let first = ToyFormatter.format(&cfg, source).unwrap();
        let second = ToyFormatter.format(&cfg, source).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn catalog_is_valid() {
        assert!(toy_catalog().validate().is_ok());
    }
}
