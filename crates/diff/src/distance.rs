//! crates/diff/src/distance.rs
//!
//! The scalar diff distance the configuration search minimizes.

use tracing::trace;

use crate::hunk::HunkKind;
use crate::levenshtein::edit_distance;
use crate::myers::diff_lines;

/// Splits text into lines on runs of `\r` and `\n`.
///
/// Line terminators carry no score: CRLF versus LF, trailing newlines,
/// and blank lines all vanish here, leaving only content differences.
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split(['\r', '\n'])
        .filter(|line| !line.is_empty())
        .collect()
}

/// Computes the diff distance between an original and a formatted text.
///
/// Identical texts short-circuit to `0` without computing a diff. For all
/// other inputs the line diff is reduced hunk by hunk:
/// - a one-line-to-one-line change contributes the character-level
///   Levenshtein distance between the two lines;
/// - every other non-equal hunk contributes
///   `max(sum(source line chars), sum(target line chars))`, a pessimistic
///   proxy that avoids quadratic multi-line alignment.
///
/// The metric is not symmetric and is only meaningful for ranking: a
/// smaller distance means the formatted text is closer to the original.
#[must_use]
pub fn distance(original: &str, formatted: &str) -> u64 {
    if original == formatted {
        return 0;
    }
    let source_lines = split_lines(original);
    let target_lines = split_lines(formatted);
    let diff = diff_lines(&source_lines, &target_lines);

    let mut total: u64 = 0;
    for hunk in diff.hunks() {
        if hunk.kind() == HunkKind::Equal {
            continue;
        }
        let contribution = if hunk.is_single_line_change() {
            edit_distance(
                source_lines[hunk.source_range().start],
                &hunk.replacement()[0],
            )
        } else {
            let source_chars: u64 = source_lines[hunk.source_range()]
                .iter()
                .map(|line| line.chars().count() as u64)
                .sum();
            let target_chars: u64 = hunk
                .replacement()
                .iter()
                .map(|line| line.chars().count() as u64)
                .sum();
            source_chars.max(target_chars)
        };
        total = total.saturating_add(contribution);
    }
    trace!(hunks = diff.hunks().len(), distance = total, "scored diff");
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    mod split_tests {
        use super::*;

        #[test]
        fn lf_and_crlf_split_alike() {
            assert_eq!(split_lines("a\nb\nc"), ["a", "b", "c"]);
            assert_eq!(split_lines("a\r\nb\r\nc"), ["a", "b", "c"]);
        }

        #[test]
        fn terminator_runs_collapse() {
            assert_eq!(split_lines("a\n\n\nb"), ["a", "b"]);
            assert_eq!(split_lines("\na\n"), ["a"]);
        }

        #[test]
        fn empty_text_has_no_lines() {
            assert!(split_lines("").is_empty());
            assert!(split_lines("\n\r\n").is_empty());
        }
    }

    mod distance_tests {
        use super::*;

        #[test]
        fn identical_is_zero() {
            assert_eq!(distance("fn main() {}\n", "fn main() {}\n"), 0);
            assert_eq!(distance("", ""), 0);
        }

        #[test]
        fn terminator_only_differences_are_zero() {
            assert_eq!(distance("a\nb\n", "a\r\nb"), 0);
            assert_eq!(distance("a\n\nb", "a\nb"), 0);
        }

        #[test]
        fn single_line_change_is_levenshtein() {
            // "  x();" -> "    x();" inserts two characters.
            assert_eq!(distance("a\n  x();\nb", "a\n    x();\nb"), 2);
        }

        #[test]
        fn inserted_line_costs_its_length() {
            assert_eq!(distance("a\nc", "a\nbbbb\nc"), 4);
        }

        #[test]
        fn deleted_line_costs_its_length() {
            assert_eq!(distance("a\nbbbb\nc", "a\nc"), 4);
        }

        #[test]
        fn multi_line_change_uses_max_of_sums() {
            // "xx" + "yy" (4 chars) replaced by "zzzzz" (5 chars).
            assert_eq!(distance("a\nxx\nyy\nb", "a\nzzzzz\nb"), 5);
        }

        #[test]
        fn empty_original_costs_formatted_bulk() {
            assert_eq!(distance("", "ab\ncd"), 4);
        }

        #[test]
        fn empty_formatted_costs_original_bulk() {
            assert_eq!(distance("ab\ncd", ""), 4);
        }

        #[test]
        fn non_negative_and_zero_iff_equal_after_split() {
            let pairs = [
                ("a", "b"),
                ("a\nb", "b\na"),
                ("", "x"),
                ("same", "same"),
            ];
            for (a, b) in pairs {
                let d = distance(a, b);
                let equal_after_split = split_lines(a) == split_lines(b);
                assert_eq!(d == 0, equal_after_split, "pair {a:?} / {b:?}");
            }
        }
    }
}
