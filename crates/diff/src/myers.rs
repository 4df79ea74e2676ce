//! crates/diff/src/myers.rs
//!
//! Myers O(ND) shortest-edit-script diff over line sequences.

use crate::hunk::{Hunk, HunkKind, LineDiff};

/// One elementary edit in the shortest edit script.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Op {
    Equal,
    Delete,
    Insert,
}

/// Computes a line-level diff between `source` and `target`.
///
/// Runs the classic Myers greedy O(ND) algorithm and coalesces the edit
/// script into ordered hunks: runs of matching lines become
/// [`HunkKind::Equal`] hunks, and each maximal run of non-matching edits
/// becomes a single [`HunkKind::Insert`], [`HunkKind::Delete`], or
/// [`HunkKind::Change`] hunk referencing contiguous source and target
/// line ranges.
#[must_use]
pub fn diff_lines(source: &[&str], target: &[&str]) -> LineDiff {
    let ops = shortest_edit_ops(source, target);
    coalesce(&ops, target)
}

/// Forward Myers search with a per-depth trace, then backtracking.
fn shortest_edit_ops(a: &[&str], b: &[&str]) -> Vec<Op> {
    let n = a.len();
    let m = b.len();
    let max = n + m;
    if max == 0 {
        return Vec::new();
    }
    let offset = max as isize;

    // v[k + offset] holds the furthest x reached on diagonal k.
    let mut v = vec![0usize; 2 * max + 1];
    let mut trace: Vec<Vec<usize>> = Vec::new();

    'outer: for d in 0..=(max as isize) {
        trace.push(v.clone());
        let mut k = -d;
        while k <= d {
            let idx = (k + offset) as usize;
            let mut x = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                v[idx + 1]
            } else {
                v[idx - 1] + 1
            };
            let mut y = (x as isize - k) as usize;
            while x < n && y < m && a[x] == b[y] {
                x += 1;
                y += 1;
            }
            v[idx] = x;
            if x >= n && y >= m {
                break 'outer;
            }
            k += 2;
        }
    }

    // Walk the trace backwards from (n, m), emitting ops in reverse.
    let mut ops_rev: Vec<Op> = Vec::with_capacity(max);
    let mut x = n as isize;
    let mut y = m as isize;
    for depth in (0..trace.len()).rev() {
        let v = &trace[depth];
        let d = depth as isize;
        let k = x - y;
        let prev_k = if k == -d
            || (k != d && v[(k - 1 + offset) as usize] < v[(k + 1 + offset) as usize])
        {
            k + 1
        } else {
            k - 1
        };
        let prev_x = v[(prev_k + offset) as usize] as isize;
        let prev_y = prev_x - prev_k;

        while x > prev_x && y > prev_y {
            ops_rev.push(Op::Equal);
            x -= 1;
            y -= 1;
        }
        if d > 0 {
            // A down move consumed a target line, a right move a source line.
            ops_rev.push(if prev_k == k + 1 {
                Op::Insert
            } else {
                Op::Delete
            });
            x = prev_x;
            y = prev_y;
        }
    }
    ops_rev.reverse();
    ops_rev
}

/// Groups the elementary edit script into hunks.
fn coalesce(ops: &[Op], target: &[&str]) -> LineDiff {
    let mut hunks = Vec::new();
    let mut i = 0usize;
    let mut j = 0usize;
    let mut idx = 0usize;

    while idx < ops.len() {
        if ops[idx] == Op::Equal {
            let (i0, j0) = (i, j);
            while idx < ops.len() && ops[idx] == Op::Equal {
                i += 1;
                j += 1;
                idx += 1;
            }
            hunks.push(Hunk::new(HunkKind::Equal, i0..i, j0..j, Vec::new()));
        } else {
            let (i0, j0) = (i, j);
            while idx < ops.len() && ops[idx] != Op::Equal {
                match ops[idx] {
                    Op::Delete => i += 1,
                    Op::Insert => j += 1,
                    Op::Equal => unreachable!("loop guard excludes Equal"),
                }
                idx += 1;
            }
            let kind = if i == i0 {
                HunkKind::Insert
            } else if j == j0 {
                HunkKind::Delete
            } else {
                HunkKind::Change
            };
            let replacement = target[j0..j].iter().map(ToString::to_string).collect();
            hunks.push(Hunk::new(kind, i0..i, j0..j, replacement));
        }
    }
    LineDiff::new(hunks)
}
