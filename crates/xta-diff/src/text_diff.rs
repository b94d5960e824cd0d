//! Line-level diff of two texts.
//!
//! Uses the `similar` crate (Myers diff algorithm) to produce hunks with
//! context lines, rendered in unified style.

use similar::{ChangeTag, TextDiff};

/// Unified-style diff lines from `expected` to `actual`.
///
/// Each hunk starts with an `@@ -a,b +c,d @@` header followed by lines
/// prefixed with `-`, `+` or a space. Identical texts yield no lines.
pub fn line_diff(expected: &str, actual: &str, context: usize) -> Vec<String> {
    if expected == actual {
        return Vec::new();
    }

    let diff = TextDiff::from_lines(expected, actual);
    let mut out = Vec::new();

    for hunk in diff.grouped_ops(context) {
        let (Some(first), Some(last)) = (hunk.first(), hunk.last()) else {
            continue;
        };
        let old_start = first.old_range().start;
        let new_start = first.new_range().start;
        let old_count = last.old_range().end - old_start;
        let new_count = last.new_range().end - new_start;
        out.push(format!(
            "@@ -{},{} +{},{} @@",
            old_start + 1,
            old_count,
            new_start + 1,
            new_count
        ));

        for op in &hunk {
            for change in diff.iter_changes(op) {
                let text = change.value().trim_end_matches(['\r', '\n']);
                let marker = match change.tag() {
                    ChangeTag::Equal => ' ',
                    ChangeTag::Delete => '-',
                    ChangeTag::Insert => '+',
                };
                out.push(format!("{marker}{text}"));
            }
        }
    }

    out
}
