//! Failure message rendering shared by both asserters.

use xta_diff::line_diff;
use xta_xpath::PathResult;

/// The caller's rule label, or the operation default.
pub(crate) fn rule_or(rule: Option<&str>, default: impl FnOnce() -> String) -> String {
    match rule {
        Some(rule) => rule.to_string(),
        None => default(),
    }
}

pub(crate) fn not_equal(report: &str, expected: &str, actual: &str, context: usize) -> String {
    let mut message = format!(
        "{report}\n  Expected output to equal: '{expected}'\n  But got: '{actual}'\n"
    );
    if !expected.is_empty() && !actual.is_empty() {
        let diff = line_diff(expected, actual, context);
        if !diff.is_empty() {
            message.push_str("  Diff:\n");
            for line in diff {
                message.push_str("    ");
                message.push_str(&line);
                message.push('\n');
            }
        }
    }
    message
}

pub(crate) fn path_mismatch(
    report: &str,
    query: &str,
    negate: bool,
    expected: &str,
    actual: &PathResult,
) -> String {
    let not = if negate { " NOT" } else { "" };
    format!(
        "{report}\n  Expected xpath {query}{not} to match: '{expected}'\n  But got: '{}'\n",
        actual.describe_actual()
    )
}

pub(crate) fn count_mismatch(report: &str, query: &str, expected: usize, actual: usize) -> String {
    let expectation = format!("Expected xpath {query} to result in: {expected} items");
    format!("{report}\n  {expectation}\n  But got: {actual} items\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_overrides_default() {
        assert_eq!(rule_or(Some("mine"), || "default".into()), "mine");
        assert_eq!(rule_or(None, || "default".into()), "default");
    }

    #[test]
    fn single_line_inequality_has_diff_block() {
        let message = not_equal("EQUAL: baz", "baz", "bar", 3);
        let head = "EQUAL: baz\n  Expected output to equal: 'baz'\n  But got: 'bar'\n";
        assert!(message.starts_with(head));
        assert!(message.contains("  Diff:\n"));
        assert!(message.contains("    -baz\n"));
        assert!(message.contains("    +bar\n"));
    }

    #[test]
    fn empty_side_has_no_diff_block() {
        let message = not_equal("EQUAL: ", "", "bar", 3);
        assert!(!message.contains("Diff:"));
    }

    #[test]
    fn path_mismatch_wording() {
        let actual = PathResult::from(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(
            path_mismatch("r", "/x", false, "c", &actual),
            "r\n  Expected xpath /x to match: 'c'\n  But got: 'any of: [a, b]'\n"
        );
        assert!(path_mismatch("r", "/x", true, "a", &actual)
            .contains("Expected xpath /x NOT to match: 'a'"));
    }
}
