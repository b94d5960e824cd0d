//! Memoized parse plus XPath evaluation over one output buffer.

use std::cell::OnceCell;

use sxd_document::{parser, Package};
use sxd_xpath::{Context, Factory, Value};
use tracing::debug;
use xta_types::NamespaceBindings;

use crate::error::{ParseError, PathError, QueryError};
use crate::result::PathResult;

/// Answers path queries against one byte buffer.
///
/// The buffer is parsed on the first query (or [`Self::document`] call) and
/// the outcome, success or failure, is kept for every later call. The cache
/// is a `OnceCell`, so an evaluator cannot be shared between threads.
pub struct PathEvaluator {
    bytes: Vec<u8>,
    document: OnceCell<Result<Package, ParseError>>,
    factory: Factory,
}

impl PathEvaluator {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            document: OnceCell::new(),
            factory: Factory::new(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns `true` once a parse has been attempted.
    pub fn is_parsed(&self) -> bool {
        self.document.get().is_some()
    }

    /// The parsed document, parsing on first use.
    pub fn document(&self) -> Result<&Package, ParseError> {
        self.document
            .get_or_init(|| parse(&self.bytes))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Evaluate `query` with the given prefix bindings.
    ///
    /// Node-set results yield one trimmed string value per node in document
    /// order; scalar results yield a single value.
    pub fn evaluate(
        &self,
        query: &str,
        bindings: &NamespaceBindings,
    ) -> Result<PathResult, PathError> {
        if let Some(prefix) = first_unbound_prefix(query, bindings) {
            return Err(QueryError {
                query: query.to_string(),
                message: format!("namespace prefix '{prefix}' is not bound"),
            }
            .into());
        }

        let package = self.document()?;
        let document = package.as_document();

        let xpath = self
            .factory
            .build(query)
            .map_err(|e| QueryError {
                query: query.to_string(),
                message: format!("{e:?}"),
            })?
            .ok_or_else(|| QueryError {
                query: query.to_string(),
                message: "empty query".into(),
            })?;

        let mut context = Context::new();
        for (prefix, uri) in bindings.iter() {
            context.set_namespace(prefix, uri);
        }

        let value = xpath
            .evaluate(&context, document.root())
            .map_err(|e| QueryError {
                query: query.to_string(),
                message: format!("{e:?}"),
            })?;

        let values = match value {
            Value::Nodeset(nodes) => nodes
                .document_order()
                .iter()
                .map(|node| node.string_value().trim().to_string())
                .collect(),
            Value::String(s) => vec![s.trim().to_string()],
            Value::Number(n) => vec![format_number(n)],
            Value::Boolean(b) => vec![b.to_string()],
        };

        Ok(PathResult::new(values))
    }
}

fn parse(bytes: &[u8]) -> Result<Package, ParseError> {
    let text = std::str::from_utf8(bytes).map_err(|e| ParseError {
        message: format!("output is not valid UTF-8: {e}"),
    })?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let package = parser::parse(text).map_err(|e| ParseError {
        message: format!("{e:?}"),
    })?;
    debug!(len = bytes.len(), "parsed output document");
    Ok(package)
}

/// The first `prefix:` in a qualified name of `query` with no binding.
///
/// String literals and `axis::` separators are skipped; `xml` is always bound.
fn first_unbound_prefix(query: &str, bindings: &NamespaceBindings) -> Option<String> {
    let chars: Vec<char> = query.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '\'' || c == '"' {
            i += 1;
            while i < chars.len() && chars[i] != c {
                i += 1;
            }
            i += 1;
            continue;
        }
        if !is_name_char(c) {
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && is_name_char(chars[i]) {
            i += 1;
        }
        let starts_name = chars[start].is_alphabetic() || chars[start] == '_';
        // A name after a single ':' is a local part; after '::' it follows an axis.
        let local_part = start >= 1
            && chars[start - 1] == ':'
            && (start < 2 || chars[start - 2] != ':');
        let prefixed = chars.get(i) == Some(&':')
            && chars.get(i + 1).is_some_and(|&n| n != ':')
            && !local_part;
        if starts_name && prefixed {
            let prefix: String = chars[start..i].iter().collect();
            if prefix != "xml" && bindings.uri(&prefix).is_none() {
                return Some(prefix);
            }
            // Skip the local part so it is not mistaken for a prefix.
            i += 1;
            while i < chars.len() && is_name_char(chars[i]) {
                i += 1;
            }
        }
    }
    None
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.')
}

/// XPath number to string: integral values print without a fraction.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".into()
    } else if n.is_infinite() {
        if n > 0.0 {
            "Infinity".into()
        } else {
            "-Infinity".into()
        }
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_ns() -> NamespaceBindings {
        NamespaceBindings::new()
    }

    #[test]
    fn text_nodes_in_document_order() {
        let eval = PathEvaluator::new("<out><foo>foo</foo><foo> second </foo></out>");
        let result = eval.evaluate("//foo/text()", &no_ns()).unwrap();
        assert_eq!(result.values(), ["foo", "second"]);
    }

    #[test]
    fn element_matches_yield_trimmed_string_value() {
        let eval = PathEvaluator::new("<out><a>\n  x<b>y</b>  \n</a></out>");
        let result = eval.evaluate("/out/a", &no_ns()).unwrap();
        assert_eq!(result.values(), ["xy"]);
    }

    #[test]
    fn attributes_are_addressable() {
        let eval = PathEvaluator::new(r#"<out><bar attrib="bar">bar</bar></out>"#);
        let result = eval.evaluate("//bar/@attrib", &no_ns()).unwrap();
        assert_eq!(result.values(), ["bar"]);
    }

    #[test]
    fn no_match_is_empty() {
        let eval = PathEvaluator::new("<out/>");
        let result = eval.evaluate("//barza/text()", &no_ns()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn namespaced_query_uses_bindings() {
        let eval = PathEvaluator::new(
            r#"<a:foo xmlns:a="ns1:urn"><b:bar xmlns:b="ns2:urn">bar</b:bar></a:foo>"#,
        );
        let mut ns = NamespaceBindings::new();
        ns.bind("ns1", "ns1:urn");
        ns.bind("ns2", "ns2:urn");
        let result = eval.evaluate("/ns1:foo/ns2:bar/text()", &ns).unwrap();
        assert_eq!(result.values(), ["bar"]);
    }

    #[test]
    fn unbound_prefix_is_a_query_error() {
        let eval = PathEvaluator::new(r#"<a:foo xmlns:a="ns1:urn"/>"#);
        let err = eval.evaluate("/ns1:foo", &no_ns()).unwrap_err();
        assert!(matches!(err, PathError::Query(_)));
    }

    #[test]
    fn prefix_scan_ignores_axes_and_literals() {
        let ns = no_ns();
        assert_eq!(first_unbound_prefix("child::foo/attribute::bar", &ns), None);
        assert_eq!(first_unbound_prefix("//foo[text()='ns1:urn']", &ns), None);
        assert_eq!(first_unbound_prefix("/@xml:lang", &ns), None);
        assert_eq!(first_unbound_prefix("//dc:contributor/@dcx:role", &ns), Some("dc".into()));

        let mut bound = NamespaceBindings::new();
        bound.bind("dc", "http://purl.org/dc/elements/1.1/");
        assert_eq!(
            first_unbound_prefix("//dc:contributor/@dcx:role", &bound),
            Some("dcx".into())
        );
    }

    #[test]
    fn unbound_prefix_after_axis_is_a_query_error() {
        let eval = PathEvaluator::new(r#"<a:foo xmlns:a="ns1:urn" a:x="1"/>"#);
        for query in [
            "/child::ns1:foo",
            "//attribute::ns1:x",
            "//descendant-or-self::ns1:foo",
            "self::ns1:x",
        ] {
            let err = eval.evaluate(query, &no_ns()).unwrap_err();
            match err {
                PathError::Query(q) => assert!(q.message.contains("'ns1'"), "{query}: {q}"),
                other => panic!("{query}: expected Query, got {other:?}"),
            }
        }
    }

    #[test]
    fn prefix_after_axis_resolves_when_bound() {
        let eval = PathEvaluator::new(r#"<a:foo xmlns:a="ns1:urn" a:x="1"/>"#);
        let mut ns = NamespaceBindings::new();
        ns.bind("ns1", "ns1:urn");
        let result = eval.evaluate("//attribute::ns1:x", &ns).unwrap();
        assert_eq!(result.values(), ["1"]);
        assert_eq!(first_unbound_prefix("/child::ns1:foo/ns1:bar", &ns), None);
    }

    #[test]
    fn empty_query_is_a_query_error() {
        let eval = PathEvaluator::new("<out/>");
        for query in ["", "   "] {
            let err = eval.evaluate(query, &no_ns()).unwrap_err();
            assert!(matches!(err, PathError::Query(_)), "{query:?}: {err:?}");
        }
    }

    #[test]
    fn malformed_query_is_a_query_error() {
        let eval = PathEvaluator::new("<out/>");
        let err = eval.evaluate("//foo[", &no_ns()).unwrap_err();
        match err {
            PathError::Query(q) => assert_eq!(q.query, "//foo["),
            other => panic!("expected Query, got {other:?}"),
        }
    }

    #[test]
    fn unparsable_buffer_is_a_parse_error() {
        let eval = PathEvaluator::new("bar");
        let err = eval.evaluate("//foo", &no_ns()).unwrap_err();
        assert!(matches!(err, PathError::Parse(_)));
    }

    #[test]
    fn parse_outcome_is_memoized() {
        let eval = PathEvaluator::new("<out><foo>1</foo></out>");
        assert!(!eval.is_parsed());
        eval.evaluate("//foo", &no_ns()).unwrap();
        assert!(eval.is_parsed());
        let first = eval.document().unwrap() as *const Package;
        let second = eval.document().unwrap() as *const Package;
        assert_eq!(first, second);
    }

    #[test]
    fn parse_failure_is_memoized() {
        let eval = PathEvaluator::new("<unclosed>");
        let first = eval.evaluate("//a", &no_ns()).unwrap_err();
        let second = eval.evaluate("//b", &no_ns()).unwrap_err();
        assert_eq!(first, second);
    }

    #[test]
    fn scalar_results_yield_single_value() {
        let eval = PathEvaluator::new("<out><a/><a/></out>");
        assert_eq!(eval.evaluate("count(//a)", &no_ns()).unwrap().values(), ["2"]);
        assert_eq!(eval.evaluate("count(//a) = 2", &no_ns()).unwrap().values(), ["true"]);
        assert_eq!(eval.evaluate("concat('a', 'b')", &no_ns()).unwrap().values(), ["ab"]);
    }

    #[test]
    fn number_formatting() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }
}
