//! Checks against the output of a single program.

use std::path::Path;
use std::sync::Arc;

use xta_ledger::{AssertionFailure, EvaluateOptions, Ledger, Reporter, Verdict};
use xta_types::{ContractViolation, NamespaceBindings, TransformOutput};
use xta_xpath::{PathError, PathEvaluator};

use crate::describe::Settings;
use crate::error::AssertResult;
use crate::message::{not_equal, path_mismatch, rule_or};
use crate::results::TransformResults;
use crate::schema::SchemaValidator;

/// Fluent checks over one transformation output.
///
/// Each check is recorded and traced immediately; nothing fails until
/// [`TransformResults::evaluate`]. Every optional `rule` replaces the
/// default label of its check.
pub struct ResultAsserter {
    output: TransformOutput,
    evaluator: PathEvaluator,
    namespaces: NamespaceBindings,
    ledger: Ledger,
    validator: Option<Arc<dyn SchemaValidator>>,
    diff_context: usize,
}

impl ResultAsserter {
    pub(crate) fn new(output: TransformOutput, reporter: Reporter, settings: &Settings) -> Self {
        Self {
            evaluator: PathEvaluator::new(output.bytes().to_vec()),
            output,
            namespaces: NamespaceBindings::new(),
            ledger: Ledger::new(reporter),
            validator: settings.validator.clone(),
            diff_context: settings.config.diff_context,
        }
    }

    /// The output under test.
    pub fn output(&self) -> &TransformOutput {
        &self.output
    }

    /// Every check recorded so far.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The whole output must equal `expected` exactly.
    pub fn equal_to(mut self, expected: &str, rule: Option<&str>) -> Self {
        let report = rule_or(rule, || format!("EQUAL: {expected}"));
        let actual = self.output.as_text();
        let verdict = Verdict::check(actual == expected, || {
            not_equal(&report, expected, &actual, self.diff_context)
        });
        self.ledger.record(report, verdict);
        self
    }

    /// `query` must yield `expected` among its values.
    pub fn path_contains(
        self,
        query: &str,
        expected: &str,
        rule: Option<&str>,
    ) -> AssertResult<Self> {
        self.match_path(query, expected, false, rule)
    }

    /// `query` must not yield `expected` among its values.
    pub fn path_excludes(
        self,
        query: &str,
        expected: &str,
        rule: Option<&str>,
    ) -> AssertResult<Self> {
        self.match_path(query, expected, true, rule)
    }

    fn match_path(
        mut self,
        query: &str,
        expected: &str,
        negate: bool,
        rule: Option<&str>,
    ) -> AssertResult<Self> {
        let report = rule_or(rule, || {
            let not = if negate { "NOT " } else { "" };
            format!("{not}MATCH XPATH {query}='{expected}'")
        });
        let verdict = match self.evaluator.evaluate(query, &self.namespaces) {
            Ok(result) => Verdict::check(result.contains(expected) != negate, || {
                path_mismatch(&report, query, negate, expected, &result)
            }),
            Err(PathError::Parse(e)) => Verdict::fail(format!("Got unparsable XML output: {e}")),
            Err(PathError::Query(e)) => return Err(e.into()),
        };
        self.ledger.record(report, verdict);
        Ok(self)
    }

    /// The output must validate against the schema in `schema`.
    ///
    /// A missing schema file, or no configured validator, breaks the chain.
    pub fn validate_against_schema(
        mut self,
        schema: impl AsRef<Path>,
        rule: Option<&str>,
    ) -> AssertResult<Self> {
        let schema = schema.as_ref();
        if !schema.is_file() {
            return Err(ContractViolation::MissingFile(schema.to_path_buf()).into());
        }
        let validator = self
            .validator
            .clone()
            .ok_or(ContractViolation::NoSchemaValidator)?;

        let schema = std::path::absolute(schema).unwrap_or_else(|_| schema.to_path_buf());
        let report = rule_or(rule, || format!("VALIDATE AGAINST XSD: {}", schema.display()));
        let verdict = match validator.validate(&schema, self.output.bytes()) {
            Ok(()) => Verdict::Pass,
            Err(violation) => Verdict::fail(format!(
                "{report}\n  Expected output to validate against XSD: {}\n  But got: {violation}\n",
                schema.display()
            )),
        };
        self.ledger.record(report, verdict);
        Ok(self)
    }

    /// Alias of [`Self::equal_to`].
    pub fn and_equal_to(self, expected: &str, rule: Option<&str>) -> Self {
        self.equal_to(expected, rule)
    }

    /// Alias of [`Self::path_contains`].
    pub fn and_path_contains(
        self,
        query: &str,
        expected: &str,
        rule: Option<&str>,
    ) -> AssertResult<Self> {
        self.path_contains(query, expected, rule)
    }

    /// Alias of [`Self::path_excludes`].
    pub fn and_path_excludes(
        self,
        query: &str,
        expected: &str,
        rule: Option<&str>,
    ) -> AssertResult<Self> {
        self.path_excludes(query, expected, rule)
    }

    /// Alias of [`Self::validate_against_schema`].
    pub fn and_validate_against_schema(
        self,
        schema: impl AsRef<Path>,
        rule: Option<&str>,
    ) -> AssertResult<Self> {
        self.validate_against_schema(schema, rule)
    }
}

impl TransformResults for ResultAsserter {
    fn using_namespace(mut self, prefix: &str, uri: &str) -> Self {
        self.namespaces.bind(prefix, uri);
        self
    }

    fn evaluate_with(self, options: &EvaluateOptions<'_>) -> Result<(), AssertionFailure> {
        let output = self.output.as_text().into_owned();
        self.ledger
            .evaluate(&output, self.output.diagnostics(), options)
    }
}
