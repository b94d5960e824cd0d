//! Checks comparing a program under test against a baseline program.

use tracing::debug;
use xta_diff::diff_documents;
use xta_ledger::{AssertionFailure, EvaluateOptions, Ledger, Verdict};
use xta_transform::{TransformProgram, TransformRunner};
use xta_types::{ExecutionParameters, NamespaceBindings, Source, TransformOutput};
use xta_xpath::{PathError, PathEvaluator, PathResult};

use crate::describe::Settings;
use crate::error::AssertResult;
use crate::message::{count_mismatch, not_equal, path_mismatch, rule_or};
use crate::results::TransformResults;

const UNDER_TEST: &str = "program under test";
const BASELINE: &str = "baseline program";

/// Runs the program under test and its baseline against the same inputs.
pub struct ComparisonRunner {
    under_test: TransformProgram,
    baseline: TransformProgram,
    settings: Settings,
}

impl ComparisonRunner {
    pub(crate) fn new(
        under_test: TransformProgram,
        baseline: TransformProgram,
        settings: Settings,
    ) -> Self {
        Self {
            under_test,
            baseline,
            settings,
        }
    }

    /// Run both programs against `input` with the same `params`.
    ///
    /// Each program reads from its own freshly opened reader over `input`.
    pub fn when_transforming<S: AsRef<str>>(
        &self,
        input: Source,
        params: &[S],
    ) -> AssertResult<ComparisonAsserter> {
        let params = ExecutionParameters::from_flat(params)?;
        let under_test = TransformRunner::new(self.under_test.clone()).run(&input, &params)?;
        let baseline = TransformRunner::new(self.baseline.clone()).run(&input, &params)?;
        debug!(input = %input.describe(), "transformed input with both programs");

        let reporter = self.settings.reporter();
        reporter.header(
            &self.under_test.describe(),
            Some(&self.baseline.describe()),
            &input.describe(),
        );
        Ok(ComparisonAsserter {
            under_test_paths: PathEvaluator::new(under_test.bytes().to_vec()),
            baseline_paths: PathEvaluator::new(baseline.bytes().to_vec()),
            under_test,
            baseline,
            namespaces: NamespaceBindings::new(),
            ledger: Ledger::new(reporter),
            diff_context: self.settings.config.diff_context,
        })
    }
}

/// Fluent checks of one output against its baseline.
pub struct ComparisonAsserter {
    under_test: TransformOutput,
    baseline: TransformOutput,
    under_test_paths: PathEvaluator,
    baseline_paths: PathEvaluator,
    namespaces: NamespaceBindings,
    ledger: Ledger,
    diff_context: usize,
}

impl ComparisonAsserter {
    /// Output of the program under test.
    pub fn under_test_output(&self) -> &TransformOutput {
        &self.under_test
    }

    /// Output of the baseline program.
    pub fn baseline_output(&self) -> &TransformOutput {
        &self.baseline
    }

    /// Every check recorded so far.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Both outputs must be identical text.
    pub fn equal_outputs(mut self, rule: Option<&str>) -> Self {
        let expected = self.baseline.as_text();
        let actual = self.under_test.as_text();
        let report = rule_or(rule, || format!("EQUAL: {expected}"));
        let verdict = Verdict::check(actual == expected, || {
            not_equal(&report, &expected, &actual, self.diff_context)
        });
        self.ledger.record(report, verdict);
        self
    }

    /// Both outputs must be the same tree, ignoring whitespace-only text,
    /// comments, processing instructions and sibling order.
    ///
    /// One record is traced; each difference found is its own failure.
    pub fn structurally_equivalent(mut self, rule: Option<&str>) -> Self {
        let report = rule_or(rule, || "STRUCTURALLY EQUIVALENT".to_string());
        let verdict = match (self.baseline_paths.document(), self.under_test_paths.document()) {
            (Ok(baseline), Ok(under_test)) => {
                let diff = diff_documents(baseline.as_document(), under_test.as_document());
                if diff.is_empty() {
                    Verdict::Pass
                } else {
                    Verdict::Fail(
                        diff.differences
                            .iter()
                            .map(|d| format!("{report}\n  {d}\n"))
                            .collect(),
                    )
                }
            }
            (baseline, under_test) => {
                let mut messages = Vec::new();
                if let Err(e) = under_test {
                    messages.push(unparsable(UNDER_TEST, &e));
                }
                if let Err(e) = baseline {
                    messages.push(unparsable(BASELINE, &e));
                }
                Verdict::Fail(messages)
            }
        };
        self.ledger.record(report, verdict);
        self
    }

    /// `query` must yield the same values from both outputs.
    ///
    /// Each baseline value gets one record for its presence in the output
    /// under test. Differing value counts add one more, failed, record. If
    /// either output cannot be parsed, one failed record stands in for all of
    /// these.
    pub fn matching_path_results_for(
        mut self,
        query: &str,
        rule: Option<&str>,
    ) -> AssertResult<Self> {
        let mut unparsable_sides = Vec::new();
        let actual = self.query(Side::UnderTest, query, &mut unparsable_sides)?;
        let expected = self.query(Side::Baseline, query, &mut unparsable_sides)?;

        let (Some(actual), Some(expected)) = (actual, expected) else {
            let report = rule_or(rule, || format!("MATCH XPATH {query}"));
            self.ledger.record(report, Verdict::Fail(unparsable_sides));
            return Ok(self);
        };

        if actual.len() != expected.len() {
            let count_report = format!("COUNT XPATH {query}={}", expected.len());
            let message = count_mismatch(&count_report, query, expected.len(), actual.len());
            self.ledger.record(count_report, Verdict::fail(message));
        }

        for value in expected.values() {
            let report = rule_or(rule, || format!("MATCH XPATH {query}='{value}'"));
            let verdict = Verdict::check(actual.contains(value), || {
                path_mismatch(&report, query, false, value, &actual)
            });
            self.ledger.record(report, verdict);
        }
        Ok(self)
    }

    fn query(
        &self,
        side: Side,
        query: &str,
        unparsable_sides: &mut Vec<String>,
    ) -> AssertResult<Option<PathResult>> {
        let (paths, name) = match side {
            Side::UnderTest => (&self.under_test_paths, UNDER_TEST),
            Side::Baseline => (&self.baseline_paths, BASELINE),
        };
        match paths.evaluate(query, &self.namespaces) {
            Ok(result) => Ok(Some(result)),
            Err(PathError::Parse(e)) => {
                unparsable_sides.push(unparsable(name, &e));
                Ok(None)
            }
            Err(PathError::Query(e)) => Err(e.into()),
        }
    }

    /// Alias of [`Self::equal_outputs`].
    pub fn and_equal_outputs(self, rule: Option<&str>) -> Self {
        self.equal_outputs(rule)
    }

    /// Alias of [`Self::structurally_equivalent`].
    pub fn and_structurally_equivalent(self, rule: Option<&str>) -> Self {
        self.structurally_equivalent(rule)
    }

    /// Alias of [`Self::matching_path_results_for`].
    pub fn and_matching_path_results_for(
        self,
        query: &str,
        rule: Option<&str>,
    ) -> AssertResult<Self> {
        self.matching_path_results_for(query, rule)
    }
}

impl TransformResults for ComparisonAsserter {
    /// Binds the prefix for queries against both outputs.
    fn using_namespace(mut self, prefix: &str, uri: &str) -> Self {
        self.namespaces.bind(prefix, uri);
        self
    }

    fn evaluate_with(self, options: &EvaluateOptions<'_>) -> Result<(), AssertionFailure> {
        let mut diagnostics = self.under_test.diagnostics().clone();
        diagnostics.extend(self.baseline.diagnostics());
        let output = self.under_test.as_text().into_owned();
        self.ledger.evaluate(&output, &diagnostics, options)
    }
}

#[derive(Clone, Copy)]
enum Side {
    UnderTest,
    Baseline,
}

fn unparsable(side: &str, detail: &impl std::fmt::Display) -> String {
    format!("Got unparsable XML output from {side}: {detail}")
}
