use tracing::debug;
use xta_types::Diagnostics;

use crate::record::{AssertionFailure, AssertionRecord, Status, Verdict};
use crate::report::{EvaluateOptions, Reporter};

/// Append-only record of one assertion chain.
///
/// Every check appends exactly one [`AssertionRecord`] and logs its trace
/// line at once; a failing check also appends one [`AssertionFailure`] per
/// problem it found. Failures are only looked at by [`Ledger::evaluate`],
/// which consumes the ledger.
pub struct Ledger {
    records: Vec<AssertionRecord>,
    failures: Vec<AssertionFailure>,
    reporter: Reporter,
}

impl Ledger {
    pub fn new(reporter: Reporter) -> Self {
        Self {
            records: Vec::new(),
            failures: Vec::new(),
            reporter,
        }
    }

    /// Record the outcome of one check under `rule`.
    pub fn record(&mut self, rule: impl Into<String>, verdict: Verdict) {
        let rule = rule.into();
        let status = match verdict {
            Verdict::Pass => Status::Ok,
            Verdict::Fail(messages) => {
                self.failures
                    .extend(messages.into_iter().map(|message| AssertionFailure {
                        rule: rule.clone(),
                        message,
                    }));
                Status::Failed
            }
        };

        let record = AssertionRecord { rule, status };
        debug!(rule = %record.rule, status = %record.status, "assertion recorded");
        self.reporter.outcome(&record);
        self.records.push(record);
    }

    /// Every record, passes included, in the order they were made.
    pub fn records(&self) -> &[AssertionRecord] {
        &self.records
    }

    /// Failures in the order they were recorded.
    pub fn failures(&self) -> &[AssertionFailure] {
        &self.failures
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }

    /// Render the report and settle the chain. See [`Reporter::evaluate`].
    pub fn evaluate(
        self,
        output: &str,
        diagnostics: &Diagnostics,
        options: &EvaluateOptions<'_>,
    ) -> Result<(), AssertionFailure> {
        tracing::info!(
            records = self.records.len(),
            failures = self.failures.len(),
            "evaluating assertion chain"
        );
        self.reporter
            .evaluate(output, diagnostics, &self.failures, options)
    }
}
