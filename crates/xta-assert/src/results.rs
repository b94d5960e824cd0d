use xta_ledger::{AssertionFailure, EvaluateOptions};

/// What every asserter offers besides its own checks.
pub trait TransformResults: Sized {
    /// Bind `prefix` to `uri` for the path queries that follow. The last
    /// binding for a prefix wins.
    fn using_namespace(self, prefix: &str, uri: &str) -> Self;

    fn and_using_namespace(self, prefix: &str, uri: &str) -> Self {
        self.using_namespace(prefix, uri)
    }

    /// Write the closing report and settle the chain.
    fn evaluate_with(self, options: &EvaluateOptions<'_>) -> Result<(), AssertionFailure>;

    /// Raise the first recorded failure, if any.
    fn evaluate(self) -> Result<(), AssertionFailure> {
        self.evaluate_with(&EvaluateOptions::default())
    }

    /// As [`Self::evaluate`], listing execution warnings in the report.
    fn evaluate_listing_warnings(self) -> Result<(), AssertionFailure> {
        self.evaluate_with(&EvaluateOptions::listing_warnings())
    }
}
