//! Fluent assertions over document transformations.
//!
//! Describe a program, transform an input with it, chain checks, and settle
//! everything with one terminal `evaluate`:
//!
//! ```rust,ignore
//! use xta_assert::{describe, Source, TransformResults};
//!
//! describe(engine, Source::path("to-dc.xslt"), sink)?
//!     .when_transforming(Source::inline("<root><foo>bar</foo></root>"), &["lang", "nl"])?
//!     .using_namespace("dc", "http://purl.org/dc/elements/1.1/")
//!     .path_contains("//dc:title/text()", "bar", None)?
//!     .and_path_excludes("//dc:title/@xml:lang", "en", Some("title is not English"))?
//!     .evaluate()?;
//! ```
//!
//! Checks never fail on the spot. Each one is traced as it runs and kept in
//! a [`xta_ledger::Ledger`]; `evaluate` writes the report and raises the
//! first failure (or hands all of them to a failure sink). Only contract
//! violations, broken queries, and compile or execution failures break the
//! chain early, as [`AssertError`].
//!
//! Two programs can also be compared against each other with
//! [`TransformDescription::when_comparing_to`].

pub mod compare;
pub mod describe;
pub mod error;
mod message;
pub mod result;
pub mod results;
pub mod schema;

pub use compare::{ComparisonAsserter, ComparisonRunner};
pub use describe::{describe, describe_to_stdout, TransformAssert, TransformDescription};
pub use error::{AssertError, AssertResult};
pub use result::ResultAsserter;
pub use results::TransformResults;
pub use schema::{SchemaValidator, SchemaViolation};

// Re-exports for convenience.
pub use xta_ledger::{
    AssertionFailure, EvaluateOptions, LogSink, MemorySink, ReportConfig, StdoutSink, TracingSink,
};
pub use xta_transform::{FnEngine, TransformEngine};
pub use xta_types::{ContractViolation, Source};
