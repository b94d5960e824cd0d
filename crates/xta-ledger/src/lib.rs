//! Deferred assertion ledger for Transform Assert.
//!
//! Every check in a fluent chain lands here instead of failing on the spot:
//! - [`Ledger`] keeps every outcome in order, plus the ordered failures
//! - [`Reporter`] writes the describe/when/it-should trace as checks happen
//!   and renders the full report at evaluation
//! - [`LogSink`] is where trace lines go ([`StdoutSink`], [`MemorySink`],
//!   [`TracingSink`], or any `Fn(&str)`)
//! - [`ReportConfig`] tunes the report and can be loaded from TOML

pub mod config;
pub mod error;
pub mod ledger;
pub mod record;
pub mod report;
pub mod sink;

pub use config::ReportConfig;
pub use error::ConfigError;
pub use ledger::Ledger;
pub use record::{AssertionFailure, AssertionRecord, Status, Verdict};
pub use report::{indent, EvaluateOptions, Reporter, SEPARATOR};
pub use sink::{LogSink, MemorySink, StdoutSink, TracingSink};
