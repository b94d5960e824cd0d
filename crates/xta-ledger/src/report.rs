//! Trace and report rendering.
//!
//! The layout is fixed:
//!
//! ```text
//! DESCRIBE:
//!   <program>
//!
//! WHEN COMPARING TO:        (comparison only)
//!   <baseline>
//!
//! WHEN TRANSFORMING:
//!   <input>
//!
//! IT SHOULD:
//!   <rule> (OK|FAILED)
//!
//! OUTPUT:
//!   <raw output>
//! ===================================================
//!
//! XSLT WARNINGS:            (only when requested and non-empty)
//! FAILURES:                 (only when something failed)
//! ```

use std::sync::Arc;

use xta_types::Diagnostics;

use crate::config::ReportConfig;
use crate::record::{AssertionFailure, AssertionRecord};
use crate::sink::LogSink;

/// Closes every report section.
pub const SEPARATOR: &str = "===================================================";

const TRACE_INDENT: usize = 2;

/// Write `text` to `sink` line by line, each prefixed with `width` spaces.
///
/// Lines split on `\r\n`, `\n` or `\r`; trailing empty lines are dropped,
/// but empty text still produces one (indented) empty line.
pub fn indent(text: &str, width: usize, sink: &dyn LogSink) {
    let pad = " ".repeat(width);
    for line in split_lines(text) {
        sink.accept(&format!("{pad}{line}"));
    }
}

fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return vec![""];
    }
    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find(['\r', '\n']) {
        lines.push(&rest[..pos]);
        let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + skip..];
    }
    lines.push(rest);
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

/// Per-call evaluation choices.
#[derive(Clone, Copy, Default)]
pub struct EvaluateOptions<'a> {
    /// List execution diagnostics under `XSLT WARNINGS:`.
    pub list_warnings: bool,
    /// Receives every failure message instead of raising the first one.
    pub failure_sink: Option<&'a dyn LogSink>,
}

impl<'a> EvaluateOptions<'a> {
    pub fn listing_warnings() -> Self {
        Self {
            list_warnings: true,
            failure_sink: None,
        }
    }

    pub fn with_failure_sink(mut self, sink: &'a dyn LogSink) -> Self {
        self.failure_sink = Some(sink);
        self
    }
}

/// Renders the trace of one assertion chain.
#[derive(Clone)]
pub struct Reporter {
    log: Arc<dyn LogSink>,
    output: Option<Arc<dyn LogSink>>,
    config: ReportConfig,
}

impl Reporter {
    pub fn new(log: Arc<dyn LogSink>) -> Self {
        Self {
            log,
            output: None,
            config: ReportConfig::default(),
        }
    }

    /// Send the raw output to its own sink, unindented.
    pub fn with_output_sink(mut self, output: Arc<dyn LogSink>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn line(&self, text: &str) {
        self.log.accept(text);
    }

    /// The `DESCRIBE:` through `IT SHOULD:` header.
    pub fn header(&self, program: &str, baseline: Option<&str>, input: &str) {
        self.line("DESCRIBE:");
        indent(program, TRACE_INDENT, &*self.log);

        if let Some(baseline) = baseline {
            self.line("");
            self.line("WHEN COMPARING TO:");
            indent(baseline, TRACE_INDENT, &*self.log);
        }

        self.line("");
        self.line("WHEN TRANSFORMING:");
        indent(input, TRACE_INDENT, &*self.log);

        self.line("");
        self.line("IT SHOULD:");
    }

    /// One `<rule> (OK|FAILED)` line.
    pub fn outcome(&self, record: &AssertionRecord) {
        indent(&record.trace_line(), TRACE_INDENT, &*self.log);
    }

    /// Render the closing sections and settle the failures.
    ///
    /// Without a failure sink the first failure is returned as the error;
    /// with one, every failure is delivered to it in order and the call
    /// succeeds.
    pub fn evaluate(
        &self,
        output: &str,
        diagnostics: &Diagnostics,
        failures: &[AssertionFailure],
        options: &EvaluateOptions<'_>,
    ) -> Result<(), AssertionFailure> {
        if self.config.show_output {
            match &self.output {
                Some(out) => indent(output, 0, &**out),
                None => {
                    self.line("");
                    self.line("OUTPUT:");
                    indent(output, TRACE_INDENT, &*self.log);
                }
            }
        }
        self.close_section();

        let list_warnings = options.list_warnings || self.config.list_warnings;
        if list_warnings && !diagnostics.is_empty() {
            self.line("XSLT WARNINGS:");
            for diagnostic in diagnostics {
                indent(&diagnostic.message, TRACE_INDENT, &*self.log);
            }
            self.close_section();
        }

        let Some(first) = failures.first() else {
            return Ok(());
        };

        self.line("FAILURES:");
        for failure in failures {
            indent(&failure.message, TRACE_INDENT, &*self.log);
        }
        self.close_section();

        match options.failure_sink {
            Some(sink) => {
                for failure in failures {
                    sink.accept(&failure.message);
                }
                Ok(())
            }
            None => Err(first.clone()),
        }
    }

    fn close_section(&self) {
        self.line(SEPARATOR);
        self.line("");
    }
}
