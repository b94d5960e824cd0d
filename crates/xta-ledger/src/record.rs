use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of one check as shown in the trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Ok,
    Failed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => f.write_str("OK"),
            Self::Failed => f.write_str("FAILED"),
        }
    }
}

/// One evaluated check: its rule label and whether it held.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionRecord {
    pub rule: String,
    pub status: Status,
}

impl AssertionRecord {
    pub fn passed(&self) -> bool {
        self.status == Status::Ok
    }

    /// The trace line, e.g. `EQUAL: bar (OK)`.
    pub fn trace_line(&self) -> String {
        format!("{} ({})", self.rule, self.status)
    }
}

/// A deferred failure: the rule it belongs to and the full, possibly
/// multi-line, expected/actual message.
///
/// This is what [`crate::Ledger::evaluate`] raises.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AssertionFailure {
    pub rule: String,
    pub message: String,
}

/// What a single check concluded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    /// Failed, with one message per distinct problem found.
    Fail(Vec<String>),
}

impl Verdict {
    pub fn fail(message: impl Into<String>) -> Self {
        Self::Fail(vec![message.into()])
    }

    /// `Pass` when `holds`, otherwise a failure built lazily.
    pub fn check(holds: bool, message: impl FnOnce() -> String) -> Self {
        if holds {
            Self::Pass
        } else {
            Self::fail(message())
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}
