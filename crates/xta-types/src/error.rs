use std::path::PathBuf;

use thiserror::Error;

/// A broken test, as opposed to a broken transform.
///
/// Contract violations propagate immediately and never enter a ledger.
#[derive(Debug, Error)]
pub enum ContractViolation {
    #[error("execution parameters must come in name/value pairs, got {len} values")]
    OddParameterCount { len: usize },

    #[error("file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("cannot read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no schema validator configured")]
    NoSchemaValidator,
}
