//! Errors that break an assertion chain early.
//!
//! Everything here is raised at the call site. Check outcomes never are;
//! they go to the ledger and surface at evaluation.

use xta_transform::{CompileFailure, ExecutionFailure, TransformError};
use xta_types::ContractViolation;
use xta_xpath::QueryError;

#[derive(Debug, thiserror::Error)]
pub enum AssertError {
    /// The caller broke the API contract (bad parameters, missing file).
    #[error(transparent)]
    Contract(#[from] ContractViolation),

    /// A path query is malformed or uses an unbound prefix.
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Compile(#[from] CompileFailure),

    #[error(transparent)]
    Execution(#[from] ExecutionFailure),
}

impl From<TransformError> for AssertError {
    fn from(err: TransformError) -> Self {
        match err {
            TransformError::Compile(e) => Self::Compile(e),
            TransformError::Execution(e) => Self::Execution(e),
            TransformError::Contract(e) => Self::Contract(e),
        }
    }
}

/// Convenience alias for assertion-chain results.
pub type AssertResult<T> = Result<T, AssertError>;
