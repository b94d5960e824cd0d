//! Error types for compiling and running programs.

use xta_types::ContractViolation;

/// The program could not be compiled.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("program failed to compile: {message}")]
pub struct CompileFailure {
    pub message: String,
}

impl CompileFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Execution hit a fatal condition and produced no output.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("transformation aborted: {message}")]
pub struct ExecutionFailure {
    pub message: String,
}

impl ExecutionFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors that can occur while compiling or running a program.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error(transparent)]
    Compile(#[from] CompileFailure),

    #[error(transparent)]
    Execution(#[from] ExecutionFailure),

    /// A program or input source could not be opened.
    #[error(transparent)]
    Contract(#[from] ContractViolation),
}

/// Convenience alias for transform results.
pub type TransformResult<T> = Result<T, TransformError>;
