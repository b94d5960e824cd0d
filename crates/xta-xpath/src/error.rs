//! Error types for path evaluation.

/// The buffer is not a well-formed document.
///
/// Cloneable because a failed parse is memoized and handed out again to
/// every later query against the same buffer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
}

/// The query is malformed or references an unbound prefix.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid xpath '{query}': {message}")]
pub struct QueryError {
    pub query: String,
    pub message: String,
}

/// Errors that can occur while evaluating a path query.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The document could not be parsed; callers record this as a failure.
    #[error("unparsable document: {0}")]
    Parse(#[from] ParseError),

    /// The query itself is broken; callers propagate this.
    #[error(transparent)]
    Query(#[from] QueryError),
}
