//! Path query engine for Transform Assert.
//!
//! A [`PathEvaluator`] owns one output buffer, parses it at most once, and
//! answers namespace-aware XPath queries against it with ordered, trimmed
//! text values.

pub mod error;
pub mod evaluator;
pub mod result;

pub use error::{ParseError, PathError, QueryError};
pub use evaluator::PathEvaluator;
pub use result::PathResult;
