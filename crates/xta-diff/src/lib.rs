//! Comparison engine for Transform Assert.
//!
//! Two views of "are these outputs the same":
//!
//! - [`StructuralDiff`] / [`Difference`] -- Tree equivalence of two parsed
//!   documents, ignoring whitespace and sibling order
//! - [`line_diff`] -- Line-level text diff used to explain equality failures

pub mod structural;
pub mod text_diff;

pub use structural::{diff_documents, Difference, StructuralDiff};
pub use text_diff::line_diff;
