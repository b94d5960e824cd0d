//! Foundation types for Transform Assert (XTA).
//!
//! This crate provides the value types shared by every other XTA crate:
//! where programs and documents come from, how parameters and namespace
//! prefixes are bound, and what a single transform execution produces.
//!
//! # Key Types
//!
//! - [`Source`] -- A program or document, given either as a file path or inline text
//! - [`ExecutionParameters`] -- Ordered (name, value) pairs bound before execution
//! - [`NamespaceBindings`] -- Prefix to URI map used by path queries
//! - [`TransformOutput`] -- Output bytes plus the execution's non-fatal diagnostics
//! - [`ContractViolation`] -- Caller mistakes that break an assertion chain early

pub mod diagnostic;
pub mod error;
pub mod namespace;
pub mod output;
pub mod params;
pub mod source;

pub use diagnostic::{Diagnostic, Diagnostics, Severity};
pub use error::ContractViolation;
pub use namespace::NamespaceBindings;
pub use output::TransformOutput;
pub use params::ExecutionParameters;
pub use source::Source;
