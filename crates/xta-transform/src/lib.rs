//! Transform execution boundary for Transform Assert.
//!
//! XTA does not implement a template language. Engines plug in through two
//! traits:
//! - [`TransformEngine`] compiles program text into a [`CompiledProgram`]
//! - [`CompiledProgram`] executes against one input with bound parameters,
//!   reporting non-fatal problems into [`xta_types::Diagnostics`]
//!
//! On top of that boundary:
//! - [`TransformProgram`] compiles once and shares the result read-only
//! - [`TransformRunner`] runs a program against a [`xta_types::Source`]
//! - [`RelativePathResolver`] resolves imports relative to the program file
//! - [`FnEngine`] is a closure-backed engine for tests and embedding

pub mod engine;
pub mod error;
pub mod memory;
pub mod program;
pub mod resolver;
pub mod runner;

pub use engine::{CompileContext, CompiledProgram, TransformEngine};
pub use error::{CompileFailure, ExecutionFailure, TransformError, TransformResult};
pub use memory::{FnEngine, TransformFn};
pub use program::TransformProgram;
pub use resolver::RelativePathResolver;
pub use runner::TransformRunner;
