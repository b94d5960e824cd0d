use std::io::Read;

use xta_types::{Diagnostics, ExecutionParameters};

use crate::error::{CompileFailure, ExecutionFailure};
use crate::resolver::RelativePathResolver;

/// What an engine knows about the program it is compiling.
#[derive(Clone, Debug, Default)]
pub struct CompileContext {
    /// Report-friendly name of the program (its path or text).
    pub description: String,
    /// Resolves imports relative to the program.
    pub resolver: RelativePathResolver,
}

/// Compiles program text into a reusable executable form.
pub trait TransformEngine: Send + Sync {
    fn compile(
        &self,
        program: &mut dyn Read,
        context: &CompileContext,
    ) -> Result<Box<dyn CompiledProgram>, CompileFailure>;
}

/// A compiled program. Shared read-only between executions and threads.
pub trait CompiledProgram: Send + Sync {
    /// Run against `input` with `params` bound.
    ///
    /// Non-fatal problems go into `diagnostics` and execution continues; a
    /// fatal one aborts with [`ExecutionFailure`].
    fn execute(
        &self,
        input: &mut dyn Read,
        params: &ExecutionParameters,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<u8>, ExecutionFailure>;
}
