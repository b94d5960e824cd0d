use std::fmt;
use std::sync::Arc;

use tracing::debug;
use xta_types::Source;

use crate::engine::{CompileContext, CompiledProgram, TransformEngine};
use crate::error::TransformResult;
use crate::resolver::RelativePathResolver;

/// A program compiled exactly once.
///
/// Cloning shares the compiled form; nothing is recompiled.
#[derive(Clone)]
pub struct TransformProgram {
    source: Source,
    compiled: Arc<dyn CompiledProgram>,
}

impl TransformProgram {
    /// Read `source` and compile it with `engine`.
    ///
    /// The program reader is dropped before this returns, on success or
    /// failure.
    pub fn compile(engine: &dyn TransformEngine, source: Source) -> TransformResult<Self> {
        let context = CompileContext {
            description: source.describe(),
            resolver: RelativePathResolver::new(source.base_dir()),
        };
        let compiled = {
            let mut reader = source.open()?;
            engine.compile(&mut reader, &context)?
        };
        debug!(program = %abbreviate(&context.description), "compiled program");

        Ok(Self {
            source,
            compiled: Arc::from(compiled),
        })
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    /// The program as shown in report headers.
    pub fn describe(&self) -> String {
        self.source.describe()
    }

    pub fn compiled(&self) -> &Arc<dyn CompiledProgram> {
        &self.compiled
    }
}

impl fmt::Debug for TransformProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformProgram")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// First line of a description, for log fields.
pub(crate) fn abbreviate(text: &str) -> &str {
    text.lines().next().unwrap_or_default()
}
