use std::collections::HashMap;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use xta_types::{Diagnostics, ExecutionParameters};

use crate::engine::{CompileContext, CompiledProgram, TransformEngine};
use crate::error::{CompileFailure, ExecutionFailure};

/// A program body: input bytes and parameters in, output bytes out.
pub type TransformFn = dyn Fn(
    &[u8],
    &ExecutionParameters,
    &mut Diagnostics,
) -> Result<Vec<u8>, ExecutionFailure>
    + Send
    + Sync;

/// Closure-backed engine for tests and embedding.
///
/// Programs are registered under their source text (compared with
/// surrounding whitespace trimmed). Compiling text that was never
/// registered fails the way a syntax error would.
#[derive(Default)]
pub struct FnEngine {
    programs: RwLock<HashMap<String, Arc<TransformFn>>>,
    compilations: AtomicUsize,
}

impl FnEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `body` as the meaning of program text `source`.
    pub fn register<F>(&self, source: impl AsRef<str>, body: F)
    where
        F: Fn(&[u8], &ExecutionParameters, &mut Diagnostics) -> Result<Vec<u8>, ExecutionFailure>
            + Send
            + Sync
            + 'static,
    {
        let key = source.as_ref().trim().to_string();
        match self.programs.write() {
            Ok(mut programs) => {
                programs.insert(key, Arc::new(body));
            }
            Err(poisoned) => {
                poisoned.into_inner().insert(key, Arc::new(body));
            }
        }
    }

    /// Number of successful compilations so far.
    pub fn compile_count(&self) -> usize {
        self.compilations.load(Ordering::SeqCst)
    }
}

impl TransformEngine for FnEngine {
    fn compile(
        &self,
        program: &mut dyn Read,
        context: &CompileContext,
    ) -> Result<Box<dyn CompiledProgram>, CompileFailure> {
        let mut text = String::new();
        program
            .read_to_string(&mut text)
            .map_err(|e| CompileFailure::new(format!("cannot read program: {e}")))?;

        let programs = self
            .programs
            .read()
            .map_err(|_| CompileFailure::new("program registry lock poisoned"))?;
        let body = programs.get(text.trim()).cloned().ok_or_else(|| {
            CompileFailure::new(format!("unknown program: {}", context.description.trim()))
        })?;

        self.compilations.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(FnProgram { body }))
    }
}

struct FnProgram {
    body: Arc<TransformFn>,
}

impl CompiledProgram for FnProgram {
    fn execute(
        &self,
        input: &mut dyn Read,
        params: &ExecutionParameters,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<u8>, ExecutionFailure> {
        let mut bytes = Vec::new();
        input
            .read_to_end(&mut bytes)
            .map_err(|e| ExecutionFailure::new(format!("cannot read input document: {e}")))?;
        (self.body)(&bytes, params, diagnostics)
    }
}
