use std::io::Read;

use tracing::{debug, warn};
use xta_types::{Diagnostics, ExecutionParameters, Source, TransformOutput};

use crate::error::TransformResult;
use crate::program::{abbreviate, TransformProgram};

/// Executes one compiled program against input documents.
///
/// Every run gets its own diagnostics; nothing carries over between runs.
#[derive(Clone, Debug)]
pub struct TransformRunner {
    program: TransformProgram,
}

impl TransformRunner {
    pub fn new(program: TransformProgram) -> Self {
        Self { program }
    }

    pub fn program(&self) -> &TransformProgram {
        &self.program
    }

    /// Open `input` and run the program against it.
    pub fn run(
        &self,
        input: &Source,
        params: &ExecutionParameters,
    ) -> TransformResult<TransformOutput> {
        let mut reader = input.open()?;
        self.run_reader(&mut reader, params)
    }

    /// Run the program against an already opened reader.
    pub fn run_reader(
        &self,
        input: &mut dyn Read,
        params: &ExecutionParameters,
    ) -> TransformResult<TransformOutput> {
        let mut diagnostics = Diagnostics::new();
        let description = self.program.describe();
        let bytes = self
            .program
            .compiled()
            .execute(input, params, &mut diagnostics)?;

        for diagnostic in &diagnostics {
            warn!(
                program = %abbreviate(&description),
                severity = %diagnostic.severity,
                "{}",
                diagnostic.message
            );
        }
        debug!(
            program = %abbreviate(&description),
            params = params.len(),
            output_len = bytes.len(),
            diagnostics = diagnostics.len(),
            "executed program"
        );

        Ok(TransformOutput::new(bytes, diagnostics))
    }
}
