//! Entry points: describe a program, then transform inputs with it.

use std::sync::Arc;

use tracing::debug;
use xta_ledger::{LogSink, ReportConfig, Reporter, StdoutSink};
use xta_transform::{TransformEngine, TransformProgram, TransformRunner};
use xta_types::{ExecutionParameters, Source};

use crate::compare::ComparisonRunner;
use crate::error::AssertResult;
use crate::result::ResultAsserter;
use crate::schema::SchemaValidator;

/// Where a chain reports to and what it can call on.
#[derive(Clone)]
pub(crate) struct Settings {
    pub(crate) log: Arc<dyn LogSink>,
    pub(crate) output: Option<Arc<dyn LogSink>>,
    pub(crate) config: ReportConfig,
    pub(crate) validator: Option<Arc<dyn SchemaValidator>>,
}

impl Settings {
    fn new(log: Arc<dyn LogSink>) -> Self {
        Self {
            log,
            output: None,
            config: ReportConfig::default(),
            validator: None,
        }
    }

    /// A fresh reporter for one chain.
    pub(crate) fn reporter(&self) -> Reporter {
        let reporter = Reporter::new(self.log.clone()).with_config(self.config.clone());
        match &self.output {
            Some(output) => reporter.with_output_sink(output.clone()),
            None => reporter,
        }
    }
}

/// Builder for everything a description needs besides the program.
///
/// ```rust,ignore
/// let description = TransformAssert::new(engine, sink)
///     .config(ReportConfig::from_file(path)?)
///     .describe(Source::path("to-html.xslt"))?;
/// ```
pub struct TransformAssert {
    engine: Arc<dyn TransformEngine>,
    settings: Settings,
}

impl TransformAssert {
    /// Compile with `engine` and trace every chain to `sink`.
    pub fn new(engine: Arc<dyn TransformEngine>, sink: Arc<dyn LogSink>) -> Self {
        Self {
            engine,
            settings: Settings::new(sink),
        }
    }

    /// Replace the trace sink given at construction.
    pub fn log_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.settings.log = sink;
        self
    }

    /// Send raw output to its own sink instead of the `OUTPUT:` section.
    pub fn output_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.settings.output = Some(sink);
        self
    }

    /// Validator used by schema checks; without one they break the chain.
    pub fn schema_validator(mut self, validator: Arc<dyn SchemaValidator>) -> Self {
        self.settings.validator = Some(validator);
        self
    }

    /// Report settings for every chain built from this description.
    pub fn config(mut self, config: ReportConfig) -> Self {
        self.settings.config = config;
        self
    }

    /// Compile `program` once.
    pub fn describe(self, program: Source) -> AssertResult<TransformDescription> {
        let program = TransformProgram::compile(&*self.engine, program)?;
        Ok(TransformDescription {
            engine: self.engine,
            program,
            settings: self.settings,
        })
    }
}

/// Compile `program` and report every chain built from it to `sink`.
pub fn describe(
    engine: Arc<dyn TransformEngine>,
    program: Source,
    sink: Arc<dyn LogSink>,
) -> AssertResult<TransformDescription> {
    TransformAssert::new(engine, sink).describe(program)
}

/// [`describe`], reporting to standard output.
pub fn describe_to_stdout(
    engine: Arc<dyn TransformEngine>,
    program: Source,
) -> AssertResult<TransformDescription> {
    describe(engine, program, Arc::new(StdoutSink))
}

/// A compiled program, ready to run against any number of inputs.
pub struct TransformDescription {
    engine: Arc<dyn TransformEngine>,
    program: TransformProgram,
    settings: Settings,
}

impl TransformDescription {
    /// The compiled program under test.
    pub fn program(&self) -> &TransformProgram {
        &self.program
    }

    /// Run the program against `input` with `params` given as flat
    /// name/value pairs.
    ///
    /// The parameters are checked before anything runs: an odd count is a
    /// contract violation.
    pub fn when_transforming<S: AsRef<str>>(
        &self,
        input: Source,
        params: &[S],
    ) -> AssertResult<ResultAsserter> {
        let params = ExecutionParameters::from_flat(params)?;
        let output = TransformRunner::new(self.program.clone()).run(&input, &params)?;
        debug!(input = %input.describe(), "transformed input");

        let reporter = self.settings.reporter();
        reporter.header(&self.program.describe(), None, &input.describe());
        Ok(ResultAsserter::new(output, reporter, &self.settings))
    }

    /// Compare this program against `baseline`, compiled with the same
    /// engine.
    pub fn when_comparing_to(&self, baseline: Source) -> AssertResult<ComparisonRunner> {
        let baseline = TransformProgram::compile(&*self.engine, baseline)?;
        Ok(ComparisonRunner::new(
            self.program.clone(),
            baseline,
            self.settings.clone(),
        ))
    }
}
