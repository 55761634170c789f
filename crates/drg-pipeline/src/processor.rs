//! Analysis processor trait and registry.

use anyhow::Result;

use crate::context::AnalysisContext;

/// One stage of the analysis pipeline.
///
/// Processors mutate only the shared [`AnalysisContext`]; they perform no
/// I/O of their own. The orchestrator sorts by [`Self::order`] at run time
/// and skips disabled processors.
pub trait AnalysisProcessor: Send + Sync {
    /// Unique processor name, used for the execution log and fault reports.
    fn name(&self) -> &str;

    /// Execution order; lower runs first. Ties keep registration order.
    fn order(&self) -> i32;

    /// Whether the processor participates in runs.
    fn enabled(&self) -> bool {
        true
    }

    /// Execute this stage against the shared context.
    ///
    /// # Errors
    ///
    /// A returned error is treated as a processor fault: the orchestrator
    /// records it into the context and halts the remaining pipeline.
    fn process(&self, context: &mut AnalysisContext) -> Result<()>;
}

/// Growable, ordered collection of processors.
///
/// `register` appends in O(1) and enforces no name deduplication; the
/// registry itself makes no ordering guarantee — the orchestrator sorts at
/// run time. Intended to be populated once at startup and read-only
/// afterwards.
#[derive(Default)]
pub struct ProcessorRegistry {
    processors: Vec<Box<dyn AnalysisProcessor>>,
}

impl ProcessorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a processor to the registry.
    pub fn register(&mut self, processor: Box<dyn AnalysisProcessor>) {
        self.processors.push(processor);
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Registered names, in registration order.
    pub fn processor_names(&self) -> Vec<&str> {
        self.processors.iter().map(|p| p.name()).collect()
    }

    pub(crate) fn processors(&self) -> &[Box<dyn AnalysisProcessor>] {
        &self.processors
    }
}
