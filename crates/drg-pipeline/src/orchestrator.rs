//! Ordered execution of registered processors over a shared context.

use tracing::{debug, error};

use crate::context::{AnalysisContext, ProcessorFailure};
use crate::processor::ProcessorRegistry;

/// How an orchestration run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// Every enabled processor completed.
    Completed,
    /// A processor faulted; the fault is recorded in the context and the
    /// remaining processors were not executed.
    Halted,
}

/// Executor for the registered analysis stages.
///
/// Processors run strictly in ascending `order` (stable for ties), disabled
/// ones are skipped, and a fault halts the run after being recorded into the
/// context. Faults never escape as errors and are never retried here; retry
/// policy belongs to the caller.
pub struct Orchestrator {
    registry: ProcessorRegistry,
}

impl Orchestrator {
    pub fn new(registry: ProcessorRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ProcessorRegistry {
        &self.registry
    }

    /// Runs all enabled processors in order over the context.
    ///
    /// An empty or all-disabled registry completes immediately.
    pub fn orchestrate(&self, context: &mut AnalysisContext) -> PipelineOutcome {
        let mut ordered: Vec<_> = self.registry.processors().iter().collect();
        // Stable sort: ties keep registration order.
        ordered.sort_by_key(|processor| processor.order());

        for processor in ordered {
            if !processor.enabled() {
                debug!(processor = processor.name(), "skipping disabled processor");
                continue;
            }
            debug!(
                processor = processor.name(),
                order = processor.order(),
                "running processor"
            );
            match processor.process(context) {
                Ok(()) => context.record_executed(processor.name()),
                Err(fault) => {
                    error!(
                        processor = processor.name(),
                        error = %fault,
                        "processor faulted, halting pipeline"
                    );
                    context.record_failure(ProcessorFailure {
                        processor: processor.name().to_string(),
                        message: format!("{fault:#}"),
                    });
                    return PipelineOutcome::Halted;
                }
            }
        }

        PipelineOutcome::Completed
    }

    /// Runs the registered processors as a two-stage workflow: a decision
    /// stage followed by a profit/loss computation stage.
    ///
    /// Execution semantics are identical to [`Self::orchestrate`] — stages
    /// are still driven purely by processor order; the two-stage name marks
    /// the usage convention. Callers are expected to have populated the
    /// readiness flags (see [`crate::context::DECISION_SAVED_KEY`] and
    /// [`crate::context::RESULT_READY_KEY`]) before profit/loss processors
    /// run; validating them is the business of the individual processors,
    /// not of the orchestrator.
    pub fn orchestrate_two_stage(&self, context: &mut AnalysisContext) -> PipelineOutcome {
        debug!("starting two-stage orchestration");
        self.orchestrate(context)
    }
}
