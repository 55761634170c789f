//! Ordered analysis pipeline for DRG grouping runs.
//!
//! A [`ProcessorRegistry`] collects independent analysis stages; the
//! [`Orchestrator`] executes them in order over a shared per-run
//! [`AnalysisContext`], skipping disabled stages and halting on the first
//! fault. The [`processors::GroupMatchProcessor`] stage embeds the cascade
//! matcher from `drg-match`.

pub mod context;
pub mod orchestrator;
pub mod processor;
pub mod processors;

pub use context::{AnalysisContext, DECISION_SAVED_KEY, ProcessorFailure, RESULT_READY_KEY};
pub use orchestrator::{Orchestrator, PipelineOutcome};
pub use processor::{AnalysisProcessor, ProcessorRegistry};
