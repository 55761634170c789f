//! Per-run analysis context shared across pipeline processors.
//!
//! The context bundles the engine's own typed data paths (patient, catalog,
//! matching result), the reserved error/execution-log slots, and an open
//! attribute bag for cross-cutting processors. A fresh context must be
//! created immediately before each orchestration and discarded or handed to
//! the caller immediately after; sharing one across concurrent runs is not
//! supported.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use drg_model::{GroupCatalog, MatchingResult, PatientData};

/// Convention key under which processors mark upstream data as persisted
/// before a profit/loss stage runs.
pub const DECISION_SAVED_KEY: &str = "decision_saved";

/// Convention key under which processors mark the matching result as ready.
pub const RESULT_READY_KEY: &str = "result_ready";

/// Details of a processor fault, recorded into the context's reserved error
/// slot when a pipeline halts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorFailure {
    /// Name of the processor that faulted.
    pub processor: String,
    /// Rendered error chain.
    pub message: String,
}

/// Centralized per-run state for one orchestration.
#[derive(Debug, Default)]
pub struct AnalysisContext {
    /// Patient data under analysis.
    pub patient: Option<PatientData>,
    /// Reference catalog for the run.
    pub catalog: Option<GroupCatalog>,
    /// Matching result, populated by the matching stage.
    pub matching: Option<MatchingResult>,
    error: Option<ProcessorFailure>,
    executed: Vec<String>,
    attributes: BTreeMap<String, Value>,
}

impl AnalysisContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the patient data for the run.
    pub fn with_patient(mut self, patient: PatientData) -> Self {
        self.patient = Some(patient);
        self
    }

    /// Sets the reference catalog for the run.
    pub fn with_catalog(mut self, catalog: GroupCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// The fault that halted the run, if any.
    pub fn error(&self) -> Option<&ProcessorFailure> {
        self.error.as_ref()
    }

    /// Names of processors that completed, in execution order.
    pub fn executed(&self) -> &[String] {
        &self.executed
    }

    /// Stores an arbitrary attribute under a string key.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Raw attribute lookup.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Typed attribute lookup; `None` when the key is absent or the value
    /// does not deserialize as `T`.
    pub fn attribute_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.attributes
            .get(key)
            .cloned()
            .and_then(|value| serde_json::from_value(value).ok())
    }

    /// Marks upstream data as persisted (two-stage convention).
    pub fn mark_decision_saved(&mut self, saved: bool) {
        self.set_attribute(DECISION_SAVED_KEY, saved);
    }

    /// Whether upstream data has been marked persisted.
    pub fn decision_saved(&self) -> bool {
        self.attribute_as(DECISION_SAVED_KEY).unwrap_or(false)
    }

    /// Marks the matching result as ready (two-stage convention).
    pub fn mark_result_ready(&mut self, ready: bool) {
        self.set_attribute(RESULT_READY_KEY, ready);
    }

    /// Whether the matching result has been marked ready.
    pub fn result_ready(&self) -> bool {
        self.attribute_as(RESULT_READY_KEY).unwrap_or(false)
    }

    pub(crate) fn record_executed(&mut self, name: &str) {
        self.executed.push(name.to_string());
    }

    pub(crate) fn record_failure(&mut self, failure: ProcessorFailure) {
        self.error = Some(failure);
    }
}
