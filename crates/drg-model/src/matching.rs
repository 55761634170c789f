//! Result of reconciling one patient against the grouping catalog.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Deduplicated primary diagnosis and procedure names collected by a
/// matching run.
///
/// Constructed once per run and never mutated afterwards; the name sets are
/// exposed only through read-only views. Consumers must rely on membership
/// and size, not on a particular iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingResult {
    primary_diagnoses: BTreeSet<String>,
    primary_procedures: BTreeSet<String>,
}

impl MatchingResult {
    pub fn new(primary_diagnoses: BTreeSet<String>, primary_procedures: BTreeSet<String>) -> Self {
        Self {
            primary_diagnoses,
            primary_procedures,
        }
    }

    /// A result with two empty sets. Produced when nothing matched, which is
    /// a legitimate outcome rather than an error.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn primary_diagnoses(&self) -> impl Iterator<Item = &str> {
        self.primary_diagnoses.iter().map(String::as_str)
    }

    pub fn primary_procedures(&self) -> impl Iterator<Item = &str> {
        self.primary_procedures.iter().map(String::as_str)
    }

    pub fn diagnosis_count(&self) -> usize {
        self.primary_diagnoses.len()
    }

    pub fn procedure_count(&self) -> usize {
        self.primary_procedures.len()
    }

    pub fn contains_diagnosis(&self, name: &str) -> bool {
        self.primary_diagnoses.contains(name)
    }

    pub fn contains_procedure(&self, name: &str) -> bool {
        self.primary_procedures.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.primary_diagnoses.is_empty() && self.primary_procedures.is_empty()
    }
}
