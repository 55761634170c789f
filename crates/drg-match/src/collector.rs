//! Accumulation of matched primary names across a matching run.

use std::collections::BTreeSet;

use drg_model::{GroupRecord, MatchingResult};

/// Per-run collector of deduplicated primary diagnosis/procedure names.
///
/// Names are trimmed before insertion and deduplicated with set semantics.
/// Only the main catalog name of an entry is ever collected — aliases help
/// find a match but are never reported as output names. A fresh collector
/// must be created for each matching run.
#[derive(Debug, Clone)]
pub struct NameCollector {
    top_k_enabled: bool,
    limit: usize,
    diagnoses: BTreeSet<String>,
    procedures: BTreeSet<String>,
}

impl NameCollector {
    /// Creates a collector. When `top_k_enabled`, each set is truncated to
    /// at most `limit` entries after every collection (a limit of 0 keeps
    /// the sets empty); when disabled, `limit` is ignored.
    pub fn new(top_k_enabled: bool, limit: usize) -> Self {
        Self {
            top_k_enabled,
            limit,
            diagnoses: BTreeSet::new(),
            procedures: BTreeSet::new(),
        }
    }

    /// A collector without a cap.
    pub fn unbounded() -> Self {
        Self::new(false, 0)
    }

    /// Collect the main names of a record's diagnosis and/or procedure
    /// entries.
    pub fn collect_from_record(
        &mut self,
        record: &GroupRecord,
        collect_diagnoses: bool,
        collect_procedures: bool,
    ) {
        if collect_diagnoses {
            for entry in &record.diagnoses {
                insert_trimmed(&mut self.diagnoses, &entry.name);
            }
        }
        if collect_procedures {
            for entry in &record.procedures {
                insert_trimmed(&mut self.procedures, &entry.name);
            }
        }
        if self.top_k_enabled {
            truncate(&mut self.diagnoses, self.limit);
            truncate(&mut self.procedures, self.limit);
        }
    }

    pub fn primary_diagnoses(&self) -> &BTreeSet<String> {
        &self.diagnoses
    }

    pub fn primary_procedures(&self) -> &BTreeSet<String> {
        &self.procedures
    }

    /// Resets both sets to empty.
    pub fn clear(&mut self) {
        self.diagnoses.clear();
        self.procedures.clear();
    }

    /// Consumes the collector into the immutable run result.
    pub fn into_result(self) -> MatchingResult {
        MatchingResult::new(self.diagnoses, self.procedures)
    }
}

fn insert_trimmed(set: &mut BTreeSet<String>, name: &str) {
    let trimmed = name.trim();
    if !trimmed.is_empty() {
        set.insert(trimmed.to_string());
    }
}

fn truncate(set: &mut BTreeSet<String>, limit: usize) {
    while set.len() > limit {
        set.pop_last();
    }
}
