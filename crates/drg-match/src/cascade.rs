//! Cascading reconciliation of patient diagnoses/procedures against the
//! grouping catalog.
//!
//! Per patient item, each candidate record is tried through a
//! short-circuiting chain of three predicates: exact code, alias, fuzzy
//! name. Every record with a hit is visited and collected, not just the
//! first, and diagnoses and procedures accumulate independently.

use std::fmt;

use tracing::debug;

use drg_model::{DiagnosisEntry, GroupCatalog, MatchingResult, PatientData, ProcedureEntry};

use crate::collector::NameCollector;
use crate::error::MatchError;
use crate::filter::filter_by_procedure_presence;
use crate::matchers::{DEFAULT_NAME_THRESHOLD, exact_code_match, similarity_match};
use crate::normalize::{NormalizerConfig, main_name, normalize};

/// The cascade stage that produced a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStage {
    ExactCode,
    Alias,
    FuzzyName,
}

impl fmt::Display for MatchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactCode => write!(f, "exact_code"),
            Self::Alias => write!(f, "alias"),
            Self::FuzzyName => write!(f, "fuzzy_name"),
        }
    }
}

/// Matcher for primary diagnoses and procedures.
///
/// Stateless across runs; safe to share between threads and reuse for any
/// number of patients. All per-run state lives in a collector created inside
/// [`Self::match_patient`].
#[derive(Debug, Clone)]
pub struct GroupMatcher {
    threshold: f64,
    top_k: Option<usize>,
    normalizer: NormalizerConfig,
}

impl Default for GroupMatcher {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_NAME_THRESHOLD,
            top_k: None,
            normalizer: NormalizerConfig::default(),
        }
    }
}

impl GroupMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the fuzzy-name threshold.
    ///
    /// # Errors
    ///
    /// Fails with [`MatchError::InvalidThreshold`] unless `0 < threshold < 1`.
    pub fn with_threshold(mut self, threshold: f64) -> Result<Self, MatchError> {
        if !(threshold > 0.0 && threshold < 1.0) {
            return Err(MatchError::InvalidThreshold { value: threshold });
        }
        self.threshold = threshold;
        Ok(self)
    }

    /// Caps the number of distinct names retained per side.
    pub fn with_top_k(mut self, limit: usize) -> Self {
        self.top_k = Some(limit);
        self
    }

    /// Replaces the normalizer configuration used for fuzzy comparison.
    pub fn with_normalizer(mut self, normalizer: NormalizerConfig) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Reconcile one patient against the catalog.
    ///
    /// Never fails: no match of any kind, an empty patient, or an empty
    /// catalog all produce a result with two empty sets.
    pub fn match_patient(&self, patient: &PatientData, catalog: &GroupCatalog) -> MatchingResult {
        let mut collector = match self.top_k {
            Some(limit) => NameCollector::new(true, limit),
            None => NameCollector::unbounded(),
        };
        let candidates = filter_by_procedure_presence(patient, catalog);
        debug!(
            candidates = candidates.len(),
            diagnoses = patient.diagnoses.len(),
            procedures = patient.procedures.len(),
            "matching patient against filtered catalog"
        );

        for diagnosis in &patient.diagnoses {
            for record in &candidates {
                let stage = record
                    .diagnoses
                    .iter()
                    .find_map(|entry| self.diagnosis_stage(&diagnosis.code, &diagnosis.name, entry));
                if let Some(stage) = stage {
                    debug!(
                        code = %diagnosis.code,
                        group = %record.group_code,
                        stage = %stage,
                        "diagnosis matched"
                    );
                    collector.collect_from_record(record, true, false);
                }
            }
        }

        for procedure in &patient.procedures {
            for record in &candidates {
                let stage = record
                    .procedures
                    .iter()
                    .find_map(|entry| self.procedure_stage(&procedure.code, &procedure.name, entry));
                if let Some(stage) = stage {
                    debug!(
                        code = %procedure.code,
                        group = %record.group_code,
                        stage = %stage,
                        "procedure matched"
                    );
                    collector.collect_from_record(record, false, true);
                }
            }
        }

        collector.into_result()
    }

    fn diagnosis_stage(
        &self,
        patient_code: &str,
        patient_name: &str,
        entry: &DiagnosisEntry,
    ) -> Option<MatchStage> {
        if exact_code_match(patient_code, &entry.code) {
            return Some(MatchStage::ExactCode);
        }
        if entry.aliases.iter().any(|alias| alias == patient_name) {
            return Some(MatchStage::Alias);
        }
        self.fuzzy_stage(patient_name, &entry.name)
    }

    fn procedure_stage(
        &self,
        patient_code: &str,
        patient_name: &str,
        entry: &ProcedureEntry,
    ) -> Option<MatchStage> {
        // Procedures carry no aliases; the alias stage is vacuous.
        if exact_code_match(patient_code, &entry.code) {
            return Some(MatchStage::ExactCode);
        }
        self.fuzzy_stage(patient_name, &entry.name)
    }

    fn fuzzy_stage(&self, patient_name: &str, catalog_name: &str) -> Option<MatchStage> {
        let patient_form = self.compare_form(patient_name);
        let catalog_form = self.compare_form(catalog_name);
        match similarity_match(&patient_form, &catalog_form, self.threshold) {
            Ok(true) => Some(MatchStage::FuzzyName),
            _ => None,
        }
    }

    /// Normalized, bracket-stripped form used for fuzzy comparison.
    fn compare_form(&self, name: &str) -> String {
        main_name(&normalize(name, &self.normalizer))
    }
}
