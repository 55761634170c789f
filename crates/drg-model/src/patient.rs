//! Patient-side clinical data as supplied by external collaborators.

use serde::{Deserialize, Serialize};

/// A diagnosis recorded for a patient. Code plus name, no aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientDiagnosis {
    pub code: String,
    pub name: String,
}

impl PatientDiagnosis {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// A procedure recorded for a patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientProcedure {
    pub code: String,
    pub name: String,
}

impl PatientProcedure {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// The clinical data of one patient for one matching run.
///
/// Absent lists are normalized to empty at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientData {
    #[serde(default)]
    pub diagnoses: Vec<PatientDiagnosis>,
    #[serde(default)]
    pub procedures: Vec<PatientProcedure>,
}

impl PatientData {
    pub fn new(
        diagnoses: Option<Vec<PatientDiagnosis>>,
        procedures: Option<Vec<PatientProcedure>>,
    ) -> Self {
        Self {
            diagnoses: diagnoses.unwrap_or_default(),
            procedures: procedures.unwrap_or_default(),
        }
    }

    pub fn has_procedures(&self) -> bool {
        !self.procedures.is_empty()
    }
}
