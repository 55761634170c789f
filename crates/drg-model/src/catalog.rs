//! Reference catalog of DRG grouping records.
//!
//! A [`GroupCatalog`] is loaded once by an external collaborator (database
//! sync, file import) and stays immutable for the duration of a matching
//! run. Each [`GroupRecord`] carries the diagnoses and procedures expected
//! for that grouping, against which a patient's own data is reconciled.

use serde::{Deserialize, Serialize};

/// A diagnosis expected by a grouping record.
///
/// `aliases` holds alternative names for the same diagnosis (typically the
/// bracketed alias text from the raw catalog string). Aliases participate in
/// matching but are never reported as primary names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisEntry {
    /// Classification code (e.g., "I48.000").
    pub code: String,
    /// Canonical diagnosis name.
    pub name: String,
    /// Alternative names, in catalog order.
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl DiagnosisEntry {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        aliases: Option<Vec<String>>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            aliases: aliases.unwrap_or_default(),
        }
    }
}

/// A procedure expected by a grouping record. Procedures carry no aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcedureEntry {
    /// Classification code (e.g., "37.9000x001").
    pub code: String,
    /// Canonical procedure name.
    pub name: String,
}

impl ProcedureEntry {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// One grouping record of the reference catalog.
///
/// Absent diagnosis/procedure lists are normalized to empty at construction;
/// consumers never observe a missing list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRecord {
    /// Record identifier.
    pub id: String,
    /// Human-readable grouping code (e.g., "FM19").
    pub group_code: String,
    /// Human-readable grouping name.
    pub group_name: String,
    /// Monetary reference value for the grouping, when published.
    pub reference_payment: Option<f64>,
    /// Expected diagnoses, in catalog order.
    #[serde(default)]
    pub diagnoses: Vec<DiagnosisEntry>,
    /// Expected procedures, in catalog order.
    #[serde(default)]
    pub procedures: Vec<ProcedureEntry>,
}

impl GroupRecord {
    pub fn new(
        id: impl Into<String>,
        group_code: impl Into<String>,
        group_name: impl Into<String>,
        reference_payment: Option<f64>,
        diagnoses: Option<Vec<DiagnosisEntry>>,
        procedures: Option<Vec<ProcedureEntry>>,
    ) -> Self {
        Self {
            id: id.into(),
            group_code: group_code.into(),
            group_name: group_name.into(),
            reference_payment,
            diagnoses: diagnoses.unwrap_or_default(),
            procedures: procedures.unwrap_or_default(),
        }
    }

    pub fn has_diagnoses(&self) -> bool {
        !self.diagnoses.is_empty()
    }

    pub fn has_procedures(&self) -> bool {
        !self.procedures.is_empty()
    }
}

/// The ordered reference catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupCatalog {
    pub records: Vec<GroupRecord>,
}

impl GroupCatalog {
    pub fn new(records: Vec<GroupRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GroupRecord> {
        self.records.iter()
    }
}
