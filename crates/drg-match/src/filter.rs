//! Catalog partitioning by procedure presence.

use drg_model::{GroupCatalog, GroupRecord, PatientData};

/// Select the catalog records whose procedure presence mirrors the
/// patient's: a patient with at least one procedure is matched only against
/// procedure-bearing records, a patient without procedures only against
/// procedure-free records.
pub fn filter_by_procedure_presence<'a>(
    patient: &PatientData,
    catalog: &'a GroupCatalog,
) -> Vec<&'a GroupRecord> {
    let wants_procedures = patient.has_procedures();
    catalog
        .iter()
        .filter(|record| record.has_procedures() == wants_procedures)
        .collect()
}
