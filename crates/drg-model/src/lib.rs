pub mod catalog;
pub mod matching;
pub mod patient;

pub use catalog::{DiagnosisEntry, GroupCatalog, GroupRecord, ProcedureEntry};
pub use matching::MatchingResult;
pub use patient::{PatientData, PatientDiagnosis, PatientProcedure};
