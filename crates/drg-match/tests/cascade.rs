//! End-to-end matching scenarios over a small reference catalog.

use drg_match::GroupMatcher;
use drg_model::{
    DiagnosisEntry, GroupCatalog, GroupRecord, PatientData, PatientDiagnosis, PatientProcedure,
    ProcedureEntry,
};

/// A cardiac interventional record plus a procedure-free hypertension
/// record, the pair most deployments start from.
fn reference_catalog() -> GroupCatalog {
    GroupCatalog::new(vec![
        GroupRecord::new(
            "rec-001",
            "FM19",
            "房颤介入治疗",
            Some(58000.0),
            Some(vec![
                DiagnosisEntry::new("I48.000", "心房颤动", Some(vec!["房颤".to_string()])),
                DiagnosisEntry::new("I48.900x003", "持续性心房颤动", None),
            ]),
            Some(vec![ProcedureEntry::new("37.9000x001", "经皮左心耳封堵术")]),
        ),
        GroupRecord::new(
            "rec-002",
            "ES31",
            "高血压内科治疗",
            Some(9000.0),
            Some(vec![DiagnosisEntry::new("I10", "原发性高血压", None)]),
            None,
        ),
    ])
}

#[test]
fn cardiac_patient_matches_interventional_record() {
    let patient = PatientData::new(
        Some(vec![PatientDiagnosis::new("I48.000", "心房颤动")]),
        Some(vec![PatientProcedure::new("37.9000x001", "经皮左心耳封堵术")]),
    );

    let result = GroupMatcher::new().match_patient(&patient, &reference_catalog());

    assert!(result.contains_diagnosis("心房颤动"));
    assert!(result.contains_procedure("经皮左心耳封堵术"));
    // The procedure-free hypertension record is filtered out entirely.
    assert!(!result.contains_diagnosis("原发性高血压"));
}

#[test]
fn hypertension_patient_matches_procedure_free_record() {
    let patient = PatientData::new(
        Some(vec![PatientDiagnosis::new("I10", "原发性高血压")]),
        None,
    );

    let result = GroupMatcher::new().match_patient(&patient, &reference_catalog());

    assert!(result.contains_diagnosis("原发性高血压"));
    assert_eq!(result.procedure_count(), 0);
    // The procedure-bearing cardiac record is filtered out.
    assert!(!result.contains_diagnosis("心房颤动"));
}

#[test]
fn all_records_with_a_code_hit_are_visited() {
    let catalog = GroupCatalog::new(vec![
        GroupRecord::new(
            "rec-a",
            "GA01",
            "组甲",
            None,
            Some(vec![DiagnosisEntry::new("I10", "原发性高血压", None)]),
            None,
        ),
        GroupRecord::new(
            "rec-b",
            "GB01",
            "组乙",
            None,
            Some(vec![DiagnosisEntry::new("I10", "高血压性心脏病", None)]),
            None,
        ),
    ]);
    let patient = PatientData::new(Some(vec![PatientDiagnosis::new("I10", "高血压")]), None);

    let result = GroupMatcher::new().match_patient(&patient, &catalog);

    assert!(result.contains_diagnosis("原发性高血压"));
    assert!(result.contains_diagnosis("高血压性心脏病"));
    assert_eq!(result.diagnosis_count(), 2);
}

#[test]
fn diagnosis_only_match_leaves_procedures_empty() {
    let patient = PatientData::new(
        Some(vec![PatientDiagnosis::new("I48.000", "心房颤动")]),
        Some(vec![PatientProcedure::new("99.9999", "不在目录内的操作")]),
    );

    let result = GroupMatcher::new().match_patient(&patient, &reference_catalog());

    assert!(result.contains_diagnosis("心房颤动"));
    assert_eq!(result.procedure_count(), 0);
}

#[test]
fn unmatched_patient_yields_empty_result_not_error() {
    let patient = PatientData::new(
        Some(vec![PatientDiagnosis::new("Z00.0", "一般健康检查")]),
        None,
    );
    let result = GroupMatcher::new().match_patient(&patient, &reference_catalog());
    assert!(result.is_empty());
}
