//! Validator behavior against the three-tier range tables and the
//! per-mode required sets.

use stewart_model::{
    AdvisoryKind, AnalysisMode, BlockingError, ClinicalRecord, Parameter, SeverityTier,
};
use stewart_validate::validate;

fn quick_record() -> ClinicalRecord {
    ClinicalRecord {
        ph: Some(7.40),
        pco2: Some(40.0),
        na: Some(140.0),
        cl: Some(100.0),
        lactate: Some(1.0),
        ..ClinicalRecord::default()
    }
}

#[test]
fn normal_quick_record_passes() {
    let report = validate(&quick_record(), AnalysisMode::Quick);
    assert!(!report.is_blocked());
    assert_eq!(report.overall_severity(), SeverityTier::Normal);
}

#[test]
fn missing_required_field_blocks_without_default() {
    let mut record = quick_record();
    record.lactate = None;
    let report = validate(&record, AnalysisMode::Quick);
    assert!(report.is_blocked());
    assert!(report.blocking.iter().any(|e| matches!(
        e,
        BlockingError::MissingRequired {
            parameter: Parameter::Lactate
        }
    )));
}

#[test]
fn advanced_mode_requires_the_full_panel() {
    // Complete for quick mode, but advanced also wants K, Ca, Mg, albumin.
    let report = validate(&quick_record(), AnalysisMode::Advanced);
    assert!(report.is_blocked());
    let missing: Vec<Parameter> = report
        .blocking
        .iter()
        .filter_map(|e| match e {
            BlockingError::MissingRequired { parameter } => Some(*parameter),
            BlockingError::ImpossibleValue { .. } => None,
        })
        .collect();
    assert!(missing.contains(&Parameter::Potassium));
    assert!(missing.contains(&Parameter::Calcium));
    assert!(missing.contains(&Parameter::Magnesium));
    assert!(missing.contains(&Parameter::Albumin));
}

#[test]
fn impossible_value_blocks() {
    let mut record = quick_record();
    record.ph = Some(8.1);
    let report = validate(&record, AnalysisMode::Quick);
    assert!(report.is_blocked());
    assert!(report.blocking.iter().any(|e| matches!(
        e,
        BlockingError::ImpossibleValue {
            parameter: Parameter::Ph,
            ..
        }
    )));
}

#[test]
fn implausible_value_warns_but_does_not_block() {
    let mut record = quick_record();
    record.pco2 = Some(110.0); // possible (10-120) but outside plausible (15-100)
    let report = validate(&record, AnalysisMode::Quick);
    assert!(!report.is_blocked());
    assert!(
        report
            .warnings
            .iter()
            .any(|w| w.kind == AdvisoryKind::ImplausibleValue)
    );
}

#[test]
fn critical_ph_is_graded_even_when_blocked() {
    let mut record = quick_record();
    record.ph = Some(6.75);
    let report = validate(&record, AnalysisMode::Quick);
    assert!(report.is_blocked());
    let assessment = report.assessment(Parameter::Ph).expect("pH assessed");
    assert_eq!(assessment.tier, SeverityTier::Critical);
    assert!(
        report
            .warnings
            .iter()
            .any(|w| w.kind == AdvisoryKind::CriticalValue)
    );
}

#[test]
fn overall_severity_is_the_worst_parameter() {
    let mut record = quick_record();
    record.lactate = Some(8.0); // severe
    record.na = Some(132.0); // mild
    let report = validate(&record, AnalysisMode::Quick);
    assert_eq!(report.overall_severity(), SeverityTier::Severe);
}

#[test]
fn missing_optionals_warn_with_not_assumed_messaging() {
    let report = validate(&quick_record(), AnalysisMode::Quick);
    let missing: Vec<&str> = report
        .warnings
        .iter()
        .filter(|w| w.kind == AdvisoryKind::MissingOptional)
        .map(|w| w.message.as_str())
        .collect();
    assert!(missing.iter().any(|m| m.contains("albumin")));
    assert!(missing.iter().all(|m| m.contains("no default assumed")));
}

#[test]
fn deep_acidemia_with_low_pco2_flags_unusual_combination() {
    let mut record = quick_record();
    record.ph = Some(6.95);
    record.pco2 = Some(18.0);
    let report = validate(&record, AnalysisMode::Quick);
    assert!(
        report
            .warnings
            .iter()
            .any(|w| w.kind == AdvisoryKind::UnusualCombination)
    );
}
