pub mod compensation;
pub mod derived;
pub mod error;
pub mod mechanism;
pub mod record;
pub mod report;
pub mod severity;
pub mod sid;
pub mod swap;

pub use compensation::{
    CompensationAssessment, CompensationVerdict, PrimaryDisturbance, RespiratoryAcuity,
};
pub use derived::{DerivedValues, ValueSource};
pub use error::SanitizationError;
pub use mechanism::{LactateShare, Mechanism, MechanismContribution, MechanismReport};
pub use record::{AnalysisMode, ClinicalRecord, Parameter};
pub use report::{Advisory, AdvisoryKind, AnalysisResult, BlockingError, ValidationReport};
pub use severity::{SeverityAssessment, SeverityTier};
pub use sid::SidProfile;
pub use swap::{SwapConfidence, SwapSuspicion};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overall_severity_is_max_tier() {
        let report = ValidationReport {
            assessments: vec![
                SeverityAssessment {
                    parameter: Parameter::Ph,
                    value: 7.28,
                    tier: SeverityTier::Moderate,
                },
                SeverityAssessment {
                    parameter: Parameter::Lactate,
                    value: 12.0,
                    tier: SeverityTier::Critical,
                },
            ],
            blocking: vec![],
            warnings: vec![],
        };
        assert_eq!(report.overall_severity(), SeverityTier::Critical);
        assert!(!report.is_blocked());
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = ClinicalRecord {
            ph: Some(7.32),
            pco2: Some(31.0),
            na: Some(138.0),
            cl: Some(104.0),
            lactate: Some(4.5),
            ..ClinicalRecord::default()
        };
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: ClinicalRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
        assert!(round.is_present(Parameter::Lactate));
        assert!(!round.is_present(Parameter::Albumin));
    }

    #[test]
    fn blocking_error_messages_name_the_parameter() {
        let error = BlockingError::MissingRequired {
            parameter: Parameter::Lactate,
        };
        assert!(error.to_string().contains("lactate"));

        let error = BlockingError::ImpossibleValue {
            parameter: Parameter::Ph,
            value: 8.2,
            min: 6.8,
            max: 7.8,
        };
        let text = error.to_string();
        assert!(text.contains("pH"));
        assert!(text.contains("8.2"));
    }
}
