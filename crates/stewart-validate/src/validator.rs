//! Record validation: plausibility ranges, severity grading and
//! mode-specific required-field presence.
//!
//! A missing required field or a physiologically impossible value
//! blocks analysis. Everything else is reported as a non-blocking
//! warning; no default is ever substituted for a missing field.

use tracing::warn;

use stewart_model::{
    Advisory, AdvisoryKind, AnalysisMode, BlockingError, ClinicalRecord, Parameter,
    SeverityAssessment, SeverityTier, ValidationReport,
};

use crate::ranges::{grade_severity, is_implausible, is_impossible, range_table};

/// Minimal required parameters for quick and batch-row analysis.
pub const REQUIRED_QUICK: &[Parameter] = &[
    Parameter::Ph,
    Parameter::Pco2,
    Parameter::Sodium,
    Parameter::Chloride,
    Parameter::Lactate,
];

/// Advanced mode additionally requires the full cation panel and
/// albumin for SIDa/SIG/Atot work.
pub const REQUIRED_ADVANCED: &[Parameter] = &[
    Parameter::Ph,
    Parameter::Pco2,
    Parameter::Sodium,
    Parameter::Chloride,
    Parameter::Lactate,
    Parameter::Potassium,
    Parameter::Calcium,
    Parameter::Magnesium,
    Parameter::Albumin,
];

/// Optional parameters whose absence degrades specific outputs; each
/// absence gets an explicit "reported absent, not assumed" warning.
const OPTIONAL_WITH_CONSEQUENCE: &[(Parameter, &str)] = &[
    (Parameter::Potassium, "full apparent SID (SIDa)"),
    (Parameter::Calcium, "full apparent SID (SIDa)"),
    (Parameter::Magnesium, "full apparent SID (SIDa)"),
    (Parameter::Albumin, "effective SID, SIG and albumin effect"),
    (Parameter::Phosphate, "effective SID and SIG"),
];

pub fn required_parameters(mode: AnalysisMode) -> &'static [Parameter] {
    match mode {
        AnalysisMode::Quick | AnalysisMode::BatchRow => REQUIRED_QUICK,
        AnalysisMode::Advanced => REQUIRED_ADVANCED,
    }
}

/// Validate one sanitized record for the given mode.
pub fn validate(record: &ClinicalRecord, mode: AnalysisMode) -> ValidationReport {
    let mut report = ValidationReport::default();

    for parameter in required_parameters(mode) {
        if !record.is_present(*parameter) {
            report.blocking.push(BlockingError::MissingRequired {
                parameter: *parameter,
            });
        }
    }

    for parameter in Parameter::all() {
        let Some(value) = record.get(*parameter) else {
            continue;
        };

        let tier = grade_severity(*parameter, value);
        report.assessments.push(SeverityAssessment {
            parameter: *parameter,
            value,
            tier,
        });
        match tier {
            SeverityTier::Critical => {
                warn!(parameter = %parameter, value, "critical value");
                report.warnings.push(Advisory::new(
                    AdvisoryKind::CriticalValue,
                    format!("{parameter} = {value} grades critical; immediate attention"),
                ));
            }
            SeverityTier::Severe => {
                report.warnings.push(Advisory::new(
                    AdvisoryKind::SevereValue,
                    format!("{parameter} = {value} grades severe"),
                ));
            }
            _ => {}
        }

        let Some(table) = range_table(*parameter) else {
            continue;
        };
        if is_impossible(table, value) {
            report.blocking.push(BlockingError::ImpossibleValue {
                parameter: *parameter,
                value,
                min: table.absolute.0,
                max: table.absolute.1,
            });
        } else if is_implausible(table, value) {
            report.warnings.push(Advisory::new(
                AdvisoryKind::ImplausibleValue,
                format!(
                    "{parameter} = {value} is outside the plausible range \
                     ({}-{}) but not impossible; verify the entry",
                    table.plausible.0, table.plausible.1
                ),
            ));
        }
    }

    // Missing optional parameters: say what will be absent, assume nothing.
    let required = required_parameters(mode);
    for (parameter, consequence) in OPTIONAL_WITH_CONSEQUENCE {
        if required.contains(parameter) || record.is_present(*parameter) {
            continue;
        }
        report.warnings.push(Advisory::new(
            AdvisoryKind::MissingOptional,
            format!(
                "{parameter} not provided; {consequence} reported absent, no default assumed"
            ),
        ));
    }

    // Cross-field sanity: deep acidemia with a very low pCO2 is an
    // unusual combination and often a transcription error.
    if let (Some(ph), Some(pco2)) = (record.ph, record.pco2)
        && ph < 7.0
        && pco2 < 20.0
    {
        report.warnings.push(Advisory::new(
            AdvisoryKind::UnusualCombination,
            format!("pH {ph} with pCO2 {pco2} is an unusual combination; verify both entries"),
        ));
    }

    report
}
