use serde::{Deserialize, Serialize};

use crate::compensation::CompensationAssessment;
use crate::derived::DerivedValues;
use crate::mechanism::MechanismReport;
use crate::record::{AnalysisMode, ClinicalRecord, Parameter};
use crate::severity::{SeverityAssessment, SeverityTier};
use crate::sid::SidProfile;
use crate::swap::SwapSuspicion;

/// A condition that prevents analysis entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockingError {
    #[error("{parameter} is required in this mode but missing; no default is assumed")]
    MissingRequired { parameter: Parameter },
    #[error("{parameter} = {value} is outside physiologically possible limits ({min}-{max})")]
    ImpossibleValue {
        parameter: Parameter,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Category of a non-blocking advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryKind {
    /// Value outside the plausible band but not impossible.
    ImplausibleValue,
    /// Value graded critical by the severity table.
    CriticalValue,
    /// Value graded severe by the severity table.
    SevereValue,
    /// Optional parameter absent; the affected outputs are reported
    /// absent, never estimated.
    MissingOptional,
    /// Measured and calculated derived values differ beyond tolerance.
    DerivedValueMismatch,
    /// Base excess contradicts the pH-implied direction; probable
    /// sign-entry error.
    SignConsistencyConflict,
    /// Albumin magnitude suggested g/L; rescaled to g/dL.
    AlbuminUnitConverted,
    /// Base-deficit input normalized to signed base excess.
    BaseDeficitNormalized,
    /// Possible Na/Cl column transposition (values untouched).
    SwapSuspicion,
    /// Negative SIG beyond tolerance; unmeasured cations are rare and
    /// may indicate measurement or computation error.
    UnusualNegativeSig,
    /// Physiologically unusual parameter combination.
    UnusualCombination,
}

/// One non-blocking advisory message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub kind: AdvisoryKind,
    pub message: String,
}

impl Advisory {
    pub fn new(kind: AdvisoryKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Structured outcome of validating one record for a mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub assessments: Vec<SeverityAssessment>,
    pub blocking: Vec<BlockingError>,
    pub warnings: Vec<Advisory>,
}

impl ValidationReport {
    pub fn is_blocked(&self) -> bool {
        !self.blocking.is_empty()
    }

    /// Maximum severity tier across all assessed parameters.
    pub fn overall_severity(&self) -> SeverityTier {
        self.assessments
            .iter()
            .map(|a| a.tier)
            .max()
            .unwrap_or_default()
    }

    pub fn assessment(&self, parameter: Parameter) -> Option<&SeverityAssessment> {
        self.assessments.iter().find(|a| a.parameter == parameter)
    }
}

/// Terminal, immutable output of one analysis call.
///
/// Assembled once by the result aggregator and owned by the caller that
/// requested it. Every warning or error collected upstream is carried
/// here; nothing is dropped. The computed sections are `None` only when
/// validation blocked the analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub record: ClinicalRecord,
    pub mode: AnalysisMode,
    pub validation: ValidationReport,
    pub swap: SwapSuspicion,
    pub derived: Option<DerivedValues>,
    pub sid: Option<SidProfile>,
    pub compensation: Option<CompensationAssessment>,
    pub mechanisms: Option<MechanismReport>,
    /// All non-blocking advisories, in pipeline order: validation
    /// warnings first, then swap, derived-value, SID and mechanism
    /// advisories. Callers that sanitized raw input prepend any
    /// sanitization advisories ahead of these.
    pub advisories: Vec<Advisory>,
}

impl AnalysisResult {
    pub fn is_blocked(&self) -> bool {
        self.validation.is_blocked()
    }

    pub fn blocking_errors(&self) -> &[BlockingError] {
        &self.validation.blocking
    }

    pub fn overall_severity(&self) -> SeverityTier {
        self.validation.overall_severity()
    }

    pub fn advisories_of(&self, kind: AdvisoryKind) -> impl Iterator<Item = &Advisory> {
        self.advisories.iter().filter(move |a| a.kind == kind)
    }
}
