use serde::{Deserialize, Serialize};

/// Primary acid-base disturbance identified from pH, pCO2 and base excess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryDisturbance {
    /// No clear primary disturbance (normal panel, or a mixed picture
    /// that does not fit a single primary pattern).
    #[default]
    None,
    MetabolicAcidosis,
    MetabolicAlkalosis,
    RespiratoryAcidosis,
    RespiratoryAlkalosis,
}

impl PrimaryDisturbance {
    pub fn label(self) -> &'static str {
        match self {
            PrimaryDisturbance::None => "none",
            PrimaryDisturbance::MetabolicAcidosis => "metabolic acidosis",
            PrimaryDisturbance::MetabolicAlkalosis => "metabolic alkalosis",
            PrimaryDisturbance::RespiratoryAcidosis => "respiratory acidosis",
            PrimaryDisturbance::RespiratoryAlkalosis => "respiratory alkalosis",
        }
    }
}

impl std::fmt::Display for PrimaryDisturbance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Adequacy of the observed compensatory response against the
/// expected-response formula for the primary disturbance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompensationVerdict {
    /// Observed value within the formula's tolerance band.
    Adequate,
    /// Compensatory response short of expected; the compensating system
    /// is pushing in the same direction as the primary disturbance.
    Undercompensated,
    /// Compensation beyond expected, suggesting a second, independent
    /// disorder rather than a stronger response.
    Excessive,
}

/// Acute vs. chronic classification for a primary respiratory
/// disturbance, from the matching expected-HCO3 slope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RespiratoryAcuity {
    Acute,
    Chronic,
    /// Between the acute and chronic expectations; subacute course or a
    /// superimposed metabolic process.
    Intermediate,
}

/// Compensation assessment for the identified primary disturbance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompensationAssessment {
    pub primary: PrimaryDisturbance,
    /// Expected pCO2 from Winter's formula (metabolic acidosis) or the
    /// metabolic alkalosis response formula.
    pub expected_pco2: Option<f64>,
    /// Expected HCO3 for a respiratory disturbance (slope matching the
    /// assigned acuity).
    pub expected_hco3: Option<f64>,
    pub verdict: Option<CompensationVerdict>,
    pub acuity: Option<RespiratoryAcuity>,
    /// Observed minus expected, in the units of the compensating value.
    pub observed_expected_diff: Option<f64>,
    pub summary: String,
}
