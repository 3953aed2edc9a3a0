use serde::{Deserialize, Serialize};

/// Physiological mechanisms that can drive a base deficit or excess.
///
/// Output language stays mechanism-descriptive on purpose: the analyzer
/// characterizes physiology, it never names a disease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mechanism {
    FreeWater,
    Chloride,
    Albumin,
    Lactate,
    UnmeasuredAnion,
}

impl Mechanism {
    /// Tie-break priority for dominance ranking. Unmeasured-anion and
    /// lactate processes carry higher clinical urgency.
    pub fn priority(self) -> u8 {
        match self {
            Mechanism::UnmeasuredAnion => 4,
            Mechanism::Lactate => 3,
            Mechanism::Chloride => 2,
            Mechanism::Albumin => 1,
            Mechanism::FreeWater => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mechanism::FreeWater => "free-water",
            Mechanism::Chloride => "chloride",
            Mechanism::Albumin => "albumin",
            Mechanism::Lactate => "lactate",
            Mechanism::UnmeasuredAnion => "unmeasured-anion",
        }
    }
}

impl std::fmt::Display for Mechanism {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One mechanism's quantified contribution to the total derangement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MechanismContribution {
    pub mechanism: Mechanism,
    /// Signed magnitude in mEq/L; negative is acidifying.
    pub meq: f64,
    /// Share of the summed absolute contributions, 0-100.
    pub share_percent: f64,
}

/// Lactate's weight within the total contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LactateShare {
    /// Under 25% of the total.
    Contributing,
    /// 25-50% of the total.
    Significant,
    /// Over 50% of the total.
    Dominant,
}

/// Contribution-ranked mechanism attribution for one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MechanismReport {
    /// All quantified contributions, ordered by descending absolute
    /// magnitude (ties broken by mechanism priority).
    pub contributions: Vec<MechanismContribution>,
    /// Highest absolute contribution, when any is clinically
    /// significant.
    pub dominant: Option<Mechanism>,
    /// Lactate share classification, when lactate contributed.
    pub lactate_share: Option<LactateShare>,
    /// Mechanism-descriptive one-line summary, e.g.
    /// "chloride-mediated metabolic acidosis".
    pub summary: String,
}

impl MechanismReport {
    pub fn contribution(&self, mechanism: Mechanism) -> Option<&MechanismContribution> {
        self.contributions.iter().find(|c| c.mechanism == mechanism)
    }
}
