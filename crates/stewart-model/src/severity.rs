use serde::{Deserialize, Serialize};

use crate::record::Parameter;

/// Five-tier severity grading against literature-referenced thresholds.
///
/// Ordering is by clinical urgency so the overall case severity is the
/// maximum tier across assessed parameters.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    #[default]
    Normal,
    Mild,
    Moderate,
    Severe,
    Critical,
}

impl SeverityTier {
    pub fn as_str(self) -> &'static str {
        match self {
            SeverityTier::Normal => "normal",
            SeverityTier::Mild => "mild",
            SeverityTier::Moderate => "moderate",
            SeverityTier::Severe => "severe",
            SeverityTier::Critical => "critical",
        }
    }
}

impl std::fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity grade for a single assessed parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeverityAssessment {
    pub parameter: Parameter,
    pub value: f64,
    pub tier: SeverityTier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_ordering_follows_urgency() {
        assert!(SeverityTier::Critical > SeverityTier::Severe);
        assert!(SeverityTier::Severe > SeverityTier::Moderate);
        assert!(SeverityTier::Moderate > SeverityTier::Mild);
        assert!(SeverityTier::Mild > SeverityTier::Normal);
    }

    #[test]
    fn tier_serializes_lowercase() {
        let json = serde_json::to_string(&SeverityTier::Critical).expect("serialize tier");
        assert_eq!(json, "\"critical\"");
    }
}
