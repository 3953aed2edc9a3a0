use serde::{Deserialize, Serialize};

/// The three nested Strong Ion Difference approximations plus the
/// effective SID, Strong Ion Gap and anion gap.
///
/// A tier is `None` whenever any of its constituent inputs is absent;
/// no tier is ever estimated from population averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidProfile {
    /// Na - Cl (normal ~38 mEq/L).
    pub sid_simple: f64,
    /// Na - Cl - lactate (normal ~37 mEq/L); requires lactate.
    pub sid_basic: Option<f64>,
    /// (Na + K + Ca + Mg) - (Cl + lactate), the apparent SID (SIDa,
    /// normal ~40 mEq/L); requires K, Ca, Mg and lactate.
    pub sid_full: Option<f64>,
    /// Effective SID (SIDe) from the albumin/phosphate buffer relation;
    /// requires albumin and phosphate.
    pub sid_effective: Option<f64>,
    /// SIG = SIDa - SIDe; present only when both tiers are.
    pub sig: Option<f64>,
    /// Total weak-acid buffer concentration; requires albumin, the
    /// phosphate term is added when available.
    pub atot: Option<f64>,
    /// Na - (Cl + HCO3).
    pub anion_gap: f64,
    /// Anion gap corrected for albumin; requires albumin.
    pub anion_gap_corrected: Option<f64>,
}

impl SidProfile {
    /// Positive SIG beyond the tolerance suggests unmeasured anions.
    pub fn has_unmeasured_anions(&self, tolerance: f64) -> bool {
        self.sig.is_some_and(|sig| sig > tolerance)
    }

    /// Negative SIG beyond the tolerance suggests unmeasured cations,
    /// which is rare and worth independent verification.
    pub fn has_unmeasured_cations(&self, tolerance: f64) -> bool {
        self.sig.is_some_and(|sig| sig < -tolerance)
    }
}
