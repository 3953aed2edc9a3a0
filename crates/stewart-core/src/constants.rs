//! Literature-referenced formula constants.
//!
//! Every coefficient and tolerance used by the calculation stages lives
//! here as a named constant so each threshold boundary can be unit
//! tested on its own, independent of the pipeline.

/// Henderson-Hasselbalch pKa for the bicarbonate buffer system.
pub const HH_PKA: f64 = 6.1;
/// CO2 solubility coefficient (mEq/L per mmHg).
pub const HH_CO2_SOLUBILITY: f64 = 0.03;

/// Van Slyke base-excess approximation:
/// `BE = 0.93 x (HCO3 - 24.4) + 14.8 x (pH - 7.40)`.
#[derive(Debug, Clone, Copy)]
pub struct VanSlykeCoefficients {
    pub hco3_coefficient: f64,
    pub hco3_reference: f64,
    pub ph_coefficient: f64,
    pub ph_reference: f64,
}

pub const VAN_SLYKE: VanSlykeCoefficients = VanSlykeCoefficients {
    hco3_coefficient: 0.93,
    hco3_reference: 24.4,
    ph_coefficient: 14.8,
    ph_reference: 7.40,
};

/// Figge/Fencl weak-acid buffer coefficients for the effective SID:
/// `SIDe = HCO3 + alb_gL x (0.123 x pH - 0.631) + po4 x (0.309 x pH - 0.469)`.
#[derive(Debug, Clone, Copy)]
pub struct BufferCoefficients {
    pub albumin_ph: f64,
    pub albumin_constant: f64,
    pub phosphate_ph: f64,
    pub phosphate_constant: f64,
}

pub const SIDE_BUFFER: BufferCoefficients = BufferCoefficients {
    albumin_ph: 0.123,
    albumin_constant: 0.631,
    phosphate_ph: 0.309,
    phosphate_constant: 0.469,
};

/// Atot = 0.123 x albumin (g/L) + 0.309 x phosphate (mmol/L).
pub const ATOT_ALBUMIN_COEFFICIENT: f64 = 0.123;
pub const ATOT_PHOSPHATE_COEFFICIENT: f64 = 0.309;

// Reference (mid-normal) values used by effect calculations.
pub const PH_NORMAL_LOW: f64 = 7.35;
pub const PH_NORMAL_HIGH: f64 = 7.45;
pub const PCO2_NORMAL: f64 = 40.0;
pub const PCO2_NORMAL_LOW: f64 = 35.0;
pub const PCO2_NORMAL_HIGH: f64 = 45.0;
pub const HCO3_NORMAL: f64 = 24.0;
pub const NA_REFERENCE: f64 = 140.0;
pub const CL_REFERENCE: f64 = 100.0;
/// Fencl reference albumin in g/dL (also used by the corrected anion gap).
pub const ALBUMIN_REFERENCE_GDL: f64 = 4.2;

/// Normal values for the SID ladder tiers.
pub const SID_SIMPLE_NORMAL: f64 = 38.0;
pub const SID_BASIC_NORMAL: f64 = 37.0;
pub const SID_FULL_NORMAL: f64 = 40.0;

/// Measured-vs-calculated tolerance for HCO3 and BE (mEq/L).
pub const DERIVED_MISMATCH_TOLERANCE: f64 = 2.0;
/// Deviations under this magnitude are treated as clinically silent.
pub const SIGNIFICANCE_THRESHOLD: f64 = 2.0;
/// SIG beyond this magnitude implies unmeasured ions.
pub const SIG_TOLERANCE: f64 = 2.0;

/// Free-water effect slope: 0.3 x (Na - 140).
pub const FREE_WATER_COEFFICIENT: f64 = 0.3;
/// Albumin effect slope: 2.5 x (4.2 - albumin g/dL).
pub const ALBUMIN_EFFECT_COEFFICIENT: f64 = 2.5;

/// Linear expected-compensation response `expected = slope x HCO3 + intercept`.
#[derive(Debug, Clone, Copy)]
pub struct CompensationFormula {
    pub slope: f64,
    pub intercept: f64,
    pub tolerance: f64,
}

/// Winter's formula for metabolic acidosis: expected pCO2 = 1.5 x HCO3 + 8 (+/- 2).
pub const WINTERS: CompensationFormula = CompensationFormula {
    slope: 1.5,
    intercept: 8.0,
    tolerance: 2.0,
};

/// Expected respiratory response to metabolic alkalosis:
/// expected pCO2 = 0.7 x HCO3 + 21 (+/- 2).
pub const METABOLIC_ALKALOSIS_RESPONSE: CompensationFormula = CompensationFormula {
    slope: 0.7,
    intercept: 21.0,
    tolerance: 2.0,
};

/// Expected HCO3 shift per mmHg of pCO2 change for a respiratory
/// disturbance, acute vs. chronic.
#[derive(Debug, Clone, Copy)]
pub struct RespiratorySlopes {
    pub acute: f64,
    pub chronic: f64,
}

/// Respiratory acidosis: HCO3 rises 1 (acute) / 3.5 (chronic) per 10 mmHg pCO2 rise.
pub const RESPIRATORY_ACIDOSIS_SLOPES: RespiratorySlopes = RespiratorySlopes {
    acute: 0.1,
    chronic: 0.35,
};

/// Respiratory alkalosis: HCO3 falls 2 (acute) / 5 (chronic) per 10 mmHg pCO2 fall.
pub const RESPIRATORY_ALKALOSIS_SLOPES: RespiratorySlopes = RespiratorySlopes {
    acute: 0.2,
    chronic: 0.5,
};

/// Tolerance band for expected-HCO3 comparisons (mEq/L).
pub const COMPENSATION_TOLERANCE: f64 = 2.0;

/// Lactate share-of-total bands (percent).
pub const LACTATE_SHARE_SIGNIFICANT: f64 = 25.0;
pub const LACTATE_SHARE_DOMINANT: f64 = 50.0;

/// Round to one decimal, the reporting precision for mEq/L quantities.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round1_reporting_precision() {
        assert_eq!(round1(23.943), 23.9);
        assert_eq!(round1(-0.465), -0.5);
        assert_eq!(round1(40.0), 40.0);
    }

    #[test]
    fn winters_boundary_values() {
        // HCO3 12 -> expected pCO2 26 +/- 2
        let expected = WINTERS.slope * 12.0 + WINTERS.intercept;
        assert_eq!(expected, 26.0);
        assert_eq!(WINTERS.tolerance, 2.0);
    }

    #[test]
    fn respiratory_slopes_acute_below_chronic() {
        assert!(RESPIRATORY_ACIDOSIS_SLOPES.acute < RESPIRATORY_ACIDOSIS_SLOPES.chronic);
        assert!(RESPIRATORY_ALKALOSIS_SLOPES.acute < RESPIRATORY_ALKALOSIS_SLOPES.chronic);
    }
}
