//! Bicarbonate and base-excess derivation with measured-value cross-checks.
//!
//! Both derived quantities follow the two-slot model: the computed value
//! is always present when pH/pCO2 allow it, and a caller-supplied
//! measured value rides alongside for a tolerance-based consistency
//! check. The engine flags conflicts; it never replaces or corrects the
//! value as entered.

use stewart_model::{Advisory, AdvisoryKind, DerivedValues, ValueSource};

use crate::constants::{
    DERIVED_MISMATCH_TOLERANCE, HH_CO2_SOLUBILITY, HH_PKA, PH_NORMAL_HIGH, PH_NORMAL_LOW,
    SIGNIFICANCE_THRESHOLD, VAN_SLYKE, round1,
};

/// Henderson-Hasselbalch: `HCO3 = 0.03 x pCO2 x 10^(pH - 6.1)`.
pub fn calculate_hco3(ph: f64, pco2: f64) -> f64 {
    round1(HH_CO2_SOLUBILITY * pco2 * 10f64.powf(ph - HH_PKA))
}

/// Van Slyke approximation: `BE = 0.93 x (HCO3 - 24.4) + 14.8 x (pH - 7.40)`.
pub fn calculate_be(ph: f64, hco3: f64) -> f64 {
    round1(
        VAN_SLYKE.hco3_coefficient * (hco3 - VAN_SLYKE.hco3_reference)
            + VAN_SLYKE.ph_coefficient * (ph - VAN_SLYKE.ph_reference),
    )
}

/// Compute derived values from pH/pCO2, cross-checking any measured
/// HCO3/BE the caller supplied.
pub fn compute_derived_values(
    ph: f64,
    pco2: f64,
    hco3_measured: Option<f64>,
    be_measured: Option<f64>,
) -> DerivedValues {
    let hco3_calculated = calculate_hco3(ph, pco2);
    let (hco3_used, hco3_source) = match hco3_measured {
        Some(measured) => (measured, ValueSource::Measured),
        None => (hco3_calculated, ValueSource::Calculated),
    };
    let hco3_deviation = hco3_measured.map(|m| round1((m - hco3_calculated).abs()));

    // BE is derived from the HCO3 actually in use so a measured HCO3
    // carries through consistently.
    let be_calculated = calculate_be(ph, hco3_used);
    let (be_used, be_source) = match be_measured {
        Some(measured) => (measured, ValueSource::Measured),
        None => (be_calculated, ValueSource::Calculated),
    };
    let be_deviation = be_measured.map(|m| round1((m - be_calculated).abs()));

    let sign_conflict = has_sign_conflict(ph, be_used);

    DerivedValues {
        hco3_calculated,
        hco3_measured,
        hco3_used,
        hco3_source,
        hco3_deviation,
        be_calculated,
        be_measured,
        be_used,
        be_source,
        be_deviation,
        sign_consistency_ok: !sign_conflict,
        be_flipped_suggestion: sign_conflict.then(|| round1(-be_used)),
    }
}

/// Acidemia with a clearly positive BE, or alkalemia with a clearly
/// negative BE, is a probable sign-entry error.
fn has_sign_conflict(ph: f64, be: f64) -> bool {
    (ph < PH_NORMAL_LOW && be > SIGNIFICANCE_THRESHOLD)
        || (ph > PH_NORMAL_HIGH && be < -SIGNIFICANCE_THRESHOLD)
}

/// Advisories raised by the derived-value cross-checks.
pub fn derived_advisories(derived: &DerivedValues) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    if let Some(deviation) = derived.hco3_deviation
        && deviation > DERIVED_MISMATCH_TOLERANCE
    {
        advisories.push(Advisory::new(
            AdvisoryKind::DerivedValueMismatch,
            format!(
                "measured HCO3 differs from Henderson-Hasselbalch value by {deviation} mEq/L \
                 (tolerance {DERIVED_MISMATCH_TOLERANCE}); check pH/pCO2/HCO3 entries"
            ),
        ));
    }

    if let Some(deviation) = derived.be_deviation
        && deviation > DERIVED_MISMATCH_TOLERANCE
    {
        advisories.push(Advisory::new(
            AdvisoryKind::DerivedValueMismatch,
            format!(
                "measured BE differs from calculated value by {deviation} mEq/L \
                 (tolerance {DERIVED_MISMATCH_TOLERANCE}); check entries"
            ),
        ));
    }

    if !derived.sign_consistency_ok {
        let flipped = derived.be_flipped_suggestion.unwrap_or(-derived.be_used);
        advisories.push(Advisory::new(
            AdvisoryKind::SignConsistencyConflict,
            format!(
                "BE {be:+.1} contradicts the pH-implied acid-base direction; probable \
                 sign-entry error. Value kept as entered; sign-flipped alternative for \
                 display: {flipped:+.1}",
                be = derived.be_used,
            ),
        ));
    }

    advisories
}
