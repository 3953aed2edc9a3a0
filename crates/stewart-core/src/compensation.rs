//! Compensation adequacy against expected-response formulas.
//!
//! The primary disturbance is identified from pH, pCO2 and base excess,
//! then the observed compensating value is compared to the literature
//! formula for that disturbance. Metabolic primaries use the expected
//! pCO2 (Winter's for acidosis); respiratory primaries use the expected
//! HCO3 shift with distinct acute and chronic slopes.

use stewart_model::{
    CompensationAssessment, CompensationVerdict, PrimaryDisturbance, RespiratoryAcuity,
};

use crate::constants::{
    COMPENSATION_TOLERANCE, CompensationFormula, HCO3_NORMAL, METABOLIC_ALKALOSIS_RESPONSE,
    PCO2_NORMAL, PCO2_NORMAL_HIGH, PCO2_NORMAL_LOW, PH_NORMAL_HIGH, PH_NORMAL_LOW,
    RESPIRATORY_ACIDOSIS_SLOPES, RESPIRATORY_ALKALOSIS_SLOPES, SIGNIFICANCE_THRESHOLD, WINTERS,
    round1,
};

/// Winter's formula: expected pCO2 for a metabolic acidosis.
pub fn expected_pco2_metabolic_acidosis(hco3: f64) -> f64 {
    (WINTERS.slope * hco3 + WINTERS.intercept).round()
}

/// Expected pCO2 for a metabolic alkalosis.
pub fn expected_pco2_metabolic_alkalosis(hco3: f64) -> f64 {
    (METABOLIC_ALKALOSIS_RESPONSE.slope * hco3 + METABOLIC_ALKALOSIS_RESPONSE.intercept).round()
}

/// Expected HCO3 for a respiratory acidosis at the given acuity slope.
pub fn expected_hco3_respiratory_acidosis(pco2: f64, chronic: bool) -> f64 {
    let slope = if chronic {
        RESPIRATORY_ACIDOSIS_SLOPES.chronic
    } else {
        RESPIRATORY_ACIDOSIS_SLOPES.acute
    };
    round1(HCO3_NORMAL + slope * (pco2 - PCO2_NORMAL))
}

/// Expected HCO3 for a respiratory alkalosis at the given acuity slope.
pub fn expected_hco3_respiratory_alkalosis(pco2: f64, chronic: bool) -> f64 {
    let slope = if chronic {
        RESPIRATORY_ALKALOSIS_SLOPES.chronic
    } else {
        RESPIRATORY_ALKALOSIS_SLOPES.acute
    };
    round1(HCO3_NORMAL - slope * (PCO2_NORMAL - pco2))
}

/// Assess compensation for the primary disturbance implied by the panel.
pub fn assess_compensation(ph: f64, pco2: f64, hco3: f64, be: f64) -> CompensationAssessment {
    let acidemia = ph < PH_NORMAL_LOW;
    let alkalemia = ph > PH_NORMAL_HIGH;
    let metabolic_acidosis = be < -SIGNIFICANCE_THRESHOLD;
    let metabolic_alkalosis = be > SIGNIFICANCE_THRESHOLD;

    if metabolic_acidosis && (acidemia || ph <= PH_NORMAL_HIGH) {
        return assess_metabolic(
            PrimaryDisturbance::MetabolicAcidosis,
            pco2,
            expected_pco2_metabolic_acidosis(hco3),
            WINTERS,
        );
    }

    if metabolic_alkalosis && (alkalemia || ph >= PH_NORMAL_LOW) {
        return assess_metabolic(
            PrimaryDisturbance::MetabolicAlkalosis,
            pco2,
            expected_pco2_metabolic_alkalosis(hco3),
            METABOLIC_ALKALOSIS_RESPONSE,
        );
    }

    if pco2 > PCO2_NORMAL_HIGH && acidemia {
        return assess_respiratory(
            PrimaryDisturbance::RespiratoryAcidosis,
            hco3,
            expected_hco3_respiratory_acidosis(pco2, false),
            expected_hco3_respiratory_acidosis(pco2, true),
        );
    }

    if pco2 < PCO2_NORMAL_LOW && alkalemia {
        return assess_respiratory(
            PrimaryDisturbance::RespiratoryAlkalosis,
            hco3,
            expected_hco3_respiratory_alkalosis(pco2, false),
            expected_hco3_respiratory_alkalosis(pco2, true),
        );
    }

    CompensationAssessment {
        primary: PrimaryDisturbance::None,
        summary: "no clear primary disturbance".to_string(),
        ..CompensationAssessment::default()
    }
}

fn assess_metabolic(
    primary: PrimaryDisturbance,
    observed_pco2: f64,
    expected_pco2: f64,
    formula: CompensationFormula,
) -> CompensationAssessment {
    let diff = round1(observed_pco2 - expected_pco2);

    // For a metabolic acidosis the compensating system blows CO2 off, so
    // observed above expected means the respiratory response fell short;
    // for an alkalosis the directions mirror.
    let (verdict, summary) = if diff.abs() <= formula.tolerance {
        (
            CompensationVerdict::Adequate,
            format!("adequate respiratory compensation (expected pCO2 {expected_pco2:.0} +/- {tol:.0} mmHg)", tol = formula.tolerance),
        )
    } else {
        let observed_high = diff > 0.0;
        let undercompensated = match primary {
            PrimaryDisturbance::MetabolicAcidosis => observed_high,
            _ => !observed_high,
        };
        if undercompensated {
            (
                CompensationVerdict::Undercompensated,
                format!(
                    "pCO2 {delta:.0} mmHg {side} expected {expected_pco2:.0}; respiratory \
                     compensation short of expected, or a superimposed respiratory process \
                     in the same direction as the primary disturbance",
                    delta = diff.abs(),
                    side = if observed_high { "above" } else { "below" },
                ),
            )
        } else {
            (
                CompensationVerdict::Excessive,
                format!(
                    "pCO2 {delta:.0} mmHg {side} expected {expected_pco2:.0}; response beyond \
                     expected compensation, suggesting a second, independent respiratory \
                     disorder (mixed picture)",
                    delta = diff.abs(),
                    side = if observed_high { "above" } else { "below" },
                ),
            )
        }
    };

    CompensationAssessment {
        primary,
        expected_pco2: Some(expected_pco2),
        expected_hco3: None,
        verdict: Some(verdict),
        acuity: None,
        observed_expected_diff: Some(diff),
        summary,
    }
}

fn assess_respiratory(
    primary: PrimaryDisturbance,
    observed_hco3: f64,
    expected_acute: f64,
    expected_chronic: f64,
) -> CompensationAssessment {
    // For acidosis the chronic expectation is above the acute one; for
    // alkalosis it is below. Normalize to a low/high band pair.
    let (band_low, band_high) = if expected_acute <= expected_chronic {
        (expected_acute, expected_chronic)
    } else {
        (expected_chronic, expected_acute)
    };
    let acute_is_low = expected_acute <= expected_chronic;

    let within = |expected: f64| (observed_hco3 - expected).abs() <= COMPENSATION_TOLERANCE;

    if within(expected_acute) {
        return respiratory_result(
            primary,
            expected_acute,
            RespiratoryAcuity::Acute,
            Some(CompensationVerdict::Adequate),
            Some(round1(observed_hco3 - expected_acute)),
            format!("acute pattern; expected HCO3 {expected_acute:.1} +/- {COMPENSATION_TOLERANCE:.0} mEq/L"),
        );
    }
    if within(expected_chronic) {
        return respiratory_result(
            primary,
            expected_chronic,
            RespiratoryAcuity::Chronic,
            Some(CompensationVerdict::Adequate),
            Some(round1(observed_hco3 - expected_chronic)),
            format!("chronic pattern; expected HCO3 {expected_chronic:.1} +/- {COMPENSATION_TOLERANCE:.0} mEq/L"),
        );
    }

    if observed_hco3 > band_low && observed_hco3 < band_high {
        // Between the acute and chronic expectations.
        return respiratory_result(
            primary,
            expected_acute,
            RespiratoryAcuity::Intermediate,
            None,
            None,
            format!(
                "HCO3 {observed_hco3:.1} between acute ({expected_acute:.1}) and chronic \
                 ({expected_chronic:.1}) expectations; subacute course or superimposed \
                 metabolic process"
            ),
        );
    }

    // Beyond both bands: the metabolic side moved further than any
    // compensation explains.
    let beyond_chronic = if acute_is_low {
        observed_hco3 > band_high
    } else {
        observed_hco3 < band_low
    };
    if beyond_chronic {
        respiratory_result(
            primary,
            expected_chronic,
            RespiratoryAcuity::Chronic,
            Some(CompensationVerdict::Excessive),
            Some(round1(observed_hco3 - expected_chronic)),
            format!(
                "HCO3 {observed_hco3:.1} beyond even the chronic expectation \
                 ({expected_chronic:.1}); suggests an independent metabolic disorder \
                 (mixed picture)"
            ),
        )
    } else {
        respiratory_result(
            primary,
            expected_acute,
            RespiratoryAcuity::Acute,
            Some(CompensationVerdict::Undercompensated),
            Some(round1(observed_hco3 - expected_acute)),
            format!(
                "HCO3 {observed_hco3:.1} short of even the acute expectation \
                 ({expected_acute:.1}); metabolic shift in the same direction as the \
                 primary disturbance"
            ),
        )
    }
}

fn respiratory_result(
    primary: PrimaryDisturbance,
    expected_hco3: f64,
    acuity: RespiratoryAcuity,
    verdict: Option<CompensationVerdict>,
    diff: Option<f64>,
    summary: String,
) -> CompensationAssessment {
    CompensationAssessment {
        primary,
        expected_pco2: None,
        expected_hco3: Some(expected_hco3),
        verdict,
        acuity: Some(acuity),
        observed_expected_diff: diff,
        summary,
    }
}
