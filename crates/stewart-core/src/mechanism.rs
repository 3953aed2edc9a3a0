//! Contribution-based mechanism attribution.
//!
//! Each candidate mechanism's contribution to the base deficit/excess is
//! quantified in mEq/L (Fencl-Stewart partition), dominance is ranked by
//! absolute magnitude with a fixed clinical-urgency tie-break, and
//! lactate is additionally classified by its share of the total. Output
//! language stays mechanism-descriptive throughout; no disease labels.

use stewart_model::{
    ClinicalRecord, DerivedValues, LactateShare, Mechanism, MechanismContribution,
    MechanismReport, SidProfile,
};

use crate::constants::{
    ALBUMIN_EFFECT_COEFFICIENT, ALBUMIN_REFERENCE_GDL, CL_REFERENCE, FREE_WATER_COEFFICIENT,
    LACTATE_SHARE_DOMINANT, LACTATE_SHARE_SIGNIFICANT, NA_REFERENCE,
    SIGNIFICANCE_THRESHOLD, round1,
};

/// Free-water effect of sodium deviation: 0.3 x (Na - 140).
pub fn free_water_effect(na: f64) -> f64 {
    round1(FREE_WATER_COEFFICIENT * (na - NA_REFERENCE))
}

/// Chloride effect relative to a sodium-adjusted reference:
/// 100 - Cl x (140 / Na). Hyperchloremia acidifies (negative).
pub fn chloride_effect(na: f64, cl: f64) -> f64 {
    round1(CL_REFERENCE - cl * (NA_REFERENCE / na))
}

/// Albumin effect: 2.5 x (4.2 - albumin g/dL). Hypoalbuminemia
/// alkalinizes (positive).
pub fn albumin_effect(albumin_gdl: f64) -> f64 {
    round1(ALBUMIN_EFFECT_COEFFICIENT * (ALBUMIN_REFERENCE_GDL - albumin_gdl))
}

/// Lactate effect: each mmol/L of lactate is one mEq/L of acid load.
pub fn lactate_effect(lactate: f64) -> f64 {
    round1(-lactate)
}

/// Quantify and rank mechanism contributions for a validated record.
pub fn analyze_mechanisms(
    record: &ClinicalRecord,
    derived: &DerivedValues,
    sid: &SidProfile,
) -> Option<MechanismReport> {
    let na = record.na?;
    let cl = record.cl?;

    let free_water = free_water_effect(na);
    let chloride = chloride_effect(na, cl);
    let albumin = record.albumin.map(albumin_effect);
    let lactate = record.lactate.map(lactate_effect);

    // Unmeasured anions: the SIG quantifies them directly when the full
    // ladder is available; otherwise the residual of the base excess
    // after the measured effects stands in.
    let unmeasured = match sid.sig {
        Some(sig) => round1(-sig),
        None => {
            let explained =
                free_water + chloride + albumin.unwrap_or(0.0) + lactate.unwrap_or(0.0);
            round1(derived.be_used - explained)
        }
    };

    let mut contributions: Vec<MechanismContribution> = [
        Some((Mechanism::FreeWater, free_water)),
        Some((Mechanism::Chloride, chloride)),
        albumin.map(|meq| (Mechanism::Albumin, meq)),
        lactate.map(|meq| (Mechanism::Lactate, meq)),
        Some((Mechanism::UnmeasuredAnion, unmeasured)),
    ]
    .into_iter()
    .flatten()
    .map(|(mechanism, meq)| MechanismContribution {
        mechanism,
        meq,
        share_percent: 0.0,
    })
    .collect();

    let total_abs: f64 = contributions.iter().map(|c| c.meq.abs()).sum();
    if total_abs > 0.0 {
        for contribution in &mut contributions {
            contribution.share_percent = round1(contribution.meq.abs() / total_abs * 100.0);
        }
    }

    contributions.sort_by(|a, b| {
        b.meq
            .abs()
            .partial_cmp(&a.meq.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| b.mechanism.priority().cmp(&a.mechanism.priority()))
    });

    let dominant = contributions
        .first()
        .filter(|c| c.meq.abs() >= SIGNIFICANCE_THRESHOLD)
        .map(|c| c.mechanism);

    let lactate_share = contributions
        .iter()
        .find(|c| c.mechanism == Mechanism::Lactate)
        .filter(|_| total_abs > 0.0)
        .map(|c| classify_lactate_share(c.share_percent));

    let summary = match (dominant, contributions.first()) {
        (Some(mechanism), Some(top)) => {
            let direction = if top.meq < 0.0 {
                "metabolic acidosis"
            } else {
                "metabolic alkalosis"
            };
            format!("{mechanism}-mediated {direction}")
        }
        _ => "no dominant metabolic mechanism".to_string(),
    };

    Some(MechanismReport {
        contributions,
        dominant,
        lactate_share,
        summary,
    })
}

fn classify_lactate_share(share_percent: f64) -> LactateShare {
    if share_percent > LACTATE_SHARE_DOMINANT {
        LactateShare::Dominant
    } else if share_percent >= LACTATE_SHARE_SIGNIFICANT {
        LactateShare::Significant
    } else {
        LactateShare::Contributing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stewart_model::ValueSource;

    fn derived_with_be(be: f64) -> DerivedValues {
        DerivedValues {
            hco3_calculated: 24.0,
            hco3_measured: None,
            hco3_used: 24.0,
            hco3_source: ValueSource::Calculated,
            hco3_deviation: None,
            be_calculated: be,
            be_measured: None,
            be_used: be,
            be_source: ValueSource::Calculated,
            be_deviation: None,
            sign_consistency_ok: true,
            be_flipped_suggestion: None,
        }
    }

    fn sid_without_sig() -> SidProfile {
        SidProfile {
            sid_simple: 40.0,
            sid_basic: None,
            sid_full: None,
            sid_effective: None,
            sig: None,
            atot: None,
            anion_gap: 16.0,
            anion_gap_corrected: None,
        }
    }

    #[test]
    fn effect_formulas_at_reference_are_zero() {
        assert_eq!(free_water_effect(140.0), 0.0);
        assert_eq!(chloride_effect(140.0, 100.0), 0.0);
        assert_eq!(albumin_effect(4.2), 0.0);
    }

    #[test]
    fn lactate_effect_tracks_the_full_lactate_load() {
        assert_eq!(lactate_effect(0.0), 0.0);
        assert_eq!(lactate_effect(0.5), -0.5);
        assert_eq!(lactate_effect(7.5), -7.5);
    }

    #[test]
    fn hyperchloremia_acidifies_after_sodium_adjustment() {
        assert!(chloride_effect(140.0, 115.0) < 0.0);
        // Same chloride with proportionally high sodium is not an excess.
        assert!(chloride_effect(154.0, 110.0).abs() < 0.1);
    }

    #[test]
    fn dominant_mechanism_is_largest_absolute_contribution() {
        let record = ClinicalRecord {
            ph: Some(7.22),
            pco2: Some(30.0),
            na: Some(140.0),
            cl: Some(100.0),
            lactate: Some(9.0),
            ..ClinicalRecord::default()
        };
        let report = analyze_mechanisms(&record, &derived_with_be(-9.0), &sid_without_sig())
            .expect("report");
        assert_eq!(report.dominant, Some(Mechanism::Lactate));
        assert_eq!(report.lactate_share, Some(LactateShare::Dominant));
        assert!(report.summary.contains("lactate-mediated metabolic acidosis"));
    }

    #[test]
    fn tie_breaks_prefer_higher_urgency_mechanism() {
        // Lactate 4 -> -4; chloride effect engineered to -4 too.
        let record = ClinicalRecord {
            ph: Some(7.30),
            pco2: Some(36.0),
            na: Some(140.0),
            cl: Some(104.0),
            lactate: Some(4.0),
            ..ClinicalRecord::default()
        };
        let report = analyze_mechanisms(&record, &derived_with_be(-8.0), &sid_without_sig())
            .expect("report");
        let chloride = report.contribution(Mechanism::Chloride).expect("chloride");
        let lactate = report.contribution(Mechanism::Lactate).expect("lactate");
        assert_eq!(chloride.meq, -4.0);
        assert_eq!(lactate.meq, -4.0);
        assert_eq!(report.dominant, Some(Mechanism::Lactate));
    }

    #[test]
    fn unmeasured_effect_comes_from_sig_when_present() {
        let record = ClinicalRecord {
            ph: Some(7.28),
            pco2: Some(32.0),
            na: Some(140.0),
            cl: Some(100.0),
            lactate: Some(1.0),
            ..ClinicalRecord::default()
        };
        let mut sid = sid_without_sig();
        sid.sig = Some(8.0);
        let report =
            analyze_mechanisms(&record, &derived_with_be(-8.0), &sid).expect("report");
        let unmeasured = report
            .contribution(Mechanism::UnmeasuredAnion)
            .expect("unmeasured");
        assert_eq!(unmeasured.meq, -8.0);
        assert_eq!(report.dominant, Some(Mechanism::UnmeasuredAnion));
        assert!(report.summary.contains("unmeasured-anion-mediated"));
    }

    #[test]
    fn near_normal_panel_has_no_dominant_mechanism() {
        let record = ClinicalRecord {
            ph: Some(7.40),
            pco2: Some(40.0),
            na: Some(140.0),
            cl: Some(100.0),
            lactate: Some(1.0),
            ..ClinicalRecord::default()
        };
        let report = analyze_mechanisms(&record, &derived_with_be(0.0), &sid_without_sig())
            .expect("report");
        assert_eq!(report.dominant, None);
        assert_eq!(report.summary, "no dominant metabolic mechanism");
    }
}
