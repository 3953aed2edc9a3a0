//! The three-tier Strong Ion Difference ladder, effective SID and SIG.
//!
//! A tier is computed only when every constituent input is present.
//! Nothing is estimated from population averages; a tier with missing
//! inputs is reported absent so the caller sees the gap instead of a
//! falsely precise number.

use stewart_model::{Advisory, AdvisoryKind, ClinicalRecord, SidProfile};

use crate::constants::{
    ALBUMIN_EFFECT_COEFFICIENT, ALBUMIN_REFERENCE_GDL, ATOT_ALBUMIN_COEFFICIENT,
    ATOT_PHOSPHATE_COEFFICIENT, SIDE_BUFFER, SIG_TOLERANCE, round1,
};

/// SID_simple = Na - Cl (normal ~38 mEq/L).
pub fn sid_simple(na: f64, cl: f64) -> f64 {
    round1(na - cl)
}

/// SID_basic = Na - Cl - lactate (normal ~37 mEq/L).
pub fn sid_basic(na: f64, cl: f64, lactate: Option<f64>) -> Option<f64> {
    lactate.map(|lac| round1(na - cl - lac))
}

/// Apparent SID: (Na + K + Ca + Mg) - (Cl + lactate), normal ~40 mEq/L.
pub fn sid_full(
    na: f64,
    cl: f64,
    k: Option<f64>,
    ca: Option<f64>,
    mg: Option<f64>,
    lactate: Option<f64>,
) -> Option<f64> {
    let (k, ca, mg, lactate) = (k?, ca?, mg?, lactate?);
    Some(round1((na + k + ca + mg) - (cl + lactate)))
}

/// Effective SID from the albumin/phosphate buffer relation.
///
/// Albumin arrives in g/dL (the record's internal unit) and is scaled
/// to g/L inside the formula.
pub fn sid_effective(ph: f64, hco3: f64, albumin_gdl: Option<f64>, po4: Option<f64>) -> Option<f64> {
    let albumin_gl = albumin_gdl? * 10.0;
    let po4 = po4?;
    let albumin_charge = albumin_gl * (SIDE_BUFFER.albumin_ph * ph - SIDE_BUFFER.albumin_constant);
    let phosphate_charge = po4 * (SIDE_BUFFER.phosphate_ph * ph - SIDE_BUFFER.phosphate_constant);
    Some(round1(hco3 + albumin_charge + phosphate_charge))
}

/// Total weak-acid buffer concentration. Requires albumin; the
/// phosphate term is added when available.
pub fn atot(albumin_gdl: Option<f64>, po4: Option<f64>) -> Option<f64> {
    let albumin_gl = albumin_gdl? * 10.0;
    let mut total = ATOT_ALBUMIN_COEFFICIENT * albumin_gl;
    if let Some(po4) = po4 {
        total += ATOT_PHOSPHATE_COEFFICIENT * po4;
    }
    Some(round1(total))
}

/// Anion gap = Na - (Cl + HCO3).
pub fn anion_gap(na: f64, cl: f64, hco3: f64) -> f64 {
    round1(na - (cl + hco3))
}

/// Anion gap corrected for albumin: AG + 2.5 x (4.2 - albumin g/dL).
pub fn corrected_anion_gap(ag: f64, albumin_gdl: f64) -> f64 {
    round1(ag + ALBUMIN_EFFECT_COEFFICIENT * (ALBUMIN_REFERENCE_GDL - albumin_gdl))
}

/// Build the full SID profile for an already-validated record.
///
/// `na` and `cl` are required in every mode, so presence is guaranteed
/// by the validator before this runs; `hco3_used` comes from the
/// derived-value engine.
pub fn build_sid_profile(record: &ClinicalRecord, ph: f64, hco3_used: f64) -> Option<SidProfile> {
    let na = record.na?;
    let cl = record.cl?;

    let sid_full = sid_full(na, cl, record.k, record.ca, record.mg, record.lactate);
    let sid_effective = sid_effective(ph, hco3_used, record.albumin, record.po4);
    let sig = match (sid_full, sid_effective) {
        (Some(sida), Some(side)) => Some(round1(sida - side)),
        _ => None,
    };
    let ag = anion_gap(na, cl, hco3_used);

    Some(SidProfile {
        sid_simple: sid_simple(na, cl),
        sid_basic: sid_basic(na, cl, record.lactate),
        sid_full,
        sid_effective,
        sig,
        atot: atot(record.albumin, record.po4),
        anion_gap: ag,
        anion_gap_corrected: record.albumin.map(|alb| corrected_anion_gap(ag, alb)),
    })
}

/// SIG interpretation advisories.
///
/// A positive SIG beyond tolerance is directionally consistent with a
/// high-anion-gap pattern and carries no advisory of its own (the
/// mechanism analyzer quantifies it); a negative SIG beyond tolerance
/// implies unmeasured cations, which is rare enough to warrant
/// independent verification.
pub fn sid_advisories(profile: &SidProfile) -> Vec<Advisory> {
    let mut advisories = Vec::new();
    if profile.has_unmeasured_cations(SIG_TOLERANCE) {
        let sig = profile.sig.unwrap_or_default();
        advisories.push(Advisory::new(
            AdvisoryKind::UnusualNegativeSig,
            format!(
                "SIG {sig:.1} mEq/L is negative beyond tolerance, implying unmeasured \
                 cations; this is physiologically uncommon and worth independent \
                 verification of the inputs"
            ),
        ));
    }
    advisories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_values_for_a_normal_panel() {
        assert_eq!(sid_simple(140.0, 100.0), 40.0);
        assert_eq!(sid_basic(140.0, 100.0, Some(1.0)), Some(39.0));
        assert_eq!(
            sid_full(140.0, 100.0, Some(4.0), Some(1.25), Some(0.85), Some(1.0)),
            Some(45.1)
        );
    }

    #[test]
    fn tiers_absent_when_inputs_missing() {
        assert_eq!(sid_basic(140.0, 100.0, None), None);
        assert_eq!(sid_full(140.0, 100.0, None, Some(1.25), Some(0.85), Some(1.0)), None);
        assert_eq!(sid_effective(7.40, 24.0, Some(4.0), None), None);
        assert_eq!(sid_effective(7.40, 24.0, None, Some(1.0)), None);
        assert_eq!(atot(None, Some(1.0)), None);
    }

    #[test]
    fn side_matches_buffer_relation() {
        // alb 4.0 g/dL = 40 g/L, po4 1.0: 24 + 40x(0.123x7.4 - 0.631) + 1x(0.309x7.4 - 0.469)
        let side = sid_effective(7.40, 24.0, Some(4.0), Some(1.0)).expect("side");
        let expected = 24.0 + 40.0 * (0.123 * 7.40 - 0.631) + 1.0 * (0.309 * 7.40 - 0.469);
        assert!((side - expected).abs() < 0.06);
    }

    #[test]
    fn sig_is_exactly_sida_minus_side() {
        let record = ClinicalRecord {
            ph: Some(7.40),
            pco2: Some(40.0),
            na: Some(140.0),
            k: Some(4.0),
            ca: Some(1.25),
            mg: Some(0.85),
            cl: Some(100.0),
            lactate: Some(1.0),
            albumin: Some(4.0),
            po4: Some(1.0),
            ..ClinicalRecord::default()
        };
        let profile = build_sid_profile(&record, 7.40, 24.0).expect("profile");
        let sida = profile.sid_full.expect("sida");
        let side = profile.sid_effective.expect("side");
        let sig = profile.sig.expect("sig");
        assert!((sig - (sida - side)).abs() < 0.05);
    }

    #[test]
    fn sig_absent_without_phosphate() {
        let record = ClinicalRecord {
            ph: Some(7.40),
            pco2: Some(40.0),
            na: Some(140.0),
            k: Some(4.0),
            ca: Some(1.25),
            mg: Some(0.85),
            cl: Some(100.0),
            lactate: Some(1.0),
            albumin: Some(4.0),
            ..ClinicalRecord::default()
        };
        let profile = build_sid_profile(&record, 7.40, 24.0).expect("profile");
        assert!(profile.sid_full.is_some());
        assert!(profile.sid_effective.is_none());
        assert!(profile.sig.is_none());
    }

    #[test]
    fn negative_sig_raises_unusual_advisory() {
        let profile = SidProfile {
            sid_simple: 40.0,
            sid_basic: None,
            sid_full: Some(38.0),
            sid_effective: Some(43.0),
            sig: Some(-5.0),
            atot: None,
            anion_gap: 12.0,
            anion_gap_corrected: None,
        };
        let advisories = sid_advisories(&profile);
        assert_eq!(advisories.len(), 1);
        assert_eq!(advisories[0].kind, AdvisoryKind::UnusualNegativeSig);
    }
}
