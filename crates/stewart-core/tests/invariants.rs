//! Property tests for the SID ladder, mechanism shares and pipeline
//! totality.

use proptest::prelude::*;

use stewart_core::{analyze, build_sid_profile, compute_derived_values};
use stewart_core::mechanism::analyze_mechanisms;
use stewart_core::sid::{sid_basic, sid_simple};
use stewart_model::{AnalysisMode, Mechanism, Parameter, SidProfile};

mod common;
use common::record;

fn lactate_share(na: f64, cl: f64, albumin: f64, lactate: f64, sig: f64) -> f64 {
    let panel = record(&[
        (Parameter::Sodium, na),
        (Parameter::Chloride, cl),
        (Parameter::Albumin, albumin),
        (Parameter::Lactate, lactate),
    ]);
    let derived = compute_derived_values(7.32, 35.0, None, None);
    let sid = SidProfile {
        sid_simple: na - cl,
        sid_basic: Some(na - cl - lactate),
        sid_full: Some(na - cl - lactate),
        sid_effective: Some(na - cl - lactate - sig),
        sig: Some(sig),
        atot: None,
        anion_gap: 12.0,
        anion_gap_corrected: None,
    };
    analyze_mechanisms(&panel, &derived, &sid)
        .and_then(|report| {
            report
                .contribution(Mechanism::Lactate)
                .map(|c| c.share_percent)
        })
        .unwrap_or_default()
}

proptest! {
    /// Each rung of the ladder subtracts a further anion, so with any
    /// measurable lactate the basic tier never exceeds the simple one.
    #[test]
    fn ladder_tiers_are_ordered(
        na in 110.0f64..170.0,
        cl in 80.0f64..140.0,
        lactate in 0.1f64..20.0,
    ) {
        let simple = sid_simple(na, cl);
        let basic = sid_basic(na, cl, Some(lactate)).expect("lactate present");
        prop_assert!(basic <= simple);
    }

    /// SIG is exactly the apparent-effective difference, to reporting
    /// precision.
    #[test]
    fn sig_is_apparent_minus_effective(
        na in 125.0f64..155.0,
        cl in 90.0f64..120.0,
        k in 3.0f64..5.5,
        ca in 1.0f64..1.4,
        mg in 0.6f64..1.1,
        lactate in 0.5f64..8.0,
        albumin in 2.0f64..5.0,
        po4 in 0.6f64..2.0,
        ph in 7.0f64..7.6,
        hco3 in 8.0f64..40.0,
    ) {
        let panel = record(&[
            (Parameter::Sodium, na),
            (Parameter::Chloride, cl),
            (Parameter::Potassium, k),
            (Parameter::Calcium, ca),
            (Parameter::Magnesium, mg),
            (Parameter::Lactate, lactate),
            (Parameter::Albumin, albumin),
            (Parameter::Phosphate, po4),
        ]);
        let profile = build_sid_profile(&panel, ph, hco3).expect("na and cl present");
        let sida = profile.sid_full.expect("full panel");
        let side = profile.sid_effective.expect("albumin and phosphate present");
        let sig = profile.sig.expect("both tiers present");
        prop_assert!((sig - (sida - side)).abs() <= 0.11);
    }

    /// With the unmeasured-anion slot pinned by a fixed SIG, raising
    /// lactate can only raise the lactate share of the total effect.
    #[test]
    fn lactate_share_grows_with_lactate_when_sig_is_fixed(
        na in 130.0f64..150.0,
        cl in 95.0f64..115.0,
        albumin in 2.0f64..5.0,
        low in 0.1f64..8.0,
        bump in 0.5f64..8.0,
        sig in -4.0f64..12.0,
    ) {
        let high = low + bump;
        let share_low = lactate_share(na, cl, albumin, low, sig);
        let share_high = lactate_share(na, cl, albumin, high, sig);
        prop_assert!(share_high >= share_low);
    }
}

#[test]
fn lactate_share_grows_even_at_trace_levels() {
    // The effect is proportional to the full lactate load, so the share
    // rises with lactate everywhere, not just above the normal level.
    let trace = lactate_share(140.0, 104.0, 4.2, 0.1, 3.0);
    let mild = lactate_share(140.0, 104.0, 4.2, 0.9, 3.0);
    assert!(trace > 0.0);
    assert!(mild > trace);
}

proptest! {
    /// The pipeline is total over finite panels: derived values exist
    /// exactly when validation lets the record through, and the input
    /// record is never altered.
    #[test]
    fn analysis_is_total_over_finite_panels(
        ph in 6.5f64..8.0,
        pco2 in 5.0f64..130.0,
        na in 90.0f64..190.0,
        cl in 60.0f64..160.0,
        lactate in 0.0f64..30.0,
    ) {
        let panel = record(&[
            (Parameter::Ph, ph),
            (Parameter::Pco2, pco2),
            (Parameter::Sodium, na),
            (Parameter::Chloride, cl),
            (Parameter::Lactate, lactate),
        ]);
        let result = analyze(&panel, AnalysisMode::Quick);
        prop_assert_eq!(result.derived.is_some(), !result.validation.is_blocked());
        prop_assert_eq!(&result.record, &panel);
    }
}
