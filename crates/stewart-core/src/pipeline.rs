//! The single-record analysis pipeline.
//!
//! Sanitized record in, immutable `AnalysisResult` out: validation (may
//! short-circuit), swap suspicion (advisory only), derived values, SID
//! ladder, compensation, mechanism attribution, aggregation. The
//! function is total for expected invalid input; blocking conditions
//! are carried inside the result instead of raised.

use tracing::{debug, warn};

use stewart_model::{
    Advisory, AdvisoryKind, AnalysisMode, AnalysisResult, ClinicalRecord, CompensationAssessment,
    DerivedValues, MechanismReport, SidProfile, SwapSuspicion, ValidationReport,
};
use stewart_validate::{detect_swap_suspicion, validate};

use crate::compensation::assess_compensation;
use crate::derived::{compute_derived_values, derived_advisories};
use crate::mechanism::analyze_mechanisms;
use crate::sid::{build_sid_profile, sid_advisories};

/// Analyze one sanitized record in the given mode.
pub fn analyze(record: &ClinicalRecord, mode: AnalysisMode) -> AnalysisResult {
    let validation = validate(record, mode);
    let swap = detect_swap_suspicion(record.na, record.cl);

    let mut advisories: Vec<Advisory> = validation.warnings.clone();
    if swap.is_suspicious {
        warn!(
            confidence = swap.confidence.as_str(),
            "possible Na/Cl transposition; original values preserved"
        );
        advisories.push(Advisory::new(
            AdvisoryKind::SwapSuspicion,
            format!(
                "{} Original values preserved; no correction applied.",
                swap.reason
            ),
        ));
    }

    if validation.is_blocked() {
        debug!(
            blocking = validation.blocking.len(),
            "analysis blocked by validation"
        );
        return assemble(record, mode, validation, swap, None, None, None, None, advisories);
    }

    // The required set of every mode covers pH, pCO2, Na and Cl, so a
    // passing validation guarantees their presence; the fallback keeps
    // the function total regardless.
    let (Some(ph), Some(pco2)) = (record.ph, record.pco2) else {
        return assemble(record, mode, validation, swap, None, None, None, None, advisories);
    };

    let derived = compute_derived_values(ph, pco2, record.hco3, record.be);
    advisories.extend(derived_advisories(&derived));
    if !derived.sign_consistency_ok {
        warn!(be = derived.be_used, "base-excess sign conflicts with pH direction");
    }

    let sid = build_sid_profile(record, ph, derived.hco3_used);
    if let Some(profile) = &sid {
        advisories.extend(sid_advisories(profile));
    }

    let compensation = assess_compensation(ph, pco2, derived.hco3_used, derived.be_used);

    let mechanisms = sid
        .as_ref()
        .and_then(|profile| analyze_mechanisms(record, &derived, profile));

    debug!(
        primary = ?compensation.primary,
        dominant = ?mechanisms.as_ref().and_then(|m| m.dominant),
        "analysis complete"
    );

    assemble(
        record,
        mode,
        validation,
        swap,
        Some(derived),
        sid,
        Some(compensation),
        mechanisms,
        advisories,
    )
}

/// Result aggregation: packaging only, no new computation. Every
/// advisory and blocking error collected upstream lands in the result.
#[allow(clippy::too_many_arguments)]
fn assemble(
    record: &ClinicalRecord,
    mode: AnalysisMode,
    validation: ValidationReport,
    swap: SwapSuspicion,
    derived: Option<DerivedValues>,
    sid: Option<SidProfile>,
    compensation: Option<CompensationAssessment>,
    mechanisms: Option<MechanismReport>,
    advisories: Vec<Advisory>,
) -> AnalysisResult {
    AnalysisResult {
        record: record.clone(),
        mode,
        validation,
        swap,
        derived,
        sid,
        compensation,
        mechanisms,
        advisories,
    }
}
