//! Na/Cl transposition suspicion.
//!
//! A fixed four-tier decision table over the sodium/chloride pair. The
//! detector takes the values by copy and only ever returns a preview of
//! the swap next to the untouched originals; it has no write access to
//! the record it informs on. Detection and correction are deliberately
//! separate concerns: applying the swap is an explicit user decision.

use stewart_model::{SwapConfidence, SwapSuspicion};

/// Typical chloride range used by the strict transposition pattern.
const CL_TYPICAL: (f64, f64) = (95.0, 110.0);
/// Typical sodium range used by the strict transposition pattern.
const NA_TYPICAL: (f64, f64) = (135.0, 145.0);

/// Evaluate the Na/Cl pair against the transposition decision table.
pub fn detect_swap_suspicion(na: Option<f64>, cl: Option<f64>) -> SwapSuspicion {
    let (Some(na), Some(cl)) = (na, cl) else {
        return SwapSuspicion::clear();
    };

    let suspicion = |confidence: SwapConfidence, reason: String, action_required: bool| {
        SwapSuspicion {
            is_suspicious: true,
            confidence,
            reason,
            original_na: Some(na),
            original_cl: Some(cl),
            suggested_na: Some(cl),
            suggested_cl: Some(na),
            user_action_required: action_required,
        }
    };

    // Strict pattern: each value sits inside the other's typical range.
    let na_in_cl_range = na >= CL_TYPICAL.0 && na <= CL_TYPICAL.1;
    let cl_in_na_range = cl >= NA_TYPICAL.0 && cl <= NA_TYPICAL.1;
    if na_in_cl_range && cl_in_na_range {
        return suspicion(
            SwapConfidence::High,
            format!(
                "Na ({na}) is in the typical Cl range ({}-{}) and Cl ({cl}) is in the \
                 typical Na range ({}-{}); the columns may be transposed.",
                CL_TYPICAL.0, CL_TYPICAL.1, NA_TYPICAL.0, NA_TYPICAL.1
            ),
            true,
        );
    }

    // Extreme low Na with extreme high Cl and a large gap.
    if na < 100.0 && cl > 135.0 && (cl - na) > 35.0 {
        return suspicion(
            SwapConfidence::High,
            format!(
                "Na ({na}) is physiologically very low, Cl ({cl}) very high and the gap \
                 ({:.0}) abnormally large; the columns may be transposed.",
                cl - na
            ),
            true,
        );
    }

    // Suspicious but not conclusive.
    if na < 115.0 && cl > 125.0 && cl > na && (cl - na) > 20.0 {
        return suspicion(
            SwapConfidence::Medium,
            format!("Na ({na}) low with Cl ({cl}) high; possible column error, not conclusive."),
            true,
        );
    }

    // Informational only.
    if na < cl && cl > 120.0 {
        return suspicion(
            SwapConfidence::Low,
            format!("Na ({na}) < Cl ({cl}); unusual but possible."),
            false,
        );
    }

    SwapSuspicion::clear()
}
