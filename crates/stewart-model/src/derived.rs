use serde::{Deserialize, Serialize};

/// Provenance of a derived quantity: always computed, optionally also
/// supplied by the caller as a measured value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Calculated,
    Measured,
}

/// Bicarbonate and base excess derived from pH/pCO2, alongside any
/// caller-supplied measured values.
///
/// Each quantity keeps two slots: `*_calculated` is always filled when
/// the inputs allow, `*_measured` only when the caller supplied one.
/// The `*_used` value is what downstream stages consume (measured wins
/// when present) and `*_source` records which slot it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedValues {
    pub hco3_calculated: f64,
    pub hco3_measured: Option<f64>,
    pub hco3_used: f64,
    pub hco3_source: ValueSource,
    /// Absolute measured-vs-calculated difference, when both exist.
    pub hco3_deviation: Option<f64>,

    pub be_calculated: f64,
    pub be_measured: Option<f64>,
    pub be_used: f64,
    pub be_source: ValueSource,
    pub be_deviation: Option<f64>,

    /// False when the base excess contradicts the pH-implied acid-base
    /// direction (acidemia with clearly positive BE or alkalemia with
    /// clearly negative BE).
    pub sign_consistency_ok: bool,
    /// Sign-flipped base excess, offered for display only when a sign
    /// conflict was detected. Never fed back into the pipeline.
    pub be_flipped_suggestion: Option<f64>,
}
