use serde::{Deserialize, Serialize};

/// Confidence grade for a suspected Na/Cl column transposition.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SwapConfidence {
    #[default]
    None,
    Low,
    Medium,
    High,
}

impl SwapConfidence {
    pub fn as_str(self) -> &'static str {
        match self {
            SwapConfidence::None => "none",
            SwapConfidence::Low => "low",
            SwapConfidence::Medium => "medium",
            SwapConfidence::High => "high",
        }
    }
}

/// Advisory record for a suspected Na/Cl transposition.
///
/// The detector only ever previews the swap in `suggested_na`/`suggested_cl`
/// next to the untouched originals. Applying a correction requires an
/// explicit user decision outside this crate; silently rewriting a
/// patient's electrolytes is a safety hazard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwapSuspicion {
    pub is_suspicious: bool,
    pub confidence: SwapConfidence,
    pub reason: String,
    pub original_na: Option<f64>,
    pub original_cl: Option<f64>,
    pub suggested_na: Option<f64>,
    pub suggested_cl: Option<f64>,
    /// True when the finding is strong enough that the caller should
    /// force an explicit accept/reject decision before proceeding.
    pub user_action_required: bool,
}

impl SwapSuspicion {
    /// Clean result for a pair that raised no suspicion.
    pub fn clear() -> Self {
        Self::default()
    }
}
