use stewart_model::{AnalysisResult, SanitizationError};

/// Outcome of one batch row: a full analysis, or the sanitization error
/// that rejected the row.
#[derive(Debug)]
pub struct RowOutcome {
    pub row_number: usize,
    pub outcome: Result<AnalysisResult, SanitizationError>,
}

#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub rows: Vec<RowOutcome>,
    pub analyzed: usize,
    pub blocked: usize,
    pub rejected: usize,
}

impl BatchOutcome {
    /// Rows that could not be analyzed at all, either rejected by the
    /// sanitizer or blocked by validation.
    pub fn has_failures(&self) -> bool {
        self.rejected > 0 || self.blocked > 0
    }
}
