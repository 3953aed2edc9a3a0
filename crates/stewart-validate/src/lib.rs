//! Validation and advisory cross-checks for Stewart analysis records.

pub mod ranges;
pub mod swap;
pub mod validator;

pub use ranges::{
    RANGE_TABLES, RangeTable, SEVERITY_BANDS, SeverityBands, grade_severity, range_table,
    severity_bands,
};
pub use swap::detect_swap_suspicion;
pub use validator::{REQUIRED_ADVANCED, REQUIRED_QUICK, required_parameters, validate};
