//! Input sanitization and batch ingestion for Stewart analysis.
//!
//! Everything entering the pipeline passes through here first: a record
//! is either fully sanitized (typed values, explicit missing markers,
//! normalized units) or rejected with a `SanitizationError`.

pub mod batch;
pub mod sanitize;

pub use batch::{BatchRow, IngestError, read_batch, read_batch_from_reader};
pub use sanitize::{
    ALBUMIN_GL_HEURISTIC_THRESHOLD, SanitizedRecord, sanitize_fields, sanitize_numeric,
};
