//! Delimited-text batch ingestion.
//!
//! Each row becomes an independent sanitization outcome: either a
//! sanitized record ready for analysis or the row's sanitization error.
//! A bad row never aborts the batch and rows never see each other.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use stewart_model::SanitizationError;

use crate::sanitize::{SanitizedRecord, sanitize_fields};

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// One batch row's sanitization outcome. Row numbers are 1-based data
/// rows (the header is row 0).
#[derive(Debug)]
pub struct BatchRow {
    pub row_number: usize,
    pub outcome: Result<SanitizedRecord, SanitizationError>,
}

/// Read and sanitize a delimited file from disk.
pub fn read_batch(path: &Path) -> Result<Vec<BatchRow>, IngestError> {
    let file = std::fs::File::open(path)?;
    read_batch_from_reader(file)
}

/// Read and sanitize delimited rows from any reader.
pub fn read_batch_from_reader<R: Read>(reader: R) -> Result<Vec<BatchRow>, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_ascii_lowercase())
        .collect();

    let mut rows = Vec::new();
    for (index, result) in csv_reader.records().enumerate() {
        let row_number = index + 1;
        let record = result?;

        let fields: BTreeMap<String, String> = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.clone(), value.to_string()))
            .collect();

        let outcome = sanitize_fields(&fields);
        if let Err(error) = &outcome {
            warn!(row = row_number, %error, "row failed sanitization");
        }
        rows.push(BatchRow {
            row_number,
            outcome,
        });
    }

    debug!(rows = rows.len(), "batch ingested");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_sanitize_independently() {
        let data = "ph,pco2,na,cl,lactate\n7.32,31,138,104,4.5\nbad,40,140,100,1.0\n\"7,45\",38,136,102,\"1,8\"\n";
        let rows = read_batch_from_reader(data.as_bytes()).expect("read batch");
        assert_eq!(rows.len(), 3);

        let first = rows[0].outcome.as_ref().expect("row 1 sanitizes");
        assert_eq!(first.record.ph, Some(7.32));
        assert_eq!(first.record.lactate, Some(4.5));

        let error = rows[1].outcome.as_ref().expect_err("row 2 fails");
        assert_eq!(error.field, "ph");

        // Quoted decimal-comma cell and a comma-decimal pH.
        let third = rows[2].outcome.as_ref().expect("row 3 sanitizes");
        assert_eq!(third.record.ph, Some(7.45));
        assert_eq!(third.record.lactate, Some(1.8));
    }

    #[test]
    fn header_case_and_unknown_columns_are_tolerated() {
        let data = "Patient,PH,PCO2,NA,CL,LACTATE,notes\np-1,7.40,40,140,100,1.0,ok\n";
        let rows = read_batch_from_reader(data.as_bytes()).expect("read batch");
        let row = rows[0].outcome.as_ref().expect("sanitizes");
        assert_eq!(row.record.na, Some(140.0));
        assert_eq!(row.record.cl, Some(100.0));
    }

    #[test]
    fn empty_cells_are_missing_not_errors() {
        let data = "ph,pco2,na,cl,lactate,albumin\n7.40,40,140,100,1.0,\n";
        let rows = read_batch_from_reader(data.as_bytes()).expect("read batch");
        let row = rows[0].outcome.as_ref().expect("sanitizes");
        assert_eq!(row.record.albumin, None);
    }
}
