//! Raw-field sanitization.
//!
//! Turns textual field values of unknown form into typed numbers or
//! explicit missing markers before anything else sees them: a record is
//! either fully sanitized or rejected here. Locale decimal commas are
//! normalized, a vocabulary of not-a-number tokens maps to missing, and
//! albumin units are normalized to g/dL with a magnitude heuristic that
//! is always surfaced to the caller, never silently final.

use std::collections::BTreeMap;

use tracing::debug;

use stewart_model::{Advisory, AdvisoryKind, ClinicalRecord, Parameter, SanitizationError};

/// Tokens recognized as an explicit missing value.
const MISSING_TOKENS: &[&str] = &["", "nan", "none", "null", "-", "n/a", "na"];

/// Albumin values at or above this magnitude are assumed to be g/L and
/// rescaled to g/dL (plasma albumin in g/dL stays in single digits).
pub const ALBUMIN_GL_HEURISTIC_THRESHOLD: f64 = 10.0;

/// A sanitized record together with the advisories sanitization raised.
#[derive(Debug, Clone)]
pub struct SanitizedRecord {
    pub record: ClinicalRecord,
    pub advisories: Vec<Advisory>,
}

/// Sanitize one raw field value.
///
/// Returns `Ok(None)` for a recognized missing token, `Ok(Some(v))` for
/// a finite numeric value, and a `SanitizationError` for anything else.
pub fn sanitize_numeric(field: &str, raw: &str) -> Result<Option<f64>, SanitizationError> {
    let trimmed = raw.trim();
    if MISSING_TOKENS.contains(&trimmed.to_ascii_lowercase().as_str()) {
        return Ok(None);
    }

    // Decimal comma and internal whitespace ("1 234,5") are common in
    // exported spreadsheets.
    let normalized: String = trimmed
        .replace(',', ".")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(SanitizationError {
            field: field.to_string(),
            value: raw.to_string(),
        }),
    }
}

fn truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "bd"
    )
}

/// Sanitize a map of raw fields (keys case-insensitive) into a record.
///
/// Accepted keys are the parameter field names (`ph`, `pco2`, `na`,
/// `k`, `ca`, `mg`, `cl`, `lactate`, `hco3`, `be`, `albumin`, `po4`)
/// plus `albumin_gl` / `albumin_gdl` for explicit albumin units and the
/// `is_base_deficit` flag. Unknown keys are ignored so batch files may
/// carry identifiers and free-text columns.
pub fn sanitize_fields(
    fields: &BTreeMap<String, String>,
) -> Result<SanitizedRecord, SanitizationError> {
    let mut record = ClinicalRecord::default();
    let mut advisories = Vec::new();

    let lookup = |name: &str| -> Option<&String> {
        fields
            .iter()
            .find(|(key, _)| key.trim().eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    };

    for parameter in Parameter::all() {
        if *parameter == Parameter::Albumin {
            continue; // handled below with unit normalization
        }
        if let Some(raw) = lookup(parameter.field_name()) {
            let value = sanitize_numeric(parameter.field_name(), raw)?;
            set_field(&mut record, *parameter, value);
        }
    }

    record.albumin = sanitize_albumin(&lookup, &mut advisories)?;

    // Base deficit convention: the magnitude was entered with the
    // opposite sign. Normalize to signed base excess and say so.
    if let Some(raw) = lookup("is_base_deficit")
        && truthy(raw)
        && let Some(be) = record.be
    {
        record.be = Some(-be);
        advisories.push(Advisory::new(
            AdvisoryKind::BaseDeficitNormalized,
            format!("base deficit {be} normalized to base excess {}", -be),
        ));
    }

    debug!(
        present = record.present_parameters().len(),
        "record sanitized"
    );
    Ok(SanitizedRecord { record, advisories })
}

fn sanitize_albumin<'a>(
    lookup: &impl Fn(&str) -> Option<&'a String>,
    advisories: &mut Vec<Advisory>,
) -> Result<Option<f64>, SanitizationError> {
    // Explicit units win over the heuristic.
    if let Some(raw) = lookup("albumin_gdl") {
        return sanitize_numeric("albumin_gdl", raw);
    }
    if let Some(raw) = lookup("albumin_gl") {
        return Ok(sanitize_numeric("albumin_gl", raw)?.map(|gl| gl / 10.0));
    }

    let Some(raw) = lookup("albumin") else {
        return Ok(None);
    };
    let Some(value) = sanitize_numeric("albumin", raw)? else {
        return Ok(None);
    };

    if value >= ALBUMIN_GL_HEURISTIC_THRESHOLD {
        let gdl = value / 10.0;
        advisories.push(Advisory::new(
            AdvisoryKind::AlbuminUnitConverted,
            format!(
                "albumin {value} read as g/L and rescaled to {gdl} g/dL; \
                 use an explicit albumin_gdl/albumin_gl column to override"
            ),
        ));
        Ok(Some(gdl))
    } else {
        Ok(Some(value))
    }
}

fn set_field(record: &mut ClinicalRecord, parameter: Parameter, value: Option<f64>) {
    match parameter {
        Parameter::Ph => record.ph = value,
        Parameter::Pco2 => record.pco2 = value,
        Parameter::Hco3 => record.hco3 = value,
        Parameter::BaseExcess => record.be = value,
        Parameter::Sodium => record.na = value,
        Parameter::Potassium => record.k = value,
        Parameter::Calcium => record.ca = value,
        Parameter::Magnesium => record.mg = value,
        Parameter::Chloride => record.cl = value,
        Parameter::Lactate => record.lactate = value,
        Parameter::Albumin => record.albumin = value,
        Parameter::Phosphate => record.po4 = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_comma_and_whitespace_normalize() {
        assert_eq!(sanitize_numeric("ph", " 7,40 ").expect("parse"), Some(7.40));
        assert_eq!(sanitize_numeric("na", "140 ").expect("parse"), Some(140.0));
    }

    #[test]
    fn missing_tokens_map_to_none() {
        for token in ["", "  ", "NaN", "none", "NULL", "-", "n/a", "NA"] {
            assert_eq!(
                sanitize_numeric("lactate", token).expect("missing token"),
                None,
                "token {token:?}"
            );
        }
    }

    #[test]
    fn garbage_is_a_sanitization_error() {
        let error = sanitize_numeric("ph", "acidotic").expect_err("must fail");
        assert_eq!(error.field, "ph");
        assert_eq!(error.value, "acidotic");
        assert!(sanitize_numeric("pco2", "inf").is_err());
    }

    #[test]
    fn negative_values_parse_and_are_left_to_range_validation() {
        assert_eq!(sanitize_numeric("be", "-12,5").expect("parse"), Some(-12.5));
    }
}
