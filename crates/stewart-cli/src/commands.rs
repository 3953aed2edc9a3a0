use std::collections::BTreeMap;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, info_span, trace};

use stewart_core::analyze;
use stewart_ingest::{SanitizedRecord, read_batch, sanitize_fields};
use stewart_model::{AnalysisMode, AnalysisResult};

use stewart_cli::logging::redact_value;

use crate::cli::{AnalyzeArgs, AnalysisModeArg, BatchArgs};
use crate::types::{BatchOutcome, RowOutcome};

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalysisResult> {
    let fields = collect_fields(args);
    debug!(fields = fields.len(), "sanitizing panel");
    for (key, value) in &fields {
        trace!(field = %key, value = redact_value(value), "input field");
    }
    let sanitized = sanitize_fields(&fields).context("panel rejected by input sanitization")?;
    Ok(analyze_sanitized(sanitized, single_mode(args.mode)))
}

pub fn run_batch(args: &BatchArgs) -> Result<BatchOutcome> {
    let span = info_span!("batch", file = %args.input.display());
    let _guard = span.enter();

    let rows = read_batch(&args.input)
        .with_context(|| format!("read batch file {}", args.input.display()))?;
    let mode = batch_mode(args.mode);

    let progress = ProgressBar::new(rows.len() as u64).with_style(
        ProgressStyle::with_template("{bar:30} {pos}/{len} rows")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut outcome = BatchOutcome::default();
    for row in rows {
        let row_outcome = match row.outcome {
            Ok(sanitized) => {
                let result = analyze_sanitized(sanitized, mode);
                if result.validation.is_blocked() {
                    outcome.blocked += 1;
                } else {
                    outcome.analyzed += 1;
                }
                Ok(result)
            }
            Err(error) => {
                outcome.rejected += 1;
                Err(error)
            }
        };
        outcome.rows.push(RowOutcome {
            row_number: row.row_number,
            outcome: row_outcome,
        });
        progress.inc(1);
    }
    progress.finish_and_clear();

    info!(
        analyzed = outcome.analyzed,
        blocked = outcome.blocked,
        rejected = outcome.rejected,
        "batch complete"
    );
    Ok(outcome)
}

/// Run the pipeline and fold the sanitizer's advisories (unit conversion,
/// base-deficit normalization) into the result ahead of the pipeline's own.
fn analyze_sanitized(sanitized: SanitizedRecord, mode: AnalysisMode) -> AnalysisResult {
    let mut result = analyze(&sanitized.record, mode);
    if !sanitized.advisories.is_empty() {
        let mut advisories = sanitized.advisories;
        advisories.append(&mut result.advisories);
        result.advisories = advisories;
    }
    result
}

fn collect_fields(args: &AnalyzeArgs) -> BTreeMap<String, String> {
    let mut fields = BTreeMap::new();
    let mut set = |key: &str, value: &Option<String>| {
        if let Some(value) = value {
            fields.insert(key.to_string(), value.clone());
        }
    };
    set("ph", &args.ph);
    set("pco2", &args.pco2);
    set("hco3", &args.hco3);
    set("be", &args.be);
    set("na", &args.na);
    set("k", &args.k);
    set("ca", &args.ca);
    set("mg", &args.mg);
    set("cl", &args.cl);
    set("lactate", &args.lactate);
    set("albumin", &args.albumin);
    set("albumin_gdl", &args.albumin_gdl);
    set("albumin_gl", &args.albumin_gl);
    set("po4", &args.po4);
    if args.base_deficit {
        fields.insert("is_base_deficit".to_string(), "true".to_string());
    }
    fields
}

fn single_mode(mode: AnalysisModeArg) -> AnalysisMode {
    match mode {
        AnalysisModeArg::Quick => AnalysisMode::Quick,
        AnalysisModeArg::Advanced => AnalysisMode::Advanced,
    }
}

/// Batch rows keep the quick requirement set unless advanced is forced.
fn batch_mode(mode: AnalysisModeArg) -> AnalysisMode {
    match mode {
        AnalysisModeArg::Quick => AnalysisMode::BatchRow,
        AnalysisModeArg::Advanced => AnalysisMode::Advanced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stewart_model::AdvisoryKind;

    fn args_with(ph: &str, base_deficit: bool) -> AnalyzeArgs {
        AnalyzeArgs {
            ph: Some(ph.to_string()),
            pco2: Some("40".to_string()),
            hco3: None,
            be: Some("6".to_string()),
            base_deficit,
            na: Some("140".to_string()),
            k: None,
            ca: None,
            mg: None,
            cl: Some("100".to_string()),
            lactate: Some("1.0".to_string()),
            albumin: None,
            albumin_gdl: None,
            albumin_gl: None,
            po4: None,
            mode: AnalysisModeArg::Quick,
            json: false,
        }
    }

    #[test]
    fn flags_map_to_sanitizer_field_names() {
        let fields = collect_fields(&args_with("7,36", true));
        assert_eq!(fields.get("ph").map(String::as_str), Some("7,36"));
        assert_eq!(fields.get("is_base_deficit").map(String::as_str), Some("true"));
        assert!(!fields.contains_key("k"));
    }

    #[test]
    fn base_deficit_advisory_survives_into_the_result() {
        let result = run_analyze(&args_with("7.36", true)).expect("analyze");
        assert_eq!(result.record.be, Some(-6.0));
        // Sanitization advisories lead the list, ahead of pipeline ones.
        let first = result.advisories.first().expect("advisory present");
        assert_eq!(first.kind, AdvisoryKind::BaseDeficitNormalized);
    }

    #[test]
    fn unparseable_flag_value_is_an_error() {
        let error = run_analyze(&args_with("acidotic", false)).expect_err("must fail");
        assert!(format!("{error:#}").contains("ph"));
    }
}
