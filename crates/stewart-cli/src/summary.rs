use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use stewart_core::constants::{SID_BASIC_NORMAL, SID_FULL_NORMAL, SID_SIMPLE_NORMAL};
use stewart_model::{
    AnalysisResult, CompensationAssessment, DerivedValues, MechanismReport, SeverityTier,
    SidProfile, ValueSource,
};

use crate::types::BatchOutcome;

pub fn print_result(result: &AnalysisResult) {
    println!(
        "Overall severity: {}",
        result.validation.overall_severity()
    );
    print_severity_table(result);

    if result.validation.is_blocked() {
        eprintln!("Analysis blocked:");
        for error in &result.validation.blocking {
            eprintln!("- {error}");
        }
    }

    if result.swap.is_suspicious {
        println!();
        println!(
            "Possible Na/Cl transposition ({} confidence): {}",
            result.swap.confidence.as_str(),
            result.swap.reason
        );
    }

    if let Some(derived) = &result.derived {
        print_derived_table(derived);
    }
    if let Some(sid) = &result.sid {
        print_sid_table(sid);
    }
    if let Some(compensation) = &result.compensation {
        print_compensation(compensation);
    }
    if let Some(mechanisms) = &result.mechanisms {
        print_mechanism_table(mechanisms);
    }

    if !result.advisories.is_empty() {
        println!();
        println!("Advisories:");
        for advisory in &result.advisories {
            println!("- {}", advisory.message);
        }
    }
}

pub fn print_batch_summary(outcome: &BatchOutcome) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Status"),
        header_cell("Severity"),
        header_cell("Primary"),
        header_cell("Dominant"),
        header_cell("Advisories"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);

    for row in &outcome.rows {
        match &row.outcome {
            Ok(result) => {
                let status = if result.validation.is_blocked() {
                    Cell::new("blocked").fg(comfy_table::Color::Red)
                } else {
                    Cell::new("ok").fg(comfy_table::Color::Green)
                };
                let primary = result
                    .compensation
                    .as_ref()
                    .map_or_else(|| "-".to_string(), |c| c.primary.label().to_string());
                let dominant = result
                    .mechanisms
                    .as_ref()
                    .and_then(|m| m.dominant)
                    .map_or_else(|| "-".to_string(), |m| m.label().to_string());
                table.add_row(vec![
                    Cell::new(row.row_number),
                    status,
                    tier_cell(result.validation.overall_severity()),
                    Cell::new(primary),
                    Cell::new(dominant),
                    Cell::new(result.advisories.len()),
                ]);
            }
            Err(error) => {
                table.add_row(vec![
                    Cell::new(row.row_number),
                    Cell::new("rejected").fg(comfy_table::Color::Red),
                    dim_cell("-"),
                    Cell::new(format!("field {}", error.field)),
                    dim_cell("-"),
                    dim_cell("-"),
                ]);
            }
        }
    }
    println!("{table}");
    println!(
        "{} analyzed, {} blocked, {} rejected",
        outcome.analyzed, outcome.blocked, outcome.rejected
    );
}

fn print_severity_table(result: &AnalysisResult) {
    if result.validation.assessments.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Parameter"),
        header_cell("Value"),
        header_cell("Severity"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for assessment in &result.validation.assessments {
        table.add_row(vec![
            Cell::new(assessment.parameter.label()),
            Cell::new(format!("{:.2}", assessment.value)),
            tier_cell(assessment.tier),
        ]);
    }
    println!("{table}");
}

fn print_derived_table(derived: &DerivedValues) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Quantity"),
        header_cell("Calculated"),
        header_cell("Measured"),
        header_cell("Used"),
    ]);
    apply_table_style(&mut table);
    for index in 1..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new("HCO3 (mEq/L)"),
        Cell::new(format!("{:.1}", derived.hco3_calculated)),
        optional_cell(derived.hco3_measured),
        used_cell(derived.hco3_used, derived.hco3_source),
    ]);
    table.add_row(vec![
        Cell::new("BE (mEq/L)"),
        Cell::new(format!("{:.1}", derived.be_calculated)),
        optional_cell(derived.be_measured),
        used_cell(derived.be_used, derived.be_source),
    ]);
    println!("{table}");
    if let Some(flipped) = derived.be_flipped_suggestion {
        println!(
            "BE sign conflicts with the pH direction; a base deficit entered as excess \
             would read {flipped:.1}"
        );
    }
}

fn print_sid_table(sid: &SidProfile) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("SID ladder"),
        header_cell("mEq/L"),
        header_cell("Normal"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("SID (Na-Cl)"),
        value_cell(sid.sid_simple),
        dim_cell(format!("~{SID_SIMPLE_NORMAL:.0}")),
    ]);
    table.add_row(vec![
        Cell::new("SID (Na-Cl-lactate)"),
        optional_cell(sid.sid_basic),
        dim_cell(format!("~{SID_BASIC_NORMAL:.0}")),
    ]);
    table.add_row(vec![
        Cell::new("SID apparent"),
        optional_cell(sid.sid_full),
        dim_cell(format!("~{SID_FULL_NORMAL:.0}")),
    ]);
    table.add_row(vec![
        Cell::new("SID effective"),
        optional_cell(sid.sid_effective),
        dim_cell("-"),
    ]);
    table.add_row(vec![Cell::new("SIG"), optional_cell(sid.sig), dim_cell("~0")]);
    table.add_row(vec![Cell::new("Atot"), optional_cell(sid.atot), dim_cell("-")]);
    table.add_row(vec![
        Cell::new("Anion gap"),
        value_cell(sid.anion_gap),
        dim_cell("8-12"),
    ]);
    table.add_row(vec![
        Cell::new("Anion gap (albumin-corrected)"),
        optional_cell(sid.anion_gap_corrected),
        dim_cell("8-12"),
    ]);
    println!("{table}");
}

fn print_compensation(compensation: &CompensationAssessment) {
    println!();
    println!("Compensation: {}", compensation.summary);
    if let Some(expected) = compensation.expected_pco2 {
        println!("  expected pCO2: {expected:.0} mmHg");
    }
    if let Some(expected) = compensation.expected_hco3 {
        println!("  expected HCO3: {expected:.1} mEq/L");
    }
}

fn print_mechanism_table(mechanisms: &MechanismReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Mechanism"),
        header_cell("mEq/L"),
        header_cell("Share"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for contribution in &mechanisms.contributions {
        let mut label = Cell::new(contribution.mechanism.label());
        if mechanisms.dominant == Some(contribution.mechanism) {
            label = label.add_attribute(Attribute::Bold);
        }
        table.add_row(vec![
            label,
            Cell::new(format!("{:+.1}", contribution.meq)),
            Cell::new(format!("{:.1}%", contribution.share_percent)),
        ]);
    }
    println!("{table}");
    println!("{}", mechanisms.summary);
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(comfy_table::Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn tier_cell(tier: SeverityTier) -> Cell {
    match tier {
        SeverityTier::Normal => dim_cell("normal"),
        SeverityTier::Mild => Cell::new("mild"),
        SeverityTier::Moderate => Cell::new("moderate").fg(comfy_table::Color::Yellow),
        SeverityTier::Severe => Cell::new("severe").fg(comfy_table::Color::Red),
        SeverityTier::Critical => Cell::new("critical")
            .fg(comfy_table::Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn used_cell(value: f64, source: ValueSource) -> Cell {
    let marker = match source {
        ValueSource::Measured => "measured",
        ValueSource::Calculated => "calculated",
    };
    Cell::new(format!("{value:.1} ({marker})"))
}

fn value_cell(value: f64) -> Cell {
    Cell::new(format!("{value:.1}"))
}

fn optional_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => value_cell(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(comfy_table::Color::DarkGrey)
}
