//! CLI argument definitions for the Stewart analyzer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "stewart",
    version,
    about = "Stewart physicochemical acid-base analyzer",
    long_about = "Analyze arterial blood-gas and electrolyte panels with the Stewart \
                  physicochemical approach.\n\n\
                  Computes the strong ion difference ladder (including SIDe and SIG), \
                  derived bicarbonate and base excess, compensation adequacy and the \
                  mechanism breakdown of metabolic disturbances."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow raw input values in log output.
    ///
    /// Lab values are patient data. By default they are redacted from every
    /// log line; this flag lifts the redaction for local debugging.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a single panel supplied as flags.
    Analyze(AnalyzeArgs),

    /// Analyze every row of a CSV file.
    Batch(BatchArgs),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Arterial pH.
    #[arg(long)]
    pub ph: Option<String>,

    /// pCO2 in mmHg.
    #[arg(long)]
    pub pco2: Option<String>,

    /// Measured bicarbonate in mEq/L (computed from pH/pCO2 when omitted).
    #[arg(long)]
    pub hco3: Option<String>,

    /// Measured base excess in mEq/L (computed when omitted).
    #[arg(long)]
    pub be: Option<String>,

    /// The base-excess value is reported as a base deficit.
    #[arg(long = "base-deficit", requires = "be")]
    pub base_deficit: bool,

    /// Sodium in mEq/L.
    #[arg(long)]
    pub na: Option<String>,

    /// Potassium in mEq/L.
    #[arg(long)]
    pub k: Option<String>,

    /// Ionized calcium in mmol/L.
    #[arg(long)]
    pub ca: Option<String>,

    /// Magnesium in mmol/L.
    #[arg(long)]
    pub mg: Option<String>,

    /// Chloride in mEq/L.
    #[arg(long)]
    pub cl: Option<String>,

    /// Lactate in mmol/L.
    #[arg(long)]
    pub lactate: Option<String>,

    /// Albumin; values of 10 or more are treated as g/L, below as g/dL.
    #[arg(long)]
    pub albumin: Option<String>,

    /// Albumin explicitly in g/dL (bypasses the unit heuristic).
    #[arg(long = "albumin-gdl", conflicts_with = "albumin")]
    pub albumin_gdl: Option<String>,

    /// Albumin explicitly in g/L (bypasses the unit heuristic).
    #[arg(long = "albumin-gl", conflicts_with_all = ["albumin", "albumin_gdl"])]
    pub albumin_gl: Option<String>,

    /// Phosphate in mmol/L.
    #[arg(long)]
    pub po4: Option<String>,

    /// Analysis mode; advanced requires the full electrolyte panel.
    #[arg(long = "mode", value_enum, default_value = "quick")]
    pub mode: AnalysisModeArg,

    /// Emit the full result as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct BatchArgs {
    /// Path to the CSV file; one panel per row, lowercase column headers.
    #[arg(value_name = "CSV_FILE")]
    pub input: PathBuf,

    /// Analysis mode applied to every row.
    #[arg(long = "mode", value_enum, default_value = "quick")]
    pub mode: AnalysisModeArg,

    /// Emit one JSON object per row (JSON Lines) instead of a summary table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AnalysisModeArg {
    /// pH, pCO2, Na, Cl and lactate required.
    Quick,
    /// Additionally requires K, Ca, Mg and albumin for the full SID ladder.
    Advanced,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
