//! Stewart acid-base analyzer CLI.

use clap::{ColorChoice, Parser};
use serde_json::json;
use std::io::{self, IsTerminal};
use stewart_cli::logging::{LogConfig, LogFormat, init_logging};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_analyze, run_batch};
use crate::summary::{print_batch_summary, print_result};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Analyze(args) => {
            let json_output = args.json;
            match run_analyze(&args) {
                Ok(result) => {
                    if json_output {
                        match serde_json::to_string_pretty(&result) {
                            Ok(rendered) => println!("{rendered}"),
                            Err(error) => {
                                eprintln!("error: {error}");
                                std::process::exit(1);
                            }
                        }
                    } else {
                        print_result(&result);
                    }
                    if result.validation.is_blocked() { 1 } else { 0 }
                }
                Err(error) => {
                    eprintln!("error: {error:#}");
                    1
                }
            }
        }
        Command::Batch(args) => {
            let json_output = args.json;
            match run_batch(&args) {
                Ok(outcome) => {
                    if json_output {
                        print_batch_json(&outcome);
                    } else {
                        print_batch_summary(&outcome);
                    }
                    if outcome.has_failures() { 1 } else { 0 }
                }
                Err(error) => {
                    eprintln!("error: {error:#}");
                    1
                }
            }
        }
    };
    std::process::exit(exit_code);
}

/// One JSON object per row on stdout (JSON Lines).
fn print_batch_json(outcome: &types::BatchOutcome) {
    for row in &outcome.rows {
        let line = match &row.outcome {
            Ok(result) => json!({ "row": row.row_number, "result": result }),
            Err(error) => json!({ "row": row.row_number, "error": error }),
        };
        println!("{line}");
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
