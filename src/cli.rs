//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::{path::PathBuf, process};

use clap::{Parser, Subcommand};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::errors::{print_error, ConformanceError, ErrorKind};
use crate::perf::{run_all_cases, PerfConfig, WallProfiler};
use crate::registry::{DATASETS, TRANSFORMERS};
use crate::report::{partition_outcomes, report_outcomes, Outcome, ReportConfig};
use crate::style::{validate_transformer, StyleConfig};

// ============================================================================
// CLI ARGUMENTS - Command-line argument definitions
// ============================================================================

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "tabcheck",
    version,
    about = "Conformance and performance-regression checks for reversible tabular transformers."
)]
pub struct TabcheckArgs {
    #[command(subcommand)]
    pub command: ArgsCommand,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum ArgsCommand {
    /// Run every convention check against the transformer registry.
    Style {
        /// Only validate transformers whose name contains this substring.
        filter: Option<String>,
    },
    /// Discover and run all performance cases in a directory.
    Perf {
        /// The directory containing JSON case files.
        #[arg(default_value = "tests/cases")]
        path: PathBuf,
    },
    /// List all registered transformers and dataset generators.
    List,
}

// ============================================================================
// MAIN ENTRY POINT - Direct library calls
// ============================================================================

/// The main entry point for the CLI.
pub fn run() {
    let args = TabcheckArgs::parse();

    match args.command {
        ArgsCommand::Style { filter } => run_style(filter),
        ArgsCommand::Perf { path } => run_perf(path),
        ArgsCommand::List => run_list(),
    }
}

fn run_style(filter: Option<String>) {
    let config = StyleConfig::default();
    let filter = filter.map(|f| f.to_lowercase());

    let outcomes: Vec<Outcome> = TRANSFORMERS
        .values()
        .filter(|entry| match filter.as_deref() {
            Some(f) => entry.name.to_lowercase().contains(f),
            None => true,
        })
        .map(|entry| match validate_transformer(entry, &config) {
            Ok(()) => Outcome::Pass {
                name: entry.full_name(),
            },
            Err(error) => Outcome::Fail {
                name: entry.full_name(),
                error,
            },
        })
        .collect();

    finish(outcomes);
}

fn run_perf(path: PathBuf) {
    if !path.is_dir() {
        print_error(ConformanceError::new(ErrorKind::Io {
            path,
            detail: "cases directory does not exist".to_string(),
        }));
        process::exit(1);
    }
    let config = PerfConfig { cases_root: path };
    let outcomes = run_all_cases(&config, &WallProfiler);
    finish(outcomes);
}

fn finish(outcomes: Vec<Outcome>) {
    report_outcomes(&outcomes, &ReportConfig::default());
    let (_, failed, _) = partition_outcomes(&outcomes);
    if failed > 0 {
        process::exit(1);
    }
}

fn run_list() {
    print_heading("Transformers:");
    for entry in TRANSFORMERS.values() {
        println!("  {}  [{}]", entry.full_name(), entry.operations.join(", "));
    }

    print_heading("Dataset generators:");
    for entry in DATASETS.values() {
        println!("  {}", entry.full_name());
    }
}

fn print_heading(text: &str) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true));
    println!("{}", text);
    let _ = stdout.reset();
}
