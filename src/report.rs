//! Outcome reporting shared by the validator and the harness.
//!
//! One outcome per transformer or case, folded into a colored
//! PASS/FAIL/SKIP summary on the terminal.

use crate::errors::ConformanceError;

/// The result of one validated transformer or one executed case.
#[derive(Debug)]
pub enum Outcome {
    Pass {
        name: String,
    },
    Fail {
        name: String,
        error: ConformanceError,
    },
    Skipped {
        name: String,
        reason: String,
    },
}

/// Configuration for terminal reporting.
pub struct ReportConfig {
    pub use_colors: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stderr),
        }
    }
}

// Color constants for terminal output
const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

impl ReportConfig {
    /// Apply color formatting to text if colors are enabled.
    pub fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }
}

/// Partition outcomes into (passed, failed, skipped) counts.
pub fn partition_outcomes(outcomes: &[Outcome]) -> (usize, usize, usize) {
    let passed = outcomes
        .iter()
        .filter(|o| matches!(o, Outcome::Pass { .. }))
        .count();
    let failed = outcomes
        .iter()
        .filter(|o| matches!(o, Outcome::Fail { .. }))
        .count();
    let skipped = outcomes
        .iter()
        .filter(|o| matches!(o, Outcome::Skipped { .. }))
        .count();
    (passed, failed, skipped)
}

/// Print all outcomes with a closing summary line.
pub fn report_outcomes(outcomes: &[Outcome], config: &ReportConfig) {
    for outcome in outcomes {
        match outcome {
            Outcome::Pass { name } => {
                println!("{}: {}", config.colorize("PASS", GREEN), name)
            }
            Outcome::Fail { .. } => print_failure(outcome, config),
            Outcome::Skipped { name, reason } => {
                println!("{}: {} ({})", config.colorize("SKIP", YELLOW), name, reason)
            }
        }
    }

    let (passed, failed, skipped) = partition_outcomes(outcomes);
    println!(
        "\nSummary: total {}, {} {}, {} {}, {} {}",
        outcomes.len(),
        config.colorize("passed", GREEN),
        passed,
        config.colorize("failed", RED),
        failed,
        config.colorize("skipped", YELLOW),
        skipped,
    );

    if failed > 0 {
        eprintln!("\nFailed:");
        for outcome in outcomes {
            if let Outcome::Fail { name, .. } = outcome {
                eprintln!("  - {}", name);
            }
        }
    }
}

/// Print detailed failure information, including the diagnostic code.
pub fn print_failure(outcome: &Outcome, config: &ReportConfig) {
    if let Outcome::Fail { name, error } = outcome {
        let fail = config.colorize("FAIL", RED);
        eprintln!("{}: {}", fail, name);
        eprintln!("  Error: {}", error);
    }
}
