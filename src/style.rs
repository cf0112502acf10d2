//! Convention validator.
//!
//! Five structural checks keep transformer implementations and their unit
//! tests in sync: the base contract, source placement, test-file location,
//! test-name parity, and parent-module re-export. Checks are independent,
//! read-only against the filesystem, and idempotent; each failure is an
//! assertion-style [`ConformanceError`](crate::ConformanceError) with a
//! human-readable message.

pub mod checks;
pub mod naming;

// Re-exports for concise imports
pub use checks::{
    expected_test_location, validate_base_contract, validate_module_placement, validate_reexport,
    validate_test_location, StyleConfig,
};
pub use naming::{validate_test_names, BASE_CAPABILITIES};

use crate::errors::ConformanceError;
use crate::registry::{TransformerEntry, TransformerTable};
use crate::report::Outcome;

/// Runs every convention check against one registry entry, in the same
/// order a reviewer reads them: contract, placement, test location, test
/// names, re-export. Stops at the first violation.
pub fn validate_transformer(
    entry: &TransformerEntry,
    config: &StyleConfig,
) -> Result<(), ConformanceError> {
    checks::validate_base_contract(entry)?;
    checks::validate_module_placement(entry)?;
    checks::validate_test_location(entry, config)?;
    naming::validate_test_names(entry, config)?;
    checks::validate_reexport(entry, config)?;
    Ok(())
}

/// Validates every entry of a registry table, collecting one outcome per
/// transformer. A failing entry never aborts its siblings.
pub fn validate_table(table: &TransformerTable, config: &StyleConfig) -> Vec<Outcome> {
    table
        .values()
        .map(|entry| match validate_transformer(entry, config) {
            Ok(()) => Outcome::Pass {
                name: entry.full_name(),
            },
            Err(error) => Outcome::Fail {
                name: entry.full_name(),
                error,
            },
        })
        .collect()
}
