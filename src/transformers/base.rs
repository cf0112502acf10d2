//! The base transformer contract.
//!
//! A transformer encapsulates a reversible fit/transform/reverse-transform
//! operation over a [`Table`]. Implementations must be constructible from a
//! JSON keyword-argument map so the performance harness can build them from
//! declarative case files.

use crate::data::Table;
use crate::errors::ConformanceError;

/// Constructor keyword arguments, as found in case files.
pub type Kwargs = serde_json::Map<String, serde_json::Value>;

/// Common ancestor contract for all transformers.
///
/// `fit` learns per-column state; `transform` and `reverse_transform` are
/// read-only with respect to that state and must round-trip for values seen
/// during fitting. Errors propagate to the caller; nothing here is retried.
pub trait Transformer: std::fmt::Debug {
    /// The declared type name, matching the registry entry.
    fn type_name(&self) -> &'static str;

    fn fit(&mut self, data: &Table) -> Result<(), ConformanceError>;

    fn transform(&self, data: &Table) -> Result<Table, ConformanceError>;

    fn reverse_transform(&self, data: &Table) -> Result<Table, ConformanceError>;
}

/// Shorthand for the "operated on a table without the configured column"
/// failure shared by the fixture transformers.
pub(crate) fn missing_column(
    transformer: &'static str,
    operation: &str,
    column: &str,
) -> ConformanceError {
    ConformanceError::new(crate::errors::ErrorKind::PhaseFailure {
        transformer: transformer.to_string(),
        operation: operation.to_string(),
        reason: format!("input table has no column named '{}'", column),
    })
}

/// Shorthand for the "used before fit" failure.
pub(crate) fn not_fitted(transformer: &'static str, operation: &str) -> ConformanceError {
    ConformanceError::new(crate::errors::ErrorKind::PhaseFailure {
        transformer: transformer.to_string(),
        operation: operation.to_string(),
        reason: "transformer has not been fitted".to_string(),
    })
}
