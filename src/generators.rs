//! Synthetic dataset generators used to exercise transformers during
//! profiling.
//!
//! Generators are deterministic: every instance carries a seed, so two runs
//! over the same case produce byte-identical input tables.

pub mod random;

pub use random::{RandomBoolGenerator, RandomFloatGenerator, RandomLabelGenerator};

use crate::data::Table;

/// A synthetic data source with a fixed output schema.
pub trait DatasetGenerator: std::fmt::Debug {
    /// The declared type name, matching the registry entry.
    fn type_name(&self) -> &'static str;

    /// Produce `size` rows of synthetic data.
    fn generate(&self, size: usize) -> Table;
}
