//! # Tabcheck: Canonical Registry Builders
//!
//! Provides the single, statically-populated tables associating each
//! transformer and dataset generator with its constructor and declared
//! metadata. Both the convention validator and the performance harness
//! resolve identifiers here; nothing in the crate discovers types through
//! runtime introspection.
//!
//! Registry Invariant: the tables are the single source of truth. They are
//! built once and enumerated in deterministic (BTreeMap) order; validation
//! never mutates them.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::errors::ConformanceError;
use crate::generators::{
    DatasetGenerator, RandomBoolGenerator, RandomFloatGenerator, RandomLabelGenerator,
};
use crate::transformers::{BooleanEncoder, FloatFormatter, Kwargs, LabelEncoder, Transformer};

/// Declared metadata for one registered transformer.
pub struct TransformerEntry {
    /// Declared type name, e.g. `FloatFormatter`.
    pub name: &'static str,
    /// Dotted defining-module path, e.g. `tabcheck.transformers.numerical`.
    pub module_path: &'static str,
    /// Crate-relative source file path.
    pub source_file: &'static str,
    /// Declared operations, matched against test function names.
    pub operations: &'static [&'static str],
    /// Constructor taking case-file keyword arguments.
    pub construct: fn(&Kwargs) -> Result<Box<dyn Transformer>, ConformanceError>,
}

impl TransformerEntry {
    /// Full dotted identifier used in case files.
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.module_path, self.name)
    }
}

/// Declared metadata for one registered dataset generator.
pub struct DatasetEntry {
    pub name: &'static str,
    pub module_path: &'static str,
    pub construct: fn() -> Box<dyn DatasetGenerator>,
}

impl DatasetEntry {
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.module_path, self.name)
    }
}

pub type TransformerTable = BTreeMap<String, TransformerEntry>;
pub type DatasetTable = BTreeMap<String, DatasetEntry>;

/// Builds the fully populated transformer table.
pub fn build_default_transformer_table() -> TransformerTable {
    let entries = [
        TransformerEntry {
            name: FloatFormatter::NAME,
            module_path: "tabcheck.transformers.numerical",
            source_file: "src/transformers/numerical.rs",
            operations: &["fit", "transform", "reverse_transform", "learn_rounding_digits"],
            construct: |kwargs| Ok(Box::new(FloatFormatter::from_kwargs(kwargs)?)),
        },
        TransformerEntry {
            name: BooleanEncoder::NAME,
            module_path: "tabcheck.transformers.boolean",
            source_file: "src/transformers/boolean.rs",
            operations: &["fit", "transform", "reverse_transform"],
            construct: |kwargs| Ok(Box::new(BooleanEncoder::from_kwargs(kwargs)?)),
        },
        TransformerEntry {
            name: LabelEncoder::NAME,
            module_path: "tabcheck.transformers.categorical.label_encoder",
            source_file: "src/transformers/categorical/label_encoder.rs",
            operations: &["fit", "transform", "reverse_transform", "categories"],
            construct: |kwargs| Ok(Box::new(LabelEncoder::from_kwargs(kwargs)?)),
        },
    ];

    entries
        .into_iter()
        .map(|entry| (entry.full_name(), entry))
        .collect()
}

/// Builds the fully populated dataset-generator table.
pub fn build_default_dataset_table() -> DatasetTable {
    let entries = [
        DatasetEntry {
            name: "RandomFloatGenerator",
            module_path: "tabcheck.generators.random",
            construct: || Box::new(RandomFloatGenerator::new()),
        },
        DatasetEntry {
            name: "RandomBoolGenerator",
            module_path: "tabcheck.generators.random",
            construct: || Box::new(RandomBoolGenerator::new()),
        },
        DatasetEntry {
            name: "RandomLabelGenerator",
            module_path: "tabcheck.generators.random",
            construct: || Box::new(RandomLabelGenerator::new()),
        },
    ];

    entries
        .into_iter()
        .map(|entry| (entry.full_name(), entry))
        .collect()
}

/// The canonical transformer table, built once.
pub static TRANSFORMERS: Lazy<TransformerTable> = Lazy::new(build_default_transformer_table);

/// The canonical dataset-generator table, built once.
pub static DATASETS: Lazy<DatasetTable> = Lazy::new(build_default_dataset_table);

/// Resolve a full dotted transformer identifier.
pub fn lookup_transformer(identifier: &str) -> Option<&'static TransformerEntry> {
    TRANSFORMERS.get(identifier)
}

/// Resolve a full dotted dataset-generator identifier.
pub fn lookup_dataset(identifier: &str) -> Option<&'static DatasetEntry> {
    DATASETS.get(identifier)
}
