//! Categorical transformers, one file per transformer.

pub mod label_encoder;

// `style::validate_reexport` checks this module exposes its transformers.
pub use label_encoder::LabelEncoder;
