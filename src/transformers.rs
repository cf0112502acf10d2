//! Transformer implementations and the base contract they share.
//!
//! Layout invariant: every transformer lives directly under this module's
//! directory or exactly one level below it, and is re-exported here (or from
//! the subfolder's module root). The convention validator in
//! [`crate::style`] enforces both rules against the registry.

pub mod base;
pub mod boolean;
pub mod categorical;
pub mod numerical;

// Re-exports for concise imports; `style::validate_reexport` checks these.
pub use base::{Kwargs, Transformer};
pub use boolean::BooleanEncoder;
pub use categorical::LabelEncoder;
pub use numerical::FloatFormatter;
