//! Performance-regression harness.
//!
//! Each declarative JSON case names a transformer, a dataset generator,
//! sample sizes, and upper bounds for the six profiling metrics. The
//! harness builds both instances from the canonical registry, delegates to
//! a [`Profiler`](profiler::Profiler), and asserts every measurement stays
//! strictly under its budget. Cases are independent; one failing case never
//! aborts its siblings.

pub mod cases;
pub mod harness;
pub mod profiler;

// Re-exports for concise imports
pub use cases::{discover_cases, load_case, DiscoveredCase, ExpectedBudgets, PerfCase, PhaseBudget};
pub use harness::{
    enforce_budgets, get_dataset_instance, get_transformer_instance, run_all_cases, run_case,
    PerfConfig,
};
pub use profiler::{Metric, ProfileReport, Profiler, WallProfiler};
