//! Case execution: instance construction, profiling, threshold enforcement.

use std::path::PathBuf;

use serde_json::Value;

use super::cases::{discover_cases, load_case, DiscoveredCase, ExpectedBudgets};
use super::profiler::{Metric, ProfileReport, Profiler};
use crate::errors::{ConformanceError, ErrorKind};
use crate::generators::DatasetGenerator;
use crate::registry::{lookup_dataset, lookup_transformer};
use crate::report::Outcome;
use crate::transformers::{Kwargs, Transformer};

/// Configuration for a harness run.
#[derive(Debug, Clone)]
pub struct PerfConfig {
    /// Directory scanned for `.json` case files.
    pub cases_root: PathBuf,
}

impl Default for PerfConfig {
    fn default() -> Self {
        Self {
            cases_root: PathBuf::from("tests/cases"),
        }
    }
}

/// Builds a transformer from a case-file value.
///
/// A non-string value yields `Ok(None)` - "no instance configured" - which
/// callers must treat as a skip, not an error. A string that does not
/// resolve in the registry is an error.
pub fn get_transformer_instance(
    value: &Value,
    kwargs: &Kwargs,
) -> Result<Option<Box<dyn Transformer>>, ConformanceError> {
    let Some(identifier) = value.as_str() else {
        return Ok(None);
    };
    let entry = lookup_transformer(identifier).ok_or_else(|| {
        ConformanceError::new(ErrorKind::UnknownTransformer {
            identifier: identifier.to_string(),
        })
    })?;
    Ok(Some((entry.construct)(kwargs)?))
}

/// Builds a dataset generator from a case-file value. Same permissive
/// non-string handling as [`get_transformer_instance`]; generators take no
/// constructor arguments.
pub fn get_dataset_instance(
    value: &Value,
) -> Result<Option<Box<dyn DatasetGenerator>>, ConformanceError> {
    let Some(identifier) = value.as_str() else {
        return Ok(None);
    };
    let entry = lookup_dataset(identifier).ok_or_else(|| {
        ConformanceError::new(ErrorKind::UnknownDataset {
            identifier: identifier.to_string(),
        })
    })?;
    Ok(Some((entry.construct)()))
}

/// Compares each of the six measurements against its configured bound with
/// strict less-than, in the fixed metric order. The first violation fails
/// the case, naming the metric; in-bound siblings never rescue it.
pub fn enforce_budgets(
    case_id: &str,
    report: &ProfileReport,
    expected: &ExpectedBudgets,
) -> Result<(), ConformanceError> {
    for metric in Metric::ALL {
        let measured = report.get(metric);
        let limit = expected.limit(metric);
        if !(measured < limit) {
            return Err(ConformanceError::new(ErrorKind::BudgetExceeded {
                case: case_id.to_string(),
                metric,
                measured,
                limit,
            })
            .with_help("a regression in this metric, or a budget that needs a deliberate bump"));
        }
    }
    Ok(())
}

/// Runs a single discovered case end to end. Loading errors, propagated
/// phase failures, and exceeded budgets all fail this case only.
pub fn run_case(case: &DiscoveredCase, profiler: &dyn Profiler) -> Outcome {
    let perf_case = match load_case(&case.id, &case.path) {
        Ok(perf_case) => perf_case,
        Err(error) => return fail(case, error),
    };

    let mut transformer = match get_transformer_instance(&perf_case.transformer, &perf_case.kwargs)
    {
        Ok(Some(transformer)) => transformer,
        Ok(None) => return skip(case, "no transformer configured"),
        Err(error) => return fail(case, error),
    };

    let dataset = match get_dataset_instance(&perf_case.dataset) {
        Ok(Some(dataset)) => dataset,
        Ok(None) => return skip(case, "no dataset generator configured"),
        Err(error) => return fail(case, error),
    };

    let report = match profiler.profile(
        transformer.as_mut(),
        dataset.as_ref(),
        perf_case.transform_size,
        perf_case.fit_size,
    ) {
        Ok(report) => report,
        Err(error) => return fail(case, error),
    };

    match enforce_budgets(&case.id, &report, &perf_case.expected) {
        Ok(()) => Outcome::Pass {
            name: case.id.clone(),
        },
        Err(error) => fail(case, error),
    }
}

/// Discovers and runs every case under the configured root. Outcomes come
/// back in discovery order; no case aborts its siblings.
pub fn run_all_cases(config: &PerfConfig, profiler: &dyn Profiler) -> Vec<Outcome> {
    discover_cases(&config.cases_root)
        .iter()
        .map(|case| run_case(case, profiler))
        .collect()
}

fn fail(case: &DiscoveredCase, error: ConformanceError) -> Outcome {
    Outcome::Fail {
        name: case.id.clone(),
        error,
    }
}

fn skip(case: &DiscoveredCase, reason: &str) -> Outcome {
    Outcome::Skipped {
        name: case.id.clone(),
        reason: reason.to_string(),
    }
}
