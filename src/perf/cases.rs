//! Declarative case files: model, discovery, and loading.

use std::fs;
use std::path::{Path, PathBuf};

use miette::SourceSpan;
use serde::Deserialize;
use serde_json::Value;
use walkdir::WalkDir;

use super::profiler::Metric;
use crate::errors::{ConformanceError, ErrorKind};
use crate::transformers::Kwargs;

/// One performance test case, one JSON document per file.
///
/// `transformer` and `dataset` are kept as raw JSON values: a case may hold
/// a non-string there (typically `null`) to mean "no instance configured",
/// which skips the case instead of failing it.
#[derive(Debug, Clone, Deserialize)]
pub struct PerfCase {
    pub transformer: Value,
    pub kwargs: Kwargs,
    pub dataset: Value,
    pub fit_size: usize,
    pub transform_size: usize,
    pub expected: ExpectedBudgets,
}

/// Upper bounds for the three phases.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ExpectedBudgets {
    pub fit: PhaseBudget,
    pub transform: PhaseBudget,
    pub reverse_transform: PhaseBudget,
}

/// Time (seconds) and memory (bytes) bounds for one phase.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PhaseBudget {
    pub time: f64,
    pub memory: f64,
}

impl ExpectedBudgets {
    /// The configured bound for one of the six metrics.
    pub fn limit(&self, metric: Metric) -> f64 {
        match metric {
            Metric::FitTime => self.fit.time,
            Metric::FitMemory => self.fit.memory,
            Metric::TransformTime => self.transform.time,
            Metric::TransformMemory => self.transform.memory,
            Metric::ReverseTransformTime => self.reverse_transform.time,
            Metric::ReverseTransformMemory => self.reverse_transform.memory,
        }
    }
}

/// A case file found on disk. The id is the path relative to the discovery
/// root, which keeps run output stable across machines.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredCase {
    pub id: String,
    pub path: PathBuf,
}

/// Recursively discovers all `.json` case files under the given root.
///
/// The returned list is sorted to ensure deterministic execution order.
pub fn discover_cases<P: AsRef<Path>>(root: P) -> Vec<DiscoveredCase> {
    let root = root.as_ref();
    let mut cases: Vec<DiscoveredCase> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.file_type().is_file()
                && e.path()
                    .extension()
                    .map(|ext| ext == "json")
                    .unwrap_or(false)
        })
        .map(|e| {
            let path = e.path().to_path_buf();
            let id = path
                .strip_prefix(root)
                .unwrap_or(&path)
                .display()
                .to_string();
            DiscoveredCase { id, path }
        })
        .collect();
    cases.sort_by(|a, b| a.id.cmp(&b.id));
    cases
}

/// Reads and parses a case file. A malformed document fails fast with a
/// `CaseFormat` error carrying the offending span.
pub fn load_case(case_id: &str, path: &Path) -> Result<PerfCase, ConformanceError> {
    let content = fs::read_to_string(path).map_err(|e| ConformanceError::io(path, e))?;

    serde_json::from_str(&content).map_err(|e| {
        let span = span_at(&content, e.line(), e.column());
        ConformanceError::new(ErrorKind::CaseFormat {
            case: case_id.to_string(),
            detail: e.to_string(),
        })
        .with_source(path.display().to_string(), content, span, "malformed here")
        .with_help("cases need transformer, kwargs, dataset, fit_size, transform_size and expected budgets")
    })
}

/// Byte span for a 1-based line/column position.
fn span_at(content: &str, line: usize, column: usize) -> SourceSpan {
    if content.is_empty() {
        return crate::errors::unspanned();
    }
    let mut offset = 0usize;
    for (idx, text) in content.lines().enumerate() {
        if idx + 1 == line {
            offset += column.saturating_sub(1).min(text.len());
            let offset = offset.min(content.len().saturating_sub(1));
            return SourceSpan::from(offset..offset + 1);
        }
        offset += text.len() + 1;
    }
    crate::errors::unspanned()
}
