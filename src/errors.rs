//! Tabcheck Error Handling - Unified Diagnostics API
//!
//! Every failure surfaced by the convention validator or the performance
//! harness is a [`ConformanceError`]: one struct, a kind enum, a stable
//! diagnostic code, and an optional source attachment for case files.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceSpan};
use thiserror::Error;

use crate::perf::profiler::Metric;

// ============================================================================
// ERROR TYPE - kind + diagnostics, no wrapper hierarchy
// ============================================================================

/// The single error type for all checks and harness operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct ConformanceError {
    /// What went wrong (check-specific data)
    pub kind: ErrorKind,
    /// Source attachment for errors tied to a concrete file (case files)
    source_info: Option<SourceInfo>,
    /// How to help (optional, populated by the raising check)
    help: Option<String>,
}

/// All failure kinds, grouped by the taxonomy the checkers enforce.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    // Structural-convention violations
    BaseContract {
        transformer: String,
        reason: String,
    },
    ModulePlacement {
        transformer: String,
        source_file: PathBuf,
    },
    TestLocationUnresolved {
        transformer: String,
    },
    MissingTestFile {
        transformer: String,
        expected: PathBuf,
    },
    MissingTestSuite {
        suite: String,
        file: PathBuf,
    },
    NoTestFunctions {
        suite: String,
        file: PathBuf,
    },
    UndeclaredCapability {
        transformer: String,
        capability: String,
    },
    UnmatchedTestName {
        test: String,
        transformer: String,
    },
    MissingReexport {
        transformer: String,
        module: String,
    },

    // Performance-regression violations and propagated phase failures
    BudgetExceeded {
        case: String,
        metric: Metric,
        measured: f64,
        limit: f64,
    },
    PhaseFailure {
        transformer: String,
        operation: String,
        reason: String,
    },

    // Configuration / loading errors
    CaseFormat {
        case: String,
        detail: String,
    },
    InvalidKwargs {
        transformer: String,
        detail: String,
    },
    UnknownTransformer {
        identifier: String,
    },
    UnknownDataset {
        identifier: String,
    },
    Io {
        path: PathBuf,
        detail: String,
    },
}

/// Source attachment for errors raised while reading a concrete file.
#[derive(Debug, Clone)]
struct SourceInfo {
    source: Arc<NamedSource<String>>,
    span: SourceSpan,
    label: String,
}

impl ErrorKind {
    /// Get the error category for reporting and test assertions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::BaseContract { .. }
            | Self::ModulePlacement { .. }
            | Self::TestLocationUnresolved { .. }
            | Self::MissingTestFile { .. }
            | Self::MissingTestSuite { .. }
            | Self::NoTestFunctions { .. }
            | Self::UndeclaredCapability { .. }
            | Self::UnmatchedTestName { .. }
            | Self::MissingReexport { .. } => ErrorCategory::Style,

            Self::BudgetExceeded { .. } | Self::PhaseFailure { .. } => ErrorCategory::Perf,

            Self::CaseFormat { .. }
            | Self::InvalidKwargs { .. }
            | Self::UnknownTransformer { .. }
            | Self::UnknownDataset { .. }
            | Self::Io { .. } => ErrorCategory::Config,
        }
    }

    /// Get error code suffix for diagnostic codes.
    pub const fn code_suffix(&self) -> &'static str {
        match self {
            Self::BaseContract { .. } => "base_contract",
            Self::ModulePlacement { .. } => "module_placement",
            Self::TestLocationUnresolved { .. } => "test_location_unresolved",
            Self::MissingTestFile { .. } => "missing_test_file",
            Self::MissingTestSuite { .. } => "missing_test_suite",
            Self::NoTestFunctions { .. } => "no_test_functions",
            Self::UndeclaredCapability { .. } => "undeclared_capability",
            Self::UnmatchedTestName { .. } => "unmatched_test_name",
            Self::MissingReexport { .. } => "missing_reexport",
            Self::BudgetExceeded { .. } => "budget_exceeded",
            Self::PhaseFailure { .. } => "phase_failure",
            Self::CaseFormat { .. } => "case_format",
            Self::InvalidKwargs { .. } => "invalid_kwargs",
            Self::UnknownTransformer { .. } => "unknown_transformer",
            Self::UnknownDataset { .. } => "unknown_dataset",
            Self::Io { .. } => "io",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Style,
    Perf,
    Config,
}

impl ErrorCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Style => "style",
            ErrorCategory::Perf => "perf",
            ErrorCategory::Config => "config",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::BaseContract {
                transformer,
                reason,
            } => {
                write!(
                    f,
                    "Style error: '{}' does not satisfy the base transformer contract: {}",
                    transformer, reason
                )
            }
            ErrorKind::ModulePlacement {
                transformer,
                source_file,
            } => {
                write!(
                    f,
                    "Style error: '{}' is not placed inside a valid path: {}",
                    transformer,
                    source_file.display()
                )
            }
            ErrorKind::TestLocationUnresolved { transformer } => {
                write!(
                    f,
                    "Style error: no expected test location could be resolved for '{}'",
                    transformer
                )
            }
            ErrorKind::MissingTestFile {
                transformer,
                expected,
            } => {
                write!(
                    f,
                    "Style error: expected test file for '{}' does not exist: {}",
                    transformer,
                    expected.display()
                )
            }
            ErrorKind::MissingTestSuite { suite, file } => {
                write!(
                    f,
                    "Style error: expected test suite module '{}' was not found in {}",
                    suite,
                    file.display()
                )
            }
            ErrorKind::NoTestFunctions { suite, file } => {
                write!(
                    f,
                    "Style error: no test functions found in suite '{}' of {}",
                    suite,
                    file.display()
                )
            }
            ErrorKind::UndeclaredCapability {
                transformer,
                capability,
            } => {
                write!(
                    f,
                    "Style error: '{}' does not declare the base capability '{}'",
                    transformer, capability
                )
            }
            ErrorKind::UnmatchedTestName { test, transformer } => {
                write!(
                    f,
                    "Style error: no declared operation of '{}' matches the test: {}",
                    transformer, test
                )
            }
            ErrorKind::MissingReexport {
                transformer,
                module,
            } => {
                write!(
                    f,
                    "Style error: '{}' is not re-exported from its parent module '{}'",
                    transformer, module
                )
            }
            ErrorKind::BudgetExceeded {
                case,
                metric,
                measured,
                limit,
            } => {
                write!(
                    f,
                    "Performance regression in '{}': {} was {} but the budget is {}",
                    case,
                    metric.label(),
                    measured,
                    limit
                )
            }
            ErrorKind::PhaseFailure {
                transformer,
                operation,
                reason,
            } => {
                write!(
                    f,
                    "Runtime error: '{}' failed during {}: {}",
                    transformer, operation, reason
                )
            }
            ErrorKind::CaseFormat { case, detail } => {
                write!(f, "Malformed test case '{}': {}", case, detail)
            }
            ErrorKind::InvalidKwargs {
                transformer,
                detail,
            } => {
                write!(
                    f,
                    "Invalid constructor arguments for '{}': {}",
                    transformer, detail
                )
            }
            ErrorKind::UnknownTransformer { identifier } => {
                write!(f, "Unknown transformer identifier: '{}'", identifier)
            }
            ErrorKind::UnknownDataset { identifier } => {
                write!(f, "Unknown dataset generator identifier: '{}'", identifier)
            }
            ErrorKind::Io { path, detail } => {
                write!(f, "I/O error on {}: {}", path.display(), detail)
            }
        }
    }
}

impl Diagnostic for ConformanceError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!(
            "tabcheck::{}::{}",
            self.kind.category(),
            self.kind.code_suffix()
        )))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let info = self.source_info.as_ref()?;
        let labels = vec![LabeledSpan::new_with_span(
            Some(info.label.clone()),
            info.span,
        )];
        Some(Box::new(labels.into_iter()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.source_info
            .as_ref()
            .map(|info| &*info.source as &dyn miette::SourceCode)
    }
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

impl ConformanceError {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            source_info: None,
            help: None,
        }
    }

    /// Attach a help message shown under the rendered diagnostic.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Attach the offending file content so miette can render a labeled span.
    pub fn with_source(
        mut self,
        name: impl Into<String>,
        content: impl Into<String>,
        span: SourceSpan,
        label: impl Into<String>,
    ) -> Self {
        self.source_info = Some(SourceInfo {
            source: Arc::new(NamedSource::new(name.into(), content.into())),
            span,
            label: label.into(),
        });
        self
    }

    /// Shorthand for filesystem failures.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io {
            path: path.into(),
            detail: err.to_string(),
        })
    }
}

impl From<ErrorKind> for ConformanceError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Creates a placeholder span for errors not tied to a specific location
/// within an attached source file.
pub fn unspanned() -> SourceSpan {
    SourceSpan::from(0..0)
}

/// Prints a ConformanceError with full miette diagnostics.
///
/// Use this for user-facing error display in the CLI.
pub fn print_error(error: ConformanceError) {
    use miette::Report;
    let report = Report::new(error);
    eprintln!("{report:?}");
}
