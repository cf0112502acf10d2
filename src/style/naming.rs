//! Test-name parity linter.
//!
//! Instead of loading test code, the linter reads the resolved test file as
//! text: it locates the suite module named after the transformer, collects
//! the test function names declared inside it, and matches each against the
//! entry's declared-operations table. A test named `test_<op>` or
//! `test_<op>_<anything>` covers operation `<op>`.

use std::fs;

use lazy_static::lazy_static;
use regex::Regex;

use super::checks::{expected_test_location, StyleConfig};
use crate::errors::{ConformanceError, ErrorKind};
use crate::registry::TransformerEntry;

/// Operations every transformer must declare. An entry declaring nothing
/// would fail the match for every test name; this check surfaces that
/// precondition explicitly before per-name matching.
pub const BASE_CAPABILITIES: [&str; 3] = ["fit", "transform", "reverse_transform"];

lazy_static! {
    static ref TEST_FN: Regex =
        Regex::new(r"\bfn\s+(test[A-Za-z0-9_]*)\s*\(").expect("test fn pattern");
}

/// Validates that every test function in the transformer's suite module is
/// named after a declared operation.
pub fn validate_test_names(
    entry: &TransformerEntry,
    config: &StyleConfig,
) -> Result<(), ConformanceError> {
    let path = expected_test_location(entry, config).ok_or_else(|| {
        ConformanceError::new(ErrorKind::TestLocationUnresolved {
            transformer: entry.name.to_string(),
        })
    })?;
    let content = fs::read_to_string(&path).map_err(|e| ConformanceError::io(&path, e))?;

    let suite = snake_case(entry.name);
    let block = suite_block(&content, &suite).ok_or_else(|| {
        ConformanceError::new(ErrorKind::MissingTestSuite {
            suite: suite.clone(),
            file: path.clone(),
        })
        .with_help(format!(
            "declare `mod {} {{ ... }}` in the test file to cover '{}'",
            suite, entry.name
        ))
    })?;

    let tests: Vec<&str> = TEST_FN
        .captures_iter(block)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect();

    if tests.is_empty() {
        return Err(ConformanceError::new(ErrorKind::NoTestFunctions {
            suite,
            file: path,
        }));
    }

    for capability in BASE_CAPABILITIES {
        if !entry.operations.contains(&capability) {
            return Err(ConformanceError::new(ErrorKind::UndeclaredCapability {
                transformer: entry.name.to_string(),
                capability: capability.to_string(),
            })
            .with_help("every transformer declares at least fit, transform and reverse_transform"));
        }
    }

    for test in tests {
        if !matches_declared_operation(test, entry.operations) {
            return Err(ConformanceError::new(ErrorKind::UnmatchedTestName {
                test: test.to_string(),
                transformer: entry.name.to_string(),
            })
            .with_help("name tests `test_<operation>` or `test_<operation>_<detail>`"));
        }
    }

    Ok(())
}

/// True when `test` covers one of the declared operations: either the exact
/// form `test_<op>` or the described form `test_<op>_<anything>`.
pub fn matches_declared_operation(test: &str, operations: &[&str]) -> bool {
    operations.iter().any(|op| {
        let simple = format!("test_{}", op);
        test == simple || test.starts_with(&format!("{}_", simple))
    })
}

/// Extracts the body of a top-level `mod <suite> { ... }` block, by textual
/// brace matching. Suite files keep unbalanced braces out of string literals.
fn suite_block<'a>(content: &'a str, suite: &str) -> Option<&'a str> {
    let needle = format!("mod {}", suite);
    for (pos, _) in content.match_indices(&needle) {
        if pos > 0 {
            let prev = content[..pos].chars().next_back();
            if prev.map(|c| c.is_alphanumeric() || c == '_').unwrap_or(false) {
                continue;
            }
        }
        let after = &content[pos + needle.len()..];
        let trimmed = after.trim_start();
        if !trimmed.starts_with('{') {
            continue;
        }
        let open = pos + needle.len() + (after.len() - trimmed.len());
        return brace_span(content, open);
    }
    None
}

fn brace_span(content: &str, open: usize) -> Option<&str> {
    let mut depth = 0usize;
    for (offset, ch) in content[open..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&content[open + 1..open + offset]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Converts a declared type name to its suite module name:
/// `FloatFormatter` becomes `float_formatter`.
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
