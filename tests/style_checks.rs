//! Integration tests for the convention validator, run both against the
//! crate's own registry (which must pass every check) and against synthetic
//! entries in throwaway trees (which must fail with the right kind).

mod common;

use common::{config_at, fixture_entry, write_file};
use tabcheck::registry::TRANSFORMERS;
use tabcheck::style::{
    expected_test_location, validate_base_contract, validate_module_placement, validate_reexport,
    validate_table, validate_test_location, validate_test_names, validate_transformer, StyleConfig,
};
use tabcheck::ErrorKind;
use tempfile::TempDir;

const CORE_OPS: &[&str] = &["fit", "transform", "reverse_transform"];

// ---------------------------------------------------------------------------
// Self-validation: the shipped tree obeys its own conventions
// ---------------------------------------------------------------------------

#[test]
fn every_registered_transformer_passes_all_checks() {
    let config = StyleConfig::default();
    for entry in TRANSFORMERS.values() {
        validate_transformer(entry, &config).unwrap_or_else(|e| {
            panic!("{} failed its convention checks: {}", entry.full_name(), e)
        });
    }
}

#[test]
fn validation_is_idempotent() {
    let config = StyleConfig::default();
    let first: Vec<String> = validate_table(&TRANSFORMERS, &config)
        .iter()
        .map(|o| format!("{:?}", o))
        .collect();
    let second: Vec<String> = validate_table(&TRANSFORMERS, &config)
        .iter()
        .map(|o| format!("{:?}", o))
        .collect();
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Base contract
// ---------------------------------------------------------------------------

#[test]
fn base_contract_rejects_declared_name_drift() {
    let entry = fixture_entry(
        "SomethingElse",
        "tabcheck.transformers.numerical",
        "src/transformers/numerical.rs",
        CORE_OPS,
    );
    let err = validate_base_contract(&entry).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::BaseContract { .. }));
    assert!(err.to_string().contains("SomethingElse"));
}

// ---------------------------------------------------------------------------
// Module placement and test location
// ---------------------------------------------------------------------------

#[test]
fn placement_accepts_flat_and_nested_layouts() {
    let flat = fixture_entry(
        "FloatFormatter",
        "tabcheck.transformers.numerical",
        "src/transformers/numerical.rs",
        CORE_OPS,
    );
    let nested = fixture_entry(
        "FloatFormatter",
        "tabcheck.transformers.categorical.label_encoder",
        "src/transformers/categorical/label_encoder.rs",
        CORE_OPS,
    );
    assert!(validate_module_placement(&flat).is_ok());
    assert!(validate_module_placement(&nested).is_ok());
}

#[test]
fn placement_rejects_sources_outside_transformers() {
    let entry = fixture_entry(
        "FloatFormatter",
        "tabcheck.misc.float",
        "src/misc/float.rs",
        CORE_OPS,
    );
    let err = validate_module_placement(&entry).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ModulePlacement { .. }));
}

#[test]
fn too_deep_nesting_is_rejected() {
    let entry = fixture_entry(
        "FloatFormatter",
        "tabcheck.transformers.a.b.deep",
        "src/transformers/a/b/deep.rs",
        CORE_OPS,
    );
    assert!(validate_module_placement(&entry).is_err());
}

#[test]
fn unplaceable_source_resolves_no_test_location() {
    let config = StyleConfig::default();
    let entry = fixture_entry(
        "FloatFormatter",
        "tabcheck.misc.float",
        "src/misc/float.rs",
        CORE_OPS,
    );
    assert!(expected_test_location(&entry, &config).is_none());

    let err = validate_test_location(&entry, &config).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TestLocationUnresolved { .. }));
}

#[test]
fn missing_test_file_is_reported_with_the_expected_path() {
    let config = StyleConfig::default();
    let entry = fixture_entry(
        "FloatFormatter",
        "tabcheck.transformers.missing",
        "src/transformers/missing.rs",
        CORE_OPS,
    );
    let err = validate_test_location(&entry, &config).unwrap_err();
    match err.kind {
        ErrorKind::MissingTestFile { expected, .. } => {
            assert!(expected.ends_with("tests/transformers/test_missing.rs"));
        }
        other => panic!("unexpected kind: {:?}", other),
    }
}

// ---------------------------------------------------------------------------
// Test-name parity
// ---------------------------------------------------------------------------

fn widget_entry(operations: &'static [&'static str]) -> tabcheck::registry::TransformerEntry {
    fixture_entry(
        "Widget",
        "tabcheck.transformers.widget",
        "src/transformers/widget.rs",
        operations,
    )
}

#[test]
fn suite_module_must_exist_in_the_test_file() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "tests/transformers/test_widget.rs",
        "mod unrelated { fn test_fit() {} }\n",
    );
    let err = validate_test_names(&widget_entry(CORE_OPS), &config_at(dir.path())).unwrap_err();
    match err.kind {
        ErrorKind::MissingTestSuite { suite, .. } => assert_eq!(suite, "widget"),
        other => panic!("unexpected kind: {:?}", other),
    }
}

#[test]
fn empty_suites_are_rejected() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "tests/transformers/test_widget.rs",
        "mod widget { fn helper() {} }\n",
    );
    let err = validate_test_names(&widget_entry(CORE_OPS), &config_at(dir.path())).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NoTestFunctions { .. }));
}

#[test]
fn prefixed_test_names_match_their_operation() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "tests/transformers/test_widget.rs",
        r#"
        mod widget {
            #[test]
            fn test_reverse_transform_handles_nan() {}
            #[test]
            fn test_fit() {}
        }
        "#,
    );
    validate_test_names(&widget_entry(CORE_OPS), &config_at(dir.path())).unwrap();
}

#[test]
fn unmatched_test_name_is_named_in_the_failure() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "tests/transformers/test_widget.rs",
        r#"
        mod widget {
            #[test]
            fn test_fit_learns() {}
            #[test]
            fn test_unrelated() {}
        }
        "#,
    );
    let err = validate_test_names(&widget_entry(CORE_OPS), &config_at(dir.path())).unwrap_err();
    match &err.kind {
        ErrorKind::UnmatchedTestName { test, .. } => assert_eq!(test, "test_unrelated"),
        other => panic!("unexpected kind: {:?}", other),
    }
    assert!(err.to_string().contains("test_unrelated"));
}

#[test]
fn simple_prefix_without_separator_does_not_match() {
    // `test_fitness` is not `test_fit` and not `test_fit_<detail>`.
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "tests/transformers/test_widget.rs",
        "mod widget { fn test_fitness() {} }\n",
    );
    let err = validate_test_names(&widget_entry(CORE_OPS), &config_at(dir.path())).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnmatchedTestName { .. }));
}

#[test]
fn zero_declared_operations_always_fail() {
    // Documented precondition: a transformer declaring no operations cannot
    // have a conforming suite; the completeness check reports it first.
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "tests/transformers/test_widget.rs",
        "mod widget { fn test_fit() {} }\n",
    );
    let err = validate_test_names(&widget_entry(&[]), &config_at(dir.path())).unwrap_err();
    match err.kind {
        ErrorKind::UndeclaredCapability { capability, .. } => assert_eq!(capability, "fit"),
        other => panic!("unexpected kind: {:?}", other),
    }
}

// ---------------------------------------------------------------------------
// Parent-module re-export
// ---------------------------------------------------------------------------

#[test]
fn reexport_must_be_present_in_the_parent_module() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "src/transformers.rs",
        "pub mod widget;\n\npub use widget::Other;\n",
    );
    let err = validate_reexport(&widget_entry(CORE_OPS), &config_at(dir.path())).unwrap_err();
    match err.kind {
        ErrorKind::MissingReexport { module, .. } => {
            assert_eq!(module, "tabcheck.transformers");
        }
        other => panic!("unexpected kind: {:?}", other),
    }
}

#[test]
fn reexport_check_accepts_both_plain_and_grouped_uses() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "src/transformers.rs",
        "pub mod widget;\n\npub use widget::{Other, Widget};\n",
    );
    validate_reexport(&widget_entry(CORE_OPS), &config_at(dir.path())).unwrap();
}

#[test]
fn reexport_check_reads_mod_rs_layouts() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "src/transformers/mod.rs",
        "pub mod widget;\npub use self::widget::Widget;\n",
    );
    validate_reexport(&widget_entry(CORE_OPS), &config_at(dir.path())).unwrap();
}
