//! Shared helpers for the integration tests: synthetic registry entries and
//! throwaway crate trees for exercising the validator's negative paths.
#![allow(dead_code)] // compiled per test crate; not every crate uses every helper

use std::fs;
use std::path::Path;

use tabcheck::registry::TransformerEntry;
use tabcheck::style::StyleConfig;
use tabcheck::transformers::numerical::FloatFormatter;

/// A registry entry with every metadata field under test control. The
/// constructor builds a real FloatFormatter; checks that never construct
/// ignore it.
pub fn fixture_entry(
    name: &'static str,
    module_path: &'static str,
    source_file: &'static str,
    operations: &'static [&'static str],
) -> TransformerEntry {
    TransformerEntry {
        name,
        module_path,
        source_file,
        operations,
        construct: |kwargs| Ok(Box::new(FloatFormatter::from_kwargs(kwargs)?)),
    }
}

/// A `StyleConfig` rooted in a throwaway directory.
pub fn config_at(root: &Path) -> StyleConfig {
    StyleConfig {
        crate_root: root.to_path_buf(),
        test_root: "tests".into(),
    }
}

/// Writes a file under `root`, creating parent directories as needed.
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
