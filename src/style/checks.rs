//! Placement, contract, and re-export checks.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::errors::{ConformanceError, ErrorKind};
use crate::registry::TransformerEntry;
use crate::transformers::Kwargs;

/// Filesystem roots the validator resolves entry metadata against.
#[derive(Debug, Clone)]
pub struct StyleConfig {
    /// Root the registry's crate-relative paths are joined to.
    pub crate_root: PathBuf,
    /// Unit-test root, relative to `crate_root`.
    pub test_root: PathBuf,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            crate_root: PathBuf::from(env!("CARGO_MANIFEST_DIR")),
            test_root: PathBuf::from("tests"),
        }
    }
}

impl StyleConfig {
    pub fn unit_test_root(&self) -> PathBuf {
        self.crate_root.join(&self.test_root)
    }
}

/// The directory name every transformer must live under, directly or one
/// level below.
const TRANSFORMERS_DIR: &str = "transformers";

/// Checks that the entry's constructor produces an instance honoring the
/// declared registry name. The constructor signature already carries the
/// base-trait obligation; this catches registry drift at runtime.
pub fn validate_base_contract(entry: &TransformerEntry) -> Result<(), ConformanceError> {
    let instance = (entry.construct)(&Kwargs::new()).map_err(|e| {
        ConformanceError::new(ErrorKind::BaseContract {
            transformer: entry.name.to_string(),
            reason: format!("default construction failed: {}", e),
        })
    })?;

    if instance.type_name() != entry.name {
        return Err(ConformanceError::new(ErrorKind::BaseContract {
            transformer: entry.name.to_string(),
            reason: format!(
                "constructed instance reports type name '{}'",
                instance.type_name()
            ),
        }));
    }
    Ok(())
}

/// Checks that the source file's parent or grandparent directory is named
/// `transformers`, supporting both flat and one-level-nested layouts.
pub fn validate_module_placement(entry: &TransformerEntry) -> Result<(), ConformanceError> {
    let file = Path::new(entry.source_file);
    let parent = file.parent();
    let grandparent = parent.and_then(Path::parent);

    let is_valid = dir_is(parent, TRANSFORMERS_DIR) || dir_is(grandparent, TRANSFORMERS_DIR);
    if !is_valid {
        return Err(ConformanceError::new(ErrorKind::ModulePlacement {
            transformer: entry.name.to_string(),
            source_file: file.to_path_buf(),
        })
        .with_help(format!(
            "transformer sources live under a '{}' directory, optionally one subfolder deep",
            TRANSFORMERS_DIR
        )));
    }
    Ok(())
}

fn dir_is(dir: Option<&Path>, name: &str) -> bool {
    dir.and_then(Path::file_name)
        .map(|n| n == name)
        .unwrap_or(false)
}

/// Returns the expected unit-test location of a transformer, or `None` when
/// the source placement matches neither recognized pattern. `None` is a
/// policy signal consumed by [`validate_test_location`], not a hard failure.
pub fn expected_test_location(entry: &TransformerEntry, config: &StyleConfig) -> Option<PathBuf> {
    let file = Path::new(entry.source_file);
    let file_name = file.file_name()?.to_str()?;
    let parent = file.parent()?;
    let test_file = format!("test_{}", file_name);
    let test_root = config.unit_test_root().join(TRANSFORMERS_DIR);

    if dir_is(Some(parent), TRANSFORMERS_DIR) {
        return Some(test_root.join(test_file));
    }

    if dir_is(parent.parent(), TRANSFORMERS_DIR) {
        let subfolder = parent.file_name()?;
        return Some(test_root.join(subfolder).join(test_file));
    }

    None
}

/// Checks that the expected test file exists on disk.
pub fn validate_test_location(
    entry: &TransformerEntry,
    config: &StyleConfig,
) -> Result<(), ConformanceError> {
    let location = expected_test_location(entry, config).ok_or_else(|| {
        ConformanceError::new(ErrorKind::TestLocationUnresolved {
            transformer: entry.name.to_string(),
        })
    })?;

    if !location.exists() {
        return Err(ConformanceError::new(ErrorKind::MissingTestFile {
            transformer: entry.name.to_string(),
            expected: location,
        })
        .with_help("unit tests mirror the transformer tree under tests/transformers"));
    }
    Ok(())
}

/// Checks that the transformer is re-exported from its parent module: the
/// parent's source file must contain a `pub use` exposing the declared name
/// from the defining submodule.
pub fn validate_reexport(
    entry: &TransformerEntry,
    config: &StyleConfig,
) -> Result<(), ConformanceError> {
    let (parent_module, defining_segment) = entry
        .module_path
        .rsplit_once('.')
        .unwrap_or((entry.module_path, entry.module_path));

    let module_file = module_source_file(&config.crate_root, parent_module).ok_or_else(|| {
        ConformanceError::new(ErrorKind::Io {
            path: config.crate_root.join("src"),
            detail: format!("no source file found for module '{}'", parent_module),
        })
    })?;

    let content =
        fs::read_to_string(&module_file).map_err(|e| ConformanceError::io(&module_file, e))?;

    if !reexport_pattern(defining_segment, entry.name).is_match(&content) {
        return Err(ConformanceError::new(ErrorKind::MissingReexport {
            transformer: entry.name.to_string(),
            module: parent_module.to_string(),
        })
        .with_help(format!(
            "add `pub use {}::{};` to {}",
            defining_segment,
            entry.name,
            module_file.display()
        )));
    }
    Ok(())
}

/// Maps a dotted module path to its source file. The leading segment is the
/// crate itself; the remainder maps onto `src/`, trying the module-root file
/// first and `mod.rs` second.
fn module_source_file(crate_root: &Path, dotted: &str) -> Option<PathBuf> {
    let mut segments = dotted.split('.');
    segments.next()?;
    let rest: Vec<&str> = segments.collect();

    if rest.is_empty() {
        let lib = crate_root.join("src").join("lib.rs");
        return lib.exists().then_some(lib);
    }

    let base = rest
        .iter()
        .fold(crate_root.join("src"), |path, segment| path.join(segment));
    let root_file = base.with_extension("rs");
    if root_file.exists() {
        return Some(root_file);
    }
    let mod_file = base.join("mod.rs");
    mod_file.exists().then_some(mod_file)
}

fn reexport_pattern(defining_segment: &str, name: &str) -> Regex {
    let segment = regex::escape(defining_segment);
    let name = regex::escape(name);
    let pattern = format!(
        r"pub\s+use\s+(?:self::)?(?:crate::)?[A-Za-z0-9_:]*{segment}::(?:\{{[^}}]*\b{name}\b[^}}]*\}}|{name}\b)"
    );
    // Built from escaped identifiers; compilation cannot fail.
    Regex::new(&pattern).expect("re-export pattern")
}
