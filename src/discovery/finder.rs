use std::path::PathBuf;

use tracing::debug;

use crate::discovery::module::ProjectModule;
use crate::discovery::utils::walk_test_files;
use crate::error::IoError;

/// Walks the module's test source directory and applies its selection.
///
/// Returns `None` when the module has no test source directory, which is
/// different from a directory with no matching files.
pub fn discover_tests(module: &ProjectModule) -> Result<Option<Vec<PathBuf>>, IoError> {
    let Some(test_dir) = module.test_source_directory() else {
        debug!(module = %module.name(), "no test source directory");
        return Ok(None);
    };

    let files = walk_test_files(test_dir, module.matcher())?;
    debug!(
        module = %module.name(),
        directory = %test_dir.display(),
        tests = files.len(),
        "discovered tests"
    );
    Ok(Some(files))
}
