use serde::Serialize;
use std::path::PathBuf;

use crate::discovery::{ProjectModule, TestSelection};
use crate::error::IoError;

#[derive(Debug, Clone, Serialize)]
pub struct ModuleReport {
    pub name: String,
    pub descriptor: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_source_directory: Option<PathBuf>,
    pub selection: TestSelection,
    pub tests: Option<Vec<PathBuf>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectReport {
    pub total_modules: usize,
    pub total_tests: usize,
    pub modules: Vec<ModuleReport>,
}

impl ModuleReport {
    pub fn from_module(module: &ProjectModule) -> Result<Self, IoError> {
        Ok(Self {
            name: module.name(),
            descriptor: module.descriptor_path().to_path_buf(),
            test_source_directory: module.test_source_directory().map(|p| p.to_path_buf()),
            selection: module.test_selection().clone(),
            tests: module.tests()?.map(|t| t.to_vec()),
        })
    }
}

impl ProjectReport {
    /// Collects the root module and every descendant, root first.
    pub fn from_tree(root: &ProjectModule) -> Result<Self, IoError> {
        let modules = root
            .iter()
            .map(ModuleReport::from_module)
            .collect::<Result<Vec<_>, _>>()?;
        let total_tests = modules
            .iter()
            .filter_map(|m| m.tests.as_ref())
            .map(Vec::len)
            .sum();

        Ok(Self {
            total_modules: modules.len(),
            total_tests,
            modules,
        })
    }
}
