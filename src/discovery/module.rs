use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::discovery::config::{DEFAULT_SOURCE_DIR, DEFAULT_TEST_SOURCE_DIR};
use crate::discovery::descriptor::{Descriptor, PluginConfiguration};
use crate::discovery::finder::discover_tests;
use crate::discovery::glob::TestFileMatcher;
use crate::discovery::paths::PathResolver;
use crate::discovery::selection::{Inheritance, TestSelection};
use crate::error::{DescriptorError, IoError};

/// One node of the module tree, identified by its descriptor path.
///
/// Everything except the discovered test list is computed when the module is
/// constructed; the test list is computed on first request and kept.
#[derive(Debug)]
pub struct ProjectModule {
    descriptor_path: PathBuf,
    directory: PathBuf,
    declared_modules: Vec<String>,
    pub(crate) children: Vec<ProjectModule>,
    source_directory: Option<PathBuf>,
    test_source_directory: Option<PathBuf>,
    selection: TestSelection,
    managed_surefire: Option<PluginConfiguration>,
    matcher: TestFileMatcher,
    discovered: OnceLock<Option<Vec<PathBuf>>>,
}

impl ProjectModule {
    /// Builds the node for a loaded descriptor without its children.
    pub fn new(
        descriptor_path: impl Into<PathBuf>,
        descriptor: Descriptor,
        parent: Option<Inheritance<'_>>,
    ) -> Result<Self, DescriptorError> {
        let resolver = PathResolver::new(descriptor_path);

        let source_directory = locate_directory(
            &resolver,
            descriptor.build.source_directory.as_deref(),
            DEFAULT_SOURCE_DIR,
        )?;
        let test_source_directory = locate_directory(
            &resolver,
            descriptor.build.test_source_directory.as_deref(),
            DEFAULT_TEST_SOURCE_DIR,
        )?;

        let activated = descriptor.build.surefire_configuration();
        let selection = TestSelection::resolve(activated, parent);
        let matcher = selection
            .matcher()
            .map_err(|e| DescriptorError::invalid_pattern(resolver.descriptor(), e))?;

        Ok(Self {
            descriptor_path: resolver.descriptor().to_path_buf(),
            directory: resolver.directory().to_path_buf(),
            // An activated configuration shadows this module's own managed block
            // for its children as well.
            managed_surefire: match activated {
                Some(_) => None,
                None => descriptor.build.managed_surefire_configuration().cloned(),
            },
            declared_modules: descriptor.modules,
            children: Vec::new(),
            source_directory,
            test_source_directory,
            selection,
            matcher,
            discovered: OnceLock::new(),
        })
    }

    pub fn name(&self) -> String {
        self.directory
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.directory.display().to_string())
    }

    pub fn descriptor_path(&self) -> &Path {
        &self.descriptor_path
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn declared_modules(&self) -> &[String] {
        &self.declared_modules
    }

    pub fn children(&self) -> &[ProjectModule] {
        &self.children
    }

    pub fn source_directory(&self) -> Option<&Path> {
        self.source_directory.as_deref()
    }

    pub fn test_source_directory(&self) -> Option<&Path> {
        self.test_source_directory.as_deref()
    }

    pub fn test_selection(&self) -> &TestSelection {
        &self.selection
    }

    pub fn matcher(&self) -> &TestFileMatcher {
        &self.matcher
    }

    /// View of this module handed to its children during resolution.
    pub fn inheritance(&self) -> Inheritance<'_> {
        Inheritance {
            selection: &self.selection,
            managed: self.managed_surefire.as_ref(),
        }
    }

    /// Test files selected in this module, relative to its test source directory.
    ///
    /// `None` means the module has no test source directory.
    pub fn tests(&self) -> Result<Option<&[PathBuf]>, IoError> {
        if let Some(found) = self.discovered.get() {
            return Ok(found.as_deref());
        }
        let found = discover_tests(self)?;
        Ok(self.discovered.get_or_init(|| found).as_deref())
    }

    /// This module followed by all of its descendants, depth first.
    pub fn iter(&self) -> Modules<'_> {
        Modules { stack: vec![self] }
    }

    pub fn descendants(&self) -> impl Iterator<Item = &ProjectModule> {
        self.iter().skip(1)
    }
}

impl PartialEq for ProjectModule {
    fn eq(&self, other: &Self) -> bool {
        self.descriptor_path == other.descriptor_path
    }
}

impl Eq for ProjectModule {}

pub struct Modules<'a> {
    stack: Vec<&'a ProjectModule>,
}

impl<'a> Iterator for Modules<'a> {
    type Item = &'a ProjectModule;

    fn next(&mut self) -> Option<Self::Item> {
        let module = self.stack.pop()?;
        self.stack.extend(module.children.iter().rev());
        Some(module)
    }
}

fn locate_directory(
    resolver: &PathResolver,
    declared: Option<&str>,
    default: &str,
) -> Result<Option<PathBuf>, DescriptorError> {
    if let Some(raw) = declared {
        if let Some(path) = resolver.resolve_existing(raw)? {
            return Ok(Some(path));
        }
    }
    resolver.resolve_existing(default)
}
