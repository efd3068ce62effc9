use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::discovery::config::{DESCRIPTOR_FILE_NAME, DESCRIPTOR_SUFFIX};
use crate::discovery::descriptor::Descriptor;
use crate::discovery::module::ProjectModule;
use crate::discovery::paths::{normalize, PathResolver};
use crate::discovery::selection::Inheritance;
use crate::error::{DescriptorError, IoError, Result};

/// Loads a root descriptor and every module it declares, recursively.
///
/// Descriptors currently being built are tracked so that a module graph
/// that loops back on itself fails instead of recursing forever. The same
/// descriptor may still appear in separate branches.
#[derive(Debug, Default)]
pub struct ProjectTreeBuilder {
    active: Vec<PathBuf>,
}

impl ProjectTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the module tree rooted at `root`, which may be a descriptor file
    /// or a directory containing `pom.xml`.
    pub fn build(mut self, root: &Path) -> Result<ProjectModule> {
        let descriptor = root_descriptor(root)?;
        info!(descriptor = %descriptor.display(), "building module tree");
        let module = self.build_module(&descriptor, None)?;
        Ok(module)
    }

    fn build_module(
        &mut self,
        descriptor_path: &Path,
        parent: Option<Inheritance<'_>>,
    ) -> std::result::Result<ProjectModule, DescriptorError> {
        let key = fs::canonicalize(descriptor_path).unwrap_or_else(|_| descriptor_path.into());
        if self.active.contains(&key) {
            let mut chain = self.active.clone();
            chain.push(key);
            return Err(DescriptorError::module_cycle(descriptor_path, chain));
        }

        let descriptor = Descriptor::load(descriptor_path)?;
        let mut module = ProjectModule::new(descriptor_path, descriptor, parent)?;

        self.active.push(key);
        let children = self.build_children(&module);
        self.active.pop();

        module.children = children?;
        Ok(module)
    }

    fn build_children(
        &mut self,
        module: &ProjectModule,
    ) -> std::result::Result<Vec<ProjectModule>, DescriptorError> {
        let resolver = PathResolver::new(module.descriptor_path());
        module
            .declared_modules()
            .iter()
            .map(|raw| {
                let child = resolve_module_descriptor(&resolver, raw)?;
                debug!(
                    parent = %module.descriptor_path().display(),
                    module = %raw,
                    descriptor = %child.display(),
                    "resolved module reference"
                );
                self.build_module(&child, Some(module.inheritance()))
            })
            .collect()
    }
}

/// Maps a `<module>` entry to the descriptor it names.
///
/// A directory stands for its `pom.xml`; an existing `*.xml` file is used as
/// is. Anything else is an invalid module specification.
pub fn resolve_module_descriptor(
    resolver: &PathResolver,
    raw: &str,
) -> std::result::Result<PathBuf, DescriptorError> {
    let resolved = resolver.resolve(raw)?;

    if resolved.is_dir() {
        let descriptor = resolved.join(DESCRIPTOR_FILE_NAME);
        if descriptor.is_file() {
            return Ok(descriptor);
        }
        return Err(DescriptorError::invalid_module(
            resolver.descriptor(),
            raw,
            descriptor,
        ));
    }

    let is_descriptor_file = resolved
        .file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(DESCRIPTOR_SUFFIX));
    if is_descriptor_file && resolved.is_file() {
        return Ok(resolved);
    }

    Err(DescriptorError::invalid_module(
        resolver.descriptor(),
        raw,
        resolved,
    ))
}

fn root_descriptor(root: &Path) -> std::result::Result<PathBuf, IoError> {
    let absolute = if root.is_absolute() {
        root.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|source| IoError::WorkingDirectory { source })?
            .join(root)
    };
    let absolute = normalize(&absolute);

    let descriptor = if absolute.is_dir() {
        absolute.join(DESCRIPTOR_FILE_NAME)
    } else {
        absolute
    };

    if !descriptor.is_file() {
        return Err(IoError::descriptor_not_found(descriptor));
    }
    Ok(descriptor)
}
