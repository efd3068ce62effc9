//! Resolution of path strings written inside a descriptor.
//!
//! Every relative path in a descriptor is relative to the directory holding
//! that descriptor. Before resolution a fixed set of `${...}` properties is
//! expanded; anything else is left as literal text.

use std::path::{Component, Path, PathBuf};

use crate::error::DescriptorError;

type PropertyValue = fn(&Path) -> String;

fn module_directory(directory: &Path) -> String {
    directory.to_string_lossy().into_owned()
}

/// Properties expanded in descriptor paths, keyed by property name.
const PATH_PROPERTIES: &[(&str, PropertyValue)] = &[
    ("basedir", module_directory),
    ("project.basedir", module_directory),
];

#[derive(Debug, Clone)]
pub struct PathResolver {
    descriptor: PathBuf,
    directory: PathBuf,
}

impl PathResolver {
    pub fn new(descriptor: impl Into<PathBuf>) -> Self {
        let descriptor = descriptor.into();
        let directory = descriptor
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self {
            descriptor,
            directory,
        }
    }

    pub fn descriptor(&self) -> &Path {
        &self.descriptor
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn substitute(&self, raw: &str) -> String {
        let mut result = raw.to_string();
        for (name, value) in PATH_PROPERTIES {
            let placeholder = format!("${{{name}}}");
            if result.contains(&placeholder) {
                result = result.replace(&placeholder, &value(&self.directory));
            }
        }
        result
    }

    /// Substitutes known properties and resolves `raw` against the module directory.
    ///
    /// Absolute inputs are kept as-is apart from normalization. The result is not
    /// checked against the filesystem.
    pub fn resolve(&self, raw: &str) -> Result<PathBuf, DescriptorError> {
        let substituted = self.substitute(raw.trim());
        if substituted.is_empty() || substituted.contains('\0') {
            return Err(DescriptorError::invalid_path(&self.descriptor, raw));
        }
        Ok(normalize(&self.directory.join(substituted)))
    }

    /// Like [`resolve`](Self::resolve), but yields `None` when nothing exists at the
    /// resolved location.
    pub fn resolve_existing(&self, raw: &str) -> Result<Option<PathBuf>, DescriptorError> {
        let path = self.resolve(raw)?;
        Ok(path.exists().then_some(path))
    }
}

/// Lexically removes `.` and `..` components without touching the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
