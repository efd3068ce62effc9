//! Resolution of the include/exclude lists Surefire uses for one module.
//!
//! Lookup order for includes:
//! 1. the module's own activated Surefire `<configuration>` (legacy `<test>`
//!    entries first, then `<includes>`),
//! 2. failing an activated block, the parent's `<pluginManagement>` entry,
//!    unless the parent activates its own configuration,
//! 3. the parent's already resolved includes,
//! 4. [`DEFAULT_SUREFIRE_INCLUDES`].
//!
//! Excludes follow the same chain but bottom out at an empty list. Lists with
//! no entries never count as declared.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::discovery::config::DEFAULT_SUREFIRE_INCLUDES;
use crate::discovery::descriptor::PluginConfiguration;
use crate::discovery::glob::TestFileMatcher;
use crate::error::PatternError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionSource {
    /// Declared in the module's own build plugins.
    Declared,
    /// Taken from the parent's `<pluginManagement>`.
    Managed,
    /// Copied from the parent's resolved selection.
    Inherited,
    Default,
}

impl fmt::Display for SelectionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Declared => "declared",
            Self::Managed => "managed",
            Self::Inherited => "inherited",
            Self::Default => "default",
        };
        f.write_str(name)
    }
}

/// What a child module sees of its parent while its own selection is resolved.
#[derive(Debug, Clone, Copy)]
pub struct Inheritance<'a> {
    pub selection: &'a TestSelection,
    pub managed: Option<&'a PluginConfiguration>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestSelection {
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
    pub includes_source: SelectionSource,
    pub excludes_source: SelectionSource,
}

impl TestSelection {
    pub fn defaults() -> Self {
        Self {
            includes: DEFAULT_SUREFIRE_INCLUDES
                .iter()
                .map(|p| p.to_string())
                .collect(),
            excludes: Vec::new(),
            includes_source: SelectionSource::Default,
            excludes_source: SelectionSource::Default,
        }
    }

    pub fn resolve(own: Option<&PluginConfiguration>, parent: Option<Inheritance<'_>>) -> Self {
        let (config, config_source) = match (own, parent.and_then(|p| p.managed)) {
            (Some(own), _) => (Some(own), SelectionSource::Declared),
            (None, Some(managed)) => (Some(managed), SelectionSource::Managed),
            (None, None) => (None, SelectionSource::Default),
        };
        let inherited = parent.map(|p| p.selection);

        let declared_includes = config.and_then(|c| {
            if !c.tests.is_empty() {
                Some(c.tests.clone())
            } else if !c.includes.is_empty() {
                Some(c.includes.clone())
            } else {
                None
            }
        });
        let (includes, includes_source) = match (declared_includes, inherited) {
            (Some(includes), _) => (includes, config_source),
            (None, Some(parent)) => (parent.includes.clone(), SelectionSource::Inherited),
            (None, None) => {
                let defaults = Self::defaults();
                (defaults.includes, SelectionSource::Default)
            }
        };

        let declared_excludes = config
            .filter(|c| !c.excludes.is_empty())
            .map(|c| c.excludes.clone());
        let (excludes, excludes_source) = match (declared_excludes, inherited) {
            (Some(excludes), _) => (excludes, config_source),
            (None, Some(parent)) => (parent.excludes.clone(), SelectionSource::Inherited),
            (None, None) => (Vec::new(), SelectionSource::Default),
        };

        debug!(
            %includes_source,
            %excludes_source,
            includes = includes.len(),
            excludes = excludes.len(),
            "resolved test selection"
        );

        Self {
            includes,
            excludes,
            includes_source,
            excludes_source,
        }
    }

    pub fn matcher(&self) -> Result<TestFileMatcher, PatternError> {
        TestFileMatcher::new(self.includes.as_slice(), self.excludes.as_slice())
    }
}
