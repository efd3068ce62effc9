//! Reading the parts of a `pom.xml` that affect module layout and test selection.

use std::fs;
use std::path::Path;

use roxmltree::{Document, Node};
use tracing::debug;

use crate::discovery::config::{DEFAULT_PLUGIN_GROUP, SUREFIRE_ARTIFACT};
use crate::error::DescriptorError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Descriptor {
    pub modules: Vec<String>,
    pub build: BuildSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSection {
    pub source_directory: Option<String>,
    pub test_source_directory: Option<String>,
    pub plugins: Vec<PluginEntry>,
    pub managed_plugins: Vec<PluginEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginEntry {
    pub group_id: Option<String>,
    pub artifact_id: String,
    pub configuration: Option<PluginConfiguration>,
}

/// Test selection settings declared in a plugin's `<configuration>` block.
///
/// Empty lists mean the element was missing or had no entries; both fall
/// through to inheritance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginConfiguration {
    pub tests: Vec<String>,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
}

impl PluginEntry {
    pub fn key(&self) -> String {
        let group = self.group_id.as_deref().unwrap_or(DEFAULT_PLUGIN_GROUP);
        format!("{group}:{}", self.artifact_id)
    }
}

impl BuildSection {
    /// Configuration of the Surefire plugin activated in this build.
    pub fn surefire_configuration(&self) -> Option<&PluginConfiguration> {
        find_configuration(&self.plugins, SUREFIRE_ARTIFACT)
    }

    /// Configuration of the Surefire plugin under `<pluginManagement>`.
    pub fn managed_surefire_configuration(&self) -> Option<&PluginConfiguration> {
        find_configuration(&self.managed_plugins, SUREFIRE_ARTIFACT)
    }
}

fn find_configuration<'a>(plugins: &'a [PluginEntry], key: &str) -> Option<&'a PluginConfiguration> {
    // Later declarations replace earlier ones with the same key.
    plugins
        .iter()
        .rev()
        .find(|p| p.key() == key)
        .and_then(|p| p.configuration.as_ref())
}

impl Descriptor {
    pub fn load(path: &Path) -> Result<Self, DescriptorError> {
        let content = fs::read_to_string(path).map_err(|e| DescriptorError::read(path, e))?;
        let descriptor = Self::parse(path, &content)?;
        debug!(
            descriptor = %path.display(),
            modules = descriptor.modules.len(),
            "loaded descriptor"
        );
        Ok(descriptor)
    }

    /// Parses descriptor text; `path` is only used to label errors.
    pub fn parse(path: &Path, content: &str) -> Result<Self, DescriptorError> {
        let document =
            Document::parse(content).map_err(|e| DescriptorError::parse(path, e.to_string()))?;
        let project = document.root_element();
        if project.tag_name().name() != "project" {
            return Err(DescriptorError::parse(
                path,
                format!(
                    "expected <project> root element, found <{}>",
                    project.tag_name().name()
                ),
            ));
        }

        let modules = child(project, "modules")
            .map(|m| children(m, "module").map(raw_text).collect())
            .unwrap_or_default();

        let build = child(project, "build")
            .map(parse_build)
            .unwrap_or_default();

        Ok(Self { modules, build })
    }
}

fn parse_build(build: Node) -> BuildSection {
    let managed_plugins = child(build, "pluginManagement")
        .and_then(|pm| child(pm, "plugins"))
        .map(parse_plugins)
        .unwrap_or_default();

    BuildSection {
        source_directory: child(build, "sourceDirectory").and_then(text),
        test_source_directory: child(build, "testSourceDirectory").and_then(text),
        plugins: child(build, "plugins").map(parse_plugins).unwrap_or_default(),
        managed_plugins,
    }
}

fn parse_plugins(plugins: Node) -> Vec<PluginEntry> {
    children(plugins, "plugin")
        .filter_map(|plugin| {
            let artifact_id = child(plugin, "artifactId").and_then(text)?;
            Some(PluginEntry {
                group_id: child(plugin, "groupId").and_then(text),
                artifact_id,
                configuration: child(plugin, "configuration").map(parse_configuration),
            })
        })
        .collect()
}

fn parse_configuration(configuration: Node) -> PluginConfiguration {
    let tests = child_texts(configuration, "test")
        .iter()
        .flat_map(|t| t.split(','))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect();

    PluginConfiguration {
        tests,
        includes: child(configuration, "includes")
            .map(|n| child_texts(n, "include"))
            .unwrap_or_default(),
        excludes: child(configuration, "excludes")
            .map(|n| child_texts(n, "exclude"))
            .unwrap_or_default(),
    }
}

fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}

fn child<'a, 'input: 'a>(node: Node<'a, 'input>, name: &'static str) -> Option<Node<'a, 'input>> {
    children(node, name).next()
}

fn child_texts(node: Node, name: &'static str) -> Vec<String> {
    children(node, name).filter_map(text).collect()
}

/// Concatenated text content of an element, skipping comments and
/// processing instructions, trimmed.
fn raw_text(node: Node) -> String {
    node.children()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect::<String>()
        .trim()
        .to_string()
}

fn text(node: Node) -> Option<String> {
    Some(raw_text(node)).filter(|t| !t.is_empty())
}
