use std::path::PathBuf;
use thiserror::Error;

use super::PatternError;

/// Failures that make a descriptor unusable for building its module subtree.
#[derive(Error, Debug)]
pub enum DescriptorError {
    #[error("failed to read descriptor '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid pom: {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("invalid pom: {descriptor}: invalid path '{raw}'")]
    InvalidPath { descriptor: PathBuf, raw: String },

    #[error("invalid pom: {descriptor}: invalid module specification '{raw}' (resolved to {resolved})")]
    InvalidModule {
        descriptor: PathBuf,
        raw: String,
        resolved: PathBuf,
    },

    #[error("invalid pom: {descriptor}: {source}")]
    InvalidPattern {
        descriptor: PathBuf,
        source: PatternError,
    },

    #[error("module cycle detected at {descriptor} (via {})", format_chain(.chain))]
    ModuleCycle {
        descriptor: PathBuf,
        chain: Vec<PathBuf>,
    },
}

fn format_chain(chain: &[PathBuf]) -> String {
    chain
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

impl DescriptorError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn invalid_path(descriptor: impl Into<PathBuf>, raw: impl Into<String>) -> Self {
        Self::InvalidPath {
            descriptor: descriptor.into(),
            raw: raw.into(),
        }
    }

    pub fn invalid_module(
        descriptor: impl Into<PathBuf>,
        raw: impl Into<String>,
        resolved: impl Into<PathBuf>,
    ) -> Self {
        Self::InvalidModule {
            descriptor: descriptor.into(),
            raw: raw.into(),
            resolved: resolved.into(),
        }
    }

    pub fn invalid_pattern(descriptor: impl Into<PathBuf>, source: PatternError) -> Self {
        Self::InvalidPattern {
            descriptor: descriptor.into(),
            source,
        }
    }

    pub fn module_cycle(descriptor: impl Into<PathBuf>, chain: Vec<PathBuf>) -> Self {
        Self::ModuleCycle {
            descriptor: descriptor.into(),
            chain,
        }
    }
}
