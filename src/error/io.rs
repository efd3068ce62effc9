use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("descriptor not found: {path}")]
    DescriptorNotFound { path: PathBuf },

    #[error("failed to resolve working directory: {source}")]
    WorkingDirectory { source: std::io::Error },

    #[error("failed to scan directory at {path}: {source}")]
    DirectoryScan {
        path: PathBuf,
        source: walkdir::Error,
    },
}

impl IoError {
    pub fn descriptor_not_found(path: impl Into<PathBuf>) -> Self {
        Self::DescriptorNotFound { path: path.into() }
    }

    pub fn directory_scan(path: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self::DirectoryScan {
            path: path.into(),
            source,
        }
    }
}
