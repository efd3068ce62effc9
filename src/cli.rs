use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use crate::discovery::config::DESCRIPTOR_FILE_NAME;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "surefire-scope")]
#[command(about = "List the test files Maven Surefire would run for every module of a project", long_about = None)]
pub struct Args {
    /// Project directory or root pom.xml
    #[arg(long, value_name = "PATH")]
    pub path: PathBuf,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        validate_path(&self.path)?;
        if self.path.is_dir() && !self.path.join(DESCRIPTOR_FILE_NAME).is_file() {
            anyhow::bail!(
                "No {} found in directory: {}",
                DESCRIPTOR_FILE_NAME,
                self.path.display()
            );
        }
        Ok(())
    }

    /// The root descriptor named by `--path`.
    pub fn descriptor_path(&self) -> PathBuf {
        if self.path.is_dir() {
            self.path.join(DESCRIPTOR_FILE_NAME)
        } else {
            self.path.clone()
        }
    }
}

pub fn validate_path(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }
    if !path.is_file() && !path.is_dir() {
        anyhow::bail!("Path is neither a file nor a directory: {}", path.display());
    }
    Ok(())
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}
