//! Surefire Scope
//!
//! Resolves a Maven multi-module project from its root `pom.xml` and lists,
//! for every module, the test sources Surefire would select with the
//! include/exclude patterns that module inherits or declares.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod output;

pub use discovery::{discover_tests, ProjectModule, ProjectTreeBuilder, TestSelection};
pub use error::{Error, Result};
