pub mod builder;
pub mod config;
pub mod descriptor;
pub mod finder;
pub mod glob;
pub mod module;
pub mod paths;
pub mod selection;
pub mod utils;

pub use builder::ProjectTreeBuilder;
pub use finder::discover_tests;
pub use glob::{GlobPattern, TestFileMatcher};
pub use module::ProjectModule;
pub use paths::PathResolver;
pub use selection::{SelectionSource, TestSelection};
