//! Compiled include/exclude patterns.
//!
//! Patterns follow the usual glob rules against a path relative to the test
//! source directory: `*` and `?` stay within one segment, `**` spans any number
//! of segments (including none).

use std::fmt;
use std::path::Path;

use globset::GlobBuilder;

use crate::error::PatternError;

#[derive(Clone)]
pub struct GlobPattern {
    pattern: String,
    matcher: globset::GlobMatcher,
}

impl GlobPattern {
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|e| PatternError::invalid_glob(pattern, e.kind().to_string()))?;
        Ok(Self {
            pattern: pattern.to_string(),
            matcher: glob.compile_matcher(),
        })
    }

    pub fn matches(&self, relative_path: &Path) -> bool {
        self.matcher.is_match(relative_path)
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }
}

impl fmt::Debug for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GlobPattern").field(&self.pattern).finish()
    }
}

pub fn compile_all<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<GlobPattern>, PatternError> {
    patterns
        .iter()
        .map(|p| GlobPattern::compile(p.as_ref()))
        .collect()
}

pub fn matches_any(relative_path: &Path, patterns: &[GlobPattern]) -> bool {
    patterns.iter().any(|p| p.matches(relative_path))
}

/// Include/exclude pair applied to candidate test files.
#[derive(Debug, Clone)]
pub struct TestFileMatcher {
    includes: Vec<GlobPattern>,
    excludes: Vec<GlobPattern>,
}

impl TestFileMatcher {
    pub fn new<S: AsRef<str>>(includes: &[S], excludes: &[S]) -> Result<Self, PatternError> {
        Ok(Self {
            includes: compile_all(includes)?,
            excludes: compile_all(excludes)?,
        })
    }

    /// A path is selected when some include matches and no exclude does.
    pub fn is_selected(&self, relative_path: &Path) -> bool {
        matches_any(relative_path, &self.includes) && !matches_any(relative_path, &self.excludes)
    }
}
