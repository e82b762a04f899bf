use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Result, WordCountGuardError};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Include/exclude glob filtering over candidate paths. A path is included
/// when it matches at least one include pattern and no exclude pattern.
#[derive(Debug)]
pub struct GlobFilter {
    include_patterns: GlobSet,
    exclude_patterns: GlobSet,
}

impl GlobFilter {
    /// Create a new filter from include and exclude glob patterns.
    ///
    /// # Errors
    /// Returns an error if any pattern is invalid.
    pub fn new(include_patterns: &[String], exclude_patterns: &[String]) -> Result<Self> {
        Ok(Self {
            include_patterns: build_glob_set(include_patterns)?,
            exclude_patterns: build_glob_set(exclude_patterns)?,
        })
    }

    fn is_included(&self, path: &Path) -> bool {
        self.include_patterns.is_match(path)
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for GlobFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.is_included(path) && !self.is_excluded(path)
    }
}

fn build_glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| WordCountGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| WordCountGuardError::InvalidPattern {
        pattern: "combined patterns".to_string(),
        source: e,
    })
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
