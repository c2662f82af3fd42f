//! Classification rules for junk files and reserved directories.
//!
//! A file is junk when its name equals one of the junk names or matches one
//! of the junk glob patterns. Matching looks at the file name only, never at
//! the file contents. Reserved directories are skipped entirely during a
//! recursive walk.
//!
//! # Example
//!
//! ```
//! use cleantmp::rules::Rules;
//!
//! let rules = Rules::default();
//! assert!(rules.is_junk_file(".DS_Store"));
//! assert!(rules.is_junk_file("report.txt~"));
//! assert!(!rules.is_junk_file("notes.txt"));
//! assert!(rules.is_ignored_dir(".Trash"));
//! ```

use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{CleanError, Result};

/// File names that are always junk.
pub const JUNK_FILES: &[&str] = &[".DS_Store", "Thumbs.db", "ehthumbs.db", "Desktop.ini"];

/// Shell-style patterns for junk file names.
pub const JUNK_PATTERNS: &[&str] = &[
    "._*",    // AppleDouble metadata on non-HFS volumes
    "*~",     // backups (notes.txt~)
    ".*.sw?", // vim swap files (.notes.txt.swp, .swo, ...)
];

/// Directories never entered, even when recursing.
pub const IGNORED_DIRS: &[&str] = &[
    ".Spotlight-V100",
    ".fseventsd",
    ".Trash",
    ".Trashes",
    "$RECYCLE.BIN",
    "System Volume Information",
];

/// The rule set consulted for every directory entry.
#[derive(Debug, Clone)]
pub struct Rules {
    junk_files: HashSet<String>,
    junk_patterns: Vec<String>,
    junk_globs: GlobSet,
    ignored_dirs: HashSet<String>,
}

impl Default for Rules {
    fn default() -> Self {
        // The built-in patterns are known to compile.
        Self::new(JUNK_FILES, JUNK_PATTERNS, IGNORED_DIRS)
            .unwrap_or_else(|_| unreachable!("built-in junk patterns are valid globs"))
    }
}

impl Rules {
    /// Build a rule set from junk names, junk glob patterns and ignored
    /// directory names.
    ///
    /// Fails with [`CleanError::InvalidPattern`] on the first pattern that
    /// does not compile.
    pub fn new<N, P, D>(junk_files: N, junk_patterns: P, ignored_dirs: D) -> Result<Self>
    where
        N: IntoIterator,
        N::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
        D: IntoIterator,
        D::Item: AsRef<str>,
    {
        let mut builder = GlobSetBuilder::new();
        let mut patterns = Vec::new();

        for pattern in junk_patterns {
            let pattern = pattern.as_ref();
            let glob = Glob::new(pattern).map_err(|source| CleanError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
            builder.add(glob);
            patterns.push(pattern.to_string());
        }

        let junk_globs = builder
            .build()
            .map_err(|source| CleanError::InvalidPattern {
                pattern: patterns.join(", "),
                source,
            })?;

        Ok(Self {
            junk_files: collect_names(junk_files),
            junk_patterns: patterns,
            junk_globs,
            ignored_dirs: collect_names(ignored_dirs),
        })
    }

    /// Whether a file with this name should be deleted.
    ///
    /// Names that are not valid UTF-8 can still match a glob pattern.
    pub fn is_junk_file(&self, name: impl AsRef<OsStr>) -> bool {
        let name = name.as_ref();
        name.to_str()
            .is_some_and(|name| self.junk_files.contains(name))
            || self.junk_globs.is_match(Path::new(name))
    }

    /// Whether a directory with this name must be skipped.
    pub fn is_ignored_dir(&self, name: impl AsRef<OsStr>) -> bool {
        name.as_ref()
            .to_str()
            .is_some_and(|name| self.ignored_dirs.contains(name))
    }

    /// The junk glob patterns, in the order they were given.
    pub fn junk_patterns(&self) -> &[String] {
        &self.junk_patterns
    }
}

fn collect_names<I>(names: I) -> HashSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| name.as_ref().to_string())
        .collect()
}
