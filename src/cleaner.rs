//! The traversal engine.
//!
//! A [`Cleaner`] walks a directory depth-first, deletes every junk file it
//! finds and records what happened in a [`Stats`] value. The error policy
//! depends on the mode:
//!
//! - **Non-recursive**: the given directory must exist, be accessible and be
//!   non-empty, otherwise the run fails.
//! - **Recursive**: the given directory must exist. Directories that cannot
//!   be listed are counted and skipped, and empty directories are no-ops, so
//!   one bad subtree never aborts a large cleanup.
//!
//! Files that cannot be deleted never fail the run in either mode. They are
//! reported on stderr and recorded in [`Stats::failures`].
//!
//! Entries are classified by what they resolve to: a symlink to a directory
//! is walked as a directory and never deleted, whatever its name.
//!
//! # Example
//!
//! ```no_run
//! use cleantmp::cleaner::Cleaner;
//!
//! let stats = Cleaner::builder()
//!     .path("/Volumes/USB")
//!     .recursive(true)
//!     .build()
//!     .clean()?;
//!
//! println!("{}", stats.summary(true));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use walkdir::{DirEntry, WalkDir};

use crate::access::{dir_accessible, file_accessible};
use crate::error::{CleanError, Result};
use crate::logging::Logger;
use crate::rules::Rules;
use crate::stats::{FailureKind, Stats};

/// Clean junk files under `path` with the default rules.
///
/// Shorthand for building a [`Cleaner`] with only a path and the recursive
/// switch set.
pub fn clean(path: impl Into<PathBuf>, recursive: bool) -> Result<Stats> {
    Cleaner::builder()
        .path(path)
        .recursive(recursive)
        .build()
        .clean()
}

/// Junk file cleaner
#[derive(Debug)]
pub struct Cleaner {
    /// Directory to clean
    path: PathBuf,
    /// Descend into subdirectories
    recursive: bool,
    /// What counts as junk and which directories to skip
    rules: Rules,
    /// Verbosity level for progress output
    verbose: u8,
    /// Suppress informational logging when true
    quiet: bool,
    /// Stops the walk at the next entry once set
    cancel: Option<Arc<AtomicBool>>,
}

impl Cleaner {
    /// Creates a new builder for [`Cleaner`]
    pub fn builder() -> CleanerBuilder {
        CleanerBuilder::default()
    }

    /// Get the directory to clean
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if subdirectories are cleaned too
    pub fn recursive(&self) -> bool {
        self.recursive
    }

    /// Get the rule set
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Run the cleanup.
    ///
    /// Returns the statistics of the whole walk, or the error that stopped
    /// it. See the module documentation for which conditions are fatal.
    pub fn clean(&self) -> Result<Stats> {
        let log = Logger::new(self.verbose, self.quiet);
        let mut stats = Stats::default();

        log.verbose(
            1,
            format!(
                "Cleaning {}{}",
                self.path.display(),
                if self.recursive { " recursively" } else { "" }
            ),
        );
        log.verbose(
            2,
            format!("Junk patterns: {}", self.rules.junk_patterns().join(" ")),
        );

        self.visit(&self.path, &mut stats, &log)?;

        Ok(stats)
    }

    /// Visit a single directory, recursing into children when enabled.
    fn visit(&self, dir: &Path, stats: &mut Stats, log: &Logger) -> Result<()> {
        if !dir.is_dir() {
            return Err(CleanError::InvalidPath(dir.to_path_buf()));
        }

        stats.examined_dirs += 1;

        if !dir_accessible(dir) {
            if self.recursive {
                log.verbose(1, format!("Skipping inaccessible directory {}", dir.display()));
                stats.inaccessible_dirs += 1;
                return Ok(());
            }
            return Err(CleanError::DirectoryInaccessible(dir.to_path_buf()));
        }

        let entries = match list_entries(dir) {
            Ok(entries) => entries,
            Err(source) if self.recursive => {
                log.verbose(
                    1,
                    format!("Skipping unreadable directory {}: {source}", dir.display()),
                );
                stats.inaccessible_dirs += 1;
                return Ok(());
            }
            Err(source) => {
                return Err(CleanError::Io {
                    path: dir.to_path_buf(),
                    source,
                });
            }
        };

        if entries.is_empty() && !self.recursive {
            return Err(CleanError::EmptyDirectory(dir.to_path_buf()));
        }

        log.verbose(
            2,
            format!("Examining {} ({} entries)", dir.display(), entries.len()),
        );

        for entry in entries {
            if self.cancelled() {
                return Err(CleanError::Interrupted);
            }

            let name = entry.file_name();

            if is_dir(&entry) {
                if !self.recursive {
                    continue;
                }
                if self.rules.is_ignored_dir(name) {
                    log.verbose(1, format!("Ignoring {}", entry.path().display()));
                    stats.ignored_dirs += 1;
                    continue;
                }
                self.visit(entry.path(), stats, log)?;
                continue;
            }

            stats.examined_files += 1;

            if self.rules.is_junk_file(name) {
                self.delete(entry.path(), stats, log);
            }
        }

        Ok(())
    }

    /// Delete one junk file, recording any failure instead of returning it.
    fn delete(&self, path: &Path, stats: &mut Stats, log: &Logger) {
        if !file_accessible(path) {
            let failure = stats.record_failure(path.to_path_buf(), FailureKind::Inaccessible);
            log.warn(failure);
            return;
        }

        remove_junk(path, stats, log);
    }

    fn cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// Remove a file already checked for access.
///
/// The file can still vanish or be locked in between, so failures are
/// recorded rather than returned.
fn remove_junk(path: &Path, stats: &mut Stats, log: &Logger) {
    match fs::remove_file(path) {
        Ok(()) => {
            log.verbose(1, format!("Deleted {}", path.display()));
            stats.deleted_files += 1;
        }
        Err(err) => {
            let failure =
                stats.record_failure(path.to_path_buf(), FailureKind::Removal(err.kind()));
            log.warn(failure);
        }
    }
}

/// Whether the entry resolves to a directory.
///
/// Symlinks are resolved, so a link to a directory is walked like the
/// directory itself. A link the OS cannot resolve (dangling, ELOOP) is a
/// file entry.
fn is_dir(entry: &DirEntry) -> bool {
    if entry.path_is_symlink() {
        return fs::metadata(entry.path()).is_ok_and(|metadata| metadata.is_dir());
    }
    entry.file_type().is_dir()
}

/// Immediate entries of `dir`, in the order the filesystem returns them.
///
/// Entries carry the type of the link itself; [`is_dir`] resolves it.
fn list_entries(dir: &Path) -> std::io::Result<Vec<DirEntry>> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .collect::<walkdir::Result<Vec<_>>>()
        .map_err(Into::into)
}

/// Builder for [`Cleaner`]
#[derive(Debug, Default)]
pub struct CleanerBuilder {
    path: Option<PathBuf>,
    recursive: bool,
    rules: Option<Rules>,
    verbose: u8,
    quiet: bool,
    cancel: Option<Arc<AtomicBool>>,
}

impl CleanerBuilder {
    /// Set the directory to clean (defaults to the current directory)
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Descend into subdirectories
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Replace the default rule set
    pub fn rules(mut self, rules: Rules) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Set the verbosity level (0 = normal, 1+ = verbose)
    pub fn verbose(mut self, level: u8) -> Self {
        self.verbose = level;
        self
    }

    /// Enable or disable quiet mode
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Stop the walk with [`CleanError::Interrupted`] once `flag` is set.
    ///
    /// The flag is checked before each directory entry, so a deletion that
    /// has started always completes.
    pub fn cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Build the [`Cleaner`]
    pub fn build(self) -> Cleaner {
        Cleaner {
            path: self.path.unwrap_or_else(|| PathBuf::from(".")),
            recursive: self.recursive,
            rules: self.rules.unwrap_or_default(),
            verbose: self.verbose,
            quiet: self.quiet,
            cancel: self.cancel,
        }
    }
}
