//! Counters collected during a cleanup run and the summary built from them.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Statistics for one cleanup run.
///
/// Every counter starts at zero and only grows while the walk is in
/// progress. A fresh value is created for each run, so independent runs
/// never share counters.
#[derive(Debug, Default)]
pub struct Stats {
    /// Files looked at (junk or not)
    pub examined_files: usize,
    /// Directories visited, including ones that proved inaccessible
    pub examined_dirs: usize,
    /// Junk files removed
    pub deleted_files: usize,
    /// Junk files that could not be removed
    pub inaccessible_files: usize,
    /// Directories skipped because they could not be listed or entered
    pub inaccessible_dirs: usize,
    /// Reserved directories skipped by name
    pub ignored_dirs: usize,
    /// One record per junk file that could not be removed
    pub failures: Vec<Failure>,
}

/// A junk file that was left in place.
#[derive(Debug)]
pub struct Failure {
    pub path: PathBuf,
    pub kind: FailureKind,
}

/// Why a junk file was left in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The file was not readable and writable, so removal was not attempted
    Inaccessible,
    /// Removal was attempted and the OS refused it
    Removal(io::ErrorKind),
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FailureKind::Inaccessible => {
                write!(f, "Could not delete file {} (no access)", self.path.display())
            }
            FailureKind::Removal(kind) => {
                write!(f, "Could not delete file {} ({kind})", self.path.display())
            }
        }
    }
}

impl Stats {
    pub(crate) fn record_failure(&mut self, path: PathBuf, kind: FailureKind) -> &Failure {
        self.inaccessible_files += 1;
        self.failures.push(Failure { path, kind });
        // just pushed
        &self.failures[self.failures.len() - 1]
    }

    /// The end-of-run report.
    ///
    /// Directory lines appear only for recursive runs; lines for optional
    /// counters are omitted while they are zero.
    pub fn summary(&self, recursive: bool) -> Summary<'_> {
        Summary {
            stats: self,
            recursive,
        }
    }
}

/// Display adapter rendering [`Stats`] as the console report.
pub struct Summary<'a> {
    stats: &'a Stats,
    recursive: bool,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.stats;

        if self.recursive {
            writeln!(f, "Directories examined     : {}", stats.examined_dirs)?;
            if stats.ignored_dirs > 0 {
                writeln!(f, "Directories ignored      : {}", stats.ignored_dirs)?;
            }
            if stats.inaccessible_dirs > 0 {
                writeln!(f, "Directories inaccessible : {}", stats.inaccessible_dirs)?;
            }
        }

        writeln!(f, "Files examined           : {}", stats.examined_files)?;
        write!(f, "Files deleted            : {}", stats.deleted_files)?;

        if stats.inaccessible_files > 0 {
            write!(
                f,
                "\nFiles inaccessible       : {}",
                stats.inaccessible_files
            )?;
        }

        Ok(())
    }
}
