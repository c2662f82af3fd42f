//! Error types for cleantmp.
//!
//! This module defines the errors that can end a cleanup run, using
//! `thiserror` for the definitions and `miette` for diagnostic output.
//!
//! # Error Handling Strategy
//!
//! Only a few conditions are fatal to a traversal:
//!
//! - the root path is missing or not a directory
//! - the root directory cannot be listed or entered (non-recursive runs only)
//! - the root directory is empty (non-recursive runs only)
//!
//! Everything that goes wrong for an individual file is recorded in
//! [`Stats`](crate::stats::Stats) instead and never surfaces as a
//! [`CleanError`].
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use cleantmp::error::{CleanError, Result};
//!
//! fn check_root(path: &Path) -> Result<()> {
//!     if !path.is_dir() {
//!         return Err(CleanError::InvalidPath(path.to_path_buf()));
//!     }
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Error types that can occur in cleantmp operations
#[derive(Error, Debug, Diagnostic)]
pub enum CleanError {
    /// The path handed to the cleaner does not exist or is not a directory.
    ///
    /// Checked on every directory visit, so it also covers a subdirectory
    /// that disappears between being listed and being entered.
    #[error("The given path does not exist or is not a directory: {}", .0.display())]
    #[diagnostic(
        code(cleantmp::path::invalid),
        help("Pass the path of an existing directory.")
    )]
    InvalidPath(
        /// The offending path
        PathBuf,
    ),

    /// The directory is missing read or execute permission.
    ///
    /// Only raised for non-recursive runs. During a recursive walk the
    /// directory is counted as inaccessible and skipped.
    #[error("Directory not accessible: {}", .0.display())]
    #[diagnostic(
        code(cleantmp::dir::inaccessible),
        help("Ensure you have read and execute permission on the directory.")
    )]
    DirectoryInaccessible(
        /// The directory that could not be listed
        PathBuf,
    ),

    /// The directory has no entries at all.
    ///
    /// Only raised for non-recursive runs; an empty subdirectory found while
    /// recursing is simply a no-op.
    #[error("Directory is empty: {}", .0.display())]
    #[diagnostic(code(cleantmp::dir::empty))]
    EmptyDirectory(
        /// The empty directory
        PathBuf,
    ),

    /// A junk filename pattern could not be compiled.
    #[error("Invalid junk file pattern '{pattern}'")]
    #[diagnostic(
        code(cleantmp::rules::invalid_pattern),
        help("Patterns use shell glob syntax: '*', '?' and '[...]' classes.")
    )]
    InvalidPattern {
        /// The pattern as written
        pattern: String,
        /// The underlying glob error
        #[source]
        source: globset::Error,
    },

    /// The walk was stopped through its cancellation flag.
    #[error("Cleanup interrupted")]
    #[diagnostic(code(cleantmp::interrupted))]
    Interrupted,

    /// Any other I/O failure that escapes the per-file accounting.
    #[error("Unexpected error accessing '{}'", .path.display())]
    #[diagnostic(code(cleantmp::io_error))]
    Io {
        /// The path that caused the I/O error
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CleanError>;
