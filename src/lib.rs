//! # cleantmp
//!
//! Removes the residue operating systems and editors leave behind in user
//! folders: `.DS_Store`, `Thumbs.db`, `Desktop.ini`, AppleDouble `._*`
//! files, `*~` backups and vim swap files.
//!
//! ## Overview
//!
//! cleantmp walks a directory (optionally its whole subtree), classifies
//! every file by name only and deletes the ones that are known junk.
//! System-managed directories such as `.Trash`, `$RECYCLE.BIN` or
//! `.Spotlight-V100` are never entered. File contents are never read.
//!
//! ## Architecture
//!
//! - [`cli`]: Command-line interface definitions using clap
//! - [`commands`]: Runs a parsed command line and prints the report
//! - [`cleaner`]: The traversal engine
//! - [`rules`]: Junk file names, patterns and ignored directories
//! - [`stats`]: Per-run counters and the summary report
//! - [`error`]: Error types with thiserror + miette
//! - [`interrupt`]: Ctrl-C handling for the binary
//!
//! Internal modules:
//! - `access`: Read/write/execute permission checks
//! - `logging`: Verbosity-aware stderr output
//!
//! ## Library Usage
//!
//! ```no_run
//! use cleantmp::cleaner::clean;
//!
//! let stats = clean("/Volumes/USB", true)?;
//! println!("Deleted {} files", stats.deleted_files);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! Only an invalid root, and in non-recursive mode an inaccessible or empty
//! root, fail a run. Files that cannot be deleted are counted in
//! [`stats::Stats`] and the walk carries on.

pub mod cleaner;
pub mod cli;
pub mod commands;
pub mod error;
pub mod interrupt;
pub mod rules;
pub mod stats;

// Internal modules
mod access;
mod logging;

pub use cleaner::{Cleaner, CleanerBuilder, clean};
pub use error::{CleanError, Result};
pub use rules::Rules;
pub use stats::Stats;
