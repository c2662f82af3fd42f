//! Command-line interface definitions for cleantmp.
//!
//! The whole surface is one optional positional path, a recursive switch and
//! a version flag. The main entry point is the [`Cli`] struct.
//!
//! # Example
//!
//! ```no_run
//! use cleantmp::cli::Cli;
//!
//! let cli = Cli::parse_args();
//! println!("Cleaning {:?} (recursive: {})", cli.path(), cli.recursive());
//! ```

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};

/// Main command-line interface for cleantmp.
#[derive(Debug, Parser)]
#[command(
    name = "cleantmp",
    bin_name = "cleantmp",
    version,
    about = "Remove temporary and junk files (.DS_Store, Thumbs.db, swap and backup files)",
    long_about = None,
    disable_version_flag = true
)]
pub struct Cli {
    /// Directory to clean (defaults to the current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Also clean every subdirectory
    #[arg(short, long)]
    recursive: bool,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the directory to clean
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if subdirectories are cleaned too
    pub fn recursive(&self) -> bool {
        self.recursive
    }

    /// Create a builder for programmatic construction
    pub fn builder() -> CliBuilder {
        CliBuilder::default()
    }
}

/// Builder for [`Cli`]
#[derive(Debug, Default)]
pub struct CliBuilder {
    path: Option<PathBuf>,
    recursive: bool,
}

impl CliBuilder {
    /// Set the directory to clean
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Enable recursive cleaning
    pub fn recursive(mut self, enabled: bool) -> Self {
        self.recursive = enabled;
        self
    }

    /// Build the Cli instance
    pub fn build(self) -> Cli {
        Cli {
            path: self.path.unwrap_or_else(|| PathBuf::from(".")),
            recursive: self.recursive,
            version: None,
        }
    }
}
