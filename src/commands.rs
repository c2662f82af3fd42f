//! Execution of a parsed command line.
//!
//! # Example
//!
//! ```no_run
//! use cleantmp::cli::Cli;
//! use cleantmp::commands;
//!
//! let cli = Cli::parse_args();
//! if let Err(e) = commands::execute(&cli) {
//!     eprintln!("Error: {e:?}");
//! }
//! ```

use crate::cleaner::Cleaner;
use crate::cli::Cli;
use crate::error::Result;
use crate::stats::Stats;

/// Run the cleanup described by `cli` and print the summary report.
///
/// Per-file failures have already been printed by the time this returns;
/// the report goes to stdout once the walk has finished.
pub fn execute(cli: &Cli) -> Result<Stats> {
    let stats = Cleaner::builder()
        .path(cli.path())
        .recursive(cli.recursive())
        .build()
        .clean()?;

    println!();
    println!("{}", stats.summary(cli.recursive()));

    Ok(stats)
}
