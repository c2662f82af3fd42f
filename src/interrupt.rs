//! Interrupt handling for the binary.
//!
//! Ctrl-C ends the process straight away: in-flight deletions are not
//! finished and no partial report is printed. Library users who want a
//! graceful stop pass a flag to
//! [`CleanerBuilder::cancel_flag`](crate::cleaner::CleanerBuilder::cancel_flag)
//! instead.

use std::process;

/// Exit status used when the run is interrupted.
pub const INTERRUPTED_EXIT_CODE: i32 = 1;

/// Install the Ctrl-C listener.
pub fn install() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        eprintln!("\n\n[!] Exiting...\n");
        process::exit(INTERRUPTED_EXIT_CODE);
    })
}
