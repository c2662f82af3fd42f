//! # cleantmp CLI
//!
//! Deletes temporary and junk files left behind by operating systems and
//! editors in user folders (music, photos, USB sticks and the like).
//!
//! ## Usage
//!
//! ```bash
//! # Clean the current directory
//! cleantmp
//!
//! # Clean a folder and everything below it
//! cleantmp -r ~/Music
//! ```
//!
//! Errors are reported on stderr, unexpected ones included. The exit status
//! is 0 unless the run is interrupted with Ctrl-C, which exits with 1.

use std::io::IsTerminal;
use std::panic;

use cleantmp::cli::Cli;
use miette::IntoDiagnostic;

fn main() -> miette::Result<()> {
    // Install miette's fancy panic and error report handler
    miette::set_panic_hook();

    if std::io::stderr().is_terminal() {
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::GraphicalReportHandler::new()
                    .with_theme(miette::GraphicalTheme::unicode_nocolor())
                    .with_context_lines(3),
            )
        }))?;
    } else {
        // Plain output for pipes and logs
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::GraphicalReportHandler::new()
                    .with_theme(miette::GraphicalTheme::none())
                    .with_context_lines(0),
            )
        }))?;
    }

    // Without a listener Ctrl-C still ends the process, only without the notice
    if let Err(report) = cleantmp::interrupt::install().into_diagnostic() {
        eprintln!("{report:?}");
    }

    let cli = Cli::parse_args();

    // Handled errors are printed, not turned into a failing exit status.
    // The panic hook has already rendered a panic by the time it is caught.
    match panic::catch_unwind(|| cleantmp::commands::execute(&cli)) {
        Ok(Ok(_)) => {}
        Ok(Err(err)) => eprintln!("{:?}", miette::Report::new(err)),
        Err(_) => eprintln!("[!] Unexpected error, cleanup aborted"),
    }

    Ok(())
}
