//! Interrupt handling for the interactive flow.
//!
//! Every step of a run blocks on stdin, so Ctrl-C is handled by printing a
//! short exit line and terminating the process directly. Nothing is saved
//! on interrupt.

use tracing::warn;

/// Exit code for an interrupted run (128 + SIGINT).
pub(crate) const INTERRUPT_EXIT_CODE: i32 = 130;

/// Installs the Ctrl-C handler for the whole run.
pub(crate) fn install_interrupt_handler() {
    let result = ctrlc::set_handler(|| {
        eprintln!("\nExiting...");
        std::process::exit(INTERRUPT_EXIT_CODE);
    });

    if let Err(error) = result {
        warn!(%error, "could not install interrupt handler");
    }
}
