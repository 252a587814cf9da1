//! Error handling utilities
//!
//! This module provides centralized error handling for the application.

/// Report a fatal error on stderr and exit with status 1
///
/// - `verbose = 0`: the error message only
/// - `verbose >= 1`: followed by the chain of underlying causes
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    eprintln!("{}: {error}", crate::NAME);

    if verbose >= 1 {
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {}: {}", i, cause);
        }
    }

    std::process::exit(1)
}
