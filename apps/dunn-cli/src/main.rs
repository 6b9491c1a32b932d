//! # Dunn Delivery CLI Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Parse arguments
//! 3. Load configuration from the environment
//! 4. Run the command and exit with its status
//!
//! The actual setup is in lib.rs for testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    dunn_cli::run()
}
