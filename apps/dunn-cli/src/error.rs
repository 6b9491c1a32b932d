//! # CLI Error Type
//!
//! Unified error type for every command.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  dunn order --item Espresso ...                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  CoreError::UnknownItem("Espresso") ──► CliError::Core                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  stderr: "Error: Unknown item: Espresso"      exit code 2               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Exit code 2 means "fix your input and try again", 1 means the program
//! itself could not do its job (I/O, unreadable files).

use std::path::PathBuf;

use dunn_core::{CoreError, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Engine rejected the request (unknown item, category, location...).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Typed input failed a boundary check (hour out of range, bad amount).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Free-form input that could not be understood.
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A custom menu file could not be read.
    #[error("Cannot read menu file {}: {source}", path.display())]
    MenuFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Core(_) | CliError::Validation(_) | CliError::InvalidInput { .. } => 2,
            CliError::MenuFile { .. } | CliError::Io(_) | CliError::Json(_) => 1,
        }
    }
}
