//! # CLI Error Type
//!
//! Unified error type for command dispatch. Every command returns
//! `CliResult<()>`; `main` prints the message and exits non-zero.
//!
//! ## Error Flow
//! ```text
//! ValidationError ─┐
//! CoreError ───────┼──► CliError ──► "error: <message>", exit code 1
//! StoreError ──────┘
//! ```

use thiserror::Error;
use tilecat_core::{CoreError, ValidationError};
use tilecat_store::StoreError;

/// Errors surfaced to the terminal.
#[derive(Debug, Error)]
pub enum CliError {
    /// Domain rule violation (unknown brand, bad EAN base, ...).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Field validation failure; the save was blocked.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Ledger or image storage failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Terminal interaction failure (confirmation prompt).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Operation cancelled at the confirmation prompt.
    #[error("Cancelled")]
    Cancelled,
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
