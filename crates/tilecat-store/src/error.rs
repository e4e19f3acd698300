//! # Storage Error Types
//!
//! Error types for ledger and image operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Error Propagation                              │
//! │                                                                     │
//! │  I/O or CSV error (std::io::Error, csv::Error)                      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError (this module) ← Adds context and categorization         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  CLI maps to an exit message                                        │
//! │                                                                     │
//! │  Image ingest failures are NOT routed through here: the pipeline    │
//! │  is best-effort (fall back to copy, then skip with a warning).      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;
use tilecat_core::CoreError;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// SKU not present in the active ledger.
    #[error("Product not found: {sku}")]
    NotFound { sku: String },

    /// SKU already exists among active products.
    ///
    /// SKU uniqueness is the one hard invariant of the active ledger; the
    /// entry flow surfaces this instead of saving.
    #[error("SKU already exists: {sku}")]
    DuplicateSku { sku: String },

    /// File system failure (ledger or image folder).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ledger could not be read or written as CSV.
    #[error("Ledger error: {0}")]
    Csv(#[from] csv::Error),

    /// Barcode image could not be encoded or written.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// QR matrix generation failed (payload too long for the symbol).
    #[error("QR generation failed: {0}")]
    Qr(String),

    /// Domain error from tilecat-core.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::DuplicateSku {
            sku: "VE60600001".to_string(),
        };
        assert_eq!(err.to_string(), "SKU already exists: VE60600001");

        let err = StoreError::NotFound {
            sku: "OM80801002".to_string(),
        };
        assert_eq!(err.to_string(), "Product not found: OM80801002");
    }
}
