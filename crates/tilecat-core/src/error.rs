//! # Error Types
//!
//! Domain-specific error types for tilecat-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  tilecat-core errors (this file)                                    │
//! │  ├── CoreError        - General domain errors                       │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  tilecat-store errors (separate crate)                              │
//! │  └── StoreError       - Ledger and image I/O failures               │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → StoreError → CLI exit message  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (brand code, field name, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent domain rule violations. The CLI catches them and
/// translates them to user-facing messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Brand code is not in the fixed brand table.
    #[error("Unknown brand code: {0}")]
    UnknownBrand(String),

    /// Size label is not in the fixed size table.
    #[error("Unknown tile size: {0}")]
    UnknownSize(String),

    /// Surface selector does not match any surface flag.
    #[error("Unknown surface option: {0}")]
    UnknownSurface(String),

    /// Finish selector is neither matt nor polished.
    #[error("Unknown finish: {0} (expected matt or polished)")]
    UnknownFinish(String),

    /// The EAN-13 base is not exactly 12 digits.
    #[error("Invalid EAN-13 base '{0}': expected exactly 12 digits")]
    InvalidEanBase(String),

    /// A string offered as an EAN-13 is not 13 digits with a valid checksum.
    #[error("Invalid EAN-13 number: {0}")]
    InvalidEan13(String),

    /// All 999 sequence slots for a (brand, size) pair are used.
    ///
    /// ## When This Occurs
    /// The allocator is max-of-active + 1; once an active product holds
    /// sequence 999 there is nothing left to hand out.
    #[error("Sequence space exhausted for {brand} {size}: all 999 slots used")]
    SequenceExhausted { brand: String, size: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Validation failure blocks the save and never touches stored state.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (wrong characters, wrong length, wrong pattern).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::SequenceExhausted {
            brand: "VE".to_string(),
            size: "6060".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Sequence space exhausted for VE 6060: all 999 slots used"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "commercial name".to_string(),
        };
        assert_eq!(err.to_string(), "commercial name is required");

        let err = ValidationError::OutOfRange {
            field: "sequence".to_string(),
            min: 1,
            max: 999,
        };
        assert_eq!(err.to_string(), "sequence must be between 1 and 999");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "sequence".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
