//! # Validation Module
//!
//! Field validation for the product entry flow.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: clap (CLI argument parsing)                               │
//! │  ├── Types and enums (brand/size/finish selectors)                  │
//! │  └── Presence of required flags                                     │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE (business rules)                              │
//! │  ├── Sequence range, face count, prefix shapes, batch pattern       │
//! │  └── Failure blocks the save; stored state is never touched         │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Store (duplicate-SKU rejection against the active ledger) │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::sequence::MAX_SEQUENCE;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Sequence / Faces
// =============================================================================

/// Validates an operator-supplied sequence field.
///
/// ## Rules
/// - Digits only
/// - 1 to 999 inclusive
///
/// ## Returns
/// The parsed sequence number.
pub fn validate_sequence(sp_code: &str) -> ValidationResult<u16> {
    let sp_code = sp_code.trim();

    if sp_code.is_empty() {
        return Err(ValidationError::Required {
            field: "sequence".to_string(),
        });
    }

    let parsed: u16 = sp_code.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "sequence".to_string(),
        reason: "must be a number between 001 and 999".to_string(),
    })?;

    if parsed < 1 || parsed > MAX_SEQUENCE {
        return Err(ValidationError::OutOfRange {
            field: "sequence".to_string(),
            min: 1,
            max: i64::from(MAX_SEQUENCE),
        });
    }

    Ok(parsed)
}

/// Validates the face count (distinct printed faces of the tile design).
pub fn validate_faces(faces: u32) -> ValidationResult<()> {
    if faces == 0 {
        return Err(ValidationError::MustBePositive {
            field: "faces".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Barcode Prefixes
// =============================================================================

/// Validates the GS1 country prefix: 2 or 3 digits.
pub fn validate_country_prefix(prefix: &str) -> ValidationResult<()> {
    let prefix = prefix.trim();
    if !(2..=3).contains(&prefix.len()) || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "country prefix".to_string(),
            reason: "must be 2-3 digits".to_string(),
        });
    }
    Ok(())
}

/// Validates the company prefix: 4 to 9 digits.
pub fn validate_company_prefix(prefix: &str) -> ValidationResult<()> {
    let prefix = prefix.trim();
    if !(4..=9).contains(&prefix.len()) || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "company prefix".to_string(),
            reason: "must be 4-9 digits".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Batch / Commercial Name
// =============================================================================

/// Validates the optional lot/batch code.
///
/// ## Rules
/// Empty, or `LOT` followed by a 4-digit year and a 3-digit ordinal,
/// e.g. `LOT2026001`.
pub fn validate_batch(batch: &str) -> ValidationResult<()> {
    let batch = batch.trim();
    if batch.is_empty() {
        return Ok(());
    }

    let digits = batch.strip_prefix("LOT").unwrap_or("");
    if batch.len() != 10 || digits.len() != 7 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "batch".to_string(),
            reason: "must be empty or LOT followed by year and ordinal (e.g. LOT2026001)"
                .to_string(),
        });
    }
    Ok(())
}

/// Validates the commercial name: required, non-empty.
pub fn validate_commercial_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "commercial name".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
