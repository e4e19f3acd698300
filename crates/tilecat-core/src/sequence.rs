//! # Sequence Allocator
//!
//! Allocates the per-(brand, size) sequence number that finishes the SKU.
//!
//! ## Allocation Rule
//! ```text
//! existing sequences for (VE, 6060): "001", "002", "oops", "007"
//!        │
//!        ▼  parse each as integer, non-numeric counts as 0
//! max = 7 ──► next = 8 ──► formatted "008"
//!
//! empty / absent pair ──► "001"
//! ```
//!
//! Allocation has no side effect: asking twice without persisting the first
//! product yields the same value. The scan covers active records only, so
//! deleting the current maximum hands its number to the next product, while
//! deleted mid-range numbers are never reused (allocation is always max+1).
//!
//! No locking. Two processes allocating concurrently would race; the tool
//! is built for one interactive user.

use crate::error::{CoreError, CoreResult};

/// Highest sequence number the 3-digit SPCode column can hold.
pub const MAX_SEQUENCE: u16 = 999;

/// Computes the next sequence number from the existing sequence fields of
/// one (brand, size) pair.
///
/// Non-numeric fields count as zero; the result is floored at 1.
///
/// ## Errors
/// [`CoreError::SequenceExhausted`] once the next number would exceed
/// [`MAX_SEQUENCE`].
pub fn next_sequence<'a, I>(brand_code: &str, size_code: &str, existing: I) -> CoreResult<u16>
where
    I: IntoIterator<Item = &'a str>,
{
    let max = existing
        .into_iter()
        .map(|s| s.trim().parse::<u32>().unwrap_or(0))
        .max()
        .unwrap_or(0);

    let next = (max + 1).max(1);
    if next > u32::from(MAX_SEQUENCE) {
        return Err(CoreError::SequenceExhausted {
            brand: brand_code.to_string(),
            size: size_code.to_string(),
        });
    }
    Ok(next as u16)
}

/// Formats a sequence number as the zero-padded 3-digit SPCode.
pub fn format_sequence(sequence: u16) -> String {
    format!("{sequence:03}")
}

// =============================================================================
// Unit Tests
// =============================================================================
