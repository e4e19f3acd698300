//! # Code Generator
//!
//! Deterministic SKU and EAN-13 generation, plus the bar-module pattern
//! used when rendering the barcode image.
//!
//! ## Where Each Piece of the Code Comes From
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                                                                     │
//! │  SKU:     VE    6060    0      001                                  │
//! │           │     │       │      │                                    │
//! │           brand size    finish sequence (3-digit, per brand+size)   │
//! │                                                                     │
//! │  EAN-13:  893   12345   0      001    6                             │
//! │           │     │       │      │      │                             │
//! │           │     │       │      │      check digit                   │
//! │           │     │       brand  sequence                             │
//! │           │     company prefix                                      │
//! │           country prefix                                            │
//! │                                                                     │
//! │  Base is normalised to exactly 12 digits: left-padded with '0'      │
//! │  when short, truncated to the LAST 12 when long.                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Check Digit
//! Standard retail algorithm: sum of digits at odd positions, plus three
//! times the sum of digits at even positions; check = (10 − total mod 10)
//! mod 10.

use crate::catalog::{Brand, Finish, TileSize};
use crate::error::{CoreError, CoreResult};
use crate::sequence::format_sequence;

/// Number of bar modules in a rendered EAN-13 symbol
/// (3 guard + 42 left + 5 centre + 42 right + 3 guard).
pub const EAN13_MODULES: usize = 95;

// =============================================================================
// SKU
// =============================================================================

/// Formats the SKU: brand code + size code + finish digit + 3-digit
/// sequence.
///
/// ## Example
/// ```rust
/// use tilecat_core::catalog::{Brand, Finish, TileSize};
/// use tilecat_core::codes::build_sku;
///
/// let brand = Brand::from_code("VE").unwrap();
/// let size = TileSize::from_label("60x60").unwrap();
/// assert_eq!(build_sku(brand, size, Finish::Polished, 1), "VE60601001");
/// ```
pub fn build_sku(brand: &Brand, size: &TileSize, finish: Finish, sequence: u16) -> String {
    format!(
        "{}{}{}{}",
        brand.code,
        size.code,
        finish.digit(),
        format_sequence(sequence)
    )
}

// =============================================================================
// EAN-13
// =============================================================================

/// Computes the EAN-13 check digit for an exactly-12-digit base.
///
/// ## Algorithm
/// Positions counted from 1: odd-position digits summed as-is,
/// even-position digits summed and tripled.
///
/// ## Errors
/// [`CoreError::InvalidEanBase`] unless the input is 12 ASCII digits.
pub fn ean13_check_digit(base12: &str) -> CoreResult<u8> {
    if base12.len() != 12 || !base12.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::InvalidEanBase(base12.to_string()));
    }
    Ok(check_digit_of(base12.bytes().map(|b| (b - b'0') as u32)))
}

/// Check digit over an iterator of digit values. Infallible; callers have
/// already guaranteed digits.
fn check_digit_of(digits: impl Iterator<Item = u32>) -> u8 {
    let mut odd = 0u32;
    let mut even = 0u32;
    for (i, d) in digits.enumerate() {
        if i % 2 == 0 {
            odd += d;
        } else {
            even += d;
        }
    }
    let total = odd + even * 3;
    ((10 - total % 10) % 10) as u8
}

/// Builds a full 13-digit EAN from the configured prefixes, the brand's
/// numeric id, and the product sequence.
///
/// Non-digit characters in the prefixes are stripped. The concatenation is
/// left-padded with '0' to 12 digits when short and truncated to the last
/// 12 when long, then the check digit is appended.
///
/// ## Example
/// ```rust
/// use tilecat_core::codes::build_ean13;
///
/// assert_eq!(build_ean13("893", "12345", "0", 1), "8931234500016");
/// ```
pub fn build_ean13(country: &str, company: &str, brand_id: &str, sequence: u16) -> String {
    let digits: String = country
        .chars()
        .chain(company.chars())
        .chain(brand_id.chars())
        .chain(format_sequence(sequence).chars())
        .filter(|c| c.is_ascii_digit())
        .collect();

    let base12: String = if digits.len() < 12 {
        let mut padded = "0".repeat(12 - digits.len());
        padded.push_str(&digits);
        padded
    } else {
        digits[digits.len() - 12..].to_string()
    };

    let check = check_digit_of(base12.bytes().map(|b| (b - b'0') as u32));
    format!("{base12}{check}")
}

/// Verifies a 13-digit EAN: digits only, correct length, checksum matches.
pub fn verify_ean13(ean13: &str) -> CoreResult<()> {
    if ean13.len() != 13 || !ean13.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::InvalidEan13(ean13.to_string()));
    }
    let expected = check_digit_of(ean13[..12].bytes().map(|b| (b - b'0') as u32));
    let actual = ean13.as_bytes()[12] - b'0';
    if expected != actual {
        return Err(CoreError::InvalidEan13(ean13.to_string()));
    }
    Ok(())
}

// =============================================================================
// Bar Modules
// =============================================================================

// Left-hand odd-parity (L) encodings of digits 0-9.
const L_CODES: [u8; 10] = [
    0b0001101, 0b0011001, 0b0010011, 0b0111101, 0b0100011, 0b0110001, 0b0101111, 0b0111011,
    0b0110111, 0b0001011,
];

// Left-hand even-parity (G) encodings of digits 0-9.
const G_CODES: [u8; 10] = [
    0b0100111, 0b0110011, 0b0011011, 0b0100001, 0b0011101, 0b0111001, 0b0000101, 0b0010001,
    0b0001001, 0b0010111,
];

// Right-hand (R) encodings of digits 0-9 (bitwise complement of L).
const R_CODES: [u8; 10] = [
    0b1110010, 0b1100110, 0b1101100, 0b1000010, 0b1011100, 0b1001110, 0b1010000, 0b1000100,
    0b1001000, 0b1110100,
];

// Parity pattern for the six left digits, selected by the first digit.
// true = L (odd parity), false = G (even parity).
const PARITY: [[bool; 6]; 10] = [
    [true, true, true, true, true, true],
    [true, true, false, true, false, false],
    [true, true, false, false, true, false],
    [true, true, false, false, false, true],
    [true, false, true, true, false, false],
    [true, false, false, true, true, false],
    [true, false, false, false, true, true],
    [true, false, true, false, true, false],
    [true, false, true, false, false, true],
    [true, false, false, true, false, true],
];

/// Expands a verified EAN-13 into its 95 bar modules
/// (`true` = dark bar, `false` = light space).
///
/// The first digit is not drawn: it selects the parity pattern of the six
/// left-hand digits. Renderers scale each module to pixels and add their
/// own quiet zone.
pub fn ean13_modules(ean13: &str) -> CoreResult<[bool; EAN13_MODULES]> {
    verify_ean13(ean13)?;

    let digits: Vec<usize> = ean13.bytes().map(|b| (b - b'0') as usize).collect();
    let parity = PARITY[digits[0]];

    let mut modules = [false; EAN13_MODULES];
    let mut pos = 0;
    let mut push = |bits: u8, width: usize, pos: &mut usize, modules: &mut [bool; EAN13_MODULES]| {
        for i in (0..width).rev() {
            modules[*pos] = bits >> i & 1 == 1;
            *pos += 1;
        }
    };

    // Left guard 101
    push(0b101, 3, &mut pos, &mut modules);
    // Six left digits in L/G parity
    for (i, &d) in digits[1..7].iter().enumerate() {
        let code = if parity[i] { L_CODES[d] } else { G_CODES[d] };
        push(code, 7, &mut pos, &mut modules);
    }
    // Centre guard 01010
    push(0b01010, 5, &mut pos, &mut modules);
    // Six right digits in R encoding
    for &d in &digits[7..13] {
        push(R_CODES[d], 7, &mut pos, &mut modules);
    }
    // Right guard 101
    push(0b101, 3, &mut pos, &mut modules);

    debug_assert_eq!(pos, EAN13_MODULES);
    Ok(modules)
}

// =============================================================================
// QR Payload
// =============================================================================

/// Builds the QR payload from the configured URL template: `{}` is replaced
/// with the sequence code, or the code is appended when the template has no
/// placeholder.
pub fn qr_url(template: &str, sp_code: &str) -> String {
    if template.contains("{}") {
        template.replacen("{}", sp_code, 1)
    } else {
        format!("{template}{sp_code}")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_sku() {
        let brand = Brand::from_code("VE").unwrap();
        let size = TileSize::from_label("60x60").unwrap();
        assert_eq!(build_sku(brand, size, Finish::Matt, 1), "VE60600001");
        assert_eq!(build_sku(brand, size, Finish::Polished, 1), "VE60601001");
        assert_eq!(build_sku(brand, size, Finish::Matt, 999), "VE60600999");
    }

    #[test]
    fn test_check_digit_known_pairs() {
        // Spot checks against published EAN-13 numbers
        assert_eq!(ean13_check_digit("400638133393").unwrap(), 1);
        assert_eq!(ean13_check_digit("978030640615").unwrap(), 7);
        assert_eq!(ean13_check_digit("893123450001").unwrap(), 6);
    }

    #[test]
    fn test_check_digit_rejects_bad_base() {
        assert!(ean13_check_digit("12345").is_err());
        assert!(ean13_check_digit("1234567890123").is_err());
        assert!(ean13_check_digit("40063813339A").is_err());
    }

    #[test]
    fn test_build_ean13_exact_base() {
        // 893 + 12345 + 0 + 001 = exactly 12 digits
        assert_eq!(build_ean13("893", "12345", "0", 1), "8931234500016");
    }

    #[test]
    fn test_build_ean13_pads_short_base_left() {
        // 89 + 1234 + 0 + 001 = 10 digits, left-padded with two zeros
        let ean = build_ean13("89", "1234", "0", 1);
        assert!(ean.starts_with("00891234"));
        assert_eq!(ean.len(), 13);
        verify_ean13(&ean).unwrap();
    }

    #[test]
    fn test_build_ean13_truncates_long_base_keeping_tail() {
        // 893 + 123456789 + 3 + 999 = 16 digits, last 12 kept
        let ean = build_ean13("893", "123456789", "3", 999);
        assert!(ean.starts_with("234567893999"));
        assert_eq!(ean.len(), 13);
        verify_ean13(&ean).unwrap();
    }

    #[test]
    fn test_build_ean13_strips_non_digits() {
        let clean = build_ean13("893", "12345", "0", 7);
        let dirty = build_ean13(" 893 ", "12-345", "0", 7);
        assert_eq!(clean, dirty);
    }

    #[test]
    fn test_verify_ean13() {
        verify_ean13("4006381333931").unwrap();
        assert!(verify_ean13("4006381333930").is_err()); // wrong check
        assert!(verify_ean13("40063813339").is_err()); // too short
        assert!(verify_ean13("400638133393A").is_err());
    }

    #[test]
    fn test_modules_structure() {
        let m = ean13_modules("4006381333931").unwrap();

        // Guards
        assert_eq!(&m[0..3], &[true, false, true]);
        assert_eq!(&m[45..50], &[false, true, false, true, false]);
        assert_eq!(&m[92..95], &[true, false, true]);

        // First encoded digit is 0 with L parity (first digit 4 => L first):
        // L(0) = 0001101
        assert_eq!(
            &m[3..10],
            &[false, false, false, true, true, false, true]
        );
    }

    #[test]
    fn test_modules_reject_invalid_checksum() {
        assert!(ean13_modules("4006381333930").is_err());
    }

    #[test]
    fn test_qr_url_template() {
        assert_eq!(
            qr_url("https://thangcuongtiles.com/{}", "001"),
            "https://thangcuongtiles.com/001"
        );
        assert_eq!(qr_url("https://example.com/p/", "007"), "https://example.com/p/007");
    }
}
