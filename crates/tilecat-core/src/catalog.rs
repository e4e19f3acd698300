//! # Catalog Tables
//!
//! The fixed lookup tables every product is built from: brands, nominal
//! tile sizes, surface-finish flags, and the matt/polished selector.
//!
//! ## How the Tables Feed the Generators
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Brand "VE" ──► code "VE"  ─┐                                       │
//! │                name "Vesta" │                                       │
//! │                id   "0" ────┼──► EAN-13 base                        │
//! │                             │                                       │
//! │  Size "60x60" ──► "6060" ───┼──► SKU = VE + 6060 + 0 + 001          │
//! │                             │                                       │
//! │  Finish Matt ──► '0' ───────┘                                       │
//! │                                                                     │
//! │  Surfaces {WhiteBody, CrystalGlaze} ──► "WC" (display only,         │
//! │                                         never part of the SKU)      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The tables are compile-time constants: adding a brand or size is a code
//! change, which is intended for a catalog this small.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

// =============================================================================
// Brands
// =============================================================================

/// A tile brand: human code, display name, and the single-digit numeric id
/// that goes into the EAN-13 base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brand {
    /// Two-letter code used as the SKU prefix (e.g. "VE").
    pub code: &'static str,
    /// Display name (e.g. "Vesta").
    pub name: &'static str,
    /// Numeric id used in the barcode base (e.g. "0").
    pub id: &'static str,
}

/// The fixed 4-entry brand table.
pub const BRANDS: [Brand; 4] = [
    Brand { code: "VE", name: "Vesta", id: "0" },
    Brand { code: "OM", name: "One Max", id: "1" },
    Brand { code: "GA", name: "Granca", id: "2" },
    Brand { code: "SA", name: "STA", id: "3" },
];

impl Brand {
    /// Looks up a brand by its two-letter code (case-insensitive).
    pub fn from_code(code: &str) -> Option<&'static Brand> {
        BRANDS.iter().find(|b| b.code.eq_ignore_ascii_case(code.trim()))
    }

    /// Looks up a brand by code, turning a miss into a typed error.
    pub fn require(code: &str) -> Result<&'static Brand, CoreError> {
        Brand::from_code(code).ok_or_else(|| CoreError::UnknownBrand(code.to_string()))
    }
}

// =============================================================================
// Tile Sizes
// =============================================================================

/// A nominal tile size: display label and the 4-digit SKU code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSize {
    /// Label as entered and displayed (e.g. "60x120").
    pub label: &'static str,
    /// 4-digit code embedded in the SKU (e.g. "6120").
    pub code: &'static str,
}

/// The fixed size table. Order matches the catalog sheet.
pub const SIZES: [TileSize; 9] = [
    TileSize { label: "60x60", code: "6060" },
    TileSize { label: "80x80", code: "8080" },
    TileSize { label: "40x80", code: "4080" },
    TileSize { label: "60x120", code: "6120" },
    TileSize { label: "100x100", code: "1010" },
    TileSize { label: "120x120", code: "1212" },
    TileSize { label: "80x160", code: "8160" },
    TileSize { label: "100x200", code: "1020" },
    TileSize { label: "120x240", code: "1224" },
];

impl TileSize {
    /// Looks up a size by its label (e.g. "60x60").
    pub fn from_label(label: &str) -> Option<&'static TileSize> {
        SIZES.iter().find(|s| s.label.eq_ignore_ascii_case(label.trim()))
    }

    /// Looks up a size by its 4-digit code (e.g. "6060").
    pub fn from_code(code: &str) -> Option<&'static TileSize> {
        SIZES.iter().find(|s| s.code == code.trim())
    }

    /// Looks up a size by label, turning a miss into a typed error.
    pub fn require(label: &str) -> Result<&'static TileSize, CoreError> {
        TileSize::from_label(label).ok_or_else(|| CoreError::UnknownSize(label.to_string()))
    }
}

// =============================================================================
// Surface Flags
// =============================================================================

/// A surface-finish flag. A product carries any subset of the five.
///
/// Surfaces are descriptive only: they appear in the stored row and the
/// viewer, never in the SKU or barcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    WhiteBody,
    MicrocidGlaze,
    ScratchResistantGlaze,
    CrystalGlaze,
    DeepColor,
}

impl Surface {
    /// All flags in table order. The encoded string follows this order
    /// regardless of selection order.
    pub const ALL: [Surface; 5] = [
        Surface::WhiteBody,
        Surface::MicrocidGlaze,
        Surface::ScratchResistantGlaze,
        Surface::CrystalGlaze,
        Surface::DeepColor,
    ];

    /// Single-letter code stored in the SurfaceCode column.
    pub const fn code(&self) -> char {
        match self {
            Surface::WhiteBody => 'W',
            Surface::MicrocidGlaze => 'M',
            Surface::ScratchResistantGlaze => 'S',
            Surface::CrystalGlaze => 'C',
            Surface::DeepColor => 'D',
        }
    }

    /// Display label stored in the SurfaceLabel column.
    pub const fn label(&self) -> &'static str {
        match self {
            Surface::WhiteBody => "White Body",
            Surface::MicrocidGlaze => "Microcid Glaze",
            Surface::ScratchResistantGlaze => "Scratch-Resistant Glaze",
            Surface::CrystalGlaze => "Crystal Glaze",
            Surface::DeepColor => "Deep Color",
        }
    }

    /// Looks up a flag by its single-letter code.
    pub fn from_code(code: char) -> Option<Surface> {
        Surface::ALL
            .iter()
            .copied()
            .find(|s| s.code() == code.to_ascii_uppercase())
    }
}

impl FromStr for Surface {
    type Err = CoreError;

    /// Parses a surface selector: the full label, a dashed slug
    /// ("white-body"), or the single-letter code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalize = |v: &str| v.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        let wanted = normalize(s);
        if let Some(found) = Surface::ALL
            .iter()
            .copied()
            .find(|surf| normalize(surf.label()) == wanted)
        {
            return Ok(found);
        }
        let mut chars = s.trim().chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(found) = Surface::from_code(c) {
                return Ok(found);
            }
        }
        Err(CoreError::UnknownSurface(s.to_string()))
    }
}

/// Encodes a surface selection as the concatenated letter codes, in table
/// order, duplicates ignored.
pub fn surface_code_string(selected: &[Surface]) -> String {
    Surface::ALL
        .iter()
        .filter(|s| selected.contains(s))
        .map(|s| s.code())
        .collect()
}

/// Encodes a surface selection as the comma-joined labels, in table order.
pub fn surface_label_string(selected: &[Surface]) -> String {
    Surface::ALL
        .iter()
        .filter(|s| selected.contains(s))
        .map(|s| s.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Decodes a SurfaceCode column value back into flags. Unknown letters are
/// ignored (best-effort, matching the load path's defaulting rules).
pub fn surfaces_from_code_string(codes: &str) -> Vec<Surface> {
    codes.chars().filter_map(Surface::from_code).collect()
}

// =============================================================================
// Finish
// =============================================================================

/// The binary matt/polished selector. There is deliberately no "none".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Finish {
    #[default]
    Matt,
    Polished,
}

impl Finish {
    /// The digit stored in the MattPolished column and embedded in the SKU.
    pub const fn digit(&self) -> char {
        match self {
            Finish::Matt => '0',
            Finish::Polished => '1',
        }
    }

    /// Display label.
    pub const fn label(&self) -> &'static str {
        match self {
            Finish::Matt => "Matt",
            Finish::Polished => "Polished",
        }
    }

    /// Decodes the stored digit.
    pub fn from_digit(digit: &str) -> Option<Finish> {
        match digit.trim() {
            "0" => Some(Finish::Matt),
            "1" => Some(Finish::Polished),
            _ => None,
        }
    }
}

impl FromStr for Finish {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "matt" | "0" => Ok(Finish::Matt),
            "polished" | "1" => Ok(Finish::Polished),
            other => Err(CoreError::UnknownFinish(other.to_string())),
        }
    }
}

impl fmt::Display for Finish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_lookup() {
        let brand = Brand::from_code("VE").unwrap();
        assert_eq!(brand.name, "Vesta");
        assert_eq!(brand.id, "0");

        // Case-insensitive, trims whitespace
        assert!(Brand::from_code(" om ").is_some());
        assert!(Brand::from_code("XX").is_none());
    }

    #[test]
    fn test_brand_require_error() {
        let err = Brand::require("ZZ").unwrap_err();
        assert!(matches!(err, CoreError::UnknownBrand(_)));
    }

    #[test]
    fn test_size_lookup() {
        assert_eq!(TileSize::from_label("60x120").unwrap().code, "6120");
        assert_eq!(TileSize::from_code("1224").unwrap().label, "120x240");
        assert!(TileSize::from_label("50x50").is_none());
    }

    #[test]
    fn test_surface_code_string_follows_table_order() {
        // Selection order does not matter; output is table order
        let selected = vec![Surface::DeepColor, Surface::WhiteBody, Surface::CrystalGlaze];
        assert_eq!(surface_code_string(&selected), "WCD");
        assert_eq!(
            surface_label_string(&selected),
            "White Body, Crystal Glaze, Deep Color"
        );
    }

    #[test]
    fn test_surface_code_string_ignores_duplicates() {
        let selected = vec![Surface::WhiteBody, Surface::WhiteBody];
        assert_eq!(surface_code_string(&selected), "W");
    }

    #[test]
    fn test_surface_roundtrip_through_codes() {
        let selected = vec![Surface::MicrocidGlaze, Surface::DeepColor];
        let codes = surface_code_string(&selected);
        assert_eq!(surfaces_from_code_string(&codes), selected);
    }

    #[test]
    fn test_surface_parse_forms() {
        assert_eq!("white-body".parse::<Surface>().unwrap(), Surface::WhiteBody);
        assert_eq!("Crystal Glaze".parse::<Surface>().unwrap(), Surface::CrystalGlaze);
        assert_eq!(
            "scratch-resistant-glaze".parse::<Surface>().unwrap(),
            Surface::ScratchResistantGlaze
        );
        assert_eq!("m".parse::<Surface>().unwrap(), Surface::MicrocidGlaze);
        assert!("granite".parse::<Surface>().is_err());
    }

    #[test]
    fn test_finish_digits() {
        assert_eq!(Finish::Matt.digit(), '0');
        assert_eq!(Finish::Polished.digit(), '1');
        assert_eq!(Finish::from_digit("1"), Some(Finish::Polished));
        assert_eq!(Finish::from_digit("2"), None);
    }

    #[test]
    fn test_finish_parse() {
        assert_eq!("matt".parse::<Finish>().unwrap(), Finish::Matt);
        assert_eq!("Polished".parse::<Finish>().unwrap(), Finish::Polished);
        assert!("satin".parse::<Finish>().is_err());
    }
}
