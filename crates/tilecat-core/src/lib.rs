//! # tilecat-core: Pure Business Logic for the Tile SKU Catalog
//!
//! This crate is the **heart** of tilecat. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       tilecat Architecture                          │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                      CLI (apps/cli)                           │  │
//! │  │    add ──► list ──► show ──► delete ──► add-images ──► …      │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │               ★ tilecat-core (THIS CRATE) ★                   │  │
//! │  │                                                               │  │
//! │  │  ┌─────────┐ ┌───────┐ ┌──────────┐ ┌────────────┐ ┌───────┐ │  │
//! │  │  │ catalog │ │ codes │ │ sequence │ │ validation │ │naming │ │  │
//! │  │  │ brands  │ │ SKU   │ │ next per │ │ field      │ │ word  │ │  │
//! │  │  │ sizes   │ │ EAN13 │ │ (brand,  │ │ rules      │ │ lists │ │  │
//! │  │  │ surface │ │ bars  │ │  size)   │ │            │ │       │ │  │
//! │  │  └─────────┘ └───────┘ └──────────┘ └────────────┘ └───────┘ │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO FILE SYSTEM • PURE FUNCTIONS                    │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │                 tilecat-store (Storage Layer)                 │  │
//! │  │        CSV ledgers, image folders, barcode/QR rendering       │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Fixed lookup tables (brands, sizes, surfaces, finish)
//! - [`codes`] - SKU and EAN-13 generation, barcode module patterns
//! - [`sequence`] - Per-(brand, size) sequence allocation
//! - [`validation`] - Field validation rules
//! - [`naming`] - Commercial name word lists and templates
//! - [`record`] - The 19-column product row shared by both ledgers
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: File system access is FORBIDDEN here
//! 3. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use tilecat_core::catalog::{Brand, Finish, TileSize};
//! use tilecat_core::codes::{build_ean13, build_sku};
//!
//! let brand = Brand::from_code("VE").unwrap();
//! let size = TileSize::from_label("60x60").unwrap();
//!
//! let sku = build_sku(brand, size, Finish::Matt, 1);
//! assert_eq!(sku, "VE60600001");
//!
//! let ean = build_ean13("893", "12345", brand.id, 1);
//! assert_eq!(ean.len(), 13);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod codes;
pub mod error;
pub mod naming;
pub mod record;
pub mod sequence;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tilecat_core::Brand` instead of
// `use tilecat_core::catalog::Brand`

pub use catalog::{Brand, Finish, Surface, TileSize};
pub use error::{CoreError, ValidationError};
pub use record::ProductRecord;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default GS1 country prefix for generated barcodes (893 = Vietnam).
///
/// Used when the operator does not supply one; overridable per product.
pub const DEFAULT_COUNTRY_PREFIX: &str = "893";

/// Default company prefix for generated barcodes.
///
/// Placeholder until the real GS1 company prefix is registered; the entry
/// form accepts any 4-9 digit value.
pub const DEFAULT_COMPANY_PREFIX: &str = "12345";

/// Default URL template encoded into the per-product QR label.
///
/// `{}` is replaced with the product's sequence code.
pub const DEFAULT_QR_URL_TEMPLATE: &str = "https://thangcuongtiles.com/{}";
