//! # tilecat-store: Flat-File Storage for the Tile SKU Catalog
//!
//! This crate provides disk access for tilecat: the two CSV product
//! ledgers and the per-SKU image folders.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        tilecat Data Flow                            │
//! │                                                                     │
//! │  CLI command (add / list / delete / …)                              │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                  tilecat-store (THIS CRATE)                   │  │
//! │  │                                                               │  │
//! │  │   ┌───────────────┐            ┌────────────────────────┐    │  │
//! │  │   │  CatalogStore │            │  images module         │    │  │
//! │  │   │  (ledger.rs)  │            │  (images.rs)           │    │  │
//! │  │   │               │            │                        │    │  │
//! │  │   │ reload whole  │            │ resize-or-copy ingest  │    │  │
//! │  │   │ file, mutate, │            │ barcode PNG            │    │  │
//! │  │   │ rewrite whole │            │ QR PNG                 │    │  │
//! │  │   └───────────────┘            └────────────────────────┘    │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │       │                                   │                         │
//! │       ▼                                   ▼                         │
//! │  products.csv                        images/<SKU>/                  │
//! │  deleted_products.csv                  001_face01_01.png            │
//! │                                        001_barcode.png              │
//! │                                        001_qrcode.png               │
//! │─────────────────────────────────────────────────────────────────────│
//! ```
//!
//! ## Module Organization
//!
//! - [`ledger`] - CatalogStore over the active/deleted CSV pair
//! - [`images`] - Image ingest pipeline and barcode/QR rendering
//! - [`error`] - Storage error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod images;
pub mod ledger;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use ledger::{CatalogStore, ProductFilter};
