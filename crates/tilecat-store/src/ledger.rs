//! # Catalog Ledger
//!
//! The CatalogStore over the active/deleted CSV pair.
//!
//! ## Storage Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                   Reload / Mutate / Rewrite                         │
//! │                                                                     │
//! │  every read:   products.csv ──► Vec<ProductRecord> (whole file)     │
//! │  every write:  Vec<ProductRecord> ──► products.csv (whole file)     │
//! │                                                                     │
//! │  No partial updates, no transactions, no row-level locking.         │
//! │  One interactive user; two processes would race and that is an      │
//! │  accepted limit of the tool.                                        │
//! │                                                                     │
//! │  delete(sku):  row appended to deleted_products.csv, then removed   │
//! │                from products.csv. No hard delete, no undo.          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Best-Effort Loading
//! Rows that fail to parse are skipped with a warning rather than failing
//! the load; missing cells default to empty strings. A half-broken catalog
//! stays browsable.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use tilecat_core::catalog::{Finish, Surface};
use tilecat_core::record::COLUMNS;
use tilecat_core::sequence::{format_sequence, next_sequence};
use tilecat_core::ProductRecord;

// =============================================================================
// Catalog Store
// =============================================================================

/// Store over the two product ledgers and the images root.
///
/// ## Usage
/// ```rust,ignore
/// let store = CatalogStore::open(data_dir.join("products.csv"),
///                                data_dir.join("deleted_products.csv"),
///                                data_dir.join("images"))?;
///
/// let sp = store.next_sp_code("VE", "6060")?;
/// store.insert(record)?;
/// ```
#[derive(Debug, Clone)]
pub struct CatalogStore {
    active_path: PathBuf,
    deleted_path: PathBuf,
    images_root: PathBuf,
}

impl CatalogStore {
    /// Opens the store, creating empty ledgers (header only) and the images
    /// root when they do not exist yet.
    pub fn open(
        active_path: impl Into<PathBuf>,
        deleted_path: impl Into<PathBuf>,
        images_root: impl Into<PathBuf>,
    ) -> StoreResult<Self> {
        let store = CatalogStore {
            active_path: active_path.into(),
            deleted_path: deleted_path.into(),
            images_root: images_root.into(),
        };
        store.ensure_storage()?;
        Ok(store)
    }

    /// Creates missing ledger files and the images directory.
    fn ensure_storage(&self) -> StoreResult<()> {
        fs::create_dir_all(&self.images_root)?;
        for path in [&self.active_path, &self.deleted_path] {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            if !path.is_file() {
                debug!(path = %path.display(), "Creating empty ledger");
                write_ledger(path, &[])?;
            }
        }
        Ok(())
    }

    /// Root of the per-SKU image tree.
    pub fn images_root(&self) -> &Path {
        &self.images_root
    }

    /// Image folder for one SKU (not created here).
    pub fn sku_dir(&self, sku: &str) -> PathBuf {
        self.images_root.join(sku)
    }

    // -------------------------------------------------------------------------
    // Loading
    // -------------------------------------------------------------------------

    /// Loads the full active ledger.
    pub fn load_active(&self) -> StoreResult<Vec<ProductRecord>> {
        read_ledger(&self.active_path)
    }

    /// Loads the full deleted ledger.
    pub fn load_deleted(&self) -> StoreResult<Vec<ProductRecord>> {
        read_ledger(&self.deleted_path)
    }

    /// Finds an active product by SKU.
    pub fn find(&self, sku: &str) -> StoreResult<Option<ProductRecord>> {
        Ok(self.load_active()?.into_iter().find(|r| r.sku == sku))
    }

    /// Finds an active product by SKU, turning a miss into a typed error.
    pub fn require(&self, sku: &str) -> StoreResult<ProductRecord> {
        self.find(sku)?.ok_or_else(|| StoreError::NotFound {
            sku: sku.to_string(),
        })
    }

    /// Lists active products matching a filter, in ledger order.
    pub fn filter(&self, filter: &ProductFilter) -> StoreResult<Vec<ProductRecord>> {
        let records = self.load_active()?;
        let total = records.len();
        let matched: Vec<ProductRecord> =
            records.into_iter().filter(|r| filter.matches(r)).collect();
        debug!(total, matched = matched.len(), "Filtered active ledger");
        Ok(matched)
    }

    // -------------------------------------------------------------------------
    // Mutation (whole-file rewrite)
    // -------------------------------------------------------------------------

    /// Appends a new product to the active ledger.
    ///
    /// ## Errors
    /// [`StoreError::DuplicateSku`] when the SKU is already active. Deleted
    /// products do not block re-use of their SKU.
    pub fn insert(&self, record: ProductRecord) -> StoreResult<()> {
        debug!(sku = %record.sku, "Inserting product");

        let mut records = self.load_active()?;
        if records.iter().any(|r| r.sku == record.sku) {
            return Err(StoreError::DuplicateSku { sku: record.sku });
        }
        records.push(record);
        write_ledger(&self.active_path, &records)
    }

    /// Mutates one active product in place and rewrites the ledger.
    ///
    /// Returns the updated record.
    pub fn update<F>(&self, sku: &str, mutate: F) -> StoreResult<ProductRecord>
    where
        F: FnOnce(&mut ProductRecord),
    {
        let mut records = self.load_active()?;
        let record = records
            .iter_mut()
            .find(|r| r.sku == sku)
            .ok_or_else(|| StoreError::NotFound {
                sku: sku.to_string(),
            })?;

        mutate(record);
        let updated = record.clone();
        write_ledger(&self.active_path, &records)?;
        Ok(updated)
    }

    /// Moves a product from the active ledger to the deleted ledger.
    ///
    /// The full row is appended to the deleted ledger first, so a failure
    /// between the two writes can duplicate the row but never lose it.
    /// Returns the moved record.
    pub fn delete(&self, sku: &str) -> StoreResult<ProductRecord> {
        debug!(sku = %sku, "Deleting product");

        let mut records = self.load_active()?;
        let index = records
            .iter()
            .position(|r| r.sku == sku)
            .ok_or_else(|| StoreError::NotFound {
                sku: sku.to_string(),
            })?;
        let removed = records.remove(index);

        let mut deleted = self.load_deleted()?;
        deleted.push(removed.clone());
        write_ledger(&self.deleted_path, &deleted)?;
        write_ledger(&self.active_path, &records)?;

        Ok(removed)
    }

    // -------------------------------------------------------------------------
    // Sequence Allocation
    // -------------------------------------------------------------------------

    /// Next 3-digit SPCode for a (brand, size) pair, scanned over active
    /// products only.
    ///
    /// Pure read: nothing is reserved until a product is inserted, so
    /// calling this twice without saving returns the same value.
    pub fn next_sp_code(&self, brand_code: &str, size_code: &str) -> StoreResult<String> {
        let records = self.load_active()?;
        let existing = records
            .iter()
            .filter(|r| r.brand_code == brand_code && r.size_code == size_code)
            .map(|r| r.sp_code.as_str());
        let next = next_sequence(brand_code, size_code, existing)?;
        Ok(format_sequence(next))
    }
}

// =============================================================================
// Product Filter
// =============================================================================

/// Viewer-style filter over active products. All criteria are ANDed;
/// `None` means "any".
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Case-insensitive substring matched against every cell.
    pub query: Option<String>,
    /// Exact brand code.
    pub brand: Option<String>,
    /// Exact size label.
    pub size: Option<String>,
    /// Surface flag that must be present.
    pub surface: Option<Surface>,
    /// Matt/polished selector.
    pub finish: Option<Finish>,
}

impl ProductFilter {
    /// True when the record passes every set criterion.
    pub fn matches(&self, record: &ProductRecord) -> bool {
        if let Some(brand) = &self.brand {
            if record.brand_code != *brand {
                return false;
            }
        }
        if let Some(size) = &self.size {
            if record.size_label != *size {
                return false;
            }
        }
        if let Some(surface) = self.surface {
            let label = surface.label().to_lowercase();
            if !record.surface_label.to_lowercase().contains(&label) {
                return false;
            }
        }
        if let Some(finish) = self.finish {
            if record.matt_polished != finish.digit().to_string() {
                return false;
            }
        }
        if let Some(query) = &self.query {
            let query = query.trim();
            if !query.is_empty() && !record.matches_query(query) {
                return false;
            }
        }
        true
    }
}

// =============================================================================
// Ledger I/O
// =============================================================================

/// Reads one ledger file, skipping rows that fail to parse.
fn read_ledger(path: &Path) -> StoreResult<Vec<ProductRecord>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    let mut records = Vec::new();
    for (line, result) in reader.deserialize::<ProductRecord>().enumerate() {
        match result {
            Ok(mut record) => {
                record.normalize_sp_code();
                records.push(record);
            }
            Err(err) => {
                warn!(path = %path.display(), line = line + 2, %err, "Skipping malformed ledger row");
            }
        }
    }
    Ok(records)
}

/// Rewrites one ledger file wholesale (header always present).
fn write_ledger(path: &Path, records: &[ProductRecord]) -> StoreResult<()> {
    // Header is written by hand so even an empty ledger carries the schema;
    // automatic headers are disabled to avoid writing it twice.
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store() -> (TempDir, CatalogStore) {
        let dir = TempDir::new().unwrap();
        let store = CatalogStore::open(
            dir.path().join("products.csv"),
            dir.path().join("deleted_products.csv"),
            dir.path().join("images"),
        )
        .unwrap();
        (dir, store)
    }

    fn sample(sku: &str, brand: &str, size_code: &str, sp: &str) -> ProductRecord {
        ProductRecord {
            timestamp: "2026-01-05 10:00:00".to_string(),
            brand_code: brand.to_string(),
            brand_name: "Vesta".to_string(),
            brand_id: "0".to_string(),
            size_label: "60x60".to_string(),
            size_code: size_code.to_string(),
            matt_polished: "0".to_string(),
            sp_code: sp.to_string(),
            sku: sku.to_string(),
            commercial_name: "Lux White Marble".to_string(),
            faces: "1".to_string(),
            country_prefix: "893".to_string(),
            company_prefix: "12345".to_string(),
            ean13: "8931234500016".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_open_creates_ledgers_with_header() {
        let (dir, _store) = test_store();

        let contents = fs::read_to_string(dir.path().join("products.csv")).unwrap();
        let header = contents.lines().next().unwrap();
        assert_eq!(header, COLUMNS.join(","));
        assert!(dir.path().join("deleted_products.csv").is_file());
        assert!(dir.path().join("images").is_dir());
    }

    #[test]
    fn test_insert_and_reload() {
        let (_dir, store) = test_store();
        store.insert(sample("VE60600001", "VE", "6060", "001")).unwrap();

        let records = store.load_active().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sku, "VE60600001");
        assert_eq!(records[0].commercial_name, "Lux White Marble");
    }

    #[test]
    fn test_insert_rejects_duplicate_sku() {
        let (_dir, store) = test_store();
        store.insert(sample("VE60600001", "VE", "6060", "001")).unwrap();

        let err = store
            .insert(sample("VE60600001", "VE", "6060", "001"))
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateSku { .. }));

        // The rejected save must not have touched the ledger
        assert_eq!(store.load_active().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_moves_row_to_deleted_ledger() {
        let (_dir, store) = test_store();
        let record = sample("VE60600001", "VE", "6060", "001");
        store.insert(record.clone()).unwrap();

        let removed = store.delete("VE60600001").unwrap();
        assert_eq!(removed, record);

        assert!(store.load_active().unwrap().is_empty());
        let deleted = store.load_deleted().unwrap();
        assert_eq!(deleted.len(), 1);
        assert_eq!(deleted[0], record);
    }

    #[test]
    fn test_delete_missing_sku() {
        let (_dir, store) = test_store();
        let err = store.delete("VE60600001").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn test_update_appends_note() {
        let (_dir, store) = test_store();
        store.insert(sample("VE60600001", "VE", "6060", "001")).unwrap();

        let updated = store
            .update("VE60600001", |r| r.append_note("first batch arrived"))
            .unwrap();
        assert_eq!(updated.notes, "first batch arrived");

        let reloaded = store.require("VE60600001").unwrap();
        assert_eq!(reloaded.notes, "first batch arrived");
    }

    #[test]
    fn test_next_sp_code_empty_pair() {
        let (_dir, store) = test_store();
        assert_eq!(store.next_sp_code("VE", "6060").unwrap(), "001");
    }

    #[test]
    fn test_next_sp_code_is_max_plus_one_and_pure() {
        let (_dir, store) = test_store();
        store.insert(sample("VE60600001", "VE", "6060", "001")).unwrap();
        store.insert(sample("VE60600002", "VE", "6060", "002")).unwrap();
        // Different size does not interfere
        store.insert(sample("VE80800005", "VE", "8080", "005")).unwrap();

        assert_eq!(store.next_sp_code("VE", "6060").unwrap(), "003");
        // Allocation without a save has no side effect
        assert_eq!(store.next_sp_code("VE", "6060").unwrap(), "003");
        assert_eq!(store.next_sp_code("VE", "8080").unwrap(), "006");
        assert_eq!(store.next_sp_code("OM", "6060").unwrap(), "001");
    }

    #[test]
    fn test_deleted_mid_range_number_is_not_reused() {
        let (_dir, store) = test_store();
        store.insert(sample("VE60600001", "VE", "6060", "001")).unwrap();
        store.insert(sample("VE60600002", "VE", "6060", "002")).unwrap();

        store.delete("VE60600001").unwrap();
        // Allocation is max-of-active + 1, so 001 is not handed out again
        assert_eq!(store.next_sp_code("VE", "6060").unwrap(), "003");
    }

    #[test]
    fn test_malformed_row_is_skipped() {
        let (dir, store) = test_store();
        store.insert(sample("VE60600001", "VE", "6060", "001")).unwrap();

        // Append a row whose cells are not valid UTF-8
        let path = dir.path().join("products.csv");
        let mut contents = fs::read(&path).unwrap();
        contents.extend_from_slice(&[0xFF, 0xFE, b',', 0xFF, b'\n']);
        fs::write(&path, contents).unwrap();

        let records = store.load_active().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sku, "VE60600001");
    }

    #[test]
    fn test_sp_code_re_padded_on_load() {
        let (dir, store) = test_store();
        let mut record = sample("VE60600007", "VE", "6060", "7");
        record.normalize_sp_code();
        assert_eq!(record.sp_code, "007");

        // Write an un-padded value straight into the file
        let mut raw = sample("VE60600009", "VE", "6060", "9");
        raw.sp_code = "9".to_string();
        let mut records = store.load_active().unwrap();
        records.push(raw);
        super::write_ledger(&dir.path().join("products.csv"), &records).unwrap();

        let loaded = store.load_active().unwrap();
        assert_eq!(loaded.last().unwrap().sp_code, "009");
    }

    #[test]
    fn test_filter_criteria() {
        let (_dir, store) = test_store();
        let mut a = sample("VE60600001", "VE", "6060", "001");
        a.surface_label = "White Body, Crystal Glaze".to_string();
        a.surface_code = "WC".to_string();
        let mut b = sample("OM60601001", "OM", "6060", "001");
        b.brand_name = "One Max".to_string();
        b.brand_id = "1".to_string();
        b.matt_polished = "1".to_string();
        store.insert(a).unwrap();
        store.insert(b).unwrap();

        let by_brand = store
            .filter(&ProductFilter {
                brand: Some("VE".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(by_brand.len(), 1);
        assert_eq!(by_brand[0].sku, "VE60600001");

        let by_surface = store
            .filter(&ProductFilter {
                surface: Some(Surface::CrystalGlaze),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(by_surface.len(), 1);

        let by_finish = store
            .filter(&ProductFilter {
                finish: Some(Finish::Polished),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(by_finish.len(), 1);
        assert_eq!(by_finish[0].sku, "OM60601001");

        let by_query = store
            .filter(&ProductFilter {
                query: Some("one max".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(by_query.len(), 1);

        let all = store.filter(&ProductFilter::default()).unwrap();
        assert_eq!(all.len(), 2);
    }
}
