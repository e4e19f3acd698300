//! # Product Record
//!
//! The single entity of the system: one row of the 19-column schema shared
//! by the active and deleted ledgers.
//!
//! ## Why Every Field Is a String
//! The ledgers are best-effort flat files: malformed cells default to empty
//! strings rather than failing the load (a half-broken catalog is still
//! browsable). Typed views (face count, finish, image list) are provided by
//! accessor methods; the generators work on the typed catalog structs and
//! only the finished values land here.
//!
//! ## Lifecycle
//! ```text
//! entry flow ──► ProductRecord ──► active ledger
//!                     │
//!        append images / append note (mutated in place, row rewritten)
//!                     │
//!                  delete ──► full row copied to deleted ledger,
//!                             removed from active (no hard delete)
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::Finish;

/// Separator between image paths in the ImagePaths column.
pub const IMAGE_PATH_SEPARATOR: char = ';';

/// Separator used when appending to the Notes column.
pub const NOTE_SEPARATOR: &str = "; ";

/// The fixed column set, in ledger order. The serde field order below must
/// stay in sync; this constant exists for header checks and tests.
pub const COLUMNS: [&str; 19] = [
    "Timestamp",
    "BrandCode",
    "BrandName",
    "BrandID",
    "SizeLabel",
    "SizeCode",
    "SurfaceLabel",
    "SurfaceCode",
    "MattPolished",
    "SPCode",
    "SKU",
    "CommercialName",
    "Faces",
    "Batch",
    "CountryPrefix",
    "CompanyPrefix",
    "EAN13",
    "ImagePaths",
    "Notes",
];

/// One product row. Field order is the ledger column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Creation time, "YYYY-MM-DD HH:MM:SS".
    #[serde(rename = "Timestamp", default)]
    pub timestamp: String,

    /// Brand code from the fixed table (e.g. "VE").
    #[serde(rename = "BrandCode", default)]
    pub brand_code: String,

    /// Brand display name (e.g. "Vesta").
    #[serde(rename = "BrandName", default)]
    pub brand_name: String,

    /// Brand numeric id used in the barcode base.
    #[serde(rename = "BrandID", default)]
    pub brand_id: String,

    /// Size label (e.g. "60x120").
    #[serde(rename = "SizeLabel", default)]
    pub size_label: String,

    /// 4-digit size code (e.g. "6120").
    #[serde(rename = "SizeCode", default)]
    pub size_code: String,

    /// Comma-joined surface labels.
    #[serde(rename = "SurfaceLabel", default)]
    pub surface_label: String,

    /// Concatenated single-letter surface codes.
    #[serde(rename = "SurfaceCode", default)]
    pub surface_code: String,

    /// Finish digit: "0" matt, "1" polished.
    #[serde(rename = "MattPolished", default)]
    pub matt_polished: String,

    /// 3-digit zero-padded sequence within (brand, size).
    #[serde(rename = "SPCode", default)]
    pub sp_code: String,

    /// Derived SKU; unique among active products.
    #[serde(rename = "SKU", default)]
    pub sku: String,

    /// Free-text commercial name.
    #[serde(rename = "CommercialName", default)]
    pub commercial_name: String,

    /// Positive face count, stored as text.
    #[serde(rename = "Faces", default)]
    pub faces: String,

    /// Optional lot/batch code (e.g. "LOT2026001").
    #[serde(rename = "Batch", default)]
    pub batch: String,

    /// Country prefix used for this product's barcode.
    #[serde(rename = "CountryPrefix", default)]
    pub country_prefix: String,

    /// Company prefix used for this product's barcode.
    #[serde(rename = "CompanyPrefix", default)]
    pub company_prefix: String,

    /// Derived 13-digit barcode number.
    #[serde(rename = "EAN13", default)]
    pub ean13: String,

    /// Semicolon-joined image file paths.
    #[serde(rename = "ImagePaths", default)]
    pub image_paths: String,

    /// Free-text notes, appended with "; ".
    #[serde(rename = "Notes", default)]
    pub notes: String,
}

impl ProductRecord {
    /// Image paths as a list, empty segments dropped.
    pub fn images(&self) -> Vec<&str> {
        self.image_paths
            .split(IMAGE_PATH_SEPARATOR)
            .filter(|p| !p.trim().is_empty())
            .collect()
    }

    /// Appends an image path unless it is already present.
    pub fn push_image(&mut self, path: &str) {
        if self.images().contains(&path) {
            return;
        }
        if self.image_paths.is_empty() {
            self.image_paths = path.to_string();
        } else {
            self.image_paths.push(IMAGE_PATH_SEPARATOR);
            self.image_paths.push_str(path);
        }
    }

    /// Removes an image path. Returns false when the path was not listed.
    pub fn remove_image(&mut self, path: &str) -> bool {
        let mut images = self.images();
        let before = images.len();
        images.retain(|p| *p != path);
        if images.len() == before {
            return false;
        }
        self.image_paths = images.join(&IMAGE_PATH_SEPARATOR.to_string());
        true
    }

    /// Appends to the notes field with the "; " separator.
    pub fn append_note(&mut self, note: &str) {
        if self.notes.is_empty() {
            self.notes = note.to_string();
        } else {
            self.notes.push_str(NOTE_SEPARATOR);
            self.notes.push_str(note);
        }
    }

    /// Face count as a number; unparsable or missing counts as 1.
    pub fn face_count(&self) -> u32 {
        self.faces.trim().parse().unwrap_or(1).max(1)
    }

    /// Finish selector, when the stored digit is valid.
    pub fn finish(&self) -> Option<Finish> {
        Finish::from_digit(&self.matt_polished)
    }

    /// Re-pads a numeric SPCode to 3 digits. Non-numeric values are left
    /// alone, matching the load path's best-effort rules.
    pub fn normalize_sp_code(&mut self) {
        let trimmed = self.sp_code.trim();
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = trimmed.parse::<u32>() {
                self.sp_code = format!("{n:03}");
            }
        }
    }

    /// True when the space-joined row contains the query, case-insensitive.
    /// This is the free-text filter of the viewer; joining the cells lets a
    /// query span adjacent columns (e.g. "Vesta 60x60").
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        let row = [
            self.timestamp.as_str(),
            self.brand_code.as_str(),
            self.brand_name.as_str(),
            self.brand_id.as_str(),
            self.size_label.as_str(),
            self.size_code.as_str(),
            self.surface_label.as_str(),
            self.surface_code.as_str(),
            self.matt_polished.as_str(),
            self.sp_code.as_str(),
            self.sku.as_str(),
            self.commercial_name.as_str(),
            self.faces.as_str(),
            self.batch.as_str(),
            self.country_prefix.as_str(),
            self.company_prefix.as_str(),
            self.ean13.as_str(),
            self.image_paths.as_str(),
            self.notes.as_str(),
        ]
        .join(" ");
        row.to_lowercase().contains(&q)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_images_split_and_push() {
        let mut rec = ProductRecord::default();
        assert!(rec.images().is_empty());

        rec.push_image("images/VE60600001/001_face01_01.png");
        rec.push_image("images/VE60600001/001_face01_02.png");
        assert_eq!(rec.images().len(), 2);

        // Duplicate paths are ignored
        rec.push_image("images/VE60600001/001_face01_01.png");
        assert_eq!(rec.images().len(), 2);
    }

    #[test]
    fn test_remove_image() {
        let mut rec = ProductRecord {
            image_paths: "a.png;b.png;c.png".to_string(),
            ..Default::default()
        };
        assert!(rec.remove_image("b.png"));
        assert_eq!(rec.image_paths, "a.png;c.png");
        assert!(!rec.remove_image("missing.png"));
    }

    #[test]
    fn test_append_note() {
        let mut rec = ProductRecord::default();
        rec.append_note("first delivery");
        assert_eq!(rec.notes, "first delivery");
        rec.append_note("glaze updated");
        assert_eq!(rec.notes, "first delivery; glaze updated");
    }

    #[test]
    fn test_face_count_defaults_to_one() {
        let mut rec = ProductRecord::default();
        assert_eq!(rec.face_count(), 1);
        rec.faces = "6".to_string();
        assert_eq!(rec.face_count(), 6);
        rec.faces = "junk".to_string();
        assert_eq!(rec.face_count(), 1);
    }

    #[test]
    fn test_normalize_sp_code() {
        let mut rec = ProductRecord {
            sp_code: "7".to_string(),
            ..Default::default()
        };
        rec.normalize_sp_code();
        assert_eq!(rec.sp_code, "007");

        rec.sp_code = "abc".to_string();
        rec.normalize_sp_code();
        assert_eq!(rec.sp_code, "abc");
    }

    #[test]
    fn test_matches_query_any_cell() {
        let rec = ProductRecord {
            sku: "VE60600001".to_string(),
            commercial_name: "Gạch porcelain kích thước 60x60 Lux White Marble".to_string(),
            ..Default::default()
        };
        assert!(rec.matches_query("lux white"));
        assert!(rec.matches_query("ve6060"));
        assert!(!rec.matches_query("granite"));
    }

    #[test]
    fn test_matches_query_spans_adjacent_cells() {
        let rec = ProductRecord {
            brand_code: "VE".to_string(),
            brand_name: "Vesta".to_string(),
            ..Default::default()
        };
        // Cells are joined with spaces, so a query may bridge two columns
        assert!(rec.matches_query("ve vesta"));
        assert!(!rec.matches_query("vevesta"));
    }
}
