//! # Image Pipeline
//!
//! Image ingest for product photos plus barcode/QR rendering.
//!
//! ## Ingest Decision Tree
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  source image                                                       │
//! │       │                                                             │
//! │       ├── longest side > max dim ──► downscale (Lanczos3, aspect    │
//! │       │                              preserved) ──► save as PNG     │
//! │       │                                   │                         │
//! │       │                              save failed? ──► plain copy    │
//! │       │                                                             │
//! │       ├── fits ──► plain copy, original bytes and extension         │
//! │       │                                                             │
//! │       └── cannot decode ──► plain copy                              │
//! │                                  │                                  │
//! │                             copy failed? ──► skip (None, warn)      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ingest is best-effort end to end: a photo that cannot be stored is
//! skipped, never fatal. Barcode/QR rendering returns typed errors, but
//! the entry flow treats those as "omit the file" too.

use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{GrayImage, Luma};
use qrcode::QrCode;
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use tilecat_core::codes::{ean13_modules, EAN13_MODULES};

/// Default longest-side cap for stored photos, in pixels.
pub const DEFAULT_MAX_DIMENSION: u32 = 2000;

// Barcode rendering geometry.
const MODULE_WIDTH: u32 = 3;
const QUIET_MODULES: u32 = 9;
const BAR_HEIGHT: u32 = 120;

// Human-readable digit line under the bars: 5x7 glyphs, scaled.
const GLYPH_SCALE: u32 = 2;
const GLYPH_ADVANCE: u32 = (5 + 2) * GLYPH_SCALE;
const TEXT_PAD: u32 = 4;
const TEXT_BAND: u32 = 7 * GLYPH_SCALE + 2 * TEXT_PAD;

/// 5x7 bitmaps for '0'..='9', one 5-bit row mask per line, MSB left.
const DIGIT_GLYPHS: [[u8; 7]; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
];

// =============================================================================
// File Naming
// =============================================================================

/// File stem for an ingested face photo: `{spcode}_face{FF}_{II}`.
///
/// The face index cycles over the product's face count; the ordinal is the
/// running photo number.
pub fn face_file_stem(sp_code: &str, face_index: u32, ordinal: u32) -> String {
    format!("{sp_code}_face{face_index:02}_{ordinal:02}")
}

/// File name of the rendered barcode image for a product.
pub fn barcode_file_name(sp_code: &str) -> String {
    format!("{sp_code}_barcode.png")
}

/// File name of the rendered QR image for a product.
pub fn qr_file_name(sp_code: &str) -> String {
    format!("{sp_code}_qrcode.png")
}

// =============================================================================
// Ingest
// =============================================================================

/// Stores one source image under `dst_base` (path without extension).
///
/// Oversize images are downscaled so the longest side equals `max_dim` and
/// re-encoded as PNG; images at or below the cap are copied byte-identical
/// with their original extension. Returns the stored path, or `None` when
/// every fallback failed (the caller skips the photo).
pub fn ingest_image(src: &Path, dst_base: &Path, max_dim: u32) -> Option<PathBuf> {
    match image::open(src) {
        Ok(img) if img.width().max(img.height()) > max_dim => {
            let resized = img.resize(max_dim, max_dim, FilterType::Lanczos3);
            let dst = dst_base.with_extension("png");
            match resized.save(&dst) {
                Ok(()) => {
                    debug!(src = %src.display(), dst = %dst.display(), "Downscaled image");
                    Some(dst)
                }
                Err(err) => {
                    warn!(src = %src.display(), %err, "Resized save failed, copying original");
                    plain_copy(src, dst_base)
                }
            }
        }
        Ok(_) => plain_copy(src, dst_base),
        Err(err) => {
            warn!(src = %src.display(), %err, "Image decode failed, copying original");
            plain_copy(src, dst_base)
        }
    }
}

/// Copies the source unchanged, keeping its extension. `None` on failure.
fn plain_copy(src: &Path, dst_base: &Path) -> Option<PathBuf> {
    let ext = src
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let dst = dst_base.with_extension(ext);
    match fs::copy(src, &dst) {
        Ok(_) => Some(dst),
        Err(err) => {
            warn!(src = %src.display(), %err, "Image copy failed, skipping");
            None
        }
    }
}

/// Ingests a batch of face photos into a SKU folder.
///
/// `start_index` is the 1-based number of the first photo (continuing the
/// count when appending to an existing product); the face index cycles over
/// `face_count`. Missing source files are skipped. Returns the stored
/// paths.
pub fn ingest_faces(
    sku_dir: &Path,
    sp_code: &str,
    face_count: u32,
    start_index: u32,
    sources: &[PathBuf],
    max_dim: u32,
) -> StoreResult<Vec<PathBuf>> {
    fs::create_dir_all(sku_dir)?;

    let face_count = face_count.max(1);
    let mut stored = Vec::new();
    for (offset, src) in sources.iter().enumerate() {
        let index = start_index + offset as u32;
        if !src.is_file() {
            warn!(src = %src.display(), "Source image does not exist, skipping");
            continue;
        }
        let face_index = (index - 1) % face_count + 1;
        let dst_base = sku_dir.join(face_file_stem(sp_code, face_index, index));
        if let Some(path) = ingest_image(src, &dst_base, max_dim) {
            stored.push(path);
        }
    }
    Ok(stored)
}

// =============================================================================
// Barcode / QR Rendering
// =============================================================================

/// Renders the EAN-13 bar pattern to a PNG, with the thirteen digits
/// printed underneath.
pub fn render_barcode(ean13: &str, dest: &Path) -> StoreResult<()> {
    let modules = ean13_modules(ean13)?;

    let width = (EAN13_MODULES as u32 + 2 * QUIET_MODULES) * MODULE_WIDTH;
    let mut img = GrayImage::from_pixel(width, BAR_HEIGHT + TEXT_BAND, Luma([255u8]));
    for (i, dark) in modules.iter().enumerate() {
        if !dark {
            continue;
        }
        let x0 = (QUIET_MODULES + i as u32) * MODULE_WIDTH;
        for x in x0..x0 + MODULE_WIDTH {
            for y in 0..BAR_HEIGHT {
                img.put_pixel(x, y, Luma([0u8]));
            }
        }
    }

    // Digit line, centered under the bars. The number is all digits here;
    // ean13_modules already verified it.
    let text_width = ean13.len() as u32 * GLYPH_ADVANCE;
    let mut x = width.saturating_sub(text_width) / 2;
    for b in ean13.bytes() {
        draw_digit(&mut img, b - b'0', x, BAR_HEIGHT + TEXT_PAD);
        x += GLYPH_ADVANCE;
    }

    img.save(dest)?;
    debug!(ean13, dest = %dest.display(), "Rendered barcode");
    Ok(())
}

/// Paints one scaled 5x7 digit glyph with its top-left corner at (x0, y0).
fn draw_digit(img: &mut GrayImage, digit: u8, x0: u32, y0: u32) {
    let glyph = &DIGIT_GLYPHS[digit as usize % 10];
    for (row, bits) in glyph.iter().enumerate() {
        for col in 0..5u32 {
            if bits >> (4 - col) & 1 == 0 {
                continue;
            }
            for dy in 0..GLYPH_SCALE {
                for dx in 0..GLYPH_SCALE {
                    let x = x0 + col * GLYPH_SCALE + dx;
                    let y = y0 + row as u32 * GLYPH_SCALE + dy;
                    if x < img.width() && y < img.height() {
                        img.put_pixel(x, y, Luma([0u8]));
                    }
                }
            }
        }
    }
}

/// Renders a QR code for the given payload to a PNG.
pub fn render_qr(payload: &str, dest: &Path) -> StoreResult<()> {
    let code = QrCode::new(payload.as_bytes()).map_err(|e| StoreError::Qr(e.to_string()))?;
    let img = code
        .render::<Luma<u8>>()
        .module_dimensions(6, 6)
        .build();
    img.save(dest)?;
    debug!(payload, dest = %dest.display(), "Rendered QR code");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use tempfile::TempDir;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        RgbImage::from_pixel(width, height, image::Rgb([120u8, 40, 200]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn test_oversize_image_downscaled_to_threshold() {
        let dir = TempDir::new().unwrap();
        let src = write_png(dir.path(), "big.png", 64, 32);

        let stored = ingest_image(&src, &dir.path().join("out"), 16).unwrap();
        assert_eq!(stored, dir.path().join("out.png"));

        let result = image::open(&stored).unwrap();
        // Longest side equals the threshold, aspect preserved
        assert_eq!((result.width(), result.height()), (16, 8));
    }

    #[test]
    fn test_small_image_copied_byte_identical() {
        let dir = TempDir::new().unwrap();
        let src = write_png(dir.path(), "small.png", 10, 6);

        let stored = ingest_image(&src, &dir.path().join("out"), 2000).unwrap();
        assert_eq!(fs::read(&src).unwrap(), fs::read(&stored).unwrap());
        assert_eq!(stored.extension().unwrap(), "png");
    }

    #[test]
    fn test_undecodable_image_falls_back_to_copy() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("junk.jpg");
        fs::write(&src, b"not an image at all").unwrap();

        let stored = ingest_image(&src, &dir.path().join("out"), 2000).unwrap();
        assert_eq!(fs::read(&src).unwrap(), fs::read(&stored).unwrap());
        assert_eq!(stored.extension().unwrap(), "jpg");
    }

    #[test]
    fn test_missing_source_is_skipped() {
        let dir = TempDir::new().unwrap();
        let stored = ingest_image(&dir.path().join("nope.png"), &dir.path().join("out"), 2000);
        assert!(stored.is_none());
    }

    #[test]
    fn test_ingest_faces_cycles_face_index() {
        let dir = TempDir::new().unwrap();
        let sources: Vec<PathBuf> = (0..3)
            .map(|i| write_png(dir.path(), &format!("src{i}.png"), 8, 8))
            .collect();

        let sku_dir = dir.path().join("images").join("VE60600001");
        let stored = ingest_faces(&sku_dir, "001", 2, 1, &sources, 2000).unwrap();

        let names: Vec<String> = stored
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "001_face01_01.png",
                "001_face02_02.png",
                "001_face01_03.png",
            ]
        );
    }

    #[test]
    fn test_ingest_faces_continues_numbering() {
        let dir = TempDir::new().unwrap();
        let src = write_png(dir.path(), "src.png", 8, 8);

        let sku_dir = dir.path().join("VE60600001");
        let stored = ingest_faces(&sku_dir, "001", 1, 3, &[src], 2000).unwrap();
        assert_eq!(
            stored[0].file_name().unwrap().to_string_lossy(),
            "001_face01_03.png"
        );
    }

    #[test]
    fn test_render_barcode() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("barcode.png");
        render_barcode("8931234500016", &dest).unwrap();

        let img = image::open(&dest).unwrap();
        let expected_width = (EAN13_MODULES as u32 + 2 * QUIET_MODULES) * MODULE_WIDTH;
        assert_eq!(img.width(), expected_width);
        assert_eq!(img.height(), BAR_HEIGHT + TEXT_BAND);
    }

    #[test]
    fn test_render_barcode_prints_digit_line() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("barcode.png");
        render_barcode("8931234500016", &dest).unwrap();

        // The band under the bars carries the printed digits
        let img = image::open(&dest).unwrap().to_luma8();
        let dark_below_bars = (0..img.width())
            .flat_map(|x| (BAR_HEIGHT..img.height()).map(move |y| (x, y)))
            .filter(|&(x, y)| img.get_pixel(x, y).0[0] == 0)
            .count();
        assert!(dark_below_bars > 0);
    }

    #[test]
    fn test_render_barcode_rejects_bad_number() {
        let dir = TempDir::new().unwrap();
        let err = render_barcode("123", &dir.path().join("barcode.png")).unwrap_err();
        assert!(matches!(err, StoreError::Core(_)));
    }

    #[test]
    fn test_render_qr() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("qr.png");
        render_qr("https://thangcuongtiles.com/001", &dest).unwrap();
        assert!(image::open(&dest).unwrap().width() > 0);
    }
}
