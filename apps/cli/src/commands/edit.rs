//! # Post-entry edits
//!
//! `add-images`, `add-note`, and `remove-image`. Each edit reloads the
//! active ledger, mutates the one row, and rewrites the whole file.

use std::fs;
use std::path::PathBuf;

use tracing::warn;

use tilecat_store::images;

use crate::config::AppConfig;
use crate::error::CliResult;

/// Appends photos to an existing product, continuing the stored face
/// numbering so file names never collide.
pub fn add_images(config: &AppConfig, sku: &str, sources: &[PathBuf]) -> CliResult<()> {
    let store = config.open_store()?;
    let record = store.require(sku)?;

    // Continue the ordinal after the last stored face file; barcode and
    // QR entries are not faces.
    let start_index = record
        .images()
        .iter()
        .filter(|p| p.contains("_face"))
        .count() as u32
        + 1;

    let stored = images::ingest_faces(
        &store.sku_dir(sku),
        &record.sp_code,
        record.face_count(),
        start_index,
        sources,
        config.max_image_dim,
    )?;

    if stored.is_empty() {
        println!("No images stored.");
        return Ok(());
    }

    let paths: Vec<String> = stored
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect();
    store.update(sku, |r| {
        for path in &paths {
            r.push_image(path);
        }
    })?;

    println!("Stored {} image(s) for {sku}", paths.len());
    for path in &paths {
        println!("  {path}");
    }
    Ok(())
}

/// Appends a note to a product, separated from existing text with "; ".
pub fn add_note(config: &AppConfig, sku: &str, note: &str) -> CliResult<()> {
    let store = config.open_store()?;
    let updated = store.update(sku, |r| r.append_note(note))?;
    println!("Notes for {sku}: {}", updated.notes);
    Ok(())
}

/// Drops one image path from a product and deletes the file. A missing
/// file is only a warning; the ledger entry still goes away.
pub fn remove_image(config: &AppConfig, sku: &str, path: &str) -> CliResult<()> {
    let store = config.open_store()?;
    let record = store.require(sku)?;

    if !record.images().contains(&path) {
        println!("{sku} has no image {path}");
        return Ok(());
    }

    if let Err(e) = fs::remove_file(path) {
        warn!(path, error = %e, "Could not delete image file");
    }

    store.update(sku, |r| {
        r.remove_image(path);
    })?;
    println!("Removed {path} from {sku}");
    Ok(())
}
