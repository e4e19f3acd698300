//! # `tilecat show`
//!
//! Prints one product in full, column by column, followed by the stored
//! image list with per-file existence checks.

use std::path::Path;

use crate::config::AppConfig;
use crate::error::CliResult;

pub fn run(config: &AppConfig, sku: &str) -> CliResult<()> {
    let store = config.open_store()?;
    let record = store.require(sku)?;

    println!("SKU             {}", record.sku);
    println!("SPCode          {}", record.sp_code);
    println!("Created         {}", record.timestamp);
    println!(
        "Brand           {} ({}, id {})",
        record.brand_name, record.brand_code, record.brand_id
    );
    println!(
        "Size            {} (code {})",
        record.size_label, record.size_code
    );
    println!(
        "Surfaces        {} [{}]",
        record.surface_label, record.surface_code
    );
    let finish = match record.finish() {
        Some(f) => f.label().to_string(),
        None => format!("? ({})", record.matt_polished),
    };
    println!("Finish          {finish}");
    println!("Name            {}", record.commercial_name);
    println!("Faces           {}", record.face_count());
    println!("Batch           {}", record.batch);
    println!(
        "Barcode         {} (prefixes {} / {})",
        record.ean13, record.country_prefix, record.company_prefix
    );
    println!("Notes           {}", record.notes);

    let images = record.images();
    if images.is_empty() {
        println!("Images          (none)");
    } else {
        println!("Images          {} file(s)", images.len());
        for path in images {
            let marker = if Path::new(path).exists() { " " } else { "!" };
            println!("  {marker} {path}");
        }
    }
    Ok(())
}
