//! # `tilecat add`
//!
//! Full product entry pipeline:
//!
//! ```text
//! resolve brand/size/finish/surfaces
//!        │
//!        ▼
//! validate faces, prefixes, batch, name
//!        │
//!        ▼
//! allocate SPCode ──► build SKU + EAN-13 ──► duplicate check
//!        │
//!        ▼
//! ingest photos, render barcode + QR under images/<SKU>/
//!        │
//!        ▼
//! append row to products.csv
//! ```
//!
//! Image failures after the codes are settled are non-fatal: the row is
//! saved anyway and a warning names the file that was skipped.

use std::path::PathBuf;

use chrono::Local;
use clap::Args;
use tracing::warn;

use tilecat_core::catalog::{surface_code_string, surface_label_string, Surface};
use tilecat_core::codes::{build_ean13, build_sku, qr_url};
use tilecat_core::record::ProductRecord;
use tilecat_core::{naming, validation, Brand, Finish, TileSize};
use tilecat_store::images::{self, barcode_file_name, qr_file_name};

use crate::config::AppConfig;
use crate::error::CliResult;

/// Arguments for product entry.
#[derive(Args)]
pub struct AddArgs {
    /// Brand code (VE, OM, GA, SA)
    #[arg(long)]
    pub brand: String,

    /// Size label (e.g. 60x60, 80x160)
    #[arg(long)]
    pub size: String,

    /// Surface type; repeat for multiple (label, slug, or letter code)
    #[arg(long = "surface")]
    pub surfaces: Vec<Surface>,

    /// Finish: matt or polished
    #[arg(long, default_value = "matt")]
    pub finish: Finish,

    /// Commercial base name (wrapped into the full Vietnamese name)
    #[arg(long)]
    pub name: String,

    /// Store the name exactly as given, without the size wrapper
    #[arg(long)]
    pub raw_name: bool,

    /// Number of distinct printed faces
    #[arg(long, default_value_t = 1)]
    pub faces: u32,

    /// Explicit 3-digit sequence instead of the next free one
    #[arg(long)]
    pub sp_code: Option<String>,

    /// Lot code, e.g. LOT2026001
    #[arg(long, default_value = "")]
    pub batch: String,

    /// GS1 country prefix override (2-3 digits)
    #[arg(long)]
    pub country_prefix: Option<String>,

    /// Company prefix override (4-9 digits)
    #[arg(long)]
    pub company_prefix: Option<String>,

    /// Free-text notes
    #[arg(long, default_value = "")]
    pub notes: String,

    /// Product photo; repeat for multiple
    #[arg(long = "image")]
    pub images: Vec<PathBuf>,
}

pub fn run(config: &AppConfig, args: AddArgs) -> CliResult<()> {
    let brand = Brand::require(&args.brand)?;
    let size = TileSize::require(&args.size)?;
    let finish = args.finish;

    validation::validate_faces(args.faces)?;
    validation::validate_batch(&args.batch)?;
    validation::validate_commercial_name(&args.name)?;

    let country = args
        .country_prefix
        .unwrap_or_else(|| config.country_prefix.clone());
    let company = args
        .company_prefix
        .unwrap_or_else(|| config.company_prefix.clone());
    validation::validate_country_prefix(&country)?;
    validation::validate_company_prefix(&company)?;

    let store = config.open_store()?;

    // Explicit SPCode is validated and re-padded; otherwise the next free
    // number for this (brand, size) pair is taken from the active ledger.
    let (sp_code, sequence) = match &args.sp_code {
        Some(given) => {
            let seq = validation::validate_sequence(given)?;
            (format!("{seq:03}"), seq)
        }
        None => {
            let code = store.next_sp_code(brand.code, size.code)?;
            let seq = validation::validate_sequence(&code)?;
            (code, seq)
        }
    };

    let sku = build_sku(brand, size, finish, sequence);
    let ean13 = build_ean13(&country, &company, brand.id, sequence);

    if store.find(&sku)?.is_some() {
        return Err(tilecat_store::StoreError::DuplicateSku { sku }.into());
    }

    let commercial_name = if args.raw_name {
        args.name.clone()
    } else {
        naming::full_name(size.label, &args.name)
    };

    // Images are stored under images/<SKU>/; failures here do not block
    // the ledger row.
    let sku_dir = store.sku_dir(&sku);
    let mut image_paths: Vec<String> = Vec::new();

    let stored = images::ingest_faces(
        &sku_dir,
        &sp_code,
        args.faces,
        1,
        &args.images,
        config.max_image_dim,
    )?;
    for path in &stored {
        image_paths.push(path.to_string_lossy().into_owned());
    }

    let barcode_path = sku_dir.join(barcode_file_name(&sp_code));
    match images::render_barcode(&ean13, &barcode_path) {
        Ok(()) => image_paths.push(barcode_path.to_string_lossy().into_owned()),
        Err(e) => warn!(sku = %sku, error = %e, "Barcode rendering failed, continuing"),
    }

    let qr_path = sku_dir.join(qr_file_name(&sp_code));
    match images::render_qr(&qr_url(&config.qr_url_template, &sp_code), &qr_path) {
        Ok(()) => image_paths.push(qr_path.to_string_lossy().into_owned()),
        Err(e) => warn!(sku = %sku, error = %e, "QR rendering failed, continuing"),
    }

    let record = ProductRecord {
        timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        brand_code: brand.code.to_string(),
        brand_name: brand.name.to_string(),
        brand_id: brand.id.to_string(),
        size_label: size.label.to_string(),
        size_code: size.code.to_string(),
        surface_label: surface_label_string(&args.surfaces),
        surface_code: surface_code_string(&args.surfaces),
        matt_polished: finish.digit().to_string(),
        sp_code: sp_code.clone(),
        sku: sku.clone(),
        commercial_name,
        faces: args.faces.to_string(),
        batch: args.batch.clone(),
        country_prefix: country,
        company_prefix: company,
        ean13: ean13.clone(),
        image_paths: image_paths.join(";"),
        notes: args.notes.clone(),
    };

    store.insert(record)?;

    println!("Saved {sku}");
    println!("  SPCode  {sp_code}");
    println!("  EAN-13  {ean13}");
    if !image_paths.is_empty() {
        println!("  Images  {}", image_paths.len());
    }
    Ok(())
}
