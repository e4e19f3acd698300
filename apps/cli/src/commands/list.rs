//! # `tilecat list`
//!
//! Browses the active ledger with the same filter set the desktop viewer
//! offered: free-text query plus exact brand/size/surface/finish. Output
//! is an aligned table, or JSON with `--json`.

use clap::Args;
use serde_json::json;

use tilecat_core::{Finish, Surface};
use tilecat_store::ProductFilter;

use crate::config::AppConfig;
use crate::error::CliResult;

/// Filter arguments; all criteria are ANDed.
#[derive(Args)]
pub struct ListArgs {
    /// Case-insensitive substring matched against every column
    #[arg(long)]
    pub query: Option<String>,

    /// Exact brand code
    #[arg(long)]
    pub brand: Option<String>,

    /// Exact size label
    #[arg(long)]
    pub size: Option<String>,

    /// Surface that must be present on the product
    #[arg(long)]
    pub surface: Option<Surface>,

    /// Finish: matt or polished
    #[arg(long)]
    pub finish: Option<Finish>,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn run(config: &AppConfig, args: ListArgs) -> CliResult<()> {
    let store = config.open_store()?;
    let filter = ProductFilter {
        query: args.query,
        brand: args.brand,
        size: args.size,
        surface: args.surface,
        finish: args.finish,
    };
    let records = store.filter(&filter)?;

    if args.json {
        let rows: Vec<_> = records
            .iter()
            .map(|r| {
                json!({
                    "sku": r.sku,
                    "spCode": r.sp_code,
                    "brand": r.brand_code,
                    "size": r.size_label,
                    "surfaces": r.surface_label,
                    "finish": r.matt_polished,
                    "name": r.commercial_name,
                    "ean13": r.ean13,
                    "batch": r.batch,
                    "faces": r.faces,
                    "created": r.timestamp,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No products match.");
        return Ok(());
    }

    // Column widths from the data so the table stays readable.
    let name_width = records
        .iter()
        .map(|r| r.commercial_name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    println!(
        "{:<12} {:<8} {:<8} {:<13} {:<name_width$}",
        "SKU", "BRAND", "SIZE", "EAN-13", "NAME"
    );
    for r in &records {
        println!(
            "{:<12} {:<8} {:<8} {:<13} {:<name_width$}",
            r.sku, r.brand_code, r.size_label, r.ean13, r.commercial_name
        );
    }
    println!("{} product(s)", records.len());
    Ok(())
}
