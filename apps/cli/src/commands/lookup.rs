//! # Read-only lookups
//!
//! `next-code`, `suggest-name`, `brands`, and `sizes`. None of these
//! touch the ledgers beyond a read.

use clap::Args;

use tilecat_core::catalog::{BRANDS, SIZES};
use tilecat_core::{naming, Brand, TileSize};

use crate::config::AppConfig;
use crate::error::CliResult;

/// Prints the next free sequence for a (brand, size) pair. Nothing is
/// reserved; a concurrent `add` takes the same number.
pub fn next_code(config: &AppConfig, brand: &str, size: &str) -> CliResult<()> {
    let brand = Brand::require(brand)?;
    let size = TileSize::require(size)?;
    let store = config.open_store()?;
    let code = store.next_sp_code(brand.code, size.code)?;
    println!("{code}");
    Ok(())
}

/// Arguments for name composition. Unset parts default to the first
/// entry of each word list.
#[derive(Args)]
pub struct SuggestNameArgs {
    /// Latin prefix (see the fixed word list)
    #[arg(long)]
    pub prefix: Option<String>,

    /// Color word
    #[arg(long)]
    pub color: Option<String>,

    /// Stone type
    #[arg(long)]
    pub stone: Option<String>,

    /// Size label; when given, the full Vietnamese name is printed too
    #[arg(long)]
    pub size: Option<String>,
}

pub fn suggest_name(args: SuggestNameArgs) -> CliResult<()> {
    let prefix = args
        .prefix
        .unwrap_or_else(|| naming::LATIN_PREFIXES[0].to_string());
    let color = args.color.unwrap_or_else(|| naming::COLORS[0].to_string());
    let stone = args
        .stone
        .unwrap_or_else(|| naming::STONE_TYPES[0].to_string());

    let base = naming::suggest(&prefix, &color, &stone);
    println!("{base}");

    if let Some(size) = args.size {
        let size = TileSize::require(&size)?;
        println!("{}", naming::full_name(size.label, &base));
    }
    Ok(())
}

/// Prints the fixed brand table.
pub fn brands() -> CliResult<()> {
    println!("{:<6} {:<10} ID", "CODE", "NAME");
    for brand in &BRANDS {
        println!("{:<6} {:<10} {}", brand.code, brand.name, brand.id);
    }
    Ok(())
}

/// Prints the fixed size table.
pub fn sizes() -> CliResult<()> {
    println!("{:<9} CODE", "LABEL");
    for size in &SIZES {
        println!("{:<9} {}", size.label, size.code);
    }
    Ok(())
}
