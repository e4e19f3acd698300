//! # `tilecat delete`
//!
//! Moves a product from the active ledger to the deleted ledger. The row
//! is appended to `deleted_products.csv` before the active file is
//! rewritten, so a crash between the two steps duplicates rather than
//! loses data. Image files stay on disk.

use std::io::{self, BufRead, Write};

use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

pub fn run(config: &AppConfig, sku: &str, yes: bool) -> CliResult<()> {
    let store = config.open_store()?;
    let record = store.require(sku)?;

    if !yes {
        print!(
            "Delete {} ({})? [y/N] ",
            record.sku, record.commercial_name
        );
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        if !matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
            return Err(CliError::Cancelled);
        }
    }

    let removed = store.delete(sku)?;
    println!("Deleted {} (moved to {})", removed.sku, config.deleted_file);
    Ok(())
}
