//! # Configuration
//!
//! Application configuration for the CLI.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--data-dir`)
//! 2. Environment variables (`TILECAT_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after startup; there is no config file, the
//! handful of knobs fits in the environment.

use std::path::PathBuf;

use tilecat_core::{DEFAULT_COMPANY_PREFIX, DEFAULT_COUNTRY_PREFIX, DEFAULT_QR_URL_TEMPLATE};
use tilecat_store::images::DEFAULT_MAX_DIMENSION;
use tilecat_store::{CatalogStore, StoreResult};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the ledgers and the image tree.
    pub data_dir: PathBuf,

    /// Active ledger file name.
    pub products_file: String,

    /// Deleted ledger file name.
    pub deleted_file: String,

    /// Image tree directory name.
    pub images_dir: String,

    /// Default GS1 country prefix for new products.
    pub country_prefix: String,

    /// Default company prefix for new products.
    pub company_prefix: String,

    /// URL template for the QR label; `{}` is replaced with the SPCode.
    pub qr_url_template: String,

    /// Longest-side cap for stored photos, in pixels.
    pub max_image_dim: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_dir: PathBuf::from("."),
            products_file: "products.csv".to_string(),
            deleted_file: "deleted_products.csv".to_string(),
            images_dir: "images".to_string(),
            country_prefix: DEFAULT_COUNTRY_PREFIX.to_string(),
            company_prefix: DEFAULT_COMPANY_PREFIX.to_string(),
            qr_url_template: DEFAULT_QR_URL_TEMPLATE.to_string(),
            max_image_dim: DEFAULT_MAX_DIMENSION,
        }
    }
}

impl AppConfig {
    /// Creates a configuration from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TILECAT_DATA_DIR`: Override the data directory
    /// - `TILECAT_COUNTRY_PREFIX`: Default country prefix
    /// - `TILECAT_COMPANY_PREFIX`: Default company prefix
    /// - `TILECAT_QR_URL`: QR URL template
    /// - `TILECAT_MAX_IMAGE_DIM`: Longest-side cap in pixels
    pub fn from_env() -> Self {
        let mut config = AppConfig::default();

        if let Ok(dir) = std::env::var("TILECAT_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(prefix) = std::env::var("TILECAT_COUNTRY_PREFIX") {
            config.country_prefix = prefix;
        }
        if let Ok(prefix) = std::env::var("TILECAT_COMPANY_PREFIX") {
            config.company_prefix = prefix;
        }
        if let Ok(template) = std::env::var("TILECAT_QR_URL") {
            config.qr_url_template = template;
        }
        if let Ok(dim) = std::env::var("TILECAT_MAX_IMAGE_DIM") {
            if let Ok(parsed) = dim.parse::<u32>() {
                config.max_image_dim = parsed;
            }
        }

        config
    }

    /// Opens the catalog store rooted at the data directory, creating the
    /// ledgers and image tree on first run.
    pub fn open_store(&self) -> StoreResult<CatalogStore> {
        CatalogStore::open(
            self.data_dir.join(&self.products_file),
            self.data_dir.join(&self.deleted_file),
            self.data_dir.join(&self.images_dir),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.products_file, "products.csv");
        assert_eq!(config.deleted_file, "deleted_products.csv");
        assert_eq!(config.country_prefix, "893");
        assert_eq!(config.company_prefix, "12345");
        assert_eq!(config.max_image_dim, 2000);
        assert!(config.qr_url_template.contains("{}"));
    }
}
