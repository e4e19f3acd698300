//! # tilecat Command-Line Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         tilecat CLI                                 │
//! │                                                                     │
//! │  main.rs ────► Sets up logging, config, argument dispatch           │
//! │                                                                     │
//! │  commands/ ──► add, list, show, delete, edit, lookup                │
//! │                                                                     │
//! │  config.rs ──► Data directory, prefixes, QR template, image cap     │
//! │                                                                     │
//! │                                 │                                   │
//! │                                 ▼                                   │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │          tilecat-store ──► products.csv / images/<SKU>/       │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (RUST_LOG controls verbosity)
//! 2. Load configuration (defaults + TILECAT_* environment + flags)
//! 3. Open the catalog store (creates empty ledgers on first run)
//! 4. Dispatch the subcommand

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::{add, delete, edit, list, lookup, show};
use crate::config::AppConfig;
use crate::error::CliResult;

/// Tile SKU catalog: product entry, browsing, and code generation.
#[derive(Parser)]
#[command(name = "tilecat", version, about)]
struct Cli {
    /// Data directory holding the ledgers and the image tree
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter a new product: allocates the sequence, generates SKU and
    /// EAN-13, ingests photos, renders barcode and QR images
    Add(add::AddArgs),

    /// List active products, optionally filtered
    List(list::ListArgs),

    /// Show one product in full detail
    Show {
        /// Product SKU (e.g. VE60600001)
        sku: String,
    },

    /// Move a product from the active ledger to the deleted ledger
    Delete {
        /// Product SKU
        sku: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Print the next sequence number for a (brand, size) pair without
    /// reserving it
    NextCode {
        /// Brand code (e.g. VE)
        #[arg(long)]
        brand: String,
        /// Size label (e.g. 60x60)
        #[arg(long)]
        size: String,
    },

    /// Append photos to an existing product
    AddImages {
        /// Product SKU
        sku: String,
        /// Source image files
        #[arg(required = true)]
        images: Vec<PathBuf>,
    },

    /// Append to a product's notes
    AddNote {
        /// Product SKU
        sku: String,
        /// Note text (appended with "; ")
        note: String,
    },

    /// Remove one stored image from a product and delete the file
    RemoveImage {
        /// Product SKU
        sku: String,
        /// Stored image path, exactly as listed by `show`
        path: String,
    },

    /// Compose a commercial name from the catalog word lists
    SuggestName(lookup::SuggestNameArgs),

    /// Print the fixed brand table
    Brands,

    /// Print the fixed size table
    Sizes,
}

fn run(cli: Cli) -> CliResult<()> {
    let mut config = AppConfig::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    match cli.command {
        Commands::Add(args) => add::run(&config, args),
        Commands::List(args) => list::run(&config, args),
        Commands::Show { sku } => show::run(&config, &sku),
        Commands::Delete { sku, yes } => delete::run(&config, &sku, yes),
        Commands::NextCode { brand, size } => lookup::next_code(&config, &brand, &size),
        Commands::AddImages { sku, images } => edit::add_images(&config, &sku, &images),
        Commands::AddNote { sku, note } => edit::add_note(&config, &sku, &note),
        Commands::RemoveImage { sku, path } => edit::remove_image(&config, &sku, &path),
        Commands::SuggestName(args) => lookup::suggest_name(args),
        Commands::Brands => lookup::brands(),
        Commands::Sizes => lookup::sizes(),
    }
}

fn main() {
    // RUST_LOG overrides; warnings only by default so tables stay clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
