use clap::Parser;
use log::warn;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use videostream::core::catalog::Catalog;
use videostream::core::config::{self, VideostreamConfig};
use videostream::core::navigation::Tab;
use videostream::tui;

#[derive(Parser)]
#[command(name = "videostream", about = "Browse and play videos from the terminal")]
struct Args {
    /// Tab to open on start
    #[arg(short, long, value_enum)]
    tab: Option<Tab>,

    /// Catalog JSON file to browse instead of the built-in one
    #[arg(short, long)]
    catalog: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to videostream.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("videostream.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        VideostreamConfig::default()
    });
    let resolved = config::resolve(&file_config, args.tab, args.catalog.as_deref());

    let catalog = match &resolved.catalog_path {
        Some(path) => Catalog::load(path),
        None => Catalog::builtin(),
    }
    .map_err(std::io::Error::other)?;

    log::info!(
        "VideoStream starting on {:?} with {} videos",
        resolved.start_tab,
        catalog.len()
    );

    tui::run(Arc::new(catalog), resolved)
}
