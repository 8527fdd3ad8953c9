//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

/// Interactive storefront search with live suggestions and price filtering
#[derive(Debug, Parser)]
#[command(name = "soko", version, about)]
pub struct Args {
    /// Storefront base URL, e.g. https://shop.example.com (overrides config)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Path to a config file (defaults to the platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
