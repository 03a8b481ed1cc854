//! KML Restyle - batch placemark style normalizer.
//!
//! Reads a KML placemark document, consolidates its icon styles into a
//! fixed sixteen-color palette, rewrites every placemark's style
//! reference, and writes the result to a new file.

// Module declarations
mod cli;
mod constants;
mod models;
mod parser;
mod services;

use anyhow::Result;
use clap::Parser;
use cli::ConvertArgs;
use constants::APP_BINARY_NAME;

/// Normalize KML placemark icon styles to the fixed sixteen-color palette
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    convert: ConvertArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.convert.execute()?;
    Ok(())
}
