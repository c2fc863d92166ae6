//! Spectral type inspection tool.
//!
//! Describes each spectral type given on the command line (or each
//! non-empty line of stdin) and prints the appearances as a JSON array.
//!
//! # Usage
//!
//! ```bash
//! spectra "O9.5Iab+B1IV" "A5-F1III/IVm"
//! cut -f3 catalog.tsv | spectra --compact
//! spectra --config spectra.toml WN6h
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: warn)

use std::env;
use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use starfield_spectra::config::SpectraConfig;
use starfield_spectra::preprocessing::{to_json, AppearancePipeline, StarAppearance};

#[derive(Parser, Debug)]
#[command(name = "spectra")]
#[command(version)]
#[command(about = "Parse MK spectral types and print their colours as JSON")]
struct Cli {
    /// Spectral types to describe (read from stdin when omitted)
    #[arg(value_name = "TYPES")]
    types: Vec<String>,

    /// Configuration file (default: spectra.toml if present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::WARN),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SpectraConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => SpectraConfig::load_default().context("Failed to load default config")?,
    };

    let types = if cli.types.is_empty() {
        read_stdin_types()?
    } else {
        cli.types
    };
    info!("Describing {} spectral types", types.len());

    let pipeline = AppearancePipeline::with_config((&config).into());
    let appearances: Vec<StarAppearance> = types
        .iter()
        .map(|spectral_type| pipeline.describe(None, spectral_type))
        .collect();

    let with_diagnostics = appearances
        .iter()
        .filter(|appearance| !appearance.diagnostics.is_empty())
        .count();
    info!("{} of {} had diagnostics", with_diagnostics, appearances.len());

    let json = to_json(&appearances, config.output.pretty && !cli.compact)
        .context("Failed to render appearances")?;
    println!("{}", json);

    Ok(())
}

fn read_stdin_types() -> Result<Vec<String>> {
    let mut types = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            types.push(line.to_string());
        }
    }
    Ok(types)
}
