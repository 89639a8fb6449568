//! airtable-remap: export an Airtable base with records keyed by stable
//! field ids instead of display names, so downstream consumers survive
//! field renames.

mod api;
mod config;
mod pipeline;
mod remap;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use api::AirtableClient;
use config::Config;

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Single-line JSON
    JsonCompact,
}

#[derive(Debug, Parser)]
#[command(name = "airtable-remap")]
#[command(about = "Export Airtable base data with stable field ids instead of display names")]
struct Args {
    /// Base id to export; defaults to the AIRTABLE_BASE_ID environment variable
    #[arg(long)]
    base: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = Config::from_env(args.base)?;

    let client = AirtableClient::new(config.api_key.clone());
    let datasets = pipeline::run(&client, &config.base_id).await?;

    let serialized = match args.format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&datasets).context("Failed to serialize output")?
        }
        OutputFormat::JsonCompact => {
            serde_json::to_string(&datasets).context("Failed to serialize output")?
        }
    };

    match args.output {
        Some(path) => {
            fs::write(&path, &serialized)
                .with_context(|| format!("Failed to write output to: {}", path.display()))?;
            log::info!("Results saved to: {}", path.display());
        }
        None => println!("{serialized}"),
    }

    Ok(())
}
