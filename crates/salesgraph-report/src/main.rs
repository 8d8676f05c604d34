//! salesgraph - sales export summary and chart generation

use anyhow::Result;
use clap::Parser;
use salesgraph_common::logging;
use salesgraph_config::SettingsLoader;
use salesgraph_report::pipeline;
use tracing::info;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init(&args.log_level)?;

    let settings = match args.config {
        Some(path) => SettingsLoader::load_from_file(&path)?,
        None => SettingsLoader::load()?,
    };

    info!("Starting sales report generation");
    pipeline::run(&settings)?;
    info!("Sales report complete");

    Ok(())
}
