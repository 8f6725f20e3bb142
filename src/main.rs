//! gatewatch - Railway level-crossing gate monitoring dashboard
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use gatewatch_app::config::{config_file_path, init_config_dir};

/// gatewatch - Railway level-crossing gate monitoring dashboard
#[derive(Parser, Debug)]
#[command(name = "gatewatch")]
#[command(about = "Terminal dashboard for railway level-crossing gates", long_about = None)]
struct Args {
    /// Directory holding .gatewatch/config.toml (defaults to the current directory)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Gate catalog to load (.toml or .json), overriding catalog.path
    #[arg(long, value_name = "FILE")]
    gates: Option<PathBuf>,

    /// Write a default .gatewatch/config.toml and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let base_path = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init_config {
        init_config_dir(&base_path)?;
        eprintln!("Config written to {}", config_file_path(&base_path).display());
        return Ok(());
    }

    gatewatch_core::logging::init()?;

    gatewatch::run(&base_path, args.gates.as_deref()).await?;
    Ok(())
}
