//! trueno-raster: render a drawing command script to PNG images.
//!
//! Run: `trueno-raster input.txt output/`

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use trueno_raster::config::Config;
use trueno_raster::script::Interpreter;

/// Render a drawing command script to PNG images
#[derive(Parser, Debug)]
#[command(name = "trueno-raster")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Integer rasterizer driven by drawing command scripts", long_about = None)]
struct Cli {
    /// Command script to execute
    script: PathBuf,

    /// Directory saved canvases are written to (created if missing)
    output_dir: PathBuf,

    /// YAML config file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };

    let source = fs::read_to_string(&cli.script)
        .with_context(|| format!("reading script {}", cli.script.display()))?;
    fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("creating {}", cli.output_dir.display()))?;

    let mut interpreter = Interpreter::new(&cli.output_dir, config)?;
    interpreter
        .run_script(&source)
        .with_context(|| format!("running {}", cli.script.display()))?;

    info!("wrote {} image(s)", interpreter.saved().len());
    Ok(())
}
