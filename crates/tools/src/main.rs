use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use maze_core::generate_seeded;
use maze_tools::seed::env_seed;
use maze_tools::{MazeConfig, OutputFormat, generate_runtime_seed, render, resolve_seed};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of columns, border included
    #[arg(long)]
    width: Option<usize>,
    /// Number of rows, border included
    #[arg(long)]
    height: Option<usize>,
    /// Seed for the carving random source
    #[arg(short, long)]
    seed: Option<u64>,
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => MazeConfig::load(path)?,
        None => MazeConfig::default(),
    };
    let (width, height) = config.dimensions(args.width, args.height);
    let env_value = env_seed();
    let seed =
        resolve_seed(args.seed, env_value.as_deref(), config.seed, generate_runtime_seed())
            .map_err(|err| anyhow!("Invalid seed: {err}"))?;

    let grid = generate_seeded(width, height, seed.value())
        .with_context(|| format!("Failed to generate a {width}x{height} maze"))?;
    let output = render(&grid, seed.value(), args.format)
        .with_context(|| "Failed to serialize maze")?;

    if args.format == OutputFormat::Text {
        println!("seed source: {}", seed.source_label());
    }
    println!("{}", output.trim_end());
    Ok(())
}
