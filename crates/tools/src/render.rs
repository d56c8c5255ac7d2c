use clap::ValueEnum;
use maze_core::Grid;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct MazeReport<'a> {
    seed: u64,
    fingerprint: String,
    grid: &'a Grid,
}

/// Format a fingerprint as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_fingerprint(hash: u64) -> String {
    format!("0x{hash:016x}")
}

pub fn render(grid: &Grid, seed: u64, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "seed: {seed}\nfingerprint: {}\n{grid}",
            format_fingerprint(grid.fingerprint())
        )),
        OutputFormat::Json => serde_json::to_string_pretty(&MazeReport {
            seed,
            fingerprint: format_fingerprint(grid.fingerprint()),
            grid,
        }),
    }
}
