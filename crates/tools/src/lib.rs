pub mod config;
pub mod render;
pub mod seed;

pub use config::{ConfigError, MazeConfig};
pub use render::{OutputFormat, format_fingerprint, render};
pub use seed::{SeedChoice, generate_runtime_seed, resolve_seed};
