//! Optional TOML configuration shared by the command-line tools.
//!
//! ```toml
//! width = 31
//! height = 21
//! seed = 2024
//! ```

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use maze_core::session::{DEFAULT_MAZE_HEIGHT, DEFAULT_MAZE_WIDTH};
use serde::Deserialize;
use toml::de::Error as TomlError;

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MazeConfig {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub seed: Option<u64>,
}

#[derive(Debug)]
pub enum ConfigError {
    Read { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: TomlError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, .. } => write!(f, "failed to read config {}", path.display()),
            Self::Parse { path, .. } => write!(f, "failed to parse config {}", path.display()),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

impl MazeConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        toml::from_str(&content)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Flag values win over the file, the file wins over the game defaults.
    pub fn dimensions(
        &self,
        width_flag: Option<usize>,
        height_flag: Option<usize>,
    ) -> (usize, usize) {
        (
            width_flag.or(self.width).unwrap_or(DEFAULT_MAZE_WIDTH),
            height_flag.or(self.height).unwrap_or(DEFAULT_MAZE_HEIGHT),
        )
    }
}
