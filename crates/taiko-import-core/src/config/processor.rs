use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::mode;
use crate::error::{Error, Result};

/// Settings for one batch run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Id of the first produced song; later songs follow sequentially.
    pub start_id: u32,
    /// Category assigned to every song of the batch.
    pub category_id: u32,
    /// Root of the output tree; songs land in `<output_dir>/Category <id>/`.
    pub output_dir: PathBuf,
    /// Create an empty file named after the chart in each song folder.
    pub generate_markers: bool,
    /// Accepted `General.Mode` of archive beatmaps.
    pub game_mode: u8,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            start_id: 1,
            category_id: 1,
            output_dir: PathBuf::from("Output"),
            generate_markers: false,
            game_mode: mode::TAIKO,
        }
    }
}

impl ProcessorConfig {
    /// Load settings from a TOML file. Missing keys keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParseError(e.to_string()))
    }

    /// Directory holding this batch's song folders and `songs.json`
    pub fn category_dir(&self) -> PathBuf {
        self.output_dir.join(format!("Category {}", self.category_id))
    }
}
