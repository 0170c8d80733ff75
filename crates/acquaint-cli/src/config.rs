//! Project configuration stored in `.acquaint/config.json`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_DIR: &str = ".acquaint";
pub const CONFIG_FILE: &str = "config.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to access config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no graph given; pass --graph <roster> or set \"graph\" in .acquaint/config.json (see `acquaint init`)")]
    NoGraph,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub version: String,

    /// Default roster, relative to the directory holding `.acquaint/`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph: Option<PathBuf>,

    /// Print JSON unless a command says otherwise.
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            graph: None,
            json: false,
        }
    }
}

impl Config {
    /// Location of the config file under `root`.
    pub fn path_in(root: &Path) -> PathBuf {
        root.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Loads the config under `root`, `None` if there isn't one.
    pub fn load(root: &Path) -> Result<Option<Self>, ConfigError> {
        let path = Self::path_in(root);
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&text)?))
    }

    /// Writes the config under `root`, creating `.acquaint/`.
    pub fn save(&self, root: &Path) -> Result<(), ConfigError> {
        fs::create_dir_all(root.join(CONFIG_DIR))?;
        fs::write(Self::path_in(root), serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Picks the roster to load: the command-line flag wins, then the
    /// configured default resolved against `root`.
    pub fn resolve_graph(&self, flag: Option<&Path>, root: &Path) -> Result<PathBuf, ConfigError> {
        match (flag, &self.graph) {
            (Some(path), _) => Ok(path.to_path_buf()),
            (None, Some(path)) => Ok(root.join(path)),
            (None, None) => Err(ConfigError::NoGraph),
        }
    }
}
