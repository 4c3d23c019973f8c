//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Subreddit to poll (without the "r/" prefix).
    #[serde(default)]
    pub subreddit: String,

    /// Discord webhook URL to publish embeds to.
    #[serde(default)]
    pub webhook_url: String,

    /// Time window for the "top" feed (hour, day, week, month, year, all).
    #[serde(default = "default_top_time")]
    pub top_time: String,

    /// Maximum number of images posted in a single run.
    #[serde(default = "default_max_per_run")]
    pub max_per_run: usize,

    /// Path of the persisted seen-identifier state file.
    #[serde(default = "default_state_file")]
    pub state_file: PathBuf,

    /// Fetch and extract but do not post or persist state.
    #[serde(default)]
    pub dry_run: bool,
}

fn default_top_time() -> String {
    "day".to_string()
}

fn default_max_per_run() -> usize {
    30
}

fn default_state_file() -> PathBuf {
    PathBuf::from("state.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            subreddit: String::new(),
            webhook_url: String::new(),
            top_time: default_top_time(),
            max_per_run: default_max_per_run(),
            state_file: default_state_file(),
            dry_run: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
