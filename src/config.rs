//! Configuration management
//!
//! Controls how XML is laid out. Config is read from, in order:
//!
//! 1. an explicit path (`--config`)
//! 2. `./stepconf.toml`
//! 3. `~/.config/stepconf/config.toml` (platform config dir)
//!
//! If none exists the defaults apply.
//!
//! ```toml
//! [render]
//! line_breaks = true
//! indent = 2
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::xml::RenderOptions;

/// Name of the per-directory config file
pub const CONFIG_FILE_NAME: &str = "stepconf.toml";

/// stepconf configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// XML layout
    #[serde(default)]
    pub render: RenderOptions,
}

impl Config {
    /// Path of the user-level config file
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("stepconf").join("config.toml"))
    }

    /// Pick the config file to use, if any
    ///
    /// An explicit path is returned as-is, even if it does not exist.
    #[must_use]
    pub fn resolve_path(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        let local = cwd.join(CONFIG_FILE_NAME);
        if local.exists() {
            return Some(local);
        }
        Self::global_config_path().filter(|p| p.exists())
    }

    /// Load config following the lookup order
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        match Self::resolve_path(explicit, &cwd) {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
