//! Global rinse configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RinseError, RinseResult};

static DEFAULT_DATA_PATH: &str = "~/.rinse";

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

fn is_default_data_path(p: &PathBuf) -> bool {
    *p == default_data_path()
}

/// Global configuration at ~/.config/rinse/config.toml
///
/// Tracker state (wash log, events, profile) lives in `data_dir` and is
/// managed by the store, not by this config.
#[derive(Serialize, Deserialize, Clone)]
pub struct RinseConfig {
    #[serde(
        default = "default_data_path",
        skip_serializing_if = "is_default_data_path"
    )]
    pub data_dir: PathBuf,
}

impl Default for RinseConfig {
    fn default() -> Self {
        RinseConfig {
            data_dir: default_data_path(),
        }
    }
}

impl RinseConfig {
    pub fn config_path() -> RinseResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| RinseError::Config("Could not determine config directory".into()))?
            .join("rinse");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> RinseResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: RinseConfig = config::Config::builder()
            .add_source(config::File::from(config_path).required(false))
            .build()
            .map_err(|e| RinseError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| RinseError::Config(e.to_string()))?;

        Ok(config)
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Save the current config to ~/.config/rinse/config.toml
    pub fn save(&self) -> RinseResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| RinseError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| RinseError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> RinseResult<()> {
        let contents = format!(
            "\
# rinse configuration

# Where your wash log and calendar live:
# data_dir = \"{}\"
",
            DEFAULT_DATA_PATH
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                RinseError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| RinseError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
