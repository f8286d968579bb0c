use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const APP_DIR: &str = "cpunch";
pub const CONFIG_FILE: &str = "cpunch.conf";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_seed_defaults")]
    pub seed_defaults: bool,
}

fn default_data_dir() -> String {
    Config::default_data_dir().to_string_lossy().to_string()
}
fn default_currency() -> String {
    "$".to_string()
}
fn default_seed_defaults() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            currency: default_currency(),
            seed_defaults: default_seed_defaults(),
        }
    }
}

impl Config {
    /// Platform configuration directory for the app
    /// (`~/.config/cpunch`, `%APPDATA%\cpunch`, ...).
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    /// Platform application-data directory holding the JSON stores.
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Data directory with `~/` expanded.
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write the configuration file, creating its directory.
    /// An existing file is left untouched unless `overwrite` is set.
    /// Returns true when the file was written.
    pub fn save(&self, overwrite: bool) -> AppResult<bool> {
        let path = Self::config_file();
        if path.exists() && !overwrite {
            return Ok(false);
        }

        fs::create_dir_all(Self::config_dir())?;
        fs::write(&path, self.to_yaml()?)?;
        Ok(true)
    }
}
