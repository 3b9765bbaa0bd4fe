use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub api_url: String,
    pub pdf_base_url: String,
    #[serde(default = "default_layout")]
    pub layout: String,
    #[serde(default = "default_strip_height")]
    pub strip_height: usize,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_layout() -> String {
    "table".to_string()
}
fn default_strip_height() -> usize {
    24
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5000/api/lithology".to_string(),
            pdf_base_url: "http://localhost:5000".to_string(),
            layout: default_layout(),
            strip_height: default_strip_height(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("lithoview")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".lithoview")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("lithoview.conf")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A file from an older version loads fine; missing fields fall back
    /// to their serde defaults.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Write the configuration file.
    pub fn save(&self) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Initialize the config directory and default configuration file.
    /// In test mode nothing is written.
    pub fn init_all(custom_url: Option<String>, is_test: bool) -> AppResult<Config> {
        let mut config = Config::default();
        if let Some(url) = custom_url {
            config.api_url = url;
        }
        if !is_test {
            config.save()?;
        }
        Ok(config)
    }
}
