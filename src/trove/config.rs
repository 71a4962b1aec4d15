use crate::error::{Result, TroveError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_STORE_FILE: &str = "records.json";

/// Configuration for trove, stored in config.json next to the record store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TroveConfig {
    /// File name of the collection snapshot (e.g., "records.json")
    #[serde(default = "default_store_file")]
    pub store_file: String,

    /// Whether snapshots are pretty-printed for hand inspection
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_store_file() -> String {
    DEFAULT_STORE_FILE.to_string()
}

fn default_pretty() -> bool {
    true
}

impl Default for TroveConfig {
    fn default() -> Self {
        Self {
            store_file: DEFAULT_STORE_FILE.to_string(),
            pretty: true,
        }
    }
}

impl TroveConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TroveError::Io)?;
        let config: TroveConfig =
            serde_json::from_str(&content).map_err(TroveError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TroveError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TroveError::Serialization)?;
        fs::write(config_path, content).map_err(TroveError::Io)?;
        Ok(())
    }

    /// Get a configuration value by key name, formatted for display.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "store-file" => Some(self.store_file.clone()),
            "pretty" => Some(self.pretty.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key name.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "store-file" => {
                if value.trim().is_empty() {
                    return Err("store-file cannot be empty".to_string());
                }
                self.store_file = value.trim().to_string();
                Ok(())
            }
            "pretty" => match value {
                "true" => {
                    self.pretty = true;
                    Ok(())
                }
                "false" => {
                    self.pretty = false;
                    Ok(())
                }
                other => Err(format!("pretty must be true or false, got {}", other)),
            },
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}
