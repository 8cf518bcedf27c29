use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{CatalogError, Result};
use crate::models::Config;

/// ConfigManager handles loading, saving, and updating preference state:
/// the recent-first display toggle and the most-recently-opened folder ids.
///
/// Loaded once at startup and saved explicitly on change. Partial config
/// files merge with defaults for any missing fields.
pub struct ConfigManager {
    /// The current configuration
    config: RwLock<Config>,
    /// Path to the configuration file
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a ConfigManager, loading existing configuration from disk and
    /// merging with defaults for any missing fields.
    pub fn new(config_path: PathBuf) -> Self {
        let config = Self::load_from_file(&config_path);
        Self {
            config: RwLock::new(config),
            config_path,
        }
    }

    /// Loads configuration from file, merging with defaults.
    ///
    /// An absent, unreadable, or corrupt file yields the default config;
    /// preference loss is not worth blocking startup over, so read problems
    /// are logged and swallowed.
    fn load_from_file(path: &PathBuf) -> Config {
        if !path.exists() {
            return Config::default();
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Failed to read config {}: {}", path.display(), e);
                return Config::default();
            }
        };

        merge_config_with_defaults(&content).unwrap_or_else(|e| {
            log::warn!("Failed to parse config {}: {}", path.display(), e);
            Config::default()
        })
    }

    /// Gets a clone of the current configuration.
    pub fn get(&self) -> Config {
        self.config.read().unwrap().clone()
    }

    /// Updates the configuration using a closure and saves immediately.
    pub fn update_and_save<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Config),
    {
        {
            let mut config = self.config.write().unwrap();
            f(&mut config);
        }
        self.save()
    }

    /// Saves the configuration to disk.
    pub fn save(&self) -> Result<()> {
        let config = self.config.read().unwrap().clone();

        let content = serde_json::to_string_pretty(&config)
            .map_err(|e| CatalogError::Persistence(format!("Failed to serialize config: {}", e)))?;

        fs::write(&self.config_path, content).map_err(|e| {
            CatalogError::Persistence(format!(
                "Failed to write config {}: {}",
                self.config_path.display(),
                e
            ))
        })
    }

    /// Whether recent-first folder ordering is enabled.
    pub fn recent_first(&self) -> bool {
        self.config.read().unwrap().recent_first
    }

    /// Enables or disables recent-first folder ordering.
    pub fn set_recent_first(&self, enabled: bool) -> Result<()> {
        self.update_and_save(|config| config.recent_first = enabled)
    }

    /// The most-recently-opened folder ids, most recent first.
    pub fn recent_folders(&self) -> Vec<String> {
        self.config.read().unwrap().recent_folders.clone()
    }

    /// Moves `folder_id` to the front of the recent list.
    pub fn promote_recent(&self, folder_id: &str) -> Result<()> {
        self.update_and_save(|config| {
            config.recent_folders.retain(|id| id != folder_id);
            config.recent_folders.insert(0, folder_id.to_string());
        })
    }

    /// Drops `folder_id` from the recent list (folder deleted).
    pub fn remove_recent(&self, folder_id: &str) -> Result<()> {
        self.update_and_save(|config| {
            config.recent_folders.retain(|id| id != folder_id);
        })
    }

    /// Returns the config file path.
    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }
}

/// Merges a partial config JSON document with defaults.
pub fn merge_config_with_defaults(partial_json: &str) -> std::result::Result<Config, String> {
    if partial_json.trim().is_empty() {
        return Ok(Config::default());
    }

    let json_value: serde_json::Value = serde_json::from_str(partial_json)
        .map_err(|e| format!("Failed to parse config: {}", e))?;

    let mut config = Config::default();

    if let Some(obj) = json_value.as_object() {
        if let Some(v) = obj.get("recent_first").and_then(|v| v.as_bool()) {
            config.recent_first = v;
        }
        if let Some(v) = obj.get("recent_folders").and_then(|v| v.as_array()) {
            config.recent_folders = v
                .iter()
                .filter_map(|item| item.as_str().map(|s| s.to_string()))
                .collect();
        }
    }

    Ok(config)
}
