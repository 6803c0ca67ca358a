//! Application settings persistence for Minnotes.
//!
//! Stores the hosted-store connection parameters in a JSON file at an
//! OS-appropriate location. Environment variables take precedence over the
//! file; see [`resolve_config`].

use minnotes_core::{NotesError, Result, StoreConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Persisted application settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    /// Base URL of the hosted store project.
    pub store_url: String,
    /// API key for the hosted store.
    pub store_key: String,
    /// Table holding the notes; blank means the default.
    pub store_table: String,
}

impl AppSettings {
    /// Converts the settings into gateway configuration, if complete.
    pub fn to_store_config(&self) -> Option<StoreConfig> {
        let url = self.store_url.trim();
        let key = self.store_key.trim();
        if url.is_empty() || key.is_empty() {
            return None;
        }
        let mut config = StoreConfig::new(url, key);
        let table = self.store_table.trim();
        if !table.is_empty() {
            config.table = table.to_string();
        }
        Some(config)
    }
}

/// Returns the path to the settings JSON file.
///
/// - macOS / Linux: `~/.config/minnotes/settings.json`
/// - Windows: `%APPDATA%/Minnotes/settings.json`
pub fn settings_file_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("Minnotes").join("settings.json")
    }
    #[cfg(not(target_os = "windows"))]
    {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config").join("minnotes").join("settings.json")
    }
}

/// Loads settings from disk; returns defaults if the file is missing or corrupt.
pub fn load_settings() -> AppSettings {
    let path = settings_file_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => AppSettings::default(),
    }
}

/// Saves settings to disk, creating parent directories as needed.
pub fn save_settings(settings: &AppSettings) -> std::result::Result<(), String> {
    let path = settings_file_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create settings directory: {e}"))?;
    }
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| format!("Failed to serialize settings: {e}"))?;
    fs::write(&path, json).map_err(|e| format!("Failed to write settings: {e}"))?;
    Ok(())
}

/// Resolves the store configuration: environment first, settings file second.
///
/// # Errors
///
/// Returns [`NotesError::Config`] when neither source supplies a URL and key.
pub fn resolve_config() -> Result<StoreConfig> {
    if let Ok(config) = StoreConfig::from_env() {
        return Ok(config);
    }
    load_settings().to_store_config().ok_or_else(|| {
        NotesError::Config(format!(
            "set {} and {}, or fill in {}",
            minnotes_core::ENV_STORE_URL,
            minnotes_core::ENV_STORE_KEY,
            settings_file_path().display()
        ))
    })
}
