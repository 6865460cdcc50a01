//! User configuration file handling
//!
//! Manages settings from ~/.config/fwl-theme/settings.json

use crate::ui::theme_system::embedded_themes;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const APP_DIR_NAME: &str = "fwl-theme";

/// User configuration from ~/.config/fwl-theme/settings.json
///
/// These settings override built-in defaults but are overridden by CLI arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Palette to paint with: an embedded palette name or a JSON file path
    pub palette: Option<String>,
    /// Log filter (e.g., "info", "fwl_theme=trace")
    pub log_level: Option<String>,
    /// Also write logs to ~/.config/fwl-theme/logs/
    pub log_to_file: Option<bool>,
}

impl ConfigFile {
    /// Get the path to the fwl-theme config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join(APP_DIR_NAME)
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Get the path to the user palettes directory
    pub fn palettes_dir() -> PathBuf {
        Self::config_dir().join("palettes")
    }

    /// Read the user config file without logging.
    ///
    /// `Ok(None)` when the file does not exist. Callers that set up logging
    /// from these settings report the error themselves once a subscriber is
    /// installed.
    pub fn read() -> anyhow::Result<Option<Self>> {
        Self::read_from(&Self::config_path())
    }

    pub fn read_from(path: &Path) -> anyhow::Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings.json at {:?}", path))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings.json at {:?}", path))?;
        debug!("Loaded user settings from {:?}", path);
        Ok(Some(config))
    }

    /// Load configuration from a specific settings file, warning on bad files
    pub fn load_from(path: &Path) -> Option<Self> {
        match Self::read_from(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{:#}", e);
                None
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Initialize the complete user configuration directory
    ///
    /// This creates:
    /// 1. The ~/.config/fwl-theme directory structure
    /// 2. A settings.json file with default values
    /// 3. A palettes/ directory with copies of all embedded palettes
    /// 4. A logs/ directory for application logs
    pub fn initialize_config_directory() -> anyhow::Result<()> {
        Self::initialize_in(&Self::config_dir())?;

        println!("\nConfiguration initialized successfully!");
        println!("You can now:");
        println!("  - Edit settings at: {:?}", Self::config_path());
        println!("  - Customize palettes in: {:?}", Self::palettes_dir());
        Ok(())
    }

    /// Create the configuration layout under `config_dir`, keeping existing files
    pub fn initialize_in(config_dir: &Path) -> anyhow::Result<()> {
        fs::create_dir_all(config_dir)?;
        println!("Created config directory: {:?}", config_dir);

        let logs_dir = config_dir.join("logs");
        fs::create_dir_all(&logs_dir)?;
        println!("Created logs directory: {:?}", logs_dir);

        let settings_path = config_dir.join("settings.json");
        if !settings_path.exists() {
            let example = ConfigFile {
                palette: Some(embedded_themes::DEFAULT_PALETTE_NAME.to_string()),
                log_level: Some("info".to_string()),
                log_to_file: Some(false),
            };
            example.save_to(&settings_path)?;
            println!("Created settings file: {:?}", settings_path);
        } else {
            println!("Settings file already exists: {:?}", settings_path);
        }

        let palettes_dir = config_dir.join("palettes");
        fs::create_dir_all(&palettes_dir)?;
        for (name, content) in embedded_themes::get_embedded_palettes() {
            let palette_path = palettes_dir.join(format!("{}.json", name));
            if !palette_path.exists() {
                fs::write(&palette_path, content)?;
                println!("  - Copied palette: {}.json", name);
            } else {
                println!("  - Palette already exists: {}.json", name);
            }
        }

        Ok(())
    }
}
