//! User configuration file handling
//!
//! Manages settings from ~/.config/riffle/settings.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// User configuration from ~/.config/riffle/settings.json
///
/// These settings override built-in defaults but are overridden by CLI arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Default input sequence for the harness (e.g., "0123456789")
    pub default_input: Option<String>,
    /// Default sweep multiplier per shuffle
    pub default_iterations: Option<u32>,
    /// Default number of trials per variant
    pub default_trials: Option<u32>,
    /// Default seed; omit for a fresh entropy seed per run
    pub default_seed: Option<u64>,
}

impl ConfigFile {
    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Get the path to the riffle config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join("riffle")
    }

    /// Load configuration from the user config file
    pub fn load() -> Option<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    debug!("Loaded user settings from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    warn!("Failed to parse settings.json: {}", e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read settings.json: {}", e);
                None
            }
        }
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to an explicit path
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

    /// Initialize the user configuration directory
    ///
    /// This creates:
    /// 1. The ~/.config/riffle directory
    /// 2. A settings.json file with the built-in scenario defaults
    pub fn initialize_config_directory() -> anyhow::Result<()> {
        let config_dir = Self::config_dir();

        fs::create_dir_all(&config_dir)?;
        println!("Created config directory: {:?}", config_dir);

        let settings_path = Self::config_path();
        if !settings_path.exists() {
            let example = ConfigFile {
                default_input: Some(crate::core::cli::DEFAULT_INPUT.to_string()),
                default_iterations: Some(crate::core::cli::DEFAULT_ITERATIONS),
                default_trials: Some(crate::core::cli::DEFAULT_TRIALS),
                default_seed: None,
            };
            example.save()?;
            println!("Created settings file: {:?}", settings_path);
        } else {
            println!("Settings file already exists: {:?}", settings_path);
        }

        println!("\nConfiguration initialized successfully!");
        println!("Edit settings at: {:?}", settings_path);

        Ok(())
    }
}
