// Configuration loading and filesystem paths.
// Reads JSON config from the platform config directory, falling back to defaults.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Tab group behaviour switches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    /// Skip tabs marked `aria-disabled="true"` during keyboard navigation
    /// and activation. Off by default: every tab is selectable.
    pub skip_disabled: bool,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Event poll interval for the demo loop, in milliseconds.
    pub tick_rate_ms: u64,
    /// `tracing` filter directive, e.g. `"ariatui=debug"`.
    pub log_filter: String,
    pub tabs: TabsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            log_filter: "ariatui=info".to_string(),
            tabs: TabsConfig::default(),
        }
    }
}

impl Config {
    /// Load from the default config path. Missing file means defaults.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;

        // Write atomically via temp file
        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "ariatui")
}

/// Config directory (~/.config/ariatui on Linux).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path to the config file.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

/// Path to the log file written by the demo.
pub fn log_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().join("ariatui.log"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.tabs.skip_disabled);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "tabs": { "skip_disabled": true } }"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.tabs.skip_disabled);
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.log_filter, "ariatui=info");
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.json");

        let config = Config {
            tick_rate_ms: 250,
            log_filter: "ariatui=debug".to_string(),
            tabs: TabsConfig {
                skip_disabled: true,
            },
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_paths() {
        // These verify path construction, not the filesystem
        if let Some(path) = config_path() {
            assert!(path.ends_with("config.json"));
        }
        if let Some(path) = log_path() {
            assert!(path.ends_with("ariatui.log"));
        }
    }
}
