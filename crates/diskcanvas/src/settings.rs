//! Configuration and settings management

use crate::error::Error;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Defaults for the report; command-line flags override them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplaySettings {
    #[serde(default = "default_top")]
    pub top: u32,
    #[serde(default = "default_depth")]
    pub depth: u32,
    #[serde(default)]
    pub files_only: bool,
    #[serde(default)]
    pub detail: bool,
    #[serde(default)]
    pub treemap: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            top: default_top(),
            depth: default_depth(),
            files_only: false,
            detail: false,
            treemap: false,
        }
    }
}

fn default_top() -> u32 {
    10
}

fn default_depth() -> u32 {
    1
}

impl Settings {
    /// Load settings from a file, or return defaults if file doesn't exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        let settings: Settings = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))?;

        settings
            .validate()
            .with_context(|| format!("Rejected settings in {}", path.display()))?;

        Ok(settings)
    }

    pub fn validate(&self) -> crate::error::Result<()> {
        if self.display.top == 0 {
            return Err(Error::InvalidSettings(
                "display.top must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// `<config dir>/disk-canvas/settings.toml`, or relative to `.` when no
    /// config directory is known.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("disk-canvas");

        config_dir.join("settings.toml")
    }
}

mod dirs {
    use std::path::PathBuf;

    pub fn config_dir() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var_os("XDG_CONFIG_HOME")
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
                })
        }
        #[cfg(target_os = "windows")]
        {
            std::env::var_os("APPDATA").map(PathBuf::from)
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.display.top, 10);
        assert_eq!(settings.display.depth, 1);
        assert!(!settings.display.files_only);
        assert!(!settings.display.detail);
        assert!(!settings.display.treemap);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let settings_path = temp_dir.path().join("nonexistent.toml");

        let settings = Settings::load(&settings_path).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let settings_path = temp_dir.path().join("settings.toml");
        fs::write(&settings_path, "[display]\ntop = 25\ndetail = true\n").unwrap();

        let settings = Settings::load(&settings_path).unwrap();
        assert_eq!(settings.display.top, 25);
        assert!(settings.display.detail);
        // Unspecified keys keep their defaults
        assert_eq!(settings.display.depth, 1);
        assert!(!settings.display.treemap);
    }

    #[test]
    fn test_load_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let settings_path = temp_dir.path().join("settings.toml");
        fs::write(&settings_path, "").unwrap();

        assert_eq!(Settings::load(&settings_path).unwrap(), Settings::default());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let settings_path = temp_dir.path().join("settings.toml");
        fs::write(&settings_path, "[display\ntop = ").unwrap();

        let err = Settings::load(&settings_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse settings"));
    }

    #[test]
    fn test_unknown_key_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let settings_path = temp_dir.path().join("settings.toml");
        fs::write(&settings_path, "[display]\ncolour = \"red\"\n").unwrap();

        assert!(Settings::load(&settings_path).is_err());
    }

    #[test]
    fn test_zero_top_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let settings_path = temp_dir.path().join("settings.toml");
        fs::write(&settings_path, "[display]\ntop = 0\n").unwrap();

        let err = Settings::load(&settings_path).unwrap_err();
        let root = err.root_cause().to_string();
        assert!(root.contains("display.top"), "{root}");
    }

    #[test]
    fn test_default_path_file_name() {
        let path = Settings::default_path();
        assert!(path.ends_with("disk-canvas/settings.toml"));
    }
}
