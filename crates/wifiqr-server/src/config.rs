//! Server configuration management.
//!
//! Handles loading and saving wifiqr server configuration:
//! - Listen port
//! - Default render options (scale, border) for exported images

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default render settings applied when a request does not override them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderDefaults {
    /// Pixels per QR module in exported images.
    pub scale: u32,

    /// Quiet-zone width in modules on each side.
    pub border: u32,
}

impl Default for RenderDefaults {
    fn default() -> Self {
        Self {
            scale: 10,
            border: 4,
        }
    }
}

/// Main server configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// TCP port to listen on.
    pub port: u16,

    /// Default render options.
    pub render: RenderDefaults,
}

impl ServerConfig {
    /// Default listen port.
    pub const DEFAULT_PORT: u16 = 3000;

    /// Load configuration from the default path, falling back to defaults
    /// when no config file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing config file cannot be read or parsed.
    pub fn load_or_default() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific path, falling back to defaults
    /// when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let mut config: Self = toml::from_str(&content)?;
            if config.port == 0 {
                config.port = Self::DEFAULT_PORT;
            }
            Ok(config)
        } else {
            Ok(Self::with_default_port())
        }
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn with_default_port() -> Self {
        Self {
            port: Self::DEFAULT_PORT,
            render: RenderDefaults::default(),
        }
    }

    /// Get the configuration file path.
    fn config_path() -> PathBuf {
        // Servers: /etc/wifiqr/config.toml
        // Development on other platforms: ~/.config/wifiqr/config.toml
        #[cfg(target_os = "linux")]
        {
            PathBuf::from("/etc/wifiqr/config.toml")
        }
        #[cfg(not(target_os = "linux"))]
        {
            directories::ProjectDirs::from("", "", "wifiqr")
                .map(|dirs| dirs.config_dir().join("config.toml"))
                .unwrap_or_else(|| PathBuf::from("./config.toml"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::with_default_port();
        assert_eq!(config.port, 3000);
        assert_eq!(config.render.scale, 10);
        assert_eq!(config.render.border, 4);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.port, ServerConfig::DEFAULT_PORT);
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = ServerConfig::with_default_port();
        config.port = 8080;
        config.render.scale = 6;
        config.save_to(&path).unwrap();

        let loaded = ServerConfig::load_from(&path).unwrap();
        assert_eq!(loaded.port, 8080);
        assert_eq!(loaded.render.scale, 6);
        assert_eq!(loaded.render.border, 4);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "port = 9090\n").unwrap();

        let loaded = ServerConfig::load_from(&path).unwrap();
        assert_eq!(loaded.port, 9090);
        assert_eq!(loaded.render.scale, 10);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "port = \"not a number\"").unwrap();

        assert!(ServerConfig::load_from(&path).is_err());
    }
}
